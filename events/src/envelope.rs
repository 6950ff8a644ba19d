//! Unwrapping of the envelopes events arrive in.
//!
//! The socket has carried several shapes over time: the consumer bridge wraps
//! records as `{"topic": ..., "event": {...}}`, older producers used
//! `{"value": {...}}`, and some send the bare event. All three are accepted;
//! none is treated as canonical.

use serde_json::Value;

const EVENT_FIELD: &str = "event";
const VALUE_FIELD: &str = "value";

/// Returns the event object carried by `message`: its `event` field, else its
/// `value` field, else the message itself. A field holding `null` counts as
/// absent.
pub fn extract_event(message: Value) -> Value {
    match message {
        Value::Object(mut fields) => {
            let wrapper = [EVENT_FIELD, VALUE_FIELD]
                .into_iter()
                .find(|field| fields.get(*field).is_some_and(|inner| !inner.is_null()));

            match wrapper.and_then(|field| fields.remove(field)) {
                Some(inner) => inner,
                None => Value::Object(fields),
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_field_wins() {
        let message = json!({
            "topic": "user.activity",
            "event": {"event_type": "task.created"},
            "value": {"event_type": "task.deleted"}
        });

        assert_eq!(extract_event(message), json!({"event_type": "task.created"}));
    }

    #[test]
    fn test_value_field_is_fallback() {
        let message = json!({"value": {"event_type": "profile.updated"}});

        assert_eq!(
            extract_event(message),
            json!({"event_type": "profile.updated"})
        );
    }

    #[test]
    fn test_null_event_field_falls_through_to_value() {
        let message = json!({"event": null, "value": {"event_type": "task.updated"}});

        assert_eq!(extract_event(message), json!({"event_type": "task.updated"}));
    }

    #[test]
    fn test_bare_event_is_returned_untouched() {
        let message = json!({
            "event_type": "task.created",
            "event_id": "e1",
            "payload": {"id": 4}
        });

        assert_eq!(extract_event(message.clone()), message);
    }

    #[test]
    fn test_non_object_messages_pass_through() {
        assert_eq!(extract_event(json!([1, 2])), json!([1, 2]));
        assert_eq!(extract_event(json!("ping")), json!("ping"));
    }
}
