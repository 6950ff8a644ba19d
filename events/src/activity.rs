use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// Who performed the activity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Actor {
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: Option<String>,
}

/// Request context captured by the API when the activity happened.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Meta {
    #[serde(default, deserialize_with = "lenient_text")]
    pub ip_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub user_agent: Option<String>,
}

/// One audit record from the activity stream.
///
/// Only `event_type` decides whether the event is displayed; everything else
/// is optional and is filled in with a placeholder at render time. A field of
/// an unexpected type reads as absent, except scalars, which read as their
/// JSON text (`"event_id": 42` is `"42"`). The JSON object the event was
/// decoded from is kept as-is, unknown fields included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActivityEvent {
    #[serde(default, deserialize_with = "lenient_text")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub event_id: Option<String>,
    /// RFC 3339 timestamp.
    #[serde(default, deserialize_with = "lenient_text")]
    pub occurred_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub actor: Option<Actor>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub request_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub meta: Option<Meta>,
    #[serde(default)]
    pub payload: Option<Value>,
    #[serde(skip)]
    raw: Value,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        _ => None,
    })
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .filter(Value::is_object)
        .and_then(|value| serde_json::from_value(value).ok()))
}

impl ActivityEvent {
    /// Decodes an event object, keeping `raw` for later inspection.
    pub fn from_value(raw: Value) -> Result<Self, serde_json::Error> {
        if !raw.is_object() {
            return Err(de::Error::custom("activity event is not a JSON object"));
        }
        let mut event: ActivityEvent = serde_json::from_value(raw.clone())?;
        event.raw = raw;
        Ok(event)
    }

    /// The discriminator, if present and non-empty.
    pub fn discriminator(&self) -> Option<&str> {
        self.event_type.as_deref().filter(|t| !t.is_empty())
    }

    pub fn actor_email(&self) -> Option<&str> {
        self.actor.as_ref().and_then(|a| a.email.as_deref())
    }

    pub fn ip_address(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.ip_address.as_deref())
    }

    pub fn user_agent(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.user_agent.as_deref())
    }

    /// Keys of `payload.changes`, in the order they were received.
    pub fn changed_fields(&self) -> Vec<&str> {
        self.payload
            .as_ref()
            .and_then(|payload| payload.get("changes"))
            .and_then(Value::as_object)
            .map(|changes| changes.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// The event exactly as it was received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
