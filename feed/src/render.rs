//! Turns an accepted event into table rows. Every missing value is replaced
//! by a placeholder here; nothing downstream deals with absent fields.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use events::{ActivityEvent, EventLabel};

use crate::table::{DetailRow, Entry, SummaryRow};

/// Shown in the changes column when nothing changed.
pub const NO_CHANGES: &str = "—";
/// Shown when the event carries no actor email.
pub const UNKNOWN_ACTOR: &str = "Unknown";
/// Shown for any other missing value.
pub const MISSING_VALUE: &str = "-";

const TIME_OF_DAY_FORMAT: &str = "%-I:%M:%S %p";

/// Timezone the time column is rendered in.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayZone {
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    pub fn utc() -> Self {
        DisplayZone::Fixed(Utc.fix())
    }
}

/// Time of day of an RFC 3339 timestamp in `zone`, e.g. `10:00:00 AM`.
pub fn time_of_day(occurred_at: &str, zone: DisplayZone) -> Option<String> {
    let instant = DateTime::parse_from_rfc3339(occurred_at).ok()?;
    let formatted = match zone {
        DisplayZone::Local => instant
            .with_timezone(&Local)
            .format(TIME_OF_DAY_FORMAT)
            .to_string(),
        DisplayZone::Fixed(offset) => instant
            .with_timezone(&offset)
            .format(TIME_OF_DAY_FORMAT)
            .to_string(),
    };
    Some(formatted)
}

/// Changed field names joined for display. Only events whose kind reports
/// changes have any.
pub fn changed_fields(event: &ActivityEvent, label: &EventLabel) -> Vec<String> {
    if !label.kind.reports_changes() {
        return Vec::new();
    }
    event
        .changed_fields()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Builds the summary and detail rows for `event`. `detail_id` addresses the
/// collapsible detail row.
pub fn render_entry(
    event: &ActivityEvent,
    label: &EventLabel,
    detail_id: String,
    zone: DisplayZone,
) -> Entry {
    let changes = changed_fields(event, label);
    let changes = if changes.is_empty() {
        NO_CHANGES.to_string()
    } else {
        changes.join(", ")
    };

    let time = event
        .occurred_at
        .as_deref()
        .and_then(|occurred_at| time_of_day(occurred_at, zone))
        .unwrap_or_else(|| MISSING_VALUE.to_string());

    let raw_event = serde_json::to_string_pretty(event.raw())
        .unwrap_or_else(|_| event.raw().to_string());

    Entry {
        summary: SummaryRow {
            time,
            actor: event.actor_email().unwrap_or(UNKNOWN_ACTOR).to_string(),
            action: label.action.to_string(),
            badge: label.badge,
            changes,
            toggle_target: detail_id.clone(),
        },
        detail: DetailRow {
            id: detail_id,
            request_id: or_missing(event.request_id.as_deref()),
            ip_address: or_missing(event.ip_address()),
            user_agent: or_missing(event.user_agent()),
            raw_event,
            expanded: false,
        },
    }
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_VALUE).to_string()
}
