use std::collections::HashMap;
use std::fmt;

use crate::kind::{EventKind, EventType};

/// Category badge shown next to an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Task,
    Subtask,
    Profile,
}

impl fmt::Display for Badge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Badge::Task => write!(f, "Task"),
            Badge::Subtask => write!(f, "Subtask"),
            Badge::Profile => write!(f, "Profile"),
        }
    }
}

/// Human readable rendering rule for one discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLabel {
    pub kind: EventKind,
    pub action: &'static str,
    pub badge: Badge,
}

impl From<EventKind> for EventLabel {
    fn from(kind: EventKind) -> Self {
        let (action, badge) = match kind {
            EventKind::TaskCreated => ("Created task", Badge::Task),
            EventKind::TaskUpdated => ("Updated task", Badge::Task),
            EventKind::TaskDeleted => ("Deleted task", Badge::Task),
            EventKind::SubtaskCreated => ("Created subtask", Badge::Subtask),
            EventKind::SubtaskUpdated => ("Updated subtask", Badge::Subtask),
            EventKind::SubtaskDeleted => ("Deleted subtask", Badge::Subtask),
            EventKind::ProfileUpdated => ("Updated profile", Badge::Profile),
        };
        EventLabel {
            kind,
            action,
            badge,
        }
    }
}

/// Returned when a configured event type is not one the feed can display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventType(pub String);

impl fmt::Display for UnknownEventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown event type \"{}\"", self.0)
    }
}

impl std::error::Error for UnknownEventType {}

/// Immutable discriminator -> label lookup. Events whose discriminator is not
/// in here are not displayed.
#[derive(Debug, Clone)]
pub struct EventLabels {
    labels: HashMap<&'static str, EventLabel>,
}

impl EventLabels {
    /// Labels for every event the upstream producer publishes.
    pub fn standard() -> Self {
        Self::from_kinds(EventKind::ALL)
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = EventKind>) -> Self {
        let labels = kinds
            .into_iter()
            .map(|kind| (kind.event_type(), EventLabel::from(kind)))
            .collect();
        Self { labels }
    }

    /// Labels for the named discriminators only. An empty selection keeps the
    /// standard set.
    pub fn select<S: AsRef<str>>(event_types: &[S]) -> Result<Self, UnknownEventType> {
        if event_types.is_empty() {
            return Ok(Self::standard());
        }

        let kinds = event_types
            .iter()
            .map(|name| {
                let name = name.as_ref().trim();
                EventKind::from_event_type(name).ok_or_else(|| UnknownEventType(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_kinds(kinds))
    }

    pub fn resolve(&self, event_type: &str) -> Option<&EventLabel> {
        self.labels.get(event_type)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for EventLabels {
    fn default() -> Self {
        Self::standard()
    }
}
