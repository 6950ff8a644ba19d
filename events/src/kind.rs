use std::fmt;

/// Trait for getting the wire discriminator of an event
pub trait EventType {
    fn event_type(&self) -> &'static str;
}

/// Every activity the upstream producer publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    // Tasks
    TaskCreated,
    TaskUpdated,
    TaskDeleted,

    // Subtasks (tasks with a parent task)
    SubtaskCreated,
    SubtaskUpdated,
    SubtaskDeleted,

    // Users
    ProfileUpdated,
}

impl EventKind {
    pub const ALL: [EventKind; 7] = [
        EventKind::TaskCreated,
        EventKind::TaskUpdated,
        EventKind::TaskDeleted,
        EventKind::SubtaskCreated,
        EventKind::SubtaskUpdated,
        EventKind::SubtaskDeleted,
        EventKind::ProfileUpdated,
    ];

    pub fn from_event_type(event_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.event_type() == event_type)
    }

    /// Whether the event's payload lists the fields that changed.
    pub fn reports_changes(&self) -> bool {
        matches!(self, EventKind::ProfileUpdated)
    }
}

impl EventType for EventKind {
    fn event_type(&self) -> &'static str {
        match self {
            EventKind::TaskCreated => "task.created",
            EventKind::TaskUpdated => "task.updated",
            EventKind::TaskDeleted => "task.deleted",
            EventKind::SubtaskCreated => "subtask.created",
            EventKind::SubtaskUpdated => "subtask.updated",
            EventKind::SubtaskDeleted => "subtask.deleted",
            EventKind::ProfileUpdated => "profile.updated",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.event_type())
    }
}
