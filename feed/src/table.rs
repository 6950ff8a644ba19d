//! The display list the feed renders into.

use events::Badge;
use std::collections::{HashMap, VecDeque};

/// Id of the table body the activity feed renders into.
pub const ACTIVITY_TABLE_ID: &str = "activity-table-body";

/// One-line overview of an activity.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub time: String,
    pub actor: String,
    pub action: String,
    pub badge: Badge,
    /// Comma separated changed fields, or the placeholder when none.
    pub changes: String,
    /// Id of the [`DetailRow`] the row's toggle control expands.
    pub toggle_target: String,
}

/// Collapsible panel with the request context and the raw event.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailRow {
    pub id: String,
    pub request_id: String,
    pub ip_address: String,
    pub user_agent: String,
    /// The event as received, pretty printed.
    pub raw_event: String,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Summary(SummaryRow),
    Detail(DetailRow),
}

/// Summary and detail row rendered for one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub summary: SummaryRow,
    pub detail: DetailRow,
}

#[derive(Debug, Default)]
pub struct TableBody {
    rows: VecDeque<Row>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `row` above every existing row.
    pub fn prepend(&mut self, row: Row) {
        self.rows.push_front(row);
    }

    /// Inserts an entry at the top: its summary first, its detail right below.
    pub fn prepend_entry(&mut self, entry: Entry) {
        self.prepend(Row::Detail(entry.detail));
        self.prepend(Row::Summary(entry.summary));
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Flips the detail row addressed by `target`. Returns the new state, or
    /// `None` when no such row exists.
    pub fn toggle(&mut self, target: &str) -> Option<bool> {
        self.rows.iter_mut().find_map(|row| match row {
            Row::Detail(detail) if detail.id == target => {
                detail.expanded = !detail.expanded;
                Some(detail.expanded)
            }
            _ => None,
        })
    }
}

/// Named insertion points of a page.
#[derive(Debug, Default)]
pub struct Document {
    tables: HashMap<String, TableBody>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an empty table body named `id`.
    pub fn with_table_body(mut self, id: impl Into<String>) -> Self {
        self.tables.insert(id.into(), TableBody::new());
        self
    }

    pub fn table_body(&self, id: &str) -> Option<&TableBody> {
        self.tables.get(id)
    }

    pub fn table_body_mut(&mut self, id: &str) -> Option<&mut TableBody> {
        self.tables.get_mut(id)
    }
}
