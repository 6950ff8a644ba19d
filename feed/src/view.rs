use colored::*;
use events::Badge;

use crate::render::NO_CHANGES;
use crate::table::{DetailRow, Entry, SummaryRow};

/// Receives every entry the feed inserts, newest last.
pub trait FeedView {
    fn show(&mut self, entry: &Entry);
}

/// Prints entries to stdout as they arrive.
#[derive(Debug, Default)]
pub struct TerminalView {
    expand_details: bool,
}

impl TerminalView {
    pub fn new(expand_details: bool) -> Self {
        Self { expand_details }
    }

    pub fn format_summary(summary: &SummaryRow) -> String {
        let changes = if summary.changes == NO_CHANGES {
            summary.changes.dimmed()
        } else {
            summary.changes.yellow()
        };

        format!(
            "{}  {}  {} {}  {}  {}",
            summary.time.dimmed(),
            summary.actor.bright_white().bold(),
            summary.action,
            badge(summary.badge),
            changes,
            format!("[{}]", summary.toggle_target).dimmed()
        )
    }

    pub fn format_detail(detail: &DetailRow) -> String {
        let mut lines = vec![
            format!("   {} {}", "Request ID:".bold(), detail.request_id),
            format!("   {} {}", "IP Address:".bold(), detail.ip_address),
            format!("   {} {}", "User Agent:".bold(), detail.user_agent),
            format!("   {}", "Raw Event".bold()),
        ];
        lines.extend(
            detail
                .raw_event
                .lines()
                .map(|line| format!("   {}", line.dimmed())),
        );
        lines.join("\n")
    }
}

fn badge(badge: Badge) -> ColoredString {
    let text = format!("[{}]", badge);
    match badge {
        Badge::Task => text.bright_blue(),
        Badge::Subtask => text.bright_cyan(),
        Badge::Profile => text.bright_magenta(),
    }
}

impl FeedView for TerminalView {
    fn show(&mut self, entry: &Entry) {
        println!("{}", Self::format_summary(&entry.summary));
        if self.expand_details || entry.detail.expanded {
            println!("{}", Self::format_detail(&entry.detail));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            summary: SummaryRow {
                time: "10:00:00 AM".to_string(),
                actor: "a@x.com".to_string(),
                action: "Updated profile".to_string(),
                badge: Badge::Profile,
                changes: "first_name, last_name".to_string(),
                toggle_target: "details-e1".to_string(),
            },
            detail: DetailRow {
                id: "details-e1".to_string(),
                request_id: "r1".to_string(),
                ip_address: "-".to_string(),
                user_agent: "curl/8.0".to_string(),
                raw_event: "{\n  \"event_id\": \"e1\"\n}".to_string(),
                expanded: false,
            },
        }
    }

    #[test]
    fn test_format_summary_includes_every_column() {
        colored::control::set_override(false);

        let line = TerminalView::format_summary(&entry().summary);

        assert_eq!(
            line,
            "10:00:00 AM  a@x.com  Updated profile [Profile]  first_name, last_name  [details-e1]"
        );
    }

    #[test]
    fn test_format_detail_indents_raw_event() {
        colored::control::set_override(false);

        let text = TerminalView::format_detail(&entry().detail);

        assert!(text.contains("Request ID: r1"));
        assert!(text.contains("IP Address: -"));
        assert!(text.contains("User Agent: curl/8.0"));
        assert!(text.contains("   {\n     \"event_id\": \"e1\"\n   }"));
    }
}
