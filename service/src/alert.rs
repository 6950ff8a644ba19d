//! User-facing blocking alerts.

use colored::*;
use std::sync::Mutex;

/// Surfaces a message the user has to see before doing anything else.
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints alerts to stderr so they stand apart from the feed on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalAlert;

impl Alert for TerminalAlert {
    fn alert(&self, message: &str) {
        eprintln!("{} {}", "✗".red().bold(), message.bright_red());
    }
}

/// Keeps every alert it receives, for callers that want to inspect them later.
#[derive(Debug, Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Alert for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(message.to_string());
    }
}
