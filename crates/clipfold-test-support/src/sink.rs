//! Notification sink that records every call for later assertions.

use std::sync::{Mutex, MutexGuard, PoisonError};

use clipfold_events::NotificationSink;

/// One recorded sink call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// `on_status` was called.
    Status(String),
    /// `on_complete` was called.
    Complete(String),
    /// `on_error` was called.
    Error(String),
}

/// Sink capturing notifications in call order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    calls: Mutex<Vec<Notification>>,
}

impl RecordingSink {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every recorded call.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.lock().clone()
    }

    /// Messages passed to `on_status`.
    #[must_use]
    pub fn statuses(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                Notification::Status(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Messages passed to `on_error`.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                Notification::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// Summaries passed to `on_complete`.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        self.lock()
            .iter()
            .filter_map(|call| match call {
                Notification::Complete(summary) => Some(summary.clone()),
                _ => None,
            })
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, call: Notification) {
        self.lock().push(call);
    }
}

impl NotificationSink for RecordingSink {
    fn on_status(&self, message: &str) {
        self.record(Notification::Status(message.to_string()));
    }

    fn on_complete(&self, summary: &str) {
        self.record(Notification::Complete(summary.to_string()));
    }

    fn on_error(&self, message: &str) {
        self.record(Notification::Error(message.to_string()));
    }
}
