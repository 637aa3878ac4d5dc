//! Push-style notification sink injected into long-running operations.

/// Receiver of progress notifications.
///
/// Implementations must return promptly: publishers never wait for an
/// acknowledgement and treat every call as fire-and-forget.
pub trait NotificationSink: Send + Sync {
    /// A progress line was produced.
    fn on_status(&self, message: &str);

    /// The operation completed. `summary` is a human-readable line.
    fn on_complete(&self, summary: &str);

    /// The operation failed; no further notifications follow for it.
    fn on_error(&self, message: &str);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn on_status(&self, _message: &str) {}

    fn on_complete(&self, _summary: &str) {}

    fn on_error(&self, _message: &str) {}
}
