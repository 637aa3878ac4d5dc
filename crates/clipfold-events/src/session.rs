//! Explicit per-caller context handed to each operation.
//!
//! # Design
//! - One session per caller; nothing is stored in process-wide state.
//! - Carries the notification sink and an identifier used to correlate logs.

use std::fmt;
use std::sync::Arc;

use tracing::{Span, info_span};
use uuid::Uuid;

use crate::sink::{NotificationSink, NullSink};

/// Context value scoped to one caller session.
#[derive(Clone)]
pub struct Session {
    id: Uuid,
    sink: Arc<dyn NotificationSink>,
}

impl Session {
    /// Create a session that reports to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sink,
        }
    }

    /// Create a session whose notifications are discarded.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(Arc::new(NullSink))
    }

    /// Identifier recorded on every log line emitted for this session.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Sink receiving this session's notifications.
    #[must_use]
    pub fn sink(&self) -> &dyn NotificationSink {
        self.sink.as_ref()
    }

    /// Tracing span for an operation running under this session.
    #[must_use]
    pub fn span(&self, operation: &'static str) -> Span {
        info_span!("clipfold", session_id = %self.id, operation)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::EventBus;
    use tokio_stream::StreamExt;

    #[test]
    fn sessions_get_distinct_ids() {
        let first = Session::detached();
        let second = Session::detached();
        assert_ne!(first.id(), second.id());
        assert!(format!("{first:?}").contains("Session"));
    }

    #[tokio::test]
    async fn session_forwards_to_its_sink() {
        let bus = EventBus::with_capacity(8);
        let mut events = bus.subscribe();
        let session = Session::new(Arc::new(bus));
        session.sink().on_status("Output directory created.");
        drop(session);
        let envelope = events
            .next()
            .await
            .expect("stream item")
            .expect("broadcast ok");
        assert_eq!(envelope.event.message(), "Output directory created.");
        assert!(events.next().await.is_none());
    }
}
