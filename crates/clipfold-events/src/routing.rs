//! Event bus routing helpers.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::sync::broadcast::Sender;
use tokio_stream::wrappers::BroadcastStream;

use crate::payloads::{DEFAULT_CHANNEL_CAPACITY, Event, EventEnvelope, EventId};
use crate::sink::NotificationSink;

/// Stream wrapper used by subscribers.
pub type EventStream = BroadcastStream<EventEnvelope>;

/// Shared event bus built on top of `tokio::broadcast`.
///
/// Publishing never blocks. Subscribers only see events published after they
/// subscribed. When the channel overflows, slow subscribers observe a lag
/// error and the oldest events are dropped.
#[derive(Clone)]
pub struct EventBus {
    sender: Sender<EventEnvelope>,
    next_id: Arc<Mutex<EventId>>,
}

impl EventBus {
    /// Construct a bus whose subscribers may fall `capacity` events behind.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "event bus capacity must be positive");
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            next_id: Arc::new(Mutex::new(1)),
        }
    }

    /// Construct a bus with the default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Subscribe to the bus, returning a stream of events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> EventStream {
        BroadcastStream::new(self.sender.subscribe())
    }

    /// Publish a new event and return its assigned identifier.
    pub fn publish(&self, event: Event) -> EventId {
        // Ids are assigned and sent under one lock so subscribers see them in order.
        let mut next = self
            .next_id
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let id = *next;
        *next = next.saturating_add(1);

        let envelope = EventEnvelope {
            id,
            timestamp: Utc::now(),
            event,
        };
        // No receivers is not an error.
        let _ = self.sender.send(envelope);
        drop(next);
        id
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for EventBus {
    fn on_status(&self, message: &str) {
        self.publish(Event::Status {
            message: message.to_string(),
        });
    }

    fn on_complete(&self, summary: &str) {
        self.publish(Event::Completed {
            summary: summary.to_string(),
        });
    }

    fn on_error(&self, message: &str) {
        self.publish(Event::Failed {
            message: message.to_string(),
        });
    }
}
