//! Event payload types pushed to observers of a session.

use chrono::{DateTime, Utc};

/// Identifier assigned to each event emitted on a bus.
pub type EventId = u64;

/// Default number of events a slow subscriber may fall behind before it lags.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Notifications surfaced while an operation runs.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Human-readable progress line.
    Status {
        /// Progress text.
        message: String,
    },
    /// A batch move finished successfully.
    Completed {
        /// Summary line including the count and destination.
        summary: String,
    },
    /// An operation failed and stopped.
    Failed {
        /// Failure text.
        message: String,
    },
}

impl Event {
    /// Machine-friendly discriminator for stream consumers.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Status { .. } => "status",
            Self::Completed { .. } => "complete",
            Self::Failed { .. } => "error",
        }
    }

    /// Text carried by the event regardless of its kind.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Status { message } | Self::Failed { message } => message,
            Self::Completed { summary, .. } => summary,
        }
    }
}

/// Metadata wrapper around events. Each envelope tracks the event id and
/// emission timestamp.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct EventEnvelope {
    /// Sequential identifier assigned by the bus.
    pub id: EventId,
    /// Time the event was published.
    pub timestamp: DateTime<Utc>,
    /// Event payload.
    pub event: Event,
}
