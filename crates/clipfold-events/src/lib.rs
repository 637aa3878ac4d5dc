#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]

//! Notification plumbing shared by the clipfold operations.
//!
//! Long-running operations report progress through a [`NotificationSink`]
//! carried by an explicit [`Session`]. The [`EventBus`] is the sink used by
//! the command-line front end: it assigns sequential identifiers and fans
//! events out over `tokio::broadcast` to the subscribers present at publish
//! time.
//!
//! Layout: `payloads.rs` (event types), `routing.rs` (bus), `sink.rs`
//! (sink trait and the no-op sink), `session.rs` (per-caller context).

pub mod payloads;
pub mod routing;
pub mod session;
pub mod sink;

pub use payloads::{DEFAULT_CHANNEL_CAPACITY, Event, EventEnvelope, EventId};
pub use routing::{EventBus, EventStream};
pub use session::Session;
pub use sink::{NotificationSink, NullSink};
