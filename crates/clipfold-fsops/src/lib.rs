//! Filesystem operations for clipfold: video discovery and batch moves.
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

//! Layout: `scan.rs` (recursive discovery), `service.rs` (batch mover),
//! `model/` (request and outcome types), `error.rs` (error taxonomy).

pub mod error;
pub mod model;
pub mod scan;
pub mod service;

pub use error::{FsOpsError, FsOpsResult, MoveFailureHint};
pub use model::MoveOutcome;
pub use scan::{matches_extension, scan_videos};
pub use service::BatchMover;
