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

//! Still-frame extraction through an external media tool.
//!
//! The tool is started once per request with stdin detached, the encoded
//! frame is read from stdout and stderr is kept for diagnostics. Requests
//! are independent; callers bound concurrency and impose timeouts.
//!
//! Layout: `extractor.rs` (process invocation), `thumbnail.rs` (image
//! payload), `error.rs` (error types).

pub mod error;
pub mod extractor;
pub mod thumbnail;

pub use error::{ThumbsError, ThumbsResult};
pub use extractor::ThumbnailExtractor;
pub use thumbnail::{JPEG_MIME, Thumbnail};
