//! Default values applied when a configuration document omits a field.
//!
//! # Design
//! - Centralize defaults so the model, the loader and the CLI agree.
//! - Mirror the behaviour of the tool when no configuration file exists.

/// Extensions matched by the directory scanner.
pub(crate) const VIDEO_EXTENSIONS: &[&str] = &["m4v"];
/// External media tool invoked for frame extraction.
pub(crate) const THUMBNAIL_PROGRAM: &str = "ffmpeg";
/// Seek offset used before grabbing the frame.
pub(crate) const THUMBNAIL_SEEK_OFFSET: &str = "00:00:01";
/// Thumbnails requested concurrently by the front end.
pub(crate) const THUMBNAIL_BATCH_SIZE: usize = 2;
/// Seconds before the front end abandons a thumbnail request.
pub(crate) const THUMBNAIL_TIMEOUT_SECS: u64 = 30;
/// Log level used when `RUST_LOG` is unset.
pub(crate) const LOG_LEVEL: &str = "info";
