//! Error types for thumbnail extraction.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias for thumbnail operations.
pub type ThumbsResult<T> = Result<T, ThumbsError>;

/// Failures raised while extracting a still frame.
#[derive(Debug, Error)]
pub enum ThumbsError {
    /// The media tool could not be started.
    #[error("thumbnail tool could not be started")]
    Invocation {
        /// Program that was invoked.
        program: String,
        /// Video the frame was requested for.
        path: PathBuf,
        /// Underlying spawn error.
        source: io::Error,
    },
    /// The media tool exited unsuccessfully.
    #[error("thumbnail tool failed")]
    ToolFailed {
        /// Video the frame was requested for.
        path: PathBuf,
        /// Exit code, absent when the tool was terminated by a signal.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
    /// The media tool succeeded but wrote nothing to stdout.
    #[error("thumbnail tool produced no data")]
    NoData {
        /// Video the frame was requested for.
        path: PathBuf,
        /// Captured standard error, often empty.
        stderr: String,
    },
}

impl ThumbsError {
    /// Video the failed request was for.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Invocation { path, .. }
            | Self::ToolFailed { path, .. }
            | Self::NoData { path, .. } => path,
        }
    }

    /// One-line description naming the video and cause.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Invocation {
                program,
                path,
                source,
            } => format!(
                "could not start '{program}' for {}: {source}",
                path.display()
            ),
            Self::ToolFailed { path, code, stderr } => {
                let status = code.map_or_else(|| "terminated by signal".to_string(), |code| {
                    format!("exit status {code}")
                });
                format!(
                    "thumbnail tool failed for {}: {status}. Stderr: {}",
                    path.display(),
                    stderr.trim()
                )
            }
            Self::NoData { path, .. } => format!(
                "thumbnail tool produced no thumbnail data for video: {}",
                path.display()
            ),
        }
    }
}
