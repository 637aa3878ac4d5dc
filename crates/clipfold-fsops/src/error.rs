//! # Design
//!
//! - Provide structured, constant-message errors for scans and batch moves.
//! - Capture the failing path and operation so tests can assert on context.
//! - Keep the user-facing sentence separate from `Display` via [`FsOpsError::detail`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for filesystem operations.
pub type FsOpsResult<T> = Result<T, FsOpsError>;

/// Errors produced by scanning and moving.
#[derive(Debug, Error)]
pub enum FsOpsError {
    /// Input validation failures.
    #[error("fsops invalid input")]
    InvalidInput {
        /// Field that failed validation.
        field: &'static str,
        /// Static reason for the failure.
        reason: &'static str,
        /// Offending value when available.
        value: Option<String>,
    },
    /// The destination directory could not be created.
    #[error("fsops destination creation failed")]
    CreateDestination {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// A file in the batch no longer existed when its turn came.
    #[error("fsops source file missing")]
    SourceMissing {
        /// Path that was expected to exist.
        path: PathBuf,
    },
    /// Renaming a file into the destination failed.
    #[error("fsops move failure")]
    Move {
        /// File being moved.
        source_path: PathBuf,
        /// Target path inside the destination directory.
        target: PathBuf,
        /// Likely cause derived from the IO error.
        hint: MoveFailureHint,
        /// Underlying IO error.
        source: io::Error,
    },
    /// IO failures outside the move steps.
    #[error("fsops io failure")]
    Io {
        /// Operation that triggered the IO failure.
        operation: &'static str,
        /// Path involved in the IO failure.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },
    /// Walkdir traversal failures.
    #[error("fsops walkdir failure")]
    Walkdir {
        /// Operation that triggered the walkdir failure.
        operation: &'static str,
        /// Path involved in the walkdir failure.
        path: PathBuf,
        /// Underlying walkdir error.
        source: walkdir::Error,
    },
}

/// Likely cause of a failed rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveFailureHint {
    /// Source and destination live on different volumes.
    CrossDevice,
    /// The process lacks permission on the source or destination.
    PermissionDenied,
    /// Any other failure.
    Unknown,
}

impl MoveFailureHint {
    /// Classify an IO error returned by `rename`.
    #[must_use]
    pub fn from_io(error: &io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::CrossesDevices => Self::CrossDevice,
            io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
                Self::PermissionDenied
            }
            _ => Self::Unknown,
        }
    }

    /// Stable label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrossDevice => "cross_device",
            Self::PermissionDenied => "permission_denied",
            Self::Unknown => "unknown",
        }
    }

    const fn advice(self) -> &'static str {
        match self {
            Self::CrossDevice => "Source and destination are on different drives.",
            Self::PermissionDenied => "Check permissions on the source and destination.",
            Self::Unknown => "Might be cross-drive issue or permissions.",
        }
    }
}

impl FsOpsError {
    pub(crate) fn io(operation: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn walkdir(operation: &'static str, root: &Path, source: walkdir::Error) -> Self {
        let path = source.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
        Self::Walkdir {
            operation,
            path,
            source,
        }
    }

    /// One-line description naming the failing file and cause, suitable for
    /// the notification sink and terminal output.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidInput { field: "files", reason: "empty", .. } => {
                "no video files provided to move".to_string()
            }
            Self::InvalidInput {
                field,
                reason,
                value,
            } => match value {
                Some(value) => format!("invalid {field} '{value}': {reason}"),
                None => format!("invalid {field}: {reason}"),
            },
            Self::CreateDestination { path, source } => format!(
                "failed to create output directory '{}': {source}",
                path.display()
            ),
            Self::SourceMissing { path } => format!(
                "Failed to move file '{}': Source file not found.",
                display_name(path)
            ),
            Self::Move {
                source_path,
                target,
                hint,
                source,
            } => format!(
                "Failed to move file '{}' to '{}': {source}. {}",
                display_name(source_path),
                target.display(),
                hint.advice()
            ),
            Self::Io {
                operation,
                path,
                source,
            } => format!("{operation} failed for '{}': {source}", path.display()),
            Self::Walkdir { path, source, .. } => {
                format!("failed to scan '{}': {source}", path.display())
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
