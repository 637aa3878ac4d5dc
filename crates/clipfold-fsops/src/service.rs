//! Batch mover: relocates a selected set of videos into one new folder.
//!
//! # Design
//! - Steps run in a fixed order: validate, resolve, create, move each, complete.
//! - The first failure stops the batch; files already moved stay moved.
//! - Progress is pushed to the session's sink and every failure is reported
//!   there exactly once before it is returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clipfold_config::{DestinationRule, LibraryPolicy};
use clipfold_events::{NotificationSink, Session};
use tracing::{info, warn};

use crate::error::{FsOpsError, FsOpsResult, MoveFailureHint};
use crate::model::MoveOutcome;

/// Moves batches of files into a destination derived from the first file.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchMover {
    rule: DestinationRule,
}

impl BatchMover {
    /// Construct a mover using `rule` to name destination folders.
    #[must_use]
    pub const fn new(rule: DestinationRule) -> Self {
        Self { rule }
    }

    /// Construct a mover from the library policy.
    #[must_use]
    pub const fn from_policy(policy: &LibraryPolicy) -> Self {
        Self::new(policy.destination_rule)
    }

    /// Rule used to name destination folders.
    #[must_use]
    pub const fn rule(&self) -> DestinationRule {
        self.rule
    }

    /// Move `files`, in order, into the destination folder derived from the
    /// first entry and report progress to the session's sink.
    ///
    /// Not safe to run concurrently with another batch or a scan of the same
    /// tree.
    ///
    /// Files sharing a basename are not de-duplicated: a later one replaces
    /// the earlier one in the destination, and both count as moved.
    ///
    /// # Errors
    ///
    /// Returns the first failure: an empty request, a first path without a
    /// file name, a destination that cannot be created, a source that has
    /// disappeared, or a rename that failed.
    pub fn move_batch(&self, session: &Session, files: &[PathBuf]) -> FsOpsResult<MoveOutcome> {
        let span = session.span("move_batch");
        let _entered = span.enter();
        let sink = session.sink();

        info!(files = files.len(), rule = self.rule.as_str(), "move batch requested");
        sink.on_status(&format!("Received request to move {} files.", files.len()));

        match self.execute(sink, files) {
            Ok(outcome) => {
                info!(
                    moved = outcome.moved,
                    destination = %outcome.destination.display(),
                    "move batch completed"
                );
                sink.on_complete(&outcome.summary());
                Ok(outcome)
            }
            Err(error) => {
                let detail = error.detail();
                warn!(error = %error, detail = %detail, "move batch failed");
                sink.on_error(&detail);
                Err(error)
            }
        }
    }

    fn execute(&self, sink: &dyn NotificationSink, files: &[PathBuf]) -> FsOpsResult<MoveOutcome> {
        let Some(first) = files.first() else {
            return Err(FsOpsError::InvalidInput {
                field: "files",
                reason: "empty",
                value: None,
            });
        };

        let destination = self.rule.resolve(first).ok_or_else(|| FsOpsError::InvalidInput {
            field: "files",
            reason: "no_file_name",
            value: Some(first.display().to_string()),
        })?;
        info!(destination = %destination.display(), "destination resolved");
        sink.on_status(&format!("Target directory: {}", destination.display()));

        create_destination(&destination)?;
        sink.on_status("Output directory created.");

        sink.on_status("Starting file move process...");
        let mut moved = 0;
        for source in files {
            let target = target_path(&destination, source)?;
            let name = target
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();
            sink.on_status(&format!("Moving {name}..."));
            move_one(source, &target)?;
            info!(
                path = %source.display(),
                target = %target.display(),
                "file moved"
            );
            moved += 1;
        }

        Ok(MoveOutcome { moved, destination })
    }
}

fn create_destination(destination: &Path) -> FsOpsResult<()> {
    fs::create_dir_all(destination).map_err(|source| FsOpsError::CreateDestination {
        path: destination.to_path_buf(),
        source,
    })
}

fn target_path(destination: &Path, source: &Path) -> FsOpsResult<PathBuf> {
    source
        .file_name()
        .map(|name| destination.join(name))
        .ok_or_else(|| FsOpsError::InvalidInput {
            field: "files",
            reason: "no_file_name",
            value: Some(source.display().to_string()),
        })
}

fn move_one(source: &Path, target: &Path) -> FsOpsResult<()> {
    match fs::rename(source, target) {
        Ok(()) => Ok(()),
        Err(err) => {
            if matches!(fs::symlink_metadata(source), Err(stat) if stat.kind() == io::ErrorKind::NotFound)
            {
                return Err(FsOpsError::SourceMissing {
                    path: source.to_path_buf(),
                });
            }
            Err(FsOpsError::Move {
                source_path: source.to_path_buf(),
                target: target.to_path_buf(),
                hint: MoveFailureHint::from_io(&err),
                source: err,
            })
        }
    }
}
