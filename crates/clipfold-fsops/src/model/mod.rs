//! Domain models for filesystem operations.
//!
//! # Design
//! - Keep outcome types small and serialisable for the command-line output.
//! - Paths are owned; callers hand over the batch they selected.

use std::path::PathBuf;

use serde::Serialize;

/// Result of a batch move that ran to completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// Number of files moved.
    pub moved: usize,
    /// Directory that received the batch.
    pub destination: PathBuf,
}

impl MoveOutcome {
    /// Human-readable completion line pushed to the notification sink.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Successfully moved {} files to {}",
            self.moved,
            self.destination.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_names_count_and_destination() {
        let outcome = MoveOutcome {
            moved: 3,
            destination: PathBuf::from("/videos/clip01"),
        };
        assert_eq!(outcome.summary(), "Successfully moved 3 files to /videos/clip01");
    }
}
