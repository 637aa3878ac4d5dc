//! Recursive discovery of video files.
//!
//! # Design
//! - Traversal is depth-first with entries visited in file-name order.
//! - The first traversal error aborts the scan; partial results are dropped.
//! - The allow-list is normalised before matching, so policies built in code
//!   may carry uppercase or dotted entries.
//! - Only directories are skipped, so unfollowed symlinks with a matching
//!   extension are reported like regular files.

use std::path::{Path, PathBuf};

use clipfold_config::LibraryPolicy;
use clipfold_config::validate::normalise_extension;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::error::{FsOpsError, FsOpsResult};

/// List every file under `root` whose extension appears in
/// `policy.extensions`, as absolute paths in traversal order.
///
/// Extensions compare case-insensitively and a leading `.` on an allow-list
/// entry is ignored. A root without matches yields an empty list.
///
/// # Errors
///
/// Returns [`FsOpsError::Io`] if `root` cannot be made absolute and
/// [`FsOpsError::Walkdir`] for the first entry that cannot be read.
pub fn scan_videos(root: &Path, policy: &LibraryPolicy) -> FsOpsResult<Vec<PathBuf>> {
    let root = std::path::absolute(root).map_err(|err| FsOpsError::io("scan.absolute", root, err))?;
    let walker = WalkDir::new(&root)
        .follow_links(policy.follow_symlinks)
        .sort_by_file_name();

    let extensions: Vec<String> = policy
        .extensions
        .iter()
        .map(String::as_str)
        .filter_map(normalise_extension)
        .collect();

    let mut matches = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|err| FsOpsError::walkdir("scan.walk", &root, err))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if matches_extension(entry.path(), &extensions) {
            debug!(path = %entry.path().display(), "video discovered");
            matches.push(entry.into_path());
        }
    }

    info!(
        root = %root.display(),
        matched = matches.len(),
        follow_symlinks = policy.follow_symlinks,
        "directory scan complete"
    );
    Ok(matches)
}

/// Whether the text after the last `.` of the file name, lowercased, is one
/// of `extensions`. `extensions` are expected in normalised form.
#[must_use]
pub fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.rsplit_once('.').is_some_and(|(_, extension)| {
        let extension = extension.to_lowercase();
        extensions.iter().any(|allowed| *allowed == extension)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m4v() -> Vec<String> {
        vec!["m4v".to_string()]
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(matches_extension(Path::new("/v/a.M4V"), &m4v()));
        assert!(matches_extension(Path::new("/v/a.b.m4v"), &m4v()));
        assert!(matches_extension(Path::new("/v/.m4v"), &m4v()));
        assert!(!matches_extension(Path::new("/v/a.mp4"), &m4v()));
        assert!(!matches_extension(Path::new("/v/m4v"), &m4v()));
        assert!(!matches_extension(Path::new("/v/a.m4v.part"), &m4v()));
    }

    #[test]
    fn multiple_extensions_are_honoured() {
        let allowed = vec!["m4v".to_string(), "mp4".to_string()];
        assert!(matches_extension(Path::new("clip.MP4"), &allowed));
        assert!(!matches_extension(Path::new("clip.mkv"), &allowed));
    }
}
