//! Typed configuration models.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults::{
    LOG_LEVEL, THUMBNAIL_BATCH_SIZE, THUMBNAIL_PROGRAM, THUMBNAIL_SEEK_OFFSET,
    THUMBNAIL_TIMEOUT_SECS, VIDEO_EXTENSIONS,
};

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClipfoldConfig {
    /// Scanning and moving behaviour.
    pub library: LibraryPolicy,
    /// External media tool settings.
    pub thumbnails: ThumbnailPolicy,
    /// Logging settings.
    pub telemetry: TelemetryConfig,
}

/// Policy describing which files are videos and where batches are moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LibraryPolicy {
    /// Lowercase file extensions (without the dot) treated as videos.
    pub extensions: Vec<String>,
    /// Whether the scanner follows symbolic links.
    pub follow_symlinks: bool,
    /// Rule deriving the destination folder from the first selected file.
    pub destination_rule: DestinationRule,
}

impl Default for LibraryPolicy {
    fn default() -> Self {
        Self {
            extensions: VIDEO_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
            follow_symlinks: false,
            destination_rule: DestinationRule::default(),
        }
    }
}

/// How the destination folder of a move batch is named.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationRule {
    /// `<parent>/<file stem>`: the folder sits next to the first file and is
    /// named after it without its extension.
    #[default]
    SiblingStem,
    /// Every `.` in the full first path becomes `_`, so `/v/a.m4v` maps to
    /// `/v/a_m4v`.
    DotsToUnderscores,
}

impl DestinationRule {
    /// Stable label used in config documents and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SiblingStem => "sibling_stem",
            Self::DotsToUnderscores => "dots_to_underscores",
        }
    }

    /// Derive the destination directory for a batch whose first file is
    /// `first`. Returns `None` when `first` has no file name.
    #[must_use]
    pub fn resolve(self, first: &Path) -> Option<PathBuf> {
        let name = first.file_name()?;
        match self {
            Self::SiblingStem => {
                let stem = Path::new(name).file_stem()?;
                let parent = first.parent().unwrap_or_else(|| Path::new(""));
                Some(parent.join(stem))
            }
            Self::DotsToUnderscores => {
                Some(PathBuf::from(first.to_string_lossy().replace('.', "_")))
            }
        }
    }
}

/// External media tool settings used for thumbnail extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailPolicy {
    /// Program name or path of the media tool.
    pub program: String,
    /// Seek offset passed to the tool (`HH:MM:SS[.fff]` or seconds).
    pub seek_offset: String,
    /// Number of thumbnails the front end requests at once.
    pub batch_size: usize,
    /// Seconds before the front end abandons one request.
    pub timeout_secs: u64,
}

impl Default for ThumbnailPolicy {
    fn default() -> Self {
        Self {
            program: THUMBNAIL_PROGRAM.to_string(),
            seek_offset: THUMBNAIL_SEEK_OFFSET.to_string(),
            batch_size: THUMBNAIL_BATCH_SIZE,
            timeout_secs: THUMBNAIL_TIMEOUT_SECS,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Level used when `RUST_LOG` is unset.
    pub level: String,
    /// Output format; inferred from the build profile when absent.
    pub format: Option<LogFormatSetting>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            level: LOG_LEVEL.to_string(),
            format: None,
        }
    }
}

/// Log output format as written in configuration documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormatSetting {
    /// Structured JSON lines.
    Json,
    /// Human-readable output.
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_stem_strips_extension_next_to_first_file() {
        let rule = DestinationRule::SiblingStem;
        assert_eq!(
            rule.resolve(Path::new("/videos/show/clip01.m4v")),
            Some(PathBuf::from("/videos/show/clip01"))
        );
        assert_eq!(
            rule.resolve(Path::new("/videos/show/clip.final.m4v")),
            Some(PathBuf::from("/videos/show/clip.final"))
        );
    }

    #[test]
    fn dots_to_underscores_rewrites_the_whole_path() {
        let rule = DestinationRule::DotsToUnderscores;
        assert_eq!(
            rule.resolve(Path::new("/videos/my.show/clip01.m4v")),
            Some(PathBuf::from("/videos/my_show/clip01_m4v"))
        );
    }

    #[test]
    fn resolve_rejects_paths_without_file_name() {
        assert_eq!(DestinationRule::SiblingStem.resolve(Path::new("/")), None);
        assert_eq!(
            DestinationRule::DotsToUnderscores.resolve(Path::new("/videos/..")),
            None
        );
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = ClipfoldConfig::default();
        assert_eq!(config.library.extensions, vec!["m4v".to_string()]);
        assert!(!config.library.follow_symlinks);
        assert_eq!(config.library.destination_rule.as_str(), "sibling_stem");
        assert_eq!(config.thumbnails.program, "ffmpeg");
        assert_eq!(config.thumbnails.seek_offset, "00:00:01");
        assert_eq!(config.thumbnails.batch_size, 2);
        assert_eq!(config.telemetry.level, "info");
    }
}
