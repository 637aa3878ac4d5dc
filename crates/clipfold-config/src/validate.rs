//! Validation helpers and normalisation for configuration documents.

use crate::error::{ConfigError, ConfigResult};
use crate::model::{ClipfoldConfig, LibraryPolicy, ThumbnailPolicy};

/// Validate a configuration document and return its normalised form.
///
/// Extensions are lowercased and stripped of a leading dot; duplicates are
/// removed while keeping the first occurrence.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for the first field that fails
/// validation.
pub fn validate(mut config: ClipfoldConfig) -> ConfigResult<ClipfoldConfig> {
    config.library = validate_library(config.library)?;
    validate_thumbnails(&config.thumbnails)?;
    if config.telemetry.level.trim().is_empty() {
        return Err(ConfigError::invalid(
            "telemetry",
            "level",
            config.telemetry.level,
            "empty",
        ));
    }
    Ok(config)
}

fn validate_library(mut library: LibraryPolicy) -> ConfigResult<LibraryPolicy> {
    if library.extensions.is_empty() {
        return Err(ConfigError::InvalidField {
            section: "library",
            field: "extensions",
            value: None,
            reason: "empty",
        });
    }
    let mut normalised: Vec<String> = Vec::with_capacity(library.extensions.len());
    for raw in &library.extensions {
        let extension = normalise_extension(raw)
            .ok_or_else(|| ConfigError::invalid("library", "extensions", raw, "empty_entry"))?;
        if extension.contains(['/', '\\', '.']) {
            return Err(ConfigError::invalid(
                "library",
                "extensions",
                raw,
                "invalid_character",
            ));
        }
        if !normalised.contains(&extension) {
            normalised.push(extension);
        }
    }
    library.extensions = normalised;
    Ok(library)
}

fn validate_thumbnails(thumbnails: &ThumbnailPolicy) -> ConfigResult<()> {
    if thumbnails.program.trim().is_empty() {
        return Err(ConfigError::invalid(
            "thumbnails",
            "program",
            &thumbnails.program,
            "empty",
        ));
    }
    if !is_seek_offset(&thumbnails.seek_offset) {
        return Err(ConfigError::invalid(
            "thumbnails",
            "seek_offset",
            &thumbnails.seek_offset,
            "invalid_duration",
        ));
    }
    if thumbnails.batch_size == 0 {
        return Err(ConfigError::invalid(
            "thumbnails",
            "batch_size",
            "0",
            "must_be_positive",
        ));
    }
    if thumbnails.timeout_secs == 0 {
        return Err(ConfigError::invalid(
            "thumbnails",
            "timeout_secs",
            "0",
            "must_be_positive",
        ));
    }
    Ok(())
}

/// Lowercase an extension and drop a single leading dot.
///
/// Returns `None` for blank input.
#[must_use]
pub fn normalise_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Accepts `SS[.fff]`, `MM:SS[.fff]` and `HH:MM:SS[.fff]`.
fn is_seek_offset(value: &str) -> bool {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() > 3 {
        return false;
    }
    let Some((last, leading)) = parts.split_last() else {
        return false;
    };
    let leading_ok = leading
        .iter()
        .all(|part| !part.is_empty() && part.chars().all(|ch| ch.is_ascii_digit()));
    let (whole, fraction) = last.split_once('.').unwrap_or((*last, ""));
    let whole_ok = !whole.is_empty() && whole.chars().all(|ch| ch.is_ascii_digit());
    let fraction_ok = fraction.chars().all(|ch| ch.is_ascii_digit())
        && (!last.contains('.') || !fraction.is_empty());
    leading_ok && whole_ok && fraction_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClipfoldConfig;

    #[test]
    fn extensions_are_normalised_and_deduplicated() -> ConfigResult<()> {
        let mut config = ClipfoldConfig::default();
        config.library.extensions = vec![".M4V".into(), "mp4".into(), "m4v".into()];
        let config = validate(config)?;
        assert_eq!(config.library.extensions, vec!["m4v", "mp4"]);
        Ok(())
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let mut config = ClipfoldConfig::default();
        config.library.extensions.clear();
        let err = validate(config).err();
        assert!(matches!(
            err,
            Some(ConfigError::InvalidField {
                field: "extensions",
                reason: "empty",
                ..
            })
        ));
    }

    #[test]
    fn blank_or_dotted_extensions_are_rejected() {
        let mut config = ClipfoldConfig::default();
        config.library.extensions = vec!["  ".into()];
        assert!(matches!(
            validate(config).err(),
            Some(ConfigError::InvalidField {
                reason: "empty_entry",
                ..
            })
        ));

        let mut config = ClipfoldConfig::default();
        config.library.extensions = vec!["tar.gz".into()];
        assert!(matches!(
            validate(config).err(),
            Some(ConfigError::InvalidField {
                reason: "invalid_character",
                ..
            })
        ));
    }

    #[test]
    fn seek_offsets_accept_clock_and_seconds_forms() {
        for valid in ["00:00:01", "1", "1.5", "01:30", "10:00:00.250"] {
            assert!(is_seek_offset(valid), "{valid} should be accepted");
        }
        for invalid in ["", "a", "1:", ":1", "1.", "1:2:3:4", "-1"] {
            assert!(!is_seek_offset(invalid), "{invalid} should be rejected");
        }
    }

    #[test]
    fn zero_batch_size_and_timeout_are_rejected() {
        let mut config = ClipfoldConfig::default();
        config.thumbnails.batch_size = 0;
        assert!(matches!(
            validate(config).err(),
            Some(ConfigError::InvalidField {
                field: "batch_size",
                ..
            })
        ));

        let mut config = ClipfoldConfig::default();
        config.thumbnails.timeout_secs = 0;
        assert!(matches!(
            validate(config).err(),
            Some(ConfigError::InvalidField {
                field: "timeout_secs",
                ..
            })
        ));
    }

    #[test]
    fn blank_program_is_rejected() {
        let mut config = ClipfoldConfig::default();
        config.thumbnails.program = " ".into();
        assert!(matches!(
            validate(config).err(),
            Some(ConfigError::InvalidField {
                field: "program",
                ..
            })
        ));
    }
}
