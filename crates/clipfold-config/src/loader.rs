//! JSON configuration loading.
//!
//! # Design
//! - A missing file path means "use defaults"; a path that cannot be read is an error.
//! - Every document passes through `validate` before it reaches callers.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult};
use crate::model::ClipfoldConfig;
use crate::validate::validate;

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "CLIPFOLD_CONFIG";

/// Load the configuration document at `path`, or the defaults when `path`
/// is `None`.
///
/// # Errors
///
/// Returns an error when the file cannot be read, is not valid JSON for the
/// model, or fails validation.
pub fn load_config(path: Option<&Path>) -> ConfigResult<ClipfoldConfig> {
    let Some(path) = path else {
        debug!("no configuration file supplied; using defaults");
        return validate(ClipfoldConfig::default());
    };

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = serde_json::from_str::<ClipfoldConfig>(&raw).map_err(|source| {
        ConfigError::Parse {
            path: Some(path.to_path_buf()),
            source,
        }
    })?;
    let config = validate(config)?;
    info!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Parse and validate a configuration document held in memory.
///
/// # Errors
///
/// Returns an error when the document is not valid JSON for the model or
/// fails validation.
pub fn parse_config(document: &str) -> ConfigResult<ClipfoldConfig> {
    let config = serde_json::from_str::<ClipfoldConfig>(document)
        .map_err(|source| ConfigError::Parse { path: None, source })?;
    validate(config)
}
