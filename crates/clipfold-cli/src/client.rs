//! Shared error type and exit-code mapping for the CLI.

use std::fmt::{self, Display, Formatter};

use clipfold_config::ConfigError;
use clipfold_fsops::FsOpsError;

/// CLI-level error type to distinguish validation from operational failures.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }

    /// Rejected input is a validation error; everything else is operational.
    pub(crate) fn from_fsops(error: &FsOpsError) -> Self {
        match error {
            FsOpsError::InvalidInput { .. } => Self::validation(error.detail()),
            _ => Self::failure(anyhow::anyhow!(error.detail())),
        }
    }

    pub(crate) fn from_config(error: &ConfigError) -> Self {
        let message = match error {
            ConfigError::InvalidField {
                section,
                field,
                value,
                reason,
            } => match value {
                Some(value) => {
                    format!("invalid configuration: {section}.{field} = '{value}' ({reason})")
                }
                None => format!("invalid configuration: {section}.{field} ({reason})"),
            },
            ConfigError::Io { path, source } => {
                format!("failed to read configuration {}: {source}", path.display())
            }
            ConfigError::Parse { path, source } => match path {
                Some(path) => format!("failed to parse configuration {}: {source}", path.display()),
                None => format!("failed to parse configuration: {source}"),
            },
        };
        Self::validation(message)
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("cli error")
    }
}

impl std::error::Error for CliError {}
