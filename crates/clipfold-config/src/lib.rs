#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! File-backed configuration for clipfold.
//!
//! Layout: `model.rs` (typed config models), `defaults.rs` (default values),
//! `validate.rs` (validation and normalisation), `loader.rs` (JSON loading),
//! `error.rs` (error types).

mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::{CONFIG_ENV_VAR, load_config, parse_config};
pub use model::{
    ClipfoldConfig, DestinationRule, LibraryPolicy, LogFormatSetting, TelemetryConfig,
    ThumbnailPolicy,
};
