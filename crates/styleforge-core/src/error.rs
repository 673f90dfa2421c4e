//! Error types for design-system configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while constructing a design-system config.
///
/// Structural malformation of the declarative input is the only condition in
/// the toolkit that surfaces as an `Err`; every other defect (bad usage, bad
/// constraint reference, empty enum) degrades to a reported
/// [`ValidationIssue`](crate::ValidationIssue).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file from disk failed.
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON document could not be parsed into a config.
    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML document could not be parsed into a config.
    #[error("malformed TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config parsed but carries no design-system name.
    #[error("design system config is missing a name")]
    MissingName,

    /// The file extension maps to no known config format.
    #[error("unsupported config format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },
}
