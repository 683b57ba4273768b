//! Error types for the query engine.
//!
//! Answering a question never fails; only loading configuration can.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading a [`QueryConfig`](crate::QueryConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The fuzzy threshold is outside `0.0..=1.0`.
    #[error("fuzzy_threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    /// A variant keyword entry has an empty keyword or label.
    #[error("variant keyword entries need a non-empty keyword and label")]
    EmptyVariantKeyword,
}
