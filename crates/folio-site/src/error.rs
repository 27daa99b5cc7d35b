//! Error types for the portfolio app.

use std::path::PathBuf;

use folio_intro::ConfigError;
use thiserror::Error;

/// Errors raised while loading settings and content.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid intro configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid content: {0}")]
    Content(String),
}

/// Result type for site operations.
pub type SiteResult<T> = Result<T, SiteError>;
