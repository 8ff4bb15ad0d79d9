//! Error types for the webcheck scanner

use thiserror::Error;

/// Main error type for webcheck operations
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid URL provided: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for webcheck operations
pub type Result<T> = std::result::Result<T, ScanError>;
