//! Error types for keepsake.

use std::io;

/// Errors produced by the keepsake crates.
#[derive(Debug, thiserror::Error)]
pub enum KeepsakeError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, KeepsakeError>;
