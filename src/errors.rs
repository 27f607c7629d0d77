//! Error types for the toolkit
//!
//! All errors that can occur while resolving factories and running the demo.

use thiserror::Error;

/// Main toolkit error type
#[derive(Error, Debug)]
pub enum UiError {
    /// Platform tag did not match any known family (no default fallback)
    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    /// Output sink write failed (wrapped)
    #[error("IO error: {0}")]
    Io(String),

    /// Demo configuration was present but malformed
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for UiError {
    fn from(err: std::io::Error) -> Self {
        UiError::Io(err.to_string())
    }
}
