//! Error types for rs-prodmeta.
//!
//! These errors are internal plumbing for the fetch layer. No public
//! extraction entry point surfaces them: every failure degrades to an
//! absent field or an absent strategy result.

/// Error type for fetch and parse operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed (network error or non-2xx status).
    #[error("HTTP request failed: {0}")]
    Fetch(#[from] Box<ureq::Error>),

    /// JSON payload could not be parsed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        Self::Fetch(Box::new(err))
    }
}

/// Result type alias for fetch and parse operations.
pub type Result<T> = std::result::Result<T, Error>;
