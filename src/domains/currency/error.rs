//! Currency-specific error types.

use thiserror::Error;

/// Errors that can occur while obtaining or persisting exchange rates.
#[derive(Debug, Error)]
pub enum CurrencyError {
    /// The HTTP request to the rate source failed.
    #[error("Rate request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The rate source answered but reported a failure.
    #[error("Rate source returned an error: {0}")]
    Source(String),

    /// The persisted store could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CurrencyError {
    pub fn source_failure(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
