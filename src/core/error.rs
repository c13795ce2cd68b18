//! Error types and handling for the toolkit.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, so callers that drive several
//! domains (the CLI, mostly) can propagate them with `?`.

use thiserror::Error;

/// A specialized Result type for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the toolkit.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the calculation engines.
    #[error("Engine error: {0}")]
    Engine(#[from] crate::domains::engines::EngineError),

    /// Error originating from the tool definition store.
    #[error("Definition error: {0}")]
    Definition(#[from] crate::domains::content::DefinitionError),

    /// Error originating from sitemap partitioning or auditing.
    #[error("Sitemap error: {0}")]
    Sitemap(#[from] crate::domains::sitemap::SitemapError),

    /// Error originating from the currency helper.
    #[error("Currency error: {0}")]
    Currency(#[from] crate::domains::currency::CurrencyError),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
