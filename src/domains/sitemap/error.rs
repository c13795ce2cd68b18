//! Sitemap-specific error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort sitemap partitioning or auditing.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// The sitemap file does not exist.
    #[error("Sitemap not found: {0}")]
    NotFound(PathBuf),

    /// Reading or writing a sitemap file failed.
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document does not look like a sitemap url set.
    #[error("Malformed sitemap: {0}")]
    Malformed(String),
}

impl SitemapError {
    /// Map an I/O error, singling out a missing file.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound(path)
        } else {
            Self::Io { path, source }
        }
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}
