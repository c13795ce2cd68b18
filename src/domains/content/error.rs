//! Definition store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the registry or a definition from loading at all.
///
/// Schema violations inside a definition are not errors; they are collected
/// as [`ValidationIssue`](super::ValidationIssue)s.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// The registry or definition file could not be read.
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON, or does not match the expected shape.
    #[error("Cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The slug cannot be mapped to a definition file.
    #[error(transparent)]
    Slug(#[from] crate::core::security::SlugPathError),
}

impl DefinitionError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
