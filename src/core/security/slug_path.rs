use std::io;
use std::path::{Path, PathBuf};

/// Errors that can occur when turning a slug into a definition path
#[derive(Debug, thiserror::Error)]
pub enum SlugPathError {
    #[error("Slug '{slug}' is not URL-safe (expected lowercase letters, digits and dashes)")]
    InvalidSlug { slug: String },

    #[error("Definition path '{path}' is outside the definitions directory '{root}'")]
    OutsideRootDirectory { path: PathBuf, root: PathBuf },

    #[error("Definition file does not exist: '{path}'")]
    PathNotFound { path: PathBuf },

    #[error("IO error for path '{path}': {error}")]
    IoError { path: PathBuf, error: io::Error },
}

/// Check that a slug is URL-safe.
///
/// Slugs are non-empty, made of `[a-z0-9-]`, and neither start nor end with a dash.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Resolves the definition file for `slug` inside `definitions_dir`.
///
/// This function performs the following checks:
/// 1. The slug must be URL-safe, so it can never contain separators or `..`
/// 2. The file must exist
/// 3. The canonical file path must stay within the canonical definitions directory
///    (a symlinked definition pointing elsewhere is rejected)
///
/// # Returns
///
/// * `Ok(PathBuf)` - The canonicalized definition path
/// * `Err(SlugPathError)` - If any check fails
pub fn resolve_definition_path(definitions_dir: &Path, slug: &str) -> Result<PathBuf, SlugPathError> {
    if !is_valid_slug(slug) {
        return Err(SlugPathError::InvalidSlug {
            slug: slug.to_string(),
        });
    }

    let path = definitions_dir.join(format!("{slug}.json"));
    if !path.exists() {
        return Err(SlugPathError::PathNotFound { path });
    }

    let canonical_root = definitions_dir
        .canonicalize()
        .map_err(|e| SlugPathError::IoError {
            path: definitions_dir.to_path_buf(),
            error: e,
        })?;

    let canonical_path = path.canonicalize().map_err(|e| SlugPathError::IoError {
        path: path.clone(),
        error: e,
    })?;

    if !canonical_path.starts_with(&canonical_root) {
        return Err(SlugPathError::OutsideRootDirectory {
            path: canonical_path,
            root: canonical_root,
        });
    }

    Ok(canonical_path)
}
