//! Core module containing shared infrastructure components.
//!
//! This module provides configuration, the unified error type, and the slug
//! safety checks used by every domain that touches the filesystem.

pub mod config;
pub mod error;
pub mod security;

pub use config::Config;
pub use error::{Error, Result};
pub use security::{SlugPathError, is_valid_slug, resolve_definition_path};
