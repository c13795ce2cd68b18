// Security module for slug handling
//
// Registry slugs are joined onto filesystem paths, so they are checked
// before any file is opened.

pub mod slug_path;

pub use slug_path::{SlugPathError, is_valid_slug, resolve_definition_path};
