//! Tool definition store.
//!
//! `registry.json` lists every tool and whether it is published; each tool's
//! page copy lives in `definitions/<slug>.json`. This module loads both and
//! validates the definitions before a build is allowed to publish.

mod error;
pub mod model;
pub mod schema;
mod validator;

pub use error::DefinitionError;
pub use model::{Registry, RegistryEntry, ToolDefinition, ToolStatus};
pub use schema::{SchemaIssue, check_definition};
pub use validator::{DefinitionValidator, ValidationIssue, ValidationReport};
