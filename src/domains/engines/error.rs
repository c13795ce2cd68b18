//! Engine-specific error types.

use thiserror::Error;

/// Errors that can occur while dispatching or running a calculation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// No engine is registered under the slug.
    #[error("No engine registered for tool: {0}")]
    NotFound(String),

    /// A field the engine reads was not supplied.
    #[error("{tool}: missing input field '{field}'")]
    MissingField {
        tool: &'static str,
        field: &'static str,
    },

    /// A field was supplied but cannot be used by the formula.
    #[error("{tool}: input field '{field}' = {value} is out of range ({reason})")]
    OutOfRange {
        tool: &'static str,
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The formula overflowed for the supplied inputs.
    #[error("{tool}: result '{field}' is not a finite number; inputs are too large")]
    NonFinite {
        tool: &'static str,
        field: &'static str,
    },
}

impl EngineError {
    /// Create a new "not found" error.
    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound(slug.into())
    }

    /// Name of the offending input field, if the error concerns one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) | Self::NonFinite { .. } => None,
            Self::MissingField { field, .. } | Self::OutOfRange { field, .. } => Some(field),
        }
    }
}
