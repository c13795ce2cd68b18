//! Reading loosely-typed numeric records into engine inputs.
//!
//! Pages and the CLI hand engines a flat `name -> number` map. Each engine
//! pulls its fields through an [`InputReader`], which turns absent or unusable
//! values into an [`EngineError`] before any arithmetic runs.

use std::collections::BTreeMap;

use super::error::EngineError;

/// A flat record of named numeric inputs.
pub type InputMap = BTreeMap<String, f64>;

/// Field accessor bound to one tool, so errors name the tool they came from.
pub struct InputReader<'a> {
    tool: &'static str,
    inputs: &'a InputMap,
}

impl<'a> InputReader<'a> {
    pub fn new(tool: &'static str, inputs: &'a InputMap) -> Self {
        Self { tool, inputs }
    }

    /// Any finite number.
    pub fn finite(&self, field: &'static str) -> Result<f64, EngineError> {
        let value = *self.inputs.get(field).ok_or(EngineError::MissingField {
            tool: self.tool,
            field,
        })?;
        if !value.is_finite() {
            return Err(self.out_of_range(field, value, "must be a finite number"));
        }
        Ok(value)
    }

    /// A finite number `>= 0`.
    pub fn non_negative(&self, field: &'static str) -> Result<f64, EngineError> {
        let value = self.finite(field)?;
        if value < 0.0 {
            return Err(self.out_of_range(field, value, "must not be negative"));
        }
        Ok(value)
    }

    /// A finite number `> 0`, for fields used as divisors.
    pub fn positive(&self, field: &'static str) -> Result<f64, EngineError> {
        let value = self.finite(field)?;
        if value <= 0.0 {
            return Err(self.out_of_range(field, value, "must be greater than zero"));
        }
        Ok(value)
    }

    pub fn out_of_range(&self, field: &'static str, value: f64, reason: &'static str) -> EngineError {
        EngineError::OutOfRange {
            tool: self.tool,
            field,
            value,
            reason,
        }
    }
}

/// Build an [`InputMap`] from `(name, value)` pairs.
pub fn input_map<I, K>(pairs: I) -> InputMap
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
