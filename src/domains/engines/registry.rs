//! Engine Registry - slug lookup and dispatch for all calculators.
//!
//! This module provides:
//! - A listing of every engine slug
//! - Dispatch of a loosely-typed input record to the right engine
//! - A JSON rendering of the result for pages and the CLI

use serde::Serialize;
use tracing::{debug, warn};

use super::error::EngineError;
use super::input::InputMap;
use super::kind::{EngineOutput, ToolKind};

/// Summary of one engine for listings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub inputs: &'static [&'static str],
}

/// Engine registry - stateless, so one instance can be shared freely.
#[derive(Debug, Default, Clone, Copy)]
pub struct EngineRegistry;

impl EngineRegistry {
    pub fn new() -> Self {
        Self
    }

    /// Get all engine slugs.
    pub fn slugs(&self) -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|k| k.slug()).collect()
    }

    /// Get every engine's listing entry.
    pub fn engines(&self) -> Vec<EngineInfo> {
        ToolKind::ALL
            .iter()
            .map(|k| EngineInfo {
                slug: k.slug(),
                title: k.title(),
                inputs: k.fields(),
            })
            .collect()
    }

    /// Whether an engine is registered under `slug`.
    pub fn contains(&self, slug: &str) -> bool {
        ToolKind::from_slug(slug).is_some()
    }

    /// Resolve a slug to its engine kind.
    pub fn lookup(&self, slug: &str) -> Result<ToolKind, EngineError> {
        ToolKind::from_slug(slug).ok_or_else(|| {
            warn!("Unknown engine requested: {}", slug);
            EngineError::not_found(slug)
        })
    }

    /// Validate `inputs` for the engine under `slug` and run it.
    pub fn calculate(&self, slug: &str, inputs: &InputMap) -> Result<EngineOutput, EngineError> {
        let kind = self.lookup(slug)?;
        let input = kind.parse_input(inputs)?;
        debug!(engine = %kind, "Running engine");
        let output = input.calculate();

        if let Some((field, _)) = output.figures().into_iter().find(|(_, v)| !v.is_finite()) {
            warn!(engine = %kind, field, "Engine result overflowed");
            return Err(EngineError::NonFinite {
                tool: kind.slug(),
                field,
            });
        }
        Ok(output)
    }

    /// Like [`calculate`](Self::calculate), rendering the output record as JSON.
    pub fn calculate_json(&self, slug: &str, inputs: &InputMap) -> crate::Result<serde_json::Value> {
        let output = self.calculate(slug, inputs)?;
        Ok(serde_json::to_value(output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::engines::input::input_map;

    #[test]
    fn test_registry_slugs() {
        let registry = EngineRegistry::new();
        let slugs = registry.slugs();
        assert_eq!(slugs.len(), 11);
        assert!(slugs.contains(&"hourly-to-salary"));
        assert!(slugs.contains(&"salary-to-hourly"));
        assert!(slugs.contains(&"freelance-rate-calculator"));
        assert!(slugs.contains(&"monthly-to-yearly-salary"));
        assert!(slugs.contains(&"daily-rate-to-salary"));
        assert!(slugs.contains(&"annual-salary-to-monthly"));
        assert!(slugs.contains(&"weekly-to-annual-pay"));
        assert!(slugs.contains(&"contractor-vs-employee"));
        assert!(slugs.contains(&"remote-pay-adjuster"));
        assert!(slugs.contains(&"quit-date-calculator"));
        assert!(slugs.contains(&"layoff-survival-calculator"));
    }

    #[test]
    fn test_registry_call_hourly() {
        let registry = EngineRegistry::new();
        let inputs = input_map([
            ("hourlyRate", 50.0),
            ("hoursPerWeek", 40.0),
            ("weeksPerYear", 52.0),
        ]);
        let first = registry.calculate_json("hourly-to-salary", &inputs).unwrap();
        let second = registry.calculate_json("hourly-to-salary", &inputs).unwrap();
        assert_eq!(first, second);
        assert_eq!(first["annualSalary"], 104000.0);
        assert_eq!(first["monthlySalary"], 104000.0 / 12.0);
    }

    #[test]
    fn test_registry_call_unknown() {
        let registry = EngineRegistry::new();
        let result = registry.calculate("unknown", &InputMap::new());
        assert_eq!(result, Err(EngineError::NotFound("unknown".to_string())));
    }

    #[test]
    fn test_registry_reports_missing_field() {
        let registry = EngineRegistry::new();
        let result = registry.calculate("remote-pay-adjuster", &input_map([("baseSalary", 1.0)]));
        assert!(matches!(
            result,
            Err(EngineError::MissingField {
                tool: "remote-pay-adjuster",
                field: "homeIndex"
            })
        ));
    }

    #[test]
    fn test_quit_date_null_when_unreachable() {
        let registry = EngineRegistry::new();
        let inputs = input_map([
            ("currentSavings", 0.0),
            ("monthlySavings", 0.0),
            ("monthlyExpenses", 2000.0),
            ("targetRunwayMonths", 6.0),
            ("annualReturnPercent", 5.0),
        ]);
        let value = registry.calculate_json("quit-date-calculator", &inputs).unwrap();
        assert!(value["monthsToTarget"].is_null());
        assert_eq!(value["targetAmount"], 12000.0);
    }

    #[test]
    fn test_registry_contains() {
        let registry = EngineRegistry::new();
        assert!(registry.contains("quit-date-calculator"));
        assert!(!registry.contains("salary-in-norway"));
        assert!(!registry.contains(""));
    }

    #[test]
    fn test_overflowing_inputs_are_rejected() {
        let registry = EngineRegistry::new();
        let inputs = input_map([
            ("currentSavings", 0.0),
            ("monthlySavings", 1000.0),
            ("monthlyExpenses", 1e200),
            ("targetRunwayMonths", 1e200),
            ("annualReturnPercent", 5.0),
        ]);
        let result = registry.calculate("quit-date-calculator", &inputs);
        assert_eq!(
            result,
            Err(EngineError::NonFinite {
                tool: "quit-date-calculator",
                field: "targetAmount"
            })
        );

        let result = registry.calculate("hourly-to-salary", &input_map([
            ("hourlyRate", 1e300),
            ("hoursPerWeek", 1e10),
            ("weeksPerYear", 52.0),
        ]));
        assert!(matches!(result, Err(EngineError::NonFinite { field: "annualSalary", .. })));
    }

    #[test]
    fn test_calculate_json_wraps_engine_errors() {
        let result = EngineRegistry::new().calculate_json("unknown", &InputMap::new());
        assert!(matches!(
            result,
            Err(crate::Error::Engine(EngineError::NotFound(_)))
        ));
    }

    #[test]
    fn test_engines_listing() {
        let engines = EngineRegistry::new().engines();
        let hourly = engines.iter().find(|e| e.slug == "hourly-to-salary").unwrap();
        assert_eq!(hourly.inputs, &["hourlyRate", "hoursPerWeek", "weeksPerYear"]);
    }
}
