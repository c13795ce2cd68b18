//! Batch validation of every definition referenced by the registry.
//!
//! Nothing here stops at the first problem: every entry is checked and every
//! issue is collected, so one build run shows the full list.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use super::error::DefinitionError;
use super::model::{Registry, ToolDefinition};
use super::schema::check_definition;
use crate::core::security::resolve_definition_path;
use crate::domains::engines::{EngineRegistry, ToolKind};

/// One problem found while validating a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub slug: String,
    /// Dotted field path; empty when the whole file is at fault.
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.json: [{}] {}", self.slug, self.path, self.message)
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    /// Number of registry entries examined.
    pub checked: usize,
    pub issues: Vec<ValidationIssue>,
    /// Registry slugs with no calculation engine. Warnings only.
    pub without_engine: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Slugs with at least one issue, in the order they were found.
    pub fn failed_slugs(&self) -> Vec<&str> {
        let mut slugs: Vec<&str> = Vec::new();
        for issue in &self.issues {
            if !slugs.contains(&issue.slug.as_str()) {
                slugs.push(&issue.slug);
            }
        }
        slugs
    }
}

/// Validates definition files against the content schema.
pub struct DefinitionValidator {
    definitions_dir: PathBuf,
    engines: EngineRegistry,
}

impl DefinitionValidator {
    pub fn new(definitions_dir: impl Into<PathBuf>) -> Self {
        Self {
            definitions_dir: definitions_dir.into(),
            engines: EngineRegistry::new(),
        }
    }

    pub fn definitions_dir(&self) -> &Path {
        &self.definitions_dir
    }

    /// Load and typecheck one definition; fails on the first problem.
    pub fn load(&self, slug: &str) -> Result<ToolDefinition, DefinitionError> {
        let path = resolve_definition_path(&self.definitions_dir, slug)?;
        let data = std::fs::read_to_string(&path).map_err(|e| DefinitionError::read(&path, e))?;
        serde_json::from_str(&data).map_err(|e| DefinitionError::parse(&path, e))
    }

    /// Check every registry entry, collecting all issues.
    pub fn validate_registry(&self, registry: &Registry) -> ValidationReport {
        let mut report = ValidationReport::default();

        for slug in registry.duplicate_slugs() {
            report.issues.push(ValidationIssue {
                slug: slug.to_string(),
                path: String::new(),
                message: "Slug is listed more than once in the registry".to_string(),
            });
        }

        for entry in &registry.entries {
            report.checked += 1;
            info!("Checking {}.json ...", entry.slug);

            let issues = self.validate_slug(&entry.slug);
            for issue in &issues {
                error!("{}", issue);
            }
            report.issues.extend(issues);

            if !self.engines.contains(&entry.slug) {
                warn!(
                    "No calculation engine registered for '{}'; its page cannot compute results",
                    entry.slug
                );
                report.without_engine.push(entry.slug.clone());
            }
        }

        report
    }

    /// Check a single definition file.
    pub fn validate_slug(&self, slug: &str) -> Vec<ValidationIssue> {
        let whole_file = |message: String| ValidationIssue {
            slug: slug.to_string(),
            path: String::new(),
            message,
        };

        let path = match resolve_definition_path(&self.definitions_dir, slug) {
            Ok(path) => path,
            Err(e) => return vec![whole_file(e.to_string())],
        };

        let value: serde_json::Value = match std::fs::read_to_string(&path)
            .map_err(|e| DefinitionError::read(&path, e))
            .and_then(|data| serde_json::from_str(&data).map_err(|e| DefinitionError::parse(&path, e)))
        {
            Ok(value) => value,
            Err(e) => return vec![whole_file(e.to_string())],
        };

        let issues: Vec<ValidationIssue> = check_definition(&value)
            .into_iter()
            .map(|issue| ValidationIssue {
                slug: slug.to_string(),
                path: issue.path,
                message: issue.message,
            })
            .collect();

        if issues.is_empty() {
            self.warn_on_engine_mismatch(slug, value);
        }

        issues
    }

    /// Definition inputs the engine does not read are shown on the page but ignored.
    fn warn_on_engine_mismatch(&self, slug: &str, value: serde_json::Value) {
        let (Some(kind), Ok(definition)) = (
            ToolKind::from_slug(slug),
            serde_json::from_value::<ToolDefinition>(value),
        ) else {
            return;
        };

        for name in definition.input_names() {
            if !kind.fields().iter().any(|field| *field == name) {
                warn!("{}.json declares input '{}' that the engine does not read", slug, name);
            }
        }
        for field in kind.fields() {
            if !definition.input_names().any(|name| name == *field) {
                warn!("{}.json does not declare engine input '{}'", slug, field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::content::schema::tests::valid_definition;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write_definition(dir: &Path, slug: &str, value: &serde_json::Value) {
        fs::write(dir.join(format!("{slug}.json")), value.to_string()).unwrap();
    }

    fn registry(slugs: &[(&str, &str)]) -> Registry {
        let entries: Vec<_> = slugs
            .iter()
            .map(|(slug, status)| json!({ "slug": slug, "status": status }))
            .collect();
        serde_json::from_value(json!(entries)).unwrap()
    }

    #[test]
    fn test_all_valid() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "hourly-to-salary", &valid_definition());
        write_definition(temp_dir.path(), "salary-to-hourly", &valid_definition());

        let validator = DefinitionValidator::new(temp_dir.path());
        let report = validator.validate_registry(&registry(&[
            ("hourly-to-salary", "active"),
            ("salary-to-hourly", "draft"),
        ]));

        assert!(report.is_ok());
        assert_eq!(report.checked, 2);
    }

    #[test]
    fn test_reports_exactly_the_broken_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut broken = valid_definition();
        broken["faqs"].as_array_mut().unwrap().truncate(5);
        write_definition(temp_dir.path(), "hourly-to-salary", &valid_definition());
        write_definition(temp_dir.path(), "salary-to-hourly", &broken);

        let validator = DefinitionValidator::new(temp_dir.path());
        let report = validator.validate_registry(&registry(&[
            ("hourly-to-salary", "active"),
            ("salary-to-hourly", "active"),
        ]));

        assert!(!report.is_ok());
        assert_eq!(report.failed_slugs(), vec!["salary-to-hourly"]);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].path, "faqs");
        assert_eq!(
            report.issues[0].to_string(),
            "salary-to-hourly.json: [faqs] Must define at least 6 FAQs"
        );
    }

    #[test]
    fn test_missing_and_malformed_files_are_collected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("broken-json.json"), "{ not json").unwrap();

        let validator = DefinitionValidator::new(temp_dir.path());
        let report = validator.validate_registry(&registry(&[
            ("missing-tool", "active"),
            ("broken-json", "draft"),
            ("Bad Slug", "active"),
        ]));

        assert_eq!(report.checked, 3);
        assert_eq!(report.failed_slugs(), vec!["missing-tool", "broken-json", "Bad Slug"]);
        assert!(report.issues.iter().all(|i| i.path.is_empty()));
    }

    #[test]
    fn test_duplicate_slug_is_an_issue() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "hourly-to-salary", &valid_definition());

        let validator = DefinitionValidator::new(temp_dir.path());
        let report = validator.validate_registry(&registry(&[
            ("hourly-to-salary", "active"),
            ("hourly-to-salary", "draft"),
        ]));

        assert_eq!(report.issues.len(), 1);
        assert!(report.issues[0].message.contains("more than once"));
    }

    #[test]
    fn test_slug_without_engine_is_only_a_warning() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "hourly-to-salary", &valid_definition());
        write_definition(temp_dir.path(), "salary-in-norway", &valid_definition());

        let validator = DefinitionValidator::new(temp_dir.path());
        let report = validator.validate_registry(&registry(&[
            ("hourly-to-salary", "active"),
            ("salary-in-norway", "active"),
        ]));

        assert!(report.is_ok());
        assert_eq!(report.without_engine, vec!["salary-in-norway".to_string()]);
    }

    #[test]
    fn test_load_typed_definition() {
        let temp_dir = TempDir::new().unwrap();
        write_definition(temp_dir.path(), "hourly-to-salary", &valid_definition());

        let validator = DefinitionValidator::new(temp_dir.path());
        let definition = validator.load("hourly-to-salary").unwrap();
        assert_eq!(definition.faqs.len(), 6);
        assert_eq!(definition.next_decision.as_deref(), Some("salary-to-hourly"));
        assert!(matches!(validator.load("nope"), Err(DefinitionError::Slug(_))));
    }
}
