//! Structural schema of a tool definition document.
//!
//! The schema is derived from [`ToolDefinition`] and compiled once. Every
//! violation in a document is reported with its dotted path, instead of
//! stopping at the first one the way a typed deserializer would.

use std::sync::LazyLock;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, ValidationError, Validator};
use schemars::generate::SchemaSettings;
use serde_json::Value;

use super::model::ToolDefinition;

/// One schema violation inside a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path to the offending value (`faqs`, `inputs.0.type`). Empty for the root.
    pub path: String,
    pub message: String,
}

struct DefinitionSchema {
    /// Subschemas are inlined so error schema paths resolve as JSON pointers.
    document: Value,
    validator: Validator,
}

static DEFINITION_SCHEMA: LazyLock<Result<DefinitionSchema, String>> =
    LazyLock::new(compile_definition_schema);

fn compile_definition_schema() -> Result<DefinitionSchema, String> {
    let generator = SchemaSettings::draft2020_12()
        .with(|settings| settings.inline_subschemas = true)
        .into_generator();
    let document = serde_json::to_value(generator.into_root_schema_for::<ToolDefinition>())
        .map_err(|e| format!("definition schema: {e}"))?;
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&document)
        .map_err(|e| format!("invalid definition schema: {e}"))?;
    Ok(DefinitionSchema {
        document,
        validator,
    })
}

/// Check a definition document against the content schema.
pub fn check_definition(value: &Value) -> Vec<SchemaIssue> {
    let schema = match DEFINITION_SCHEMA.as_ref() {
        Ok(schema) => schema,
        Err(message) => {
            return vec![SchemaIssue {
                path: String::new(),
                message: message.clone(),
            }];
        }
    };

    let mut issues: Vec<SchemaIssue> = schema
        .validator
        .iter_errors(value)
        .map(|error| describe(&schema.document, &error))
        .collect();
    issues.sort_by(|a, b| a.path.cmp(&b.path));
    issues
}

fn describe(schema: &Value, error: &ValidationError<'_>) -> SchemaIssue {
    let path = dotted(&error.instance_path.to_string());
    let message = match &error.kind {
        ValidationErrorKind::Required { property } => {
            let property = property.as_str().unwrap_or_default();
            return SchemaIssue {
                path: join(&path, property),
                message: "Required".to_string(),
            };
        }
        ValidationErrorKind::Type { .. } => format!(
            "Expected {}, received {}",
            expected_type(schema, &error.schema_path.to_string()),
            type_name(&error.instance)
        ),
        ValidationErrorKind::Constant { expected_value } => {
            format!("Invalid literal value, expected {expected_value}")
        }
        ValidationErrorKind::MinLength { limit } => {
            format!("String must contain at least {limit} character(s)")
        }
        ValidationErrorKind::MinItems { limit } => array_message(&path, false)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Array must contain at least {limit} element(s)")),
        ValidationErrorKind::MaxItems { limit } => array_message(&path, true)
            .map(str::to_string)
            .unwrap_or_else(|| format!("Array must contain at most {limit} element(s)")),
        _ => error.to_string(),
    };
    SchemaIssue { path, message }
}

/// Editorial wording for the content-count rules.
fn array_message(path: &str, too_many: bool) -> Option<&'static str> {
    match (path, too_many) {
        ("insights", false) => Some("Must have at least 2 insights"),
        ("insights", true) => Some("Cannot have more than 3 insights"),
        ("faqs", false) => Some("Must define at least 6 FAQs"),
        ("faqs", true) => Some("Cannot have more than 10 FAQs"),
        ("useCases", _) => Some("Must define exactly 3 use cases"),
        _ => None,
    }
}

/// `/faqs/3/q` -> `faqs.3.q`
fn dotted(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

fn join(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

/// Non-null types allowed by the `type` keyword the error points at.
fn expected_type(schema: &Value, schema_path: &str) -> String {
    match schema.pointer(schema_path) {
        Some(Value::String(kind)) => kind.clone(),
        Some(Value::Array(kinds)) => kinds
            .iter()
            .filter_map(Value::as_str)
            .filter(|kind| *kind != "null")
            .collect::<Vec<_>>()
            .join(" or "),
        _ => "a different type".to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    /// A definition that passes every rule.
    pub(crate) fn valid_definition() -> Value {
        json!({
            "title": "Hourly to Salary Calculator",
            "description": "Convert an hourly wage into yearly and monthly pay.",
            "inputs": [
                { "name": "hourlyRate", "type": "number", "unit": "USD", "label": "Hourly rate", "min": 0, "step": 0.5 },
                { "name": "hoursPerWeek", "type": "number", "label": "Hours per week", "placeholder": "40" },
                { "name": "weeksPerYear", "type": "number", "label": "Weeks per year", "max": 52 }
            ],
            "outputs": [
                { "name": "annualSalary", "unit": "USD", "label": "Annual salary" },
                { "name": "monthlySalary", "label": "Monthly salary" }
            ],
            "methodSummary": ["Multiply rate by hours and weeks"],
            "assumptions": ["Paid holidays are included"],
            "insights": ["Two thousand hours is a common shortcut", "Overtime is not included"],
            "faqs": [
                { "q": "Q1", "a": "A1" }, { "q": "Q2", "a": "A2" }, { "q": "Q3", "a": "A3" },
                { "q": "Q4", "a": "A4" }, { "q": "Q5", "a": "A5" }, { "q": "Q6", "a": "A6" }
            ],
            "clusters": ["pay-conversion"],
            "useCases": ["Compare offers", "Plan a budget", "Negotiate a raise"],
            "nextDecision": "salary-to-hourly",
            "upstreamDecision": null,
            "extraKey": "allowed"
        })
    }

    fn paths(issues: &[SchemaIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.path.as_str()).collect()
    }

    #[test]
    fn test_valid_definition_passes() {
        assert!(check_definition(&valid_definition()).is_empty());
    }

    #[test]
    fn test_too_few_faqs() {
        let mut def = valid_definition();
        def["faqs"].as_array_mut().unwrap().pop();
        let issues = check_definition(&def);
        assert_eq!(
            issues,
            vec![SchemaIssue {
                path: "faqs".into(),
                message: "Must define at least 6 FAQs".into()
            }]
        );
    }

    #[test]
    fn test_too_many_insights() {
        let mut def = valid_definition();
        def["insights"] = json!(["a", "b", "c", "d"]);
        let issues = check_definition(&def);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Cannot have more than 3 insights");
    }

    #[test]
    fn test_use_cases_must_be_exactly_three() {
        let mut def = valid_definition();
        def["useCases"] = json!(["a", "b", "c", "d"]);
        let issues = check_definition(&def);
        assert_eq!(issues[0].message, "Must define exactly 3 use cases");
    }

    #[test]
    fn test_collects_every_violation() {
        let mut def = valid_definition();
        def["title"] = json!("Calc");
        def.as_object_mut().unwrap().remove("clusters");
        def["inputs"][1]["type"] = json!("text");
        def["faqs"][2] = json!({ "q": "Only a question" });
        def["nextDecision"] = json!(42);

        let issues = check_definition(&def);
        assert_eq!(
            paths(&issues),
            vec!["clusters", "faqs.2.a", "inputs.1.type", "nextDecision", "title"]
        );
        assert_eq!(issues[0].message, "Required");
        assert_eq!(issues[1].message, "Required");
        assert_eq!(issues[2].message, "Invalid literal value, expected \"number\"");
        assert_eq!(issues[3].message, "Expected string, received number");
        assert_eq!(issues[4].message, "String must contain at least 5 character(s)");
    }

    #[test]
    fn test_too_many_faqs() {
        let mut def = valid_definition();
        let faqs = def["faqs"].as_array_mut().unwrap();
        for n in 7..=11 {
            faqs.push(json!({ "q": format!("Q{n}"), "a": format!("A{n}") }));
        }
        let issues = check_definition(&def);
        assert_eq!(paths(&issues), vec!["faqs"]);
        assert_eq!(issues[0].message, "Cannot have more than 10 FAQs");
    }

    #[test]
    fn test_nested_type_error_path() {
        let mut def = valid_definition();
        def["faqs"][3]["q"] = json!(7);
        def["inputs"][0]["min"] = json!("zero");
        let issues = check_definition(&def);
        assert_eq!(paths(&issues), vec!["faqs.3.q", "inputs.0.min"]);
        assert_eq!(issues[0].message, "Expected string, received number");
        assert_eq!(issues[1].message, "Expected number, received string");
    }

    #[test]
    fn test_dotted_path() {
        assert_eq!(dotted(""), "");
        assert_eq!(dotted("/faqs/3/q"), "faqs.3.q");
        assert_eq!(dotted("/a~1b/c~0d"), "a/b.c~d");
    }

    #[test]
    fn test_empty_inputs() {
        let mut def = valid_definition();
        def["inputs"] = json!([]);
        let issues = check_definition(&def);
        assert_eq!(issues[0].path, "inputs");
        assert_eq!(issues[0].message, "Array must contain at least 1 element(s)");
    }

    #[test]
    fn test_root_must_be_object() {
        let issues = check_definition(&json!([1, 2]));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "");
        assert_eq!(issues[0].message, "Expected object, received array");
    }
}
