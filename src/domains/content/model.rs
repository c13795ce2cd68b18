//! Registry entries and tool definitions as stored on disk.

use std::collections::HashSet;
use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::DefinitionError;

/// Publication status of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Active,
    Draft,
}

/// One entry of `registry.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub slug: String,
    pub status: ToolStatus,

    /// Presentation metadata (category, icon, ordering...), kept as-is.
    #[serde(flatten)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl RegistryEntry {
    pub fn is_active(&self) -> bool {
        self.status == ToolStatus::Active
    }

    /// Public path of the tool page; the site enforces trailing slashes.
    pub fn page_path(&self) -> String {
        format!("/{}/", self.slug)
    }
}

/// The master list of tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Registry {
    pub entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Load `registry.json`.
    pub fn load(path: &Path) -> Result<Self, DefinitionError> {
        let data = std::fs::read_to_string(path).map_err(|e| DefinitionError::read(path, e))?;
        serde_json::from_str(&data).map_err(|e| DefinitionError::parse(path, e))
    }

    pub fn active(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.iter().filter(|e| e.is_active())
    }

    /// Page paths of every active tool, in registry order.
    pub fn active_page_paths(&self) -> Vec<String> {
        self.active().map(RegistryEntry::page_path).collect()
    }

    /// Slugs listed more than once, each reported once, in first-seen order.
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.entries {
            let slug = entry.slug.as_str();
            if !seen.insert(slug) && reported.insert(slug) {
                duplicates.push(slug);
            }
        }
        duplicates
    }
}

/// A calculator input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DefinitionInput {
    pub name: String,
    /// Always `"number"`.
    #[serde(rename = "type")]
    #[schemars(extend("const" = "number"))]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

/// A calculator output field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DefinitionOutput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Faq {
    pub q: String,
    pub a: String,
}

/// Content document of one tool (`definitions/<slug>.json`).
///
/// The schemars bounds below are the publishing rules enforced by
/// [`check_definition`](super::schema::check_definition).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    #[schemars(length(min = 5))]
    pub title: String,
    #[schemars(length(min = 10))]
    pub description: String,
    #[schemars(length(min = 1))]
    pub inputs: Vec<DefinitionInput>,
    #[schemars(length(min = 1))]
    pub outputs: Vec<DefinitionOutput>,
    #[schemars(length(min = 1))]
    pub method_summary: Vec<String>,
    #[schemars(length(min = 1))]
    pub assumptions: Vec<String>,
    #[schemars(length(min = 2, max = 3))]
    pub insights: Vec<String>,
    #[schemars(length(min = 6, max = 10))]
    pub faqs: Vec<Faq>,
    #[schemars(length(min = 1))]
    pub clusters: Vec<String>,
    #[schemars(length(min = 3, max = 3))]
    pub use_cases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_decision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream_decision: Option<String>,
}

impl ToolDefinition {
    pub fn input_names(&self) -> impl Iterator<Item = &str> {
        self.inputs.iter().map(|i| i.name.as_str())
    }
}
