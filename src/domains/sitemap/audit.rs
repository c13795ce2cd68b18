//! Sitemap coverage audit against the registry.
//!
//! This is a coverage check, not an XML check: a tool counts as present when
//! its `/<slug>/` path occurs anywhere in the core sitemap.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use super::error::SitemapError;
use super::partition::Partition;
use crate::domains::content::Registry;

/// Outcome of an audit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Page paths of every active tool.
    pub expected: Vec<String>,
    /// Expected paths absent from the sitemap, in registry order.
    pub missing: Vec<String>,
}

impl AuditReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare the active registry entries with a sitemap document.
pub fn audit_document(registry: &Registry, sitemap: &str) -> AuditReport {
    let expected = registry.active_page_paths();
    let missing = expected
        .iter()
        .filter(|path| !sitemap.contains(path.as_str()))
        .cloned()
        .collect();
    AuditReport { expected, missing }
}

/// Audits `<dist>/sitemap-core.xml` against `registry.json`.
pub struct SitemapAuditor {
    registry_path: PathBuf,
    sitemap_path: PathBuf,
}

impl SitemapAuditor {
    pub fn new(registry_path: impl Into<PathBuf>, dist_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry_path: registry_path.into(),
            sitemap_path: dist_dir.into().join(Partition::Core.file_name()),
        }
    }

    pub fn audit(&self) -> crate::Result<AuditReport> {
        info!("Auditing sitemap...");

        let registry = Registry::load(&self.registry_path)?;
        let sitemap = std::fs::read_to_string(&self.sitemap_path)
            .map_err(|e| SitemapError::io(&self.sitemap_path, e))?;

        let report = audit_document(&registry, &sitemap);
        info!(
            "Checked {} active tools, {} missing",
            report.expected.len(),
            report.missing.len()
        );
        Ok(report)
    }
}
