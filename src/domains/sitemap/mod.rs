//! Sitemap domain.
//!
//! Post-build transforms over the generated sitemap:
//! - `partition.rs` - split the url set into core/destinations/corridors
//! - `audit.rs` - verify every active tool made it into the core sitemap

pub mod audit;
mod error;
pub mod partition;

pub use audit::{AuditReport, SitemapAuditor, audit_document};
pub use error::SitemapError;
pub use partition::{Partition, SitemapSplitter, SplitSummary, UrlSet, render_index};
