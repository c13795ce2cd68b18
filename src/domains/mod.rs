//! Domains module containing business logic organized by bounded contexts.
//!
//! - **engines**: calculator formulas and the slug registry
//! - **content**: the tool registry and per-tool definition documents
//! - **sitemap**: post-build sitemap partitioning and auditing
//! - **currency**: display currency selection and exchange rates

pub mod content;
pub mod currency;
pub mod engines;
pub mod sitemap;
