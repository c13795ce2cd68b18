//! Econified build tooling library.
//!
//! Econified is a static site of pay and money calculators. This crate holds
//! everything that is not markup: the calculation engines, the build-time
//! content checks and sitemap transforms, and the currency helper.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling and slug path checks
//! - **domains**: business logic organized by bounded contexts
//!   - **engines**: one pure formula per calculator slug
//!   - **content**: registry and definition validation
//!   - **sitemap**: sitemap splitting and auditing
//!   - **currency**: rate caching, conversion and formatting
//!
//! # Example
//!
//! ```rust,no_run
//! use econified::domains::engines::{EngineRegistry, input_map};
//!
//! fn main() -> econified::Result<()> {
//!     let registry = EngineRegistry::new();
//!     let inputs = input_map([
//!         ("hourlyRate", 50.0),
//!         ("hoursPerWeek", 40.0),
//!         ("weeksPerYear", 52.0),
//!     ]);
//!     let output = registry.calculate("hourly-to-salary", &inputs)?;
//!     println!("{}", serde_json::to_string(&output)?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result};
