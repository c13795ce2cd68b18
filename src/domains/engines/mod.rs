//! Calculation engines domain.
//!
//! Every calculator on the site is a pure, closed-form formula over a handful
//! of numbers. Engines never touch I/O and hold no state.
//!
//! ## Architecture
//!
//! - `definitions/` - Formulas with their typed input/output records
//! - `kind.rs` - `ToolKind`, `EngineInput`, `EngineOutput` and the exhaustive dispatch
//! - `input.rs` - Reading flat `name -> number` records with explicit errors
//! - `registry.rs` - Slug lookup used by pages and the CLI
//! - `error.rs` - Engine error types

pub mod definitions;
mod error;
pub mod input;
mod kind;
mod registry;

pub use error::EngineError;
pub use input::{InputMap, input_map};
pub use kind::{EngineInput, EngineOutput, ToolKind};
pub use registry::{EngineInfo, EngineRegistry};
