//! Engine definitions module.
//!
//! Each calculator's formula lives next to its input and output types:
//! - `conversion`: pay-period conversions (hourly, daily, weekly, monthly, annual)
//! - `freelance`: freelance rate from a target salary
//! - `comparison`: contractor vs employee, remote pay adjustment
//! - `runway`: quit-date runway and layoff survival
//!
//! ## Adding a New Engine
//!
//! 1. Implement `EngineDefinition` in the matching file (or a new one)
//! 2. Export it here
//! 3. Add a `ToolKind` variant and wire it in `kind.rs`; the compiler
//!    points at every match that still needs an arm

use schemars::JsonSchema;
use serde::Serialize;

use super::error::EngineError;
use super::input::InputReader;

pub mod comparison;
pub mod conversion;
pub mod freelance;
pub mod runway;

pub use comparison::{
    ContractorVsEmployee, ContractorVsEmployeeInput, ContractorVsEmployeeOutput,
    RemotePayAdjuster, RemotePayAdjusterInput, RemotePayAdjusterOutput,
};
pub use conversion::{
    AnnualSalaryToMonthly, AnnualSalaryToMonthlyInput, AnnualSalaryToMonthlyOutput,
    DailyRateToSalary, DailyRateToSalaryInput, DailyRateToSalaryOutput, HourlyToSalary,
    HourlyToSalaryInput, HourlyToSalaryOutput, MonthlyToYearlySalary, MonthlyToYearlySalaryInput,
    MonthlyToYearlySalaryOutput, SalaryToHourly, SalaryToHourlyInput, SalaryToHourlyOutput,
    WeeklyToAnnualPay, WeeklyToAnnualPayInput, WeeklyToAnnualPayOutput,
};
pub use freelance::{FreelanceRate, FreelanceRateInput, FreelanceRateOutput};
pub use runway::{
    LayoffSurvival, LayoffSurvivalInput, LayoffSurvivalOutput, QuitDate, QuitDateInput,
    QuitDateOutput, RiskTier,
};

/// Trait for engine definitions.
///
/// Each engine provides its slug, the input fields it reads, and a pure
/// calculation over its typed input.
pub trait EngineDefinition {
    /// The registry slug this engine is published under.
    const SLUG: &'static str;

    /// Human-readable calculator name.
    const TITLE: &'static str;

    /// Input field names, in form order.
    const FIELDS: &'static [&'static str];

    /// Typed input record.
    type Input: JsonSchema;

    /// Typed output record, serialized with camelCase keys.
    type Output: Serialize;

    /// Read and validate the typed input from a flat record.
    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError>;

    /// Run the formula. Pure and deterministic.
    fn calculate(input: &Self::Input) -> Self::Output;

    /// Numeric output fields by their serialized name. Absent optional
    /// figures are left out.
    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)>;
}
