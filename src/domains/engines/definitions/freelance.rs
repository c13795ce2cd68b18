//! Freelance rate engine.
//!
//! Grosses the target salary up by an overhead percentage (taxes, tooling,
//! unpaid time) and spreads it across the billable hours of a year.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::EngineDefinition;
use crate::domains::engines::error::EngineError;
use crate::domains::engines::input::InputReader;

const HOURS_PER_DAY: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceRateInput {
    /// Salary the freelancer wants to take home before overhead.
    pub target_salary: f64,
    /// Overhead as a percentage of the target salary.
    pub overhead_percent: f64,
    /// Hours billed to clients per week.
    pub billable_hours_per_week: f64,
    /// Weeks worked per year.
    pub weeks_worked: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FreelanceRateOutput {
    pub freelance_hourly_rate: f64,
    pub freelance_day_rate: f64,
    pub effective_annual_revenue: f64,
}

pub struct FreelanceRate;

impl EngineDefinition for FreelanceRate {
    const SLUG: &'static str = "freelance-rate-calculator";
    const TITLE: &'static str = "Freelance Rate Calculator";
    const FIELDS: &'static [&'static str] = &[
        "targetSalary",
        "overheadPercent",
        "billableHoursPerWeek",
        "weeksWorked",
    ];

    type Input = FreelanceRateInput;
    type Output = FreelanceRateOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(FreelanceRateInput {
            target_salary: reader.non_negative("targetSalary")?,
            overhead_percent: reader.non_negative("overheadPercent")?,
            billable_hours_per_week: reader.non_negative("billableHoursPerWeek")?,
            weeks_worked: reader.non_negative("weeksWorked")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let effective_annual_revenue = input.target_salary * (1.0 + input.overhead_percent / 100.0);
        let total_billable_hours = input.billable_hours_per_week * input.weeks_worked;

        // No billable time means no meaningful rate; report zero instead of infinity.
        let freelance_hourly_rate = if total_billable_hours > 0.0 {
            effective_annual_revenue / total_billable_hours
        } else {
            0.0
        };

        FreelanceRateOutput {
            freelance_hourly_rate,
            freelance_day_rate: freelance_hourly_rate * HOURS_PER_DAY,
            effective_annual_revenue,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("freelanceHourlyRate", output.freelance_hourly_rate),
            ("freelanceDayRate", output.freelance_day_rate),
            ("effectiveAnnualRevenue", output.effective_annual_revenue),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freelance_rate() {
        let output = FreelanceRate::calculate(&FreelanceRateInput {
            target_salary: 80000.0,
            overhead_percent: 25.0,
            billable_hours_per_week: 25.0,
            weeks_worked: 40.0,
        });
        assert_eq!(output.effective_annual_revenue, 100000.0);
        assert_eq!(output.freelance_hourly_rate, 100.0);
        assert_eq!(output.freelance_day_rate, 800.0);
    }

    #[test]
    fn test_zero_billable_hours() {
        let output = FreelanceRate::calculate(&FreelanceRateInput {
            target_salary: 80000.0,
            overhead_percent: 0.0,
            billable_hours_per_week: 0.0,
            weeks_worked: 48.0,
        });
        assert_eq!(output.effective_annual_revenue, 80000.0);
        assert_eq!(output.freelance_hourly_rate, 0.0);
        assert_eq!(output.freelance_day_rate, 0.0);
    }
}
