//! Comparison engines: contractor vs employee, remote pay adjustment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::EngineDefinition;
use crate::domains::engines::error::EngineError;
use crate::domains::engines::input::InputReader;

// ============================================================================
// Contractor vs Employee
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractorVsEmployeeInput {
    /// Annual salary of the employee offer.
    pub employee_salary: f64,
    /// Contractor hourly rate.
    pub contractor_hourly_rate: f64,
    /// Contracted hours per week.
    pub contractor_hours_per_week: f64,
    /// Contracted weeks per year.
    pub contractor_weeks_per_year: f64,
    /// Share of contractor gross lost to taxes, insurance and missing benefits.
    pub contractor_overhead_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContractorVsEmployeeOutput {
    pub employee_total_pay: f64,
    pub contractor_gross: f64,
    pub contractor_net_equivalent: f64,
    pub difference: f64,
    pub difference_percent: f64,
}

pub struct ContractorVsEmployee;

impl EngineDefinition for ContractorVsEmployee {
    const SLUG: &'static str = "contractor-vs-employee";
    const TITLE: &'static str = "Contractor vs Employee Calculator";
    const FIELDS: &'static [&'static str] = &[
        "employeeSalary",
        "contractorHourlyRate",
        "contractorHoursPerWeek",
        "contractorWeeksPerYear",
        "contractorOverheadPercent",
    ];

    type Input = ContractorVsEmployeeInput;
    type Output = ContractorVsEmployeeOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(ContractorVsEmployeeInput {
            employee_salary: reader.positive("employeeSalary")?,
            contractor_hourly_rate: reader.non_negative("contractorHourlyRate")?,
            contractor_hours_per_week: reader.non_negative("contractorHoursPerWeek")?,
            contractor_weeks_per_year: reader.non_negative("contractorWeeksPerYear")?,
            contractor_overhead_percent: reader.non_negative("contractorOverheadPercent")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let employee_total_pay = input.employee_salary;
        let contractor_gross = input.contractor_hourly_rate
            * input.contractor_hours_per_week
            * input.contractor_weeks_per_year;

        let contractor_overhead = contractor_gross * (input.contractor_overhead_percent / 100.0);
        let contractor_net_equivalent = contractor_gross - contractor_overhead;

        let difference = contractor_net_equivalent - employee_total_pay;

        ContractorVsEmployeeOutput {
            employee_total_pay,
            contractor_gross,
            contractor_net_equivalent,
            difference,
            difference_percent: (difference / employee_total_pay) * 100.0,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("employeeTotalPay", output.employee_total_pay),
            ("contractorGross", output.contractor_gross),
            ("contractorNetEquivalent", output.contractor_net_equivalent),
            ("difference", output.difference),
            ("differencePercent", output.difference_percent),
        ]
    }
}

// ============================================================================
// Remote pay adjuster
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemotePayAdjusterInput {
    /// Salary in the home location.
    pub base_salary: f64,
    /// Cost-of-living index of the home location.
    pub home_index: f64,
    /// Cost-of-living index of the target location.
    pub target_index: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemotePayAdjusterOutput {
    pub adjusted_pay: f64,
    pub difference: f64,
    pub difference_percent: f64,
}

pub struct RemotePayAdjuster;

impl EngineDefinition for RemotePayAdjuster {
    const SLUG: &'static str = "remote-pay-adjuster";
    const TITLE: &'static str = "Remote Pay Adjuster";
    const FIELDS: &'static [&'static str] = &["baseSalary", "homeIndex", "targetIndex"];

    type Input = RemotePayAdjusterInput;
    type Output = RemotePayAdjusterOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(RemotePayAdjusterInput {
            base_salary: reader.positive("baseSalary")?,
            home_index: reader.positive("homeIndex")?,
            target_index: reader.non_negative("targetIndex")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let ratio = input.target_index / input.home_index;
        let adjusted_pay = input.base_salary * ratio;
        let difference = adjusted_pay - input.base_salary;

        RemotePayAdjusterOutput {
            adjusted_pay,
            difference,
            difference_percent: (difference / input.base_salary) * 100.0,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("adjustedPay", output.adjusted_pay),
            ("difference", output.difference),
            ("differencePercent", output.difference_percent),
        ]
    }
}
