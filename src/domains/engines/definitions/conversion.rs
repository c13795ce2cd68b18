//! Pay-period conversion engines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::EngineDefinition;
use crate::domains::engines::error::EngineError;
use crate::domains::engines::input::InputReader;

const MONTHS_PER_YEAR: f64 = 12.0;
const WEEKS_PER_YEAR: f64 = 52.0;

// ============================================================================
// Hourly -> Salary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourlyToSalaryInput {
    /// Gross pay per hour.
    pub hourly_rate: f64,
    /// Paid hours per week.
    pub hours_per_week: f64,
    /// Paid weeks per year.
    pub weeks_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HourlyToSalaryOutput {
    pub annual_salary: f64,
    pub monthly_salary: f64,
}

pub struct HourlyToSalary;

impl EngineDefinition for HourlyToSalary {
    const SLUG: &'static str = "hourly-to-salary";
    const TITLE: &'static str = "Hourly to Salary Calculator";
    const FIELDS: &'static [&'static str] = &["hourlyRate", "hoursPerWeek", "weeksPerYear"];

    type Input = HourlyToSalaryInput;
    type Output = HourlyToSalaryOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(HourlyToSalaryInput {
            hourly_rate: reader.non_negative("hourlyRate")?,
            hours_per_week: reader.non_negative("hoursPerWeek")?,
            weeks_per_year: reader.non_negative("weeksPerYear")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let annual_salary = input.hourly_rate * input.hours_per_week * input.weeks_per_year;
        HourlyToSalaryOutput {
            annual_salary,
            monthly_salary: annual_salary / MONTHS_PER_YEAR,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("annualSalary", output.annual_salary),
            ("monthlySalary", output.monthly_salary),
        ]
    }
}

// ============================================================================
// Salary -> Hourly
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryToHourlyInput {
    /// Gross annual salary.
    pub annual_salary: f64,
    /// Paid hours per week.
    pub hours_per_week: f64,
    /// Paid weeks per year.
    pub weeks_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalaryToHourlyOutput {
    pub hourly_rate: f64,
}

pub struct SalaryToHourly;

impl EngineDefinition for SalaryToHourly {
    const SLUG: &'static str = "salary-to-hourly";
    const TITLE: &'static str = "Salary to Hourly Calculator";
    const FIELDS: &'static [&'static str] = &["annualSalary", "hoursPerWeek", "weeksPerYear"];

    type Input = SalaryToHourlyInput;
    type Output = SalaryToHourlyOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(SalaryToHourlyInput {
            annual_salary: reader.non_negative("annualSalary")?,
            hours_per_week: reader.positive("hoursPerWeek")?,
            weeks_per_year: reader.positive("weeksPerYear")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        SalaryToHourlyOutput {
            hourly_rate: input.annual_salary / (input.hours_per_week * input.weeks_per_year),
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("hourlyRate", output.hourly_rate),
        ]
    }
}

// ============================================================================
// Monthly -> Yearly
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyToYearlySalaryInput {
    /// Gross pay per month.
    pub monthly_salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyToYearlySalaryOutput {
    pub annual_salary: f64,
    pub weekly_salary: f64,
}

pub struct MonthlyToYearlySalary;

impl EngineDefinition for MonthlyToYearlySalary {
    const SLUG: &'static str = "monthly-to-yearly-salary";
    const TITLE: &'static str = "Monthly to Yearly Salary Calculator";
    const FIELDS: &'static [&'static str] = &["monthlySalary"];

    type Input = MonthlyToYearlySalaryInput;
    type Output = MonthlyToYearlySalaryOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(MonthlyToYearlySalaryInput {
            monthly_salary: reader.non_negative("monthlySalary")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let annual_salary = input.monthly_salary * MONTHS_PER_YEAR;
        MonthlyToYearlySalaryOutput {
            annual_salary,
            weekly_salary: annual_salary / WEEKS_PER_YEAR,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("annualSalary", output.annual_salary),
            ("weeklySalary", output.weekly_salary),
        ]
    }
}

// ============================================================================
// Daily rate -> Salary
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyRateToSalaryInput {
    /// Gross pay per working day.
    pub daily_rate: f64,
    /// Working days per week.
    pub days_per_week: f64,
    /// Working weeks per year.
    pub weeks_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyRateToSalaryOutput {
    pub annual_salary: f64,
    pub monthly_salary: f64,
}

pub struct DailyRateToSalary;

impl EngineDefinition for DailyRateToSalary {
    const SLUG: &'static str = "daily-rate-to-salary";
    const TITLE: &'static str = "Daily Rate to Salary Calculator";
    const FIELDS: &'static [&'static str] = &["dailyRate", "daysPerWeek", "weeksPerYear"];

    type Input = DailyRateToSalaryInput;
    type Output = DailyRateToSalaryOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(DailyRateToSalaryInput {
            daily_rate: reader.non_negative("dailyRate")?,
            days_per_week: reader.non_negative("daysPerWeek")?,
            weeks_per_year: reader.non_negative("weeksPerYear")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let annual_salary = input.daily_rate * input.days_per_week * input.weeks_per_year;
        DailyRateToSalaryOutput {
            annual_salary,
            monthly_salary: annual_salary / MONTHS_PER_YEAR,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("annualSalary", output.annual_salary),
            ("monthlySalary", output.monthly_salary),
        ]
    }
}

// ============================================================================
// Annual -> Monthly
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSalaryToMonthlyInput {
    /// Gross annual salary.
    pub annual_salary: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnnualSalaryToMonthlyOutput {
    pub monthly_salary: f64,
    pub weekly_salary: f64,
}

pub struct AnnualSalaryToMonthly;

impl EngineDefinition for AnnualSalaryToMonthly {
    const SLUG: &'static str = "annual-salary-to-monthly";
    const TITLE: &'static str = "Annual Salary to Monthly Calculator";
    const FIELDS: &'static [&'static str] = &["annualSalary"];

    type Input = AnnualSalaryToMonthlyInput;
    type Output = AnnualSalaryToMonthlyOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(AnnualSalaryToMonthlyInput {
            annual_salary: reader.non_negative("annualSalary")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        AnnualSalaryToMonthlyOutput {
            monthly_salary: input.annual_salary / MONTHS_PER_YEAR,
            weekly_salary: input.annual_salary / WEEKS_PER_YEAR,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("monthlySalary", output.monthly_salary),
            ("weeklySalary", output.weekly_salary),
        ]
    }
}

// ============================================================================
// Weekly -> Annual
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyToAnnualPayInput {
    /// Gross pay per week.
    pub weekly_pay: f64,
    /// Paid weeks per year.
    pub weeks_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyToAnnualPayOutput {
    pub annual_pay: f64,
    pub monthly_pay: f64,
}

pub struct WeeklyToAnnualPay;

impl EngineDefinition for WeeklyToAnnualPay {
    const SLUG: &'static str = "weekly-to-annual-pay";
    const TITLE: &'static str = "Weekly to Annual Pay Calculator";
    const FIELDS: &'static [&'static str] = &["weeklyPay", "weeksPerYear"];

    type Input = WeeklyToAnnualPayInput;
    type Output = WeeklyToAnnualPayOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(WeeklyToAnnualPayInput {
            weekly_pay: reader.non_negative("weeklyPay")?,
            weeks_per_year: reader.non_negative("weeksPerYear")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let annual_pay = input.weekly_pay * input.weeks_per_year;
        WeeklyToAnnualPayOutput {
            annual_pay,
            monthly_pay: annual_pay / MONTHS_PER_YEAR,
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("annualPay", output.annual_pay),
            ("monthlyPay", output.monthly_pay),
        ]
    }
}
