//! Runway engines: how long until you can quit, how long a layoff can last.
//!
//! Both engines humanize their month counts (one decimal) because those
//! values are shown verbatim on the page and drive the risk tier.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::EngineDefinition;
use crate::domains::engines::error::EngineError;
use crate::domains::engines::input::{InputReader, round_to};

/// Months of unemployment benefits counted towards layoff resources.
const BENEFIT_MONTHS: f64 = 6.0;

// ============================================================================
// Quit date
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuitDateInput {
    /// Savings available today.
    pub current_savings: f64,
    /// Amount added to savings each month. Zero or less never reaches a target.
    pub monthly_savings: f64,
    /// Expected spending per month after quitting.
    pub monthly_expenses: f64,
    /// Months of expenses to have saved before quitting.
    pub target_runway_months: f64,
    /// Expected annual return on savings, in percent.
    pub annual_return_percent: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuitDateOutput {
    pub target_amount: f64,
    /// `None` when the target is never reached.
    pub months_to_target: Option<f64>,
    pub years_to_target: Option<f64>,
    pub shortfall: f64,
}

pub struct QuitDate;

impl QuitDate {
    /// Months of compounding contributions needed to grow `savings` to `target`.
    ///
    /// `monthly_rate` is the per-month return as a fraction. Degenerate inputs
    /// are settled before the logarithm, which only ever sees positive arguments.
    pub fn months_to_target(savings: f64, monthly_saving: f64, monthly_rate: f64, target: f64) -> Option<f64> {
        if savings >= target {
            return Some(0.0);
        }
        if monthly_saving <= 0.0 {
            return None;
        }
        if monthly_rate == 0.0 {
            return Some((target - savings) / monthly_saving);
        }

        let numerator = target * monthly_rate + monthly_saving;
        let denominator = savings * monthly_rate + monthly_saving;
        Some((numerator / denominator).ln() / (1.0 + monthly_rate).ln())
    }
}

impl EngineDefinition for QuitDate {
    const SLUG: &'static str = "quit-date-calculator";
    const TITLE: &'static str = "Quit Date Calculator";
    const FIELDS: &'static [&'static str] = &[
        "currentSavings",
        "monthlySavings",
        "monthlyExpenses",
        "targetRunwayMonths",
        "annualReturnPercent",
    ];

    type Input = QuitDateInput;
    type Output = QuitDateOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        Ok(QuitDateInput {
            current_savings: reader.non_negative("currentSavings")?,
            monthly_savings: reader.finite("monthlySavings")?,
            monthly_expenses: reader.non_negative("monthlyExpenses")?,
            target_runway_months: reader.non_negative("targetRunwayMonths")?,
            annual_return_percent: reader.non_negative("annualReturnPercent")?,
        })
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let target_amount = input.monthly_expenses * input.target_runway_months;
        let monthly_rate = input.annual_return_percent / 100.0 / 12.0;

        let months = Self::months_to_target(
            input.current_savings,
            input.monthly_savings,
            monthly_rate,
            target_amount,
        );

        QuitDateOutput {
            target_amount,
            months_to_target: months.map(|m| round_to(m, 1)),
            years_to_target: months.map(|m| round_to(m / 12.0, 2)),
            shortfall: (target_amount - input.current_savings).max(0.0),
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        let mut figures = vec![
            ("targetAmount", output.target_amount),
            ("shortfall", output.shortfall),
        ];
        figures.extend(output.months_to_target.map(|m| ("monthsToTarget", m)));
        figures.extend(output.years_to_target.map(|y| ("yearsToTarget", y)));
        figures
    }
}

// ============================================================================
// Layoff survival
// ============================================================================

/// How exposed a household is, by months of runway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RiskTier {
    Critical,
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// Lower bounds are exclusive: exactly 3.0 months is already `High`.
    pub fn from_months(months: f64) -> Self {
        if months < 3.0 {
            Self::Critical
        } else if months < 6.0 {
            Self::High
        } else if months < 12.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoffSurvivalInput {
    /// Liquid savings.
    pub savings: f64,
    /// Severance payout.
    pub severance: f64,
    /// Unemployment benefits per month, counted for six months.
    pub monthly_benefits: f64,
    /// Essential spending per month.
    pub monthly_expenses: f64,
    /// Minimum debt payments per month.
    pub monthly_debt_payments: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoffSurvivalOutput {
    pub total_resources: f64,
    pub monthly_burn: f64,
    pub survival_months: f64,
    pub risk_tier: RiskTier,
}

pub struct LayoffSurvival;

impl EngineDefinition for LayoffSurvival {
    const SLUG: &'static str = "layoff-survival-calculator";
    const TITLE: &'static str = "Layoff Survival Calculator";
    const FIELDS: &'static [&'static str] = &[
        "savings",
        "severance",
        "monthlyBenefits",
        "monthlyExpenses",
        "monthlyDebtPayments",
    ];

    type Input = LayoffSurvivalInput;
    type Output = LayoffSurvivalOutput;

    fn read(reader: &InputReader<'_>) -> Result<Self::Input, EngineError> {
        let input = LayoffSurvivalInput {
            savings: reader.non_negative("savings")?,
            severance: reader.non_negative("severance")?,
            monthly_benefits: reader.non_negative("monthlyBenefits")?,
            monthly_expenses: reader.non_negative("monthlyExpenses")?,
            monthly_debt_payments: reader.non_negative("monthlyDebtPayments")?,
        };
        if input.monthly_expenses + input.monthly_debt_payments <= 0.0 {
            return Err(reader.out_of_range(
                "monthlyExpenses",
                input.monthly_expenses,
                "expenses plus debt payments must be greater than zero",
            ));
        }
        Ok(input)
    }

    fn calculate(input: &Self::Input) -> Self::Output {
        let total_resources =
            input.savings + input.severance + input.monthly_benefits * BENEFIT_MONTHS;
        let monthly_burn = input.monthly_expenses + input.monthly_debt_payments;
        let survival_months = round_to(total_resources / monthly_burn, 1);

        LayoffSurvivalOutput {
            total_resources,
            monthly_burn,
            survival_months,
            risk_tier: RiskTier::from_months(survival_months),
        }
    }

    fn figures(output: &Self::Output) -> Vec<(&'static str, f64)> {
        vec![
            ("totalResources", output.total_resources),
            ("monthlyBurn", output.monthly_burn),
            ("survivalMonths", output.survival_months),
        ]
    }
}
