//! Closed set of calculator kinds and the typed dispatch over them.
//!
//! A slug resolves to a [`ToolKind`]; the kind reads a flat record into an
//! [`EngineInput`], and [`EngineInput::calculate`] matches exhaustively, so a
//! new engine that is not wired everywhere fails to compile.

use serde::Serialize;

use super::definitions::*;
use super::error::EngineError;
use super::input::{InputMap, InputReader};

/// Every calculator the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    HourlyToSalary,
    SalaryToHourly,
    FreelanceRate,
    MonthlyToYearlySalary,
    DailyRateToSalary,
    AnnualSalaryToMonthly,
    WeeklyToAnnualPay,
    ContractorVsEmployee,
    RemotePayAdjuster,
    QuitDate,
    LayoffSurvival,
}

impl ToolKind {
    pub const ALL: [ToolKind; 11] = [
        ToolKind::HourlyToSalary,
        ToolKind::SalaryToHourly,
        ToolKind::FreelanceRate,
        ToolKind::MonthlyToYearlySalary,
        ToolKind::DailyRateToSalary,
        ToolKind::AnnualSalaryToMonthly,
        ToolKind::WeeklyToAnnualPay,
        ToolKind::ContractorVsEmployee,
        ToolKind::RemotePayAdjuster,
        ToolKind::QuitDate,
        ToolKind::LayoffSurvival,
    ];

    /// Look up the kind registered under `slug`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Self::HourlyToSalary => HourlyToSalary::SLUG,
            Self::SalaryToHourly => SalaryToHourly::SLUG,
            Self::FreelanceRate => FreelanceRate::SLUG,
            Self::MonthlyToYearlySalary => MonthlyToYearlySalary::SLUG,
            Self::DailyRateToSalary => DailyRateToSalary::SLUG,
            Self::AnnualSalaryToMonthly => AnnualSalaryToMonthly::SLUG,
            Self::WeeklyToAnnualPay => WeeklyToAnnualPay::SLUG,
            Self::ContractorVsEmployee => ContractorVsEmployee::SLUG,
            Self::RemotePayAdjuster => RemotePayAdjuster::SLUG,
            Self::QuitDate => QuitDate::SLUG,
            Self::LayoffSurvival => LayoffSurvival::SLUG,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::HourlyToSalary => HourlyToSalary::TITLE,
            Self::SalaryToHourly => SalaryToHourly::TITLE,
            Self::FreelanceRate => FreelanceRate::TITLE,
            Self::MonthlyToYearlySalary => MonthlyToYearlySalary::TITLE,
            Self::DailyRateToSalary => DailyRateToSalary::TITLE,
            Self::AnnualSalaryToMonthly => AnnualSalaryToMonthly::TITLE,
            Self::WeeklyToAnnualPay => WeeklyToAnnualPay::TITLE,
            Self::ContractorVsEmployee => ContractorVsEmployee::TITLE,
            Self::RemotePayAdjuster => RemotePayAdjuster::TITLE,
            Self::QuitDate => QuitDate::TITLE,
            Self::LayoffSurvival => LayoffSurvival::TITLE,
        }
    }

    /// Input field names the engine reads, in form order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Self::HourlyToSalary => HourlyToSalary::FIELDS,
            Self::SalaryToHourly => SalaryToHourly::FIELDS,
            Self::FreelanceRate => FreelanceRate::FIELDS,
            Self::MonthlyToYearlySalary => MonthlyToYearlySalary::FIELDS,
            Self::DailyRateToSalary => DailyRateToSalary::FIELDS,
            Self::AnnualSalaryToMonthly => AnnualSalaryToMonthly::FIELDS,
            Self::WeeklyToAnnualPay => WeeklyToAnnualPay::FIELDS,
            Self::ContractorVsEmployee => ContractorVsEmployee::FIELDS,
            Self::RemotePayAdjuster => RemotePayAdjuster::FIELDS,
            Self::QuitDate => QuitDate::FIELDS,
            Self::LayoffSurvival => LayoffSurvival::FIELDS,
        }
    }

    /// JSON Schema of the engine's typed input.
    pub fn input_schema(&self) -> schemars::Schema {
        match self {
            Self::HourlyToSalary => schemars::schema_for!(HourlyToSalaryInput),
            Self::SalaryToHourly => schemars::schema_for!(SalaryToHourlyInput),
            Self::FreelanceRate => schemars::schema_for!(FreelanceRateInput),
            Self::MonthlyToYearlySalary => schemars::schema_for!(MonthlyToYearlySalaryInput),
            Self::DailyRateToSalary => schemars::schema_for!(DailyRateToSalaryInput),
            Self::AnnualSalaryToMonthly => schemars::schema_for!(AnnualSalaryToMonthlyInput),
            Self::WeeklyToAnnualPay => schemars::schema_for!(WeeklyToAnnualPayInput),
            Self::ContractorVsEmployee => schemars::schema_for!(ContractorVsEmployeeInput),
            Self::RemotePayAdjuster => schemars::schema_for!(RemotePayAdjusterInput),
            Self::QuitDate => schemars::schema_for!(QuitDateInput),
            Self::LayoffSurvival => schemars::schema_for!(LayoffSurvivalInput),
        }
    }

    /// Read and validate a flat record into this engine's typed input.
    pub fn parse_input(&self, inputs: &InputMap) -> Result<EngineInput, EngineError> {
        let reader = InputReader::new(self.slug(), inputs);
        Ok(match self {
            Self::HourlyToSalary => EngineInput::HourlyToSalary(HourlyToSalary::read(&reader)?),
            Self::SalaryToHourly => EngineInput::SalaryToHourly(SalaryToHourly::read(&reader)?),
            Self::FreelanceRate => EngineInput::FreelanceRate(FreelanceRate::read(&reader)?),
            Self::MonthlyToYearlySalary => {
                EngineInput::MonthlyToYearlySalary(MonthlyToYearlySalary::read(&reader)?)
            }
            Self::DailyRateToSalary => {
                EngineInput::DailyRateToSalary(DailyRateToSalary::read(&reader)?)
            }
            Self::AnnualSalaryToMonthly => {
                EngineInput::AnnualSalaryToMonthly(AnnualSalaryToMonthly::read(&reader)?)
            }
            Self::WeeklyToAnnualPay => {
                EngineInput::WeeklyToAnnualPay(WeeklyToAnnualPay::read(&reader)?)
            }
            Self::ContractorVsEmployee => {
                EngineInput::ContractorVsEmployee(ContractorVsEmployee::read(&reader)?)
            }
            Self::RemotePayAdjuster => {
                EngineInput::RemotePayAdjuster(RemotePayAdjuster::read(&reader)?)
            }
            Self::QuitDate => EngineInput::QuitDate(QuitDate::read(&reader)?),
            Self::LayoffSurvival => EngineInput::LayoffSurvival(LayoffSurvival::read(&reader)?),
        })
    }
}

impl std::fmt::Display for ToolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// A validated input for one engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineInput {
    HourlyToSalary(HourlyToSalaryInput),
    SalaryToHourly(SalaryToHourlyInput),
    FreelanceRate(FreelanceRateInput),
    MonthlyToYearlySalary(MonthlyToYearlySalaryInput),
    DailyRateToSalary(DailyRateToSalaryInput),
    AnnualSalaryToMonthly(AnnualSalaryToMonthlyInput),
    WeeklyToAnnualPay(WeeklyToAnnualPayInput),
    ContractorVsEmployee(ContractorVsEmployeeInput),
    RemotePayAdjuster(RemotePayAdjusterInput),
    QuitDate(QuitDateInput),
    LayoffSurvival(LayoffSurvivalInput),
}

impl EngineInput {
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::HourlyToSalary(_) => ToolKind::HourlyToSalary,
            Self::SalaryToHourly(_) => ToolKind::SalaryToHourly,
            Self::FreelanceRate(_) => ToolKind::FreelanceRate,
            Self::MonthlyToYearlySalary(_) => ToolKind::MonthlyToYearlySalary,
            Self::DailyRateToSalary(_) => ToolKind::DailyRateToSalary,
            Self::AnnualSalaryToMonthly(_) => ToolKind::AnnualSalaryToMonthly,
            Self::WeeklyToAnnualPay(_) => ToolKind::WeeklyToAnnualPay,
            Self::ContractorVsEmployee(_) => ToolKind::ContractorVsEmployee,
            Self::RemotePayAdjuster(_) => ToolKind::RemotePayAdjuster,
            Self::QuitDate(_) => ToolKind::QuitDate,
            Self::LayoffSurvival(_) => ToolKind::LayoffSurvival,
        }
    }

    /// Run the matching engine.
    pub fn calculate(&self) -> EngineOutput {
        match self {
            Self::HourlyToSalary(i) => EngineOutput::HourlyToSalary(HourlyToSalary::calculate(i)),
            Self::SalaryToHourly(i) => EngineOutput::SalaryToHourly(SalaryToHourly::calculate(i)),
            Self::FreelanceRate(i) => EngineOutput::FreelanceRate(FreelanceRate::calculate(i)),
            Self::MonthlyToYearlySalary(i) => {
                EngineOutput::MonthlyToYearlySalary(MonthlyToYearlySalary::calculate(i))
            }
            Self::DailyRateToSalary(i) => {
                EngineOutput::DailyRateToSalary(DailyRateToSalary::calculate(i))
            }
            Self::AnnualSalaryToMonthly(i) => {
                EngineOutput::AnnualSalaryToMonthly(AnnualSalaryToMonthly::calculate(i))
            }
            Self::WeeklyToAnnualPay(i) => {
                EngineOutput::WeeklyToAnnualPay(WeeklyToAnnualPay::calculate(i))
            }
            Self::ContractorVsEmployee(i) => {
                EngineOutput::ContractorVsEmployee(ContractorVsEmployee::calculate(i))
            }
            Self::RemotePayAdjuster(i) => {
                EngineOutput::RemotePayAdjuster(RemotePayAdjuster::calculate(i))
            }
            Self::QuitDate(i) => EngineOutput::QuitDate(QuitDate::calculate(i)),
            Self::LayoffSurvival(i) => EngineOutput::LayoffSurvival(LayoffSurvival::calculate(i)),
        }
    }
}

/// The result of one engine, serialized as its flat output record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineOutput {
    HourlyToSalary(HourlyToSalaryOutput),
    SalaryToHourly(SalaryToHourlyOutput),
    FreelanceRate(FreelanceRateOutput),
    MonthlyToYearlySalary(MonthlyToYearlySalaryOutput),
    DailyRateToSalary(DailyRateToSalaryOutput),
    AnnualSalaryToMonthly(AnnualSalaryToMonthlyOutput),
    WeeklyToAnnualPay(WeeklyToAnnualPayOutput),
    ContractorVsEmployee(ContractorVsEmployeeOutput),
    RemotePayAdjuster(RemotePayAdjusterOutput),
    QuitDate(QuitDateOutput),
    LayoffSurvival(LayoffSurvivalOutput),
}

impl EngineOutput {
    /// Numeric fields of the record, by serialized name.
    pub fn figures(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::HourlyToSalary(o) => HourlyToSalary::figures(o),
            Self::SalaryToHourly(o) => SalaryToHourly::figures(o),
            Self::FreelanceRate(o) => FreelanceRate::figures(o),
            Self::MonthlyToYearlySalary(o) => MonthlyToYearlySalary::figures(o),
            Self::DailyRateToSalary(o) => DailyRateToSalary::figures(o),
            Self::AnnualSalaryToMonthly(o) => AnnualSalaryToMonthly::figures(o),
            Self::WeeklyToAnnualPay(o) => WeeklyToAnnualPay::figures(o),
            Self::ContractorVsEmployee(o) => ContractorVsEmployee::figures(o),
            Self::RemotePayAdjuster(o) => RemotePayAdjuster::figures(o),
            Self::QuitDate(o) => QuitDate::figures(o),
            Self::LayoffSurvival(o) => LayoffSurvival::figures(o),
        }
    }
}
