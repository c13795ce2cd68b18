use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "econified", version, about = "Econified calculators and build checks")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Log level (trace, debug, info, warn, error); overrides ECONIFIED_LOG_LEVEL"
    )]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check every registry entry's definition file
    ValidateDefinitions {
        #[arg(long, help = "Directory holding registry.json and definitions/")]
        tools_dir: Option<PathBuf>,
    },
    /// Split dist/sitemap-0.xml into thematic sitemaps and rewrite the index
    SplitSitemaps {
        #[arg(long)]
        dist_dir: Option<PathBuf>,
        #[arg(long, help = "Absolute site origin used in the sitemap index")]
        site_url: Option<String>,
    },
    /// Verify every active tool appears in sitemap-core.xml
    SitemapAudit {
        #[arg(long)]
        tools_dir: Option<PathBuf>,
        #[arg(long)]
        dist_dir: Option<PathBuf>,
    },
    /// Run one calculator and print its result as JSON
    Calculate {
        slug: String,
        #[arg(
            long = "input",
            value_name = "NAME=VALUE",
            value_parser = parse_assignment,
            allow_negative_numbers = true
        )]
        inputs: Vec<(String, f64)>,
        #[arg(long, value_name = "OBJECT", help = "Inputs as a JSON object of numbers")]
        json: Option<String>,
    },
    /// List calculator slugs and their inputs
    Tools,
    /// Print the JSON schema of a calculator's inputs
    Schema { slug: String },
    /// Display currency and exchange rates
    Currency {
        #[command(subcommand)]
        command: CurrencyCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum CurrencyCommands {
    /// Print the current USD-based rate table
    Rates,
    /// Print the selected currency
    Get,
    /// Select a currency
    Set { code: String },
    /// Convert an amount from (or, with --to-usd, into) USD
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        code: Option<String>,
        #[arg(long, default_value_t = false)]
        to_usd: bool,
    },
    /// Format an amount for the configured locale
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        code: Option<String>,
    },
}

pub fn parse_assignment(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing input name in '{raw}'"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("hourlyRate=50").unwrap(),
            ("hourlyRate".to_string(), 50.0)
        );
        assert_eq!(
            parse_assignment(" savingsRate = -1.5 ").unwrap(),
            ("savingsRate".to_string(), -1.5)
        );
        assert!(parse_assignment("hourlyRate").is_err());
        assert!(parse_assignment("=5").is_err());
        assert!(parse_assignment("hourlyRate=fifty").is_err());
    }

    #[test]
    fn test_cli_parses_calculate() {
        let cli = Cli::try_parse_from([
            "econified",
            "calculate",
            "hourly-to-salary",
            "--input",
            "hourlyRate=50",
            "--input",
            "hoursPerWeek=40",
        ])
        .unwrap();
        match cli.command {
            Commands::Calculate { slug, inputs, json } => {
                assert_eq!(slug, "hourly-to-salary");
                assert_eq!(inputs.len(), 2);
                assert!(json.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_global_log_level() {
        let cli = Cli::try_parse_from(["econified", "tools", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
