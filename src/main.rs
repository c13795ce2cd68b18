//! Econified CLI entry point.
//!
//! Initializes logging, loads configuration and runs one build check,
//! calculator or currency command. Progress goes to stderr through tracing;
//! command results are printed to stdout.

use std::collections::BTreeMap;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

use econified::core::Config;
use econified::domains::content::{DefinitionValidator, Registry};
use econified::domains::currency::CurrencyService;
use econified::domains::engines::{EngineRegistry, InputMap};
use econified::domains::sitemap::{SitemapAuditor, SitemapSplitter};

mod cli;

use cli::{Cli, Commands, CurrencyCommands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration from environment, then apply flag overrides
    let mut config = Config::from_env();
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_logging(&config.logging.level);

    match run(cli.command, config).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, mut config: Config) -> Result<ExitCode> {
    match command {
        Commands::ValidateDefinitions { tools_dir } => {
            if let Some(dir) = tools_dir {
                config.paths.tools_dir = dir;
            }
            validate_definitions(&config)
        }
        Commands::SplitSitemaps { dist_dir, site_url } => {
            if let Some(dir) = dist_dir {
                config.paths.dist_dir = dir;
            }
            if let Some(url) = site_url {
                config.site.url = url.trim_end_matches('/').to_string();
            }
            let summary = SitemapSplitter::new(&config.paths.dist_dir, &config.site.url).split()?;
            info!(
                "Split {} URLs: {} core, {} destinations, {} corridors",
                summary.input, summary.core, summary.destinations, summary.corridors
            );
            Ok(ExitCode::SUCCESS)
        }
        Commands::SitemapAudit { tools_dir, dist_dir } => {
            if let Some(dir) = tools_dir {
                config.paths.tools_dir = dir;
            }
            if let Some(dir) = dist_dir {
                config.paths.dist_dir = dir;
            }
            sitemap_audit(&config)
        }
        Commands::Calculate { slug, inputs, json } => {
            let inputs = collect_inputs(inputs, json.as_deref())?;
            let output = EngineRegistry::new().calculate_json(&slug, &inputs)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Tools => {
            for engine in EngineRegistry::new().engines() {
                println!("{:<28} {}", engine.slug, engine.inputs.join(", "));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Schema { slug } => {
            let kind = EngineRegistry::new().lookup(&slug)?;
            println!("{}", serde_json::to_string_pretty(&kind.input_schema())?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Currency { command } => currency(command, &config).await,
    }
}

fn validate_definitions(config: &Config) -> Result<ExitCode> {
    info!("Validating tool definitions...");

    let registry = Registry::load(&config.registry_path())?;
    let report = DefinitionValidator::new(config.definitions_dir()).validate_registry(&registry);

    if report.is_ok() {
        info!("All {} definitions are valid", report.checked);
        Ok(ExitCode::SUCCESS)
    } else {
        error!(
            "Validation failed for {} of {} definitions: {}",
            report.failed_slugs().len(),
            report.checked,
            report.failed_slugs().join(", ")
        );
        Ok(ExitCode::FAILURE)
    }
}

fn sitemap_audit(config: &Config) -> Result<ExitCode> {
    let report = SitemapAuditor::new(config.registry_path(), &config.paths.dist_dir).audit()?;

    if report.is_ok() {
        info!("All {} active tools are in the sitemap", report.expected.len());
        Ok(ExitCode::SUCCESS)
    } else {
        for path in &report.missing {
            error!("Missing from sitemap: {}", path);
        }
        Ok(ExitCode::FAILURE)
    }
}

/// Merge `--json` and `--input` values; `--input` wins on conflicts.
fn collect_inputs(pairs: Vec<(String, f64)>, json: Option<&str>) -> Result<InputMap> {
    let mut inputs = InputMap::new();

    if let Some(raw) = json {
        let object: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(raw).context("--json must be a JSON object")?;
        for (name, value) in object {
            let Some(number) = value.as_f64() else {
                bail!("input '{}' must be a number, got {}", name, value);
            };
            inputs.insert(name, number);
        }
    }

    inputs.extend(pairs);
    Ok(inputs)
}

async fn currency(command: CurrencyCommands, config: &Config) -> Result<ExitCode> {
    let service = CurrencyService::from_config(config)?;

    match command {
        CurrencyCommands::Rates => {
            service.init().await;
            let rates: BTreeMap<_, _> = service.rates().into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&rates)?);
        }
        CurrencyCommands::Get => println!("{}", service.get()),
        CurrencyCommands::Set { code } => {
            service.set(&code);
            println!("{}", service.get());
        }
        CurrencyCommands::Convert { amount, code, to_usd } => {
            service.init().await;
            let value = if to_usd {
                service.convert_to_usd(amount, code.as_deref())
            } else {
                service.convert_from_usd(amount, code.as_deref())
            };
            println!("{}", value);
        }
        CurrencyCommands::Format { amount, code } => {
            println!("{}", service.format(amount, code.as_deref()));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level, writing to stderr.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
