//! Configuration management for the toolkit.
//!
//! Defaults mirror the site layout (`tools/`, `dist/`). Environment variables
//! prefixed with `ECONIFIED_` override them, and the CLI overrides both.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where inputs and outputs live on disk.
    pub paths: PathsConfig,

    /// Public site settings used when writing sitemap indexes.
    pub site: SiteConfig,

    /// Currency helper settings.
    pub currency: CurrencyConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Filesystem layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding `registry.json` and `definitions/`.
    pub tools_dir: PathBuf,

    /// Build output directory holding the generated sitemaps.
    pub dist_dir: PathBuf,

    /// Directory for the persisted currency store.
    pub state_dir: PathBuf,
}

/// Public site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute site origin, without trailing slash.
    pub url: String,
}

/// Currency helper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyConfig {
    /// Endpoint returning USD-based rates.
    pub rates_url: String,

    /// Locale tag used for formatting (e.g. "en-US", "nb-NO").
    pub locale: String,

    /// How long a cached rate table stays fresh.
    pub cache_ttl_hours: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            tools_dir: PathBuf::from("tools"),
            dist_dir: PathBuf::from("dist"),
            state_dir: PathBuf::from(".econified"),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://econified.com".to_string(),
        }
    }
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            rates_url: "https://open.er-api.com/v6/latest/USD".to_string(),
            locale: "en-US".to_string(),
            cache_ttl_hours: 24,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            site: SiteConfig::default(),
            currency: CurrencyConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honoured. Variables are
    /// prefixed with `ECONIFIED_`, e.g. `ECONIFIED_DIST_DIR`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(dir) = std::env::var("ECONIFIED_TOOLS_DIR") {
            config.paths.tools_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("ECONIFIED_DIST_DIR") {
            config.paths.dist_dir = PathBuf::from(dir);
        }

        if let Ok(dir) = std::env::var("ECONIFIED_STATE_DIR") {
            config.paths.state_dir = PathBuf::from(dir);
        }

        if let Ok(url) = std::env::var("ECONIFIED_SITE_URL") {
            config.site.url = url.trim_end_matches('/').to_string();
        }

        if let Ok(url) = std::env::var("ECONIFIED_RATES_URL") {
            config.currency.rates_url = url;
        }

        if let Ok(locale) = std::env::var("ECONIFIED_LOCALE") {
            config.currency.locale = locale;
        }

        if let Ok(ttl) = std::env::var("ECONIFIED_RATES_TTL_HOURS") {
            config.currency.cache_ttl_hours = ttl.parse().unwrap_or(24);
        }

        if let Ok(level) = std::env::var("ECONIFIED_LOG_LEVEL") {
            config.logging.level = level;
        }

        debug!(?config, "Configuration loaded");
        config
    }

    /// Path of the tool registry.
    pub fn registry_path(&self) -> PathBuf {
        self.paths.tools_dir.join("registry.json")
    }

    /// Directory of per-tool definition files.
    pub fn definitions_dir(&self) -> PathBuf {
        self.paths.tools_dir.join("definitions")
    }

    /// Path of the JSON file backing the currency store.
    pub fn currency_store_path(&self) -> PathBuf {
        self.paths.state_dir.join("currency.json")
    }
}
