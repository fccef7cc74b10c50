//! Settings and data directory resolution
//!
//! Settings are loaded with a two-layer resolution:
//! 1. Check for a settings file in the data dir (~/.local/share/tally/config/settings.toml)
//! 2. Fall back to built-in defaults
//!
//! `TALLY_RATES_URL` overrides the exchange-rate endpoint on top of either layer.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Environment variable overriding the exchange-rate API base URL
pub const RATES_URL_ENV: &str = "TALLY_RATES_URL";

/// Public exchange-rate API
pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com";

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REPORTING_CURRENCY: &str = "EUR";

/// Exchange-rate client settings
#[derive(Debug, Clone, PartialEq)]
pub struct RatesSettings {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RatesSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RATES_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Application settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub rates: RatesSettings,
    /// Currency that reports and exports are expressed in
    pub reporting_currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rates: RatesSettings::default(),
            reporting_currency: DEFAULT_REPORTING_CURRENCY.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default location, applying env overrides
    pub fn load() -> Result<Self> {
        let mut settings = match default_settings_path() {
            Some(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };
        settings.apply_env();
        Ok(settings)
    }

    /// Load settings from an explicit file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        parse_settings(&content)
    }

    fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(RATES_URL_ENV) {
            if !url.trim().is_empty() {
                self.rates.base_url = url;
            }
        }
    }
}

/// Root of Tally's local data
pub fn data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("tally"))
}

/// Default database location
pub fn default_db_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("tally.db"))
}

/// Default settings file location
pub fn default_settings_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config").join("settings.toml"))
}

/// Raw settings structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawSettings {
    reporting_currency: Option<String>,
    rates: Option<RawRates>,
}

#[derive(Debug, Deserialize)]
struct RawRates {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// Parse settings from TOML content
fn parse_settings(content: &str) -> Result<Settings> {
    let raw: RawSettings = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid settings TOML: {}", e)))?;

    let mut settings = Settings::default();

    if let Some(currency) = raw.reporting_currency {
        settings.reporting_currency = currency;
    }

    if let Some(rates) = raw.rates {
        if let Some(url) = rates.base_url {
            settings.rates.base_url = url;
        }
        if let Some(secs) = rates.timeout_secs {
            if secs == 0 {
                return Err(Error::Config("rates.timeout_secs must be positive".into()));
            }
            settings.rates.timeout = Duration::from_secs(secs);
        }
    }

    Ok(settings)
}
