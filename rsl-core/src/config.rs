//! Service configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) gives a working
//! setup:
//!
//! ```toml
//! [cache]
//! capacity = 100
//! normalize_symbols = false
//!
//! [indicators]
//! ma_window = 30
//! default_period = "1y"
//!
//! [sector]
//! batch_cap = 10
//!
//! [provider]
//! market_suffix = ".SA"
//! timeout_secs = 30
//!
//! [quotes]
//! default_period = "1mo"
//! default_symbols = ["PETR4", "VALE3", "ITUB4"]
//! chart_points = 30
//! ```

use crate::data::Period;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub cache: CacheConfig,
    pub indicators: IndicatorConfig,
    pub sector: SectorConfig,
    pub provider: ProviderConfig,
    pub quotes: QuoteConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum memoized lookups; 0 disables memoization.
    pub capacity: usize,
    /// Trim and upper-case symbols before using them as cache keys.
    pub normalize_symbols: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: crate::cache::DEFAULT_CAPACITY,
            normalize_symbols: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// SMA window for RSL on the cached path.
    pub ma_window: usize,
    pub default_period: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_window: crate::indicators::DEFAULT_MA_WINDOW,
            default_period: Period::OneYear.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorConfig {
    /// Most tickers fetched per sector request.
    pub batch_cap: usize,
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self { batch_cap: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Appended to tickers before they reach the provider.
    pub market_suffix: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            market_suffix: ".SA".to_string(),
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
    pub default_period: String,
    pub default_symbols: Vec<String>,
    /// Trailing bars included in a quote chart.
    pub chart_points: usize,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            default_period: Period::OneMonth.to_string(),
            default_symbols: ["PETR4", "VALE3", "ITUB4"]
                .into_iter()
                .map(String::from)
                .collect(),
            chart_points: 30,
        }
    }
}

impl ServiceConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indicators.ma_window == 0 {
            return Err(ConfigError::Invalid("indicators.ma_window must be >= 1".into()));
        }
        if self.sector.batch_cap == 0 {
            return Err(ConfigError::Invalid("sector.batch_cap must be >= 1".into()));
        }
        if self.quotes.chart_points == 0 {
            return Err(ConfigError::Invalid("quotes.chart_points must be >= 1".into()));
        }
        if self.provider.timeout_secs == 0 {
            return Err(ConfigError::Invalid("provider.timeout_secs must be >= 1".into()));
        }
        for (field, period) in [
            ("indicators.default_period", &self.indicators.default_period),
            ("quotes.default_period", &self.quotes.default_period),
        ] {
            period
                .parse::<Period>()
                .map_err(|e| ConfigError::Invalid(format!("{field}: {e}")))?;
        }
        Ok(())
    }
}
