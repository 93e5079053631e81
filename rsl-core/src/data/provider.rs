//! Price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over history sources (Yahoo Finance,
//! synthetic data) so the indicator service can swap implementations and
//! mock them in tests. Providers never see the memoizing cache.

use super::period::Period;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One trading day of history: closing price and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: u64,
}

/// Structured error types for provider operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("no price history for {symbol} in period {period}")]
    EmptySeries { symbol: String, period: String },

    #[error("HTTP {status} for {symbol}")]
    Http { status: u16, symbol: String },

    #[error("data error: {0}")]
    Other(String),
}

impl DataError {
    /// Whether the failure may go away on a later request.
    ///
    /// Unknown symbols and empty series are answers, not outages.
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            DataError::SymbolNotFound { .. } | DataError::EmptySeries { .. }
        )
    }
}

/// Where the history came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    YahooFinance,
    Synthetic,
}

impl DataSource {
    pub fn is_real(self) -> bool {
        !matches!(self, DataSource::Synthetic)
    }
}

/// Result of a successful history fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct PriceHistory {
    pub symbol: String,
    pub bars: Vec<PriceBar>,
    pub source: DataSource,
}

impl PriceHistory {
    /// Closing prices in chronological order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}

/// Company details as reported by a provider. Fields the provider does not
/// report are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub long_name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<u64>,
    pub volume: Option<u64>,
    pub average_volume: Option<u64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
    pub dividend_yield: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub source: Option<DataSource>,
}

/// Trait for price history providers.
///
/// `symbol` is passed through untouched; appending the market suffix is the
/// caller's job.
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily bars for `symbol` covering the lookback `period`,
    /// oldest first.
    fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceHistory, DataError>;

    /// Fetch company details for `symbol`.
    ///
    /// Providers without company data keep the default, which reports the
    /// lookup as unsupported.
    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, DataError> {
        Err(DataError::Other(format!(
            "{} does not provide company details for {symbol}",
            self.name()
        )))
    }
}

impl<P: PriceProvider + ?Sized> PriceProvider for std::sync::Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceHistory, DataError> {
        (**self).fetch_history(symbol, period)
    }

    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, DataError> {
        (**self).fetch_profile(symbol)
    }
}
