//! Indicator service: provider + calculator + memoizing cache, plus quotes
//! and company details.
//!
//! Public lookups return `Option`: `None` means "cannot answer", whether the
//! ticker has too little history or the provider failed. The typed cause is
//! available through the `try_*` methods and is always logged.
//!
//! Memoization policy for failed lookups:
//! - deterministic failures (too little history, unknown symbol, empty or
//!   degenerate series) are cached as negative entries;
//! - transient provider failures and invalid arguments are not cached.

use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStats, IndicatorCache};
use crate::config::ServiceConfig;
use crate::data::symbol::{normalize, strip_market_suffix, with_market_suffix};
use crate::data::{DataError, Period, PriceHistory, PriceProvider};
use crate::domain::{IndicatorResult, SectorResult, StockInfo, StockQuote};
use crate::indicators::{
    compute_rsl, compute_volatility, latest_moving_average, round2, MIN_VOLATILITY_SAMPLES,
};
use crate::info::build_stock_info;
use crate::quote::build_quote;
use crate::sector::aggregate_sector;

/// Why a lookup produced no result.
#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error(transparent)]
    Provider(#[from] DataError),

    #[error("{symbol}: {samples} closes, need at least {required}")]
    InsufficientData {
        symbol: String,
        samples: usize,
        required: usize,
    },

    #[error("{symbol}: {indicator} is not finite")]
    NotFinite {
        symbol: String,
        indicator: &'static str,
    },

    #[error("invalid period: {0}")]
    InvalidPeriod(String),

    #[error("moving average window must be >= 1")]
    InvalidWindow,
}

impl IndicatorError {
    /// Whether repeating the same lookup would give the same failure.
    pub fn is_cacheable(&self) -> bool {
        match self {
            IndicatorError::Provider(e) => !e.is_transient(),
            IndicatorError::InsufficientData { .. } | IndicatorError::NotFinite { .. } => true,
            IndicatorError::InvalidPeriod(_) | IndicatorError::InvalidWindow => false,
        }
    }

    fn log(&self, symbol: &str, period: &str) {
        match self {
            IndicatorError::Provider(e) => warn!(%symbol, %period, error = %e, "price fetch failed"),
            _ => debug!(%symbol, %period, reason = %self, "no indicators"),
        }
    }
}

/// Entry point for indicator, sector and quote queries.
///
/// Owns its cache; build one per process and share it behind an `Arc`.
pub struct IndicatorService {
    provider: Box<dyn PriceProvider>,
    cache: IndicatorCache,
    config: ServiceConfig,
}

impl IndicatorService {
    pub fn new(provider: impl PriceProvider + 'static, config: ServiceConfig) -> Self {
        Self {
            cache: IndicatorCache::new(config.cache.capacity),
            provider: Box::new(provider),
            config,
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    fn parse_period(period: &str) -> Result<Period, IndicatorError> {
        period
            .parse()
            .map_err(|_| IndicatorError::InvalidPeriod(period.to_string()))
    }

    fn fetch(&self, symbol: &str, period: Period) -> Result<PriceHistory, DataError> {
        let provider_symbol = with_market_suffix(symbol, &self.config.provider.market_suffix);
        info!(symbol = %provider_symbol, %period, provider = self.provider.name(), "fetching history");
        let history = self.provider.fetch_history(&provider_symbol, period)?;
        if history.is_empty() {
            return Err(DataError::EmptySeries {
                symbol: provider_symbol,
                period: period.to_string(),
            });
        }
        Ok(history)
    }

    fn display_symbol<'a>(&self, symbol: &'a str) -> &'a str {
        strip_market_suffix(symbol, &self.config.provider.market_suffix)
    }

    /// Fetch and compute without touching the cache, keeping the failure cause.
    pub fn try_indicators(
        &self,
        symbol: &str,
        period: &str,
        window: usize,
    ) -> Result<IndicatorResult, IndicatorError> {
        if window == 0 {
            return Err(IndicatorError::InvalidWindow);
        }
        let parsed = Self::parse_period(period)?;
        let history = self.fetch(symbol, parsed)?;
        let closes = history.closes();

        let insufficient = || IndicatorError::InsufficientData {
            symbol: symbol.to_string(),
            samples: closes.len(),
            required: window.max(MIN_VOLATILITY_SAMPLES),
        };
        if closes.len() < window.max(MIN_VOLATILITY_SAMPLES) {
            return Err(insufficient());
        }

        let not_finite = |indicator| IndicatorError::NotFinite {
            symbol: symbol.to_string(),
            indicator,
        };
        let rsl = compute_rsl(&closes, window).ok_or_else(|| not_finite("rsl"))?;
        let volatility = compute_volatility(&closes).ok_or_else(|| not_finite("volatility"))?;
        let moving_average =
            latest_moving_average(&closes, window).ok_or_else(|| not_finite("moving average"))?;
        let latest_close = closes.last().copied().ok_or_else(insufficient)?;

        Ok(IndicatorResult {
            symbol: self.display_symbol(symbol).to_string(),
            rsl: round2(rsl),
            volatility: round2(volatility),
            latest_close: round2(latest_close),
            moving_average: round2(moving_average),
            computed_at: chrono::Local::now().naive_local(),
            period: period.to_string(),
            ma_window: window,
            data_points: closes.len(),
            has_real_data: history.source.is_real(),
        })
    }

    /// RSL and volatility for one ticker with an explicit SMA window. Not cached.
    pub fn get_indicators(
        &self,
        symbol: &str,
        period: &str,
        window: usize,
    ) -> Option<IndicatorResult> {
        self.try_indicators(symbol, period, window)
            .map_err(|e| e.log(symbol, period))
            .ok()
    }

    /// Memoized lookup keyed by `(symbol, period)` using the configured window.
    pub fn get_indicators_cached(&self, symbol: &str, period: &str) -> Option<IndicatorResult> {
        let symbol = if self.config.cache.normalize_symbols {
            normalize(symbol)?
        } else {
            symbol.to_string()
        };
        let key = CacheKey::new(symbol, period);

        if let Some(cached) = self.cache.get(&key) {
            debug!(symbol = %key.symbol, %period, negative = cached.is_none(), "cache hit");
            return cached;
        }
        debug!(symbol = %key.symbol, %period, "cache miss");

        match self.try_indicators(&key.symbol, period, self.config.indicators.ma_window) {
            Ok(result) => {
                self.cache.insert(key, Some(result.clone()));
                Some(result)
            }
            Err(e) => {
                e.log(&key.symbol, period);
                if e.is_cacheable() {
                    self.cache.insert(key, None);
                }
                None
            }
        }
    }

    /// Cached lookups for a list of symbols.
    ///
    /// Symbols are trimmed and upper-cased; blank entries are skipped. Only
    /// successes appear in the map.
    pub fn get_multiple_indicators<S: AsRef<str>>(
        &self,
        symbols: &[S],
        period: &str,
    ) -> BTreeMap<String, IndicatorResult> {
        let results: BTreeMap<String, IndicatorResult> = symbols
            .iter()
            .filter_map(|s| normalize(s.as_ref()))
            .filter_map(|s| self.get_indicators_cached(&s, period).map(|r| (s, r)))
            .collect();
        info!(succeeded = results.len(), requested = symbols.len(), "indicators computed");
        results
    }

    /// Sector averages over the first `sector.batch_cap` tickers.
    ///
    /// Tickers beyond the cap are not fetched but still count as requested.
    pub fn get_sector_indicators<S: AsRef<str>>(
        &self,
        tickers: &[S],
        sector: &str,
        period: &str,
    ) -> Option<SectorResult> {
        if tickers.is_empty() {
            return None;
        }

        let cap = self.config.sector.batch_cap;
        info!(%sector, requested = tickers.len(), processed = tickers.len().min(cap), "computing sector");

        let results: Vec<IndicatorResult> = tickers
            .iter()
            .take(cap)
            .filter_map(|t| {
                let result = self.get_indicators_cached(t.as_ref(), period);
                match &result {
                    Some(r) => debug!(ticker = t.as_ref(), rsl = r.rsl, volatility = r.volatility, "sector member"),
                    None => debug!(ticker = t.as_ref(), "sector member without data"),
                }
                result
            })
            .collect();

        let aggregated = aggregate_sector(sector, tickers.len(), results);
        if aggregated.is_none() {
            warn!(%sector, "no ticker in sector produced indicators");
        }
        aggregated
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("indicator cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Price summary, keeping the failure cause. Not cached.
    pub fn try_quote(&self, symbol: &str, period: &str) -> Result<StockQuote, IndicatorError> {
        let parsed = Self::parse_period(period)?;
        let history = self.fetch(symbol, parsed)?;
        build_quote(
            self.display_symbol(symbol),
            period,
            &history,
            self.config.quotes.chart_points,
        )
        .ok_or_else(|| {
            IndicatorError::Provider(DataError::EmptySeries {
                symbol: symbol.to_string(),
                period: period.to_string(),
            })
        })
    }

    pub fn get_quote(&self, symbol: &str, period: &str) -> Option<StockQuote> {
        self.try_quote(symbol, period)
            .map_err(|e| e.log(symbol, period))
            .ok()
    }

    /// Quotes over the configured default period.
    pub fn get_multiple_quotes<S: AsRef<str>>(&self, symbols: &[S]) -> BTreeMap<String, StockQuote> {
        self.get_multiple_quotes_for_period(symbols, &self.config.quotes.default_period)
    }

    /// Quotes over `period`. Symbols are trimmed and upper-cased; blank
    /// entries and failures are skipped.
    pub fn get_multiple_quotes_for_period<S: AsRef<str>>(
        &self,
        symbols: &[S],
        period: &str,
    ) -> BTreeMap<String, StockQuote> {
        let quotes: BTreeMap<String, StockQuote> = symbols
            .iter()
            .filter_map(|s| normalize(s.as_ref()))
            .filter_map(|s| self.get_quote(&s, period).map(|q| (s, q)))
            .collect();
        info!(succeeded = quotes.len(), requested = symbols.len(), %period, "quotes fetched");
        quotes
    }

    pub fn get_default_quotes(&self) -> BTreeMap<String, StockQuote> {
        self.get_multiple_quotes(self.config.quotes.default_symbols.as_slice())
    }

    /// Company details, keeping the failure cause. Not cached.
    pub fn try_stock_info(&self, symbol: &str) -> Result<StockInfo, IndicatorError> {
        let provider_symbol = with_market_suffix(symbol, &self.config.provider.market_suffix);
        info!(symbol = %provider_symbol, provider = self.provider.name(), "fetching company details");
        let profile = self.provider.fetch_profile(&provider_symbol)?;
        Ok(build_stock_info(self.display_symbol(symbol), profile))
    }

    pub fn get_stock_info(&self, symbol: &str) -> Option<StockInfo> {
        self.try_stock_info(symbol)
            .map_err(|e| warn!(%symbol, error = %e, "company details unavailable"))
            .ok()
    }

    /// Whether the provider knows the ticker (a one-day fetch has data).
    pub fn validate_ticker(&self, symbol: &str) -> bool {
        match self.fetch(symbol, Period::OneDay) {
            Ok(_) => true,
            Err(e) => {
                debug!(%symbol, error = %e, "ticker did not validate");
                false
            }
        }
    }
}
