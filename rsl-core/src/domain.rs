//! Result types handed back to callers.
//!
//! All of these are computed per request and immutable afterwards. Only
//! `IndicatorResult` is ever memoized.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// RSL and volatility for one ticker over one lookback period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    /// Ticker without market suffix.
    pub symbol: String,
    /// Relative strength level in percent, 2 decimals.
    pub rsl: f64,
    /// Annualized volatility in percent, 2 decimals.
    pub volatility: f64,
    pub latest_close: f64,
    /// SMA the RSL was measured against, 2 decimals.
    pub moving_average: f64,
    pub computed_at: NaiveDateTime,
    /// Lookback period requested from the provider.
    pub period: String,
    pub ma_window: usize,
    /// Number of closes the indicators were computed from.
    pub data_points: usize,
    /// False when the history came from the synthetic provider.
    pub has_real_data: bool,
}

/// Sector-level averages over the tickers that produced indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorResult {
    pub sector: String,
    pub average_rsl: f64,
    pub average_volatility: f64,
    pub tickers_with_data: usize,
    pub tickers_requested: usize,
    /// `tickers_with_data / tickers_requested` in percent, 1 decimal.
    pub success_rate: f64,
    /// Per-ticker results in processing order.
    pub tickers: Vec<IndicatorResult>,
    pub has_real_data: bool,
    pub computed_at: NaiveDateTime,
}

/// One point of the quote chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// `dd/mm`
    pub date: String,
    pub price: f64,
    pub volume: u64,
}

impl ChartPoint {
    pub fn new(date: NaiveDate, close: f64, volume: u64) -> Self {
        Self {
            date: date.format("%d/%m").to_string(),
            price: crate::indicators::round2(close),
            volume,
        }
    }
}

/// Latest price summary for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub current_price: f64,
    /// Change against the previous close.
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub chart: Vec<ChartPoint>,
    pub last_update: NaiveDateTime,
    pub period: String,
    pub data_points: usize,
    pub has_real_data: bool,
}

/// Company details for a ticker. Text fields the provider did not report
/// are `"N/A"`, numeric ones are zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub symbol: String,
    pub long_name: String,
    pub sector: String,
    pub industry: String,
    pub market_cap: u64,
    pub volume: u64,
    pub average_volume: u64,
    pub fifty_two_week_high: f64,
    pub fifty_two_week_low: f64,
    pub dividend_yield: f64,
    pub pe_ratio: f64,
    pub last_update: NaiveDateTime,
    pub has_real_data: bool,
}
