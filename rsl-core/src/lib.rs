//! RSL core: relative strength and volatility indicators for B3 tickers.
//!
//! This crate contains:
//! - Price providers (Yahoo Finance chart API, synthetic offline data)
//! - Indicator math (SMA, RSL, annualized volatility)
//! - A bounded LRU cache memoizing per-ticker lookups
//! - Sector aggregation over a configurable universe
//! - Quote summaries and company details, configuration and logging setup

pub mod cache;
pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod info;
pub mod logging;
pub mod quote;
pub mod sector;
pub mod service;

pub use cache::{CacheKey, CacheStats, IndicatorCache, LruCache};
pub use config::{ConfigError, ServiceConfig};
pub use domain::{ChartPoint, IndicatorResult, SectorResult, StockInfo, StockQuote};
pub use service::{IndicatorError, IndicatorService};
