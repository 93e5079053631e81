//! RSL CLI: indicator, sector, quote, company and validation commands.
//!
//! Commands:
//! - `indicators`: RSL and volatility for one or more tickers
//! - `sector`: averaged indicators for a sector of the universe
//! - `sectors`: list sectors with company counts
//! - `quote`: latest price, daily change and recent chart
//! - `info`: company details (name, volumes, 52-week range)
//! - `validate`: check that the provider has data for a ticker
//!
//! Results are printed as JSON on stdout; logs go to stderr.

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rsl_core::data::symbol::normalize;
use rsl_core::data::{SyntheticProvider, Universe, YahooProvider};
use rsl_core::logging::{init_logging, LogConfig, LogFormat};
use rsl_core::{IndicatorResult, IndicatorService, ServiceConfig};

#[derive(Parser)]
#[command(
    name = "rsl",
    about = "RSL: relative strength and volatility indicators for B3 tickers"
)]
struct Cli {
    /// Service config (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Sector universe (TOML). Defaults to the built-in B3 universe.
    #[arg(long, global = true)]
    universe: Option<PathBuf>,

    /// Use deterministic synthetic prices instead of Yahoo Finance.
    #[arg(long, global = true, default_value_t = false)]
    synthetic: bool,

    /// Log filter, e.g. "info" or "rsl_core=debug". RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log format: pretty, json or compact.
    #[arg(long, global = true, default_value = "pretty")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// RSL and volatility for one or more tickers.
    Indicators {
        /// Tickers without market suffix (e.g., PETR4 VALE3).
        #[arg(required = true)]
        symbols: Vec<String>,

        /// Lookback period: 1d 5d 1mo 3mo 6mo 1y 2y 5y 10y ytd max.
        #[arg(long)]
        period: Option<String>,

        /// SMA window. Bypasses the cache when set.
        #[arg(long)]
        window: Option<usize>,

        /// Also print cache statistics.
        #[arg(long, default_value_t = false)]
        stats: bool,
    },
    /// Averaged indicators for a sector.
    Sector {
        /// Sector name or part of it (case-insensitive).
        name: String,

        /// Comma-separated tickers. Defaults to the sector's tickers in the universe.
        #[arg(long, value_delimiter = ',')]
        tickers: Vec<String>,

        /// Lookback period.
        #[arg(long)]
        period: Option<String>,
    },
    /// List sectors with their company counts.
    Sectors,
    /// Latest price, daily change and recent chart.
    Quote {
        /// Tickers to quote. Defaults to the configured default symbols.
        symbols: Vec<String>,

        /// Lookback period for the chart.
        #[arg(long)]
        period: Option<String>,
    },
    /// Company details for a ticker.
    Info { symbol: String },
    /// Check that the provider has data for a ticker.
    Validate { symbol: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LogConfig::new(cli.log_level.clone()).with_format(cli.log_format))?;

    let config = match &cli.config {
        Some(path) => ServiceConfig::from_file(path)?,
        None => ServiceConfig::default(),
    };
    let service = build_service(config, cli.synthetic)?;

    match cli.command {
        Commands::Indicators {
            symbols,
            period,
            window,
            stats,
        } => run_indicators(&service, &symbols, period, window, stats),
        Commands::Sector {
            name,
            tickers,
            period,
        } => run_sector(&service, cli.universe.as_deref(), &name, tickers, period),
        Commands::Sectors => run_sectors(cli.universe.as_deref()),
        Commands::Quote { symbols, period } => run_quote(&service, &symbols, period),
        Commands::Info { symbol } => run_info(&service, &symbol),
        Commands::Validate { symbol } => run_validate(&service, &symbol),
    }
}

fn build_service(config: ServiceConfig, synthetic: bool) -> Result<IndicatorService> {
    if synthetic {
        return Ok(IndicatorService::new(SyntheticProvider::new(), config));
    }
    let provider = YahooProvider::new(
        Duration::from_secs(config.provider.timeout_secs),
        &config.provider.user_agent,
    )?;
    Ok(IndicatorService::new(provider, config))
}

fn load_universe(path: Option<&Path>) -> Result<Universe> {
    match path {
        Some(p) => Universe::from_file(p).map_err(|e| anyhow!(e)),
        None => Ok(Universe::default_b3()),
    }
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_indicators(
    service: &IndicatorService,
    symbols: &[String],
    period: Option<String>,
    window: Option<usize>,
    stats: bool,
) -> Result<()> {
    let period = period.unwrap_or_else(|| service.config().indicators.default_period.clone());

    let results: BTreeMap<String, IndicatorResult> = match window {
        Some(w) => symbols
            .iter()
            .filter_map(|s| normalize(s))
            .filter_map(|s| service.get_indicators(&s, &period, w))
            .map(|r| (r.symbol.clone(), r))
            .collect(),
        None => service.get_multiple_indicators(symbols, &period),
    };

    if results.is_empty() {
        bail!("no indicators for {}", symbols.join(", "));
    }

    if stats {
        print_json(&json!({ "indicators": results, "cache": service.cache_stats() }))
    } else {
        print_json(&results)
    }
}

fn run_sector(
    service: &IndicatorService,
    universe_path: Option<&Path>,
    name: &str,
    tickers: Vec<String>,
    period: Option<String>,
) -> Result<()> {
    let period = period.unwrap_or_else(|| service.config().indicators.default_period.clone());

    let (sector, tickers) = if tickers.is_empty() {
        let universe = load_universe(universe_path)?;
        let found = universe
            .companies_in_sector(name, service.config().sector.batch_cap)
            .ok_or_else(|| anyhow!("no sector matches '{name}'"))?;
        (found.sector, found.tickers)
    } else {
        (name.to_string(), tickers)
    };

    match service.get_sector_indicators(tickers.as_slice(), &sector, &period) {
        Some(result) => print_json(&result),
        None => bail!("no indicators for any ticker in sector '{sector}'"),
    }
}

fn run_sectors(universe_path: Option<&Path>) -> Result<()> {
    let universe = load_universe(universe_path)?;
    print_json(&universe.sector_summary())
}

fn run_quote(service: &IndicatorService, symbols: &[String], period: Option<String>) -> Result<()> {
    let quotes_config = &service.config().quotes;
    let period = period.unwrap_or_else(|| quotes_config.default_period.clone());
    let symbols = if symbols.is_empty() {
        quotes_config.default_symbols.as_slice()
    } else {
        symbols
    };

    let quotes = service.get_multiple_quotes_for_period(symbols, &period);
    if quotes.is_empty() {
        bail!("no quotes available");
    }
    print_json(&quotes)
}

fn run_info(service: &IndicatorService, symbol: &str) -> Result<()> {
    let symbol = normalize(symbol).ok_or_else(|| anyhow!("empty symbol"))?;
    match service.get_stock_info(&symbol) {
        Some(info) => print_json(&info),
        None => bail!("no company details for {symbol}"),
    }
}

fn run_validate(service: &IndicatorService, symbol: &str) -> Result<()> {
    let valid = service.validate_ticker(symbol.trim());
    tracing::info!(%symbol, valid, provider = service.provider_name(), "ticker validation");
    print_json(&json!({ "symbol": symbol.trim(), "valid": valid }))?;
    if !valid {
        std::process::exit(1);
    }
    Ok(())
}
