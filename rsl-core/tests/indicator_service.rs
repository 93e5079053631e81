//! Integration tests for the indicator service against a counting mock provider.

use chrono::NaiveDate;
use rsl_core::data::{
    CompanyProfile, DataError, DataSource, Period, PriceBar, PriceHistory, PriceProvider,
};
use rsl_core::indicators::round2;
use rsl_core::{IndicatorError, IndicatorService, ServiceConfig};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Serves fixed close series keyed by upper-cased provider symbol.
///
/// Unknown symbols are `SymbolNotFound`; `DOWN.SA` is a network failure.
#[derive(Default)]
struct MockProvider {
    series: HashMap<String, Vec<f64>>,
    profiles: HashMap<String, CompanyProfile>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl MockProvider {
    fn with(mut self, symbol: &str, closes: Vec<f64>) -> Self {
        self.series.insert(format!("{symbol}.SA"), closes);
        self
    }

    fn with_profile(mut self, profile: CompanyProfile) -> Self {
        self.profiles.insert(profile.symbol.clone(), profile);
        self
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl PriceProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch_history(&self, symbol: &str, _period: Period) -> Result<PriceHistory, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(symbol.to_string());

        if symbol == "DOWN.SA" {
            return Err(DataError::NetworkUnreachable("connection refused".into()));
        }

        let closes = self
            .series
            .get(&symbol.to_uppercase())
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;

        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Ok(PriceHistory {
            symbol: symbol.to_string(),
            bars: closes
                .iter()
                .enumerate()
                .map(|(i, &close)| PriceBar {
                    date: start + chrono::Duration::days(i as i64),
                    close,
                    volume: 1_000,
                })
                .collect(),
            source: DataSource::YahooFinance,
        })
    }

    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, DataError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(symbol.to_string());

        if symbol == "DOWN.SA" {
            return Err(DataError::NetworkUnreachable("connection refused".into()));
        }
        self.profiles
            .get(symbol)
            .cloned()
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
    }
}

/// Serves history but keeps the default profile lookup.
struct HistoryOnlyProvider;

impl PriceProvider for HistoryOnlyProvider {
    fn name(&self) -> &str {
        "history_only"
    }

    fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceHistory, DataError> {
        Err(DataError::EmptySeries {
            symbol: symbol.to_string(),
            period: period.to_string(),
        })
    }
}

fn rising(n: usize) -> Vec<f64> {
    (0..n).map(|i| 100.0 + i as f64).collect()
}

fn service(provider: &Arc<MockProvider>) -> IndicatorService {
    IndicatorService::new(Arc::clone(provider), ServiceConfig::default())
}

fn service_with(provider: &Arc<MockProvider>, edit: impl FnOnce(&mut ServiceConfig)) -> IndicatorService {
    let mut config = ServiceConfig::default();
    edit(&mut config);
    IndicatorService::new(Arc::clone(provider), config)
}

// ── Calculator through the service ───────────────────────────────────

#[test]
fn flat_series_gives_zero_rsl_and_zero_volatility() {
    let provider = Arc::new(MockProvider::default().with("FLAT3", vec![100.0; 40]));
    let svc = service(&provider);

    let r = svc.get_indicators("FLAT3", "1y", 30).unwrap();
    assert_eq!(r.rsl, 0.0);
    assert_eq!(r.volatility, 0.0);
    assert_eq!(r.latest_close, 100.0);
    assert_eq!(r.moving_average, 100.0);
    assert_eq!(r.data_points, 40);
    assert_eq!(r.ma_window, 30);
    assert_eq!(r.period, "1y");
    assert!(r.has_real_data);
}

#[test]
fn result_fields_are_rounded() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service(&provider);

    let r = svc.get_indicators("PETR4", "1y", 30).unwrap();
    // closes 110..=139 in the last window, SMA 124.5, close 139
    assert_eq!(r.moving_average, 124.5);
    assert_eq!(r.latest_close, 139.0);
    assert_eq!(r.rsl, round2((139.0 / 124.5 - 1.0) * 100.0));
    assert_eq!(r.volatility, round2(r.volatility));
    assert!(r.volatility > 0.0);
}

#[test]
fn explicit_window_changes_rsl() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(60)));
    let svc = service(&provider);

    let short = svc.get_indicators("PETR4", "1y", 5).unwrap();
    let long = svc.get_indicators("PETR4", "1y", 50).unwrap();
    assert_eq!(short.ma_window, 5);
    assert!(long.rsl > short.rsl);
}

#[test]
fn zero_window_is_rejected_without_fetching() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(60)));
    let svc = service(&provider);

    assert!(svc.get_indicators("PETR4", "1y", 0).is_none());
    assert!(matches!(
        svc.try_indicators("PETR4", "1y", 0),
        Err(IndicatorError::InvalidWindow)
    ));
    assert_eq!(provider.calls(), 0);
}

#[test]
fn short_history_is_insufficient_data() {
    let provider = Arc::new(MockProvider::default().with("NEW3", rising(29)));
    let svc = service(&provider);

    match svc.try_indicators("NEW3", "1y", 30) {
        Err(IndicatorError::InsufficientData { samples, required, .. }) => {
            assert_eq!(samples, 29);
            assert_eq!(required, 30);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
    assert!(svc.get_indicators("NEW3", "1y", 30).is_none());
}

#[test]
fn volatility_needs_thirty_closes_even_with_a_short_window() {
    let provider = Arc::new(MockProvider::default().with("NEW3", rising(20)));
    let svc = service(&provider);

    match svc.try_indicators("NEW3", "1y", 5) {
        Err(IndicatorError::InsufficientData { required, .. }) => assert_eq!(required, 30),
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn provider_errors_keep_their_cause() {
    let provider = Arc::new(MockProvider::default());
    let svc = service(&provider);

    assert!(matches!(
        svc.try_indicators("XXXX3", "1y", 30),
        Err(IndicatorError::Provider(DataError::SymbolNotFound { .. }))
    ));
    assert!(matches!(
        svc.try_indicators("DOWN", "1y", 30),
        Err(IndicatorError::Provider(DataError::NetworkUnreachable(_)))
    ));
}

#[test]
fn market_suffix_is_added_for_the_provider_and_stripped_from_results() {
    let provider = Arc::new(MockProvider::default().with("VALE3", rising(40)));
    let svc = service(&provider);

    let a = svc.get_indicators("VALE3", "1y", 30).unwrap();
    let b = svc.get_indicators("VALE3.SA", "1y", 30).unwrap();
    assert_eq!(a.symbol, "VALE3");
    assert_eq!(b.symbol, "VALE3");
    assert_eq!(provider.requested(), ["VALE3.SA", "VALE3.SA"]);
}

#[test]
fn invalid_period_does_not_reach_the_provider() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service(&provider);

    assert!(matches!(
        svc.try_indicators("PETR4", "1 year", 30),
        Err(IndicatorError::InvalidPeriod(p)) if p == "1 year"
    ));
    assert!(svc.get_indicators_cached("PETR4", "1Y").is_none());
    assert_eq!(provider.calls(), 0);
    // invalid periods are not memoized
    assert_eq!(svc.cache_stats().current_size, 0);
}

// ── Memoizing cache ──────────────────────────────────────────────────

#[test]
fn repeated_lookup_hits_the_cache() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service(&provider);

    let first = svc.get_indicators_cached("PETR4", "1y").unwrap();
    let second = svc.get_indicators_cached("PETR4", "1y").unwrap();

    assert_eq!(first, second);
    assert_eq!(provider.calls(), 1);
    let stats = svc.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.current_size, 1);
    assert_eq!(stats.capacity, 100);
    assert_eq!(stats.hit_rate, 50.0);
}

#[test]
fn clear_cache_forces_a_new_fetch() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service(&provider);

    svc.get_indicators_cached("PETR4", "1y").unwrap();
    svc.clear_cache();
    assert_eq!(svc.cache_stats().current_size, 0);

    svc.get_indicators_cached("PETR4", "1y").unwrap();
    assert_eq!(provider.calls(), 2);
    let stats = svc.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 0);
}

#[test]
fn period_is_part_of_the_key() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service(&provider);

    svc.get_indicators_cached("PETR4", "1y").unwrap();
    svc.get_indicators_cached("PETR4", "6mo").unwrap();
    assert_eq!(provider.calls(), 2);
    assert_eq!(svc.cache_stats().current_size, 2);
}

#[test]
fn symbols_are_keyed_exactly_by_default() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service(&provider);

    svc.get_indicators_cached("PETR4", "1y").unwrap();
    svc.get_indicators_cached("petr4", "1y").unwrap();

    assert_eq!(provider.calls(), 2);
    assert_eq!(svc.cache_stats().current_size, 2);
    assert_eq!(svc.cache_stats().hits, 0);
}

#[test]
fn symbol_normalization_shares_one_entry() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service_with(&provider, |c| c.cache.normalize_symbols = true);

    let a = svc.get_indicators_cached("PETR4", "1y").unwrap();
    let b = svc.get_indicators_cached(" petr4 ", "1y").unwrap();

    assert_eq!(a, b);
    assert_eq!(provider.calls(), 1);
    assert_eq!(provider.requested(), ["PETR4.SA"]);
    assert_eq!(svc.cache_stats().current_size, 1);
    assert!(svc.get_indicators_cached("   ", "1y").is_none());
}

#[test]
fn insufficient_history_is_cached_as_a_negative_entry() {
    let provider = Arc::new(MockProvider::default().with("NEW3", rising(10)));
    let svc = service(&provider);

    assert!(svc.get_indicators_cached("NEW3", "1y").is_none());
    assert!(svc.get_indicators_cached("NEW3", "1y").is_none());

    assert_eq!(provider.calls(), 1);
    let stats = svc.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.current_size, 1);
}

#[test]
fn unknown_symbol_is_cached_as_a_negative_entry() {
    let provider = Arc::new(MockProvider::default());
    let svc = service(&provider);

    assert!(svc.get_indicators_cached("XXXX3", "1y").is_none());
    assert!(svc.get_indicators_cached("XXXX3", "1y").is_none());
    assert_eq!(provider.calls(), 1);
}

#[test]
fn transient_failures_are_not_cached() {
    let provider = Arc::new(MockProvider::default());
    let svc = service(&provider);

    assert!(svc.get_indicators_cached("DOWN", "1y").is_none());
    assert!(svc.get_indicators_cached("DOWN", "1y").is_none());

    assert_eq!(provider.calls(), 2);
    let stats = svc.cache_stats();
    assert_eq!(stats.current_size, 0);
    assert_eq!(stats.misses, 2);
}

#[test]
fn least_recently_used_ticker_is_evicted() {
    let provider = Arc::new(
        MockProvider::default()
            .with("AAAA3", rising(40))
            .with("BBBB3", rising(41))
            .with("CCCC3", rising(42)),
    );
    let svc = service_with(&provider, |c| c.cache.capacity = 2);

    svc.get_indicators_cached("AAAA3", "1y");
    svc.get_indicators_cached("BBBB3", "1y");
    svc.get_indicators_cached("AAAA3", "1y"); // hit, AAAA3 now most recent
    svc.get_indicators_cached("CCCC3", "1y"); // evicts BBBB3
    assert_eq!(provider.calls(), 3);

    svc.get_indicators_cached("AAAA3", "1y"); // still cached
    assert_eq!(provider.calls(), 3);
    svc.get_indicators_cached("BBBB3", "1y"); // refetched
    assert_eq!(provider.calls(), 4);
    assert_eq!(svc.cache_stats().current_size, 2);
}

#[test]
fn zero_capacity_always_fetches() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(40)));
    let svc = service_with(&provider, |c| c.cache.capacity = 0);

    svc.get_indicators_cached("PETR4", "1y").unwrap();
    svc.get_indicators_cached("PETR4", "1y").unwrap();
    assert_eq!(provider.calls(), 2);
    assert_eq!(svc.cache_stats().current_size, 0);
}

#[test]
fn concurrent_lookups_keep_the_cache_consistent() {
    let symbols = ["AAAA3", "BBBB3", "CCCC3", "DDDD3", "EEEE3"];
    let provider = Arc::new(
        symbols
            .iter()
            .enumerate()
            .fold(MockProvider::default(), |p, (i, s)| p.with(s, rising(40 + i))),
    );
    let svc = Arc::new(service(&provider));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let svc = Arc::clone(&svc);
            std::thread::spawn(move || {
                for _ in 0..20 {
                    for s in symbols {
                        assert!(svc.get_indicators_cached(s, "1y").is_some());
                    }
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let stats = svc.cache_stats();
    assert_eq!(stats.hits + stats.misses, 8 * 20 * 5);
    assert_eq!(stats.current_size, 5);
    // a miss may race another miss on the same key, never more than one per thread
    assert!(provider.calls() >= 5 && provider.calls() <= 5 * 8);
    assert_eq!(stats.misses as usize, provider.calls());
}

// ── Sector aggregation ───────────────────────────────────────────────

#[test]
fn empty_sector_is_none_without_provider_calls() {
    let provider = Arc::new(MockProvider::default());
    let svc = service(&provider);

    let tickers: [&str; 0] = [];
    assert!(svc.get_sector_indicators(&tickers, "Any Sector", "1y").is_none());
    assert_eq!(provider.calls(), 0);
}

#[test]
fn half_the_sector_with_data() {
    let provider = Arc::new(
        MockProvider::default()
            .with("AAA", rising(40))
            .with("BBB", rising(5)),
    );
    let svc = service(&provider);

    let aaa = svc.get_indicators("AAA", "1y", 30).unwrap();
    let sector = svc.get_sector_indicators(&["AAA", "BBB"], "Test", "1y").unwrap();

    assert_eq!(sector.sector, "Test");
    assert_eq!(sector.success_rate, 50.0);
    assert_eq!(sector.average_rsl, aaa.rsl);
    assert_eq!(sector.average_volatility, aaa.volatility);
    assert_eq!(sector.tickers_with_data, 1);
    assert_eq!(sector.tickers_requested, 2);
    assert_eq!(sector.tickers.len(), 1);
    assert_eq!(sector.tickers[0].symbol, "AAA");
}

#[test]
fn sector_without_any_data_is_none() {
    let provider = Arc::new(MockProvider::default().with("BBB", rising(5)));
    let svc = service(&provider);

    assert!(svc.get_sector_indicators(&["BBB", "ZZZ"], "Test", "1y").is_none());
    assert_eq!(provider.calls(), 2);
}

#[test]
fn sector_results_keep_input_order() {
    let provider = Arc::new(
        MockProvider::default()
            .with("ZZZ3", rising(40))
            .with("AAA3", rising(50))
            .with("MMM3", rising(45)),
    );
    let svc = service(&provider);

    let sector = svc
        .get_sector_indicators(&["ZZZ3", "AAA3", "MMM3"], "Mixed", "1y")
        .unwrap();
    let order: Vec<_> = sector.tickers.iter().map(|r| r.symbol.as_str()).collect();
    assert_eq!(order, ["ZZZ3", "AAA3", "MMM3"]);
}

#[test]
fn batch_cap_limits_fetches_but_not_the_requested_count() {
    let tickers: Vec<String> = (0..12).map(|i| format!("T{i:02}")).collect();
    let provider = Arc::new(
        tickers
            .iter()
            .fold(MockProvider::default(), |p, t| p.with(t, rising(40))),
    );
    let svc = service(&provider);

    let sector = svc
        .get_sector_indicators(tickers.as_slice(), "Big", "1y")
        .unwrap();

    assert_eq!(provider.calls(), 10);
    assert_eq!(sector.tickers_with_data, 10);
    assert_eq!(sector.tickers_requested, 12);
    assert_eq!(sector.success_rate, 83.3);
    assert!(!provider.requested().contains(&"T10.SA".to_string()));
}

#[test]
fn sector_members_come_from_the_cache() {
    let provider = Arc::new(
        MockProvider::default()
            .with("AAA", rising(40))
            .with("BBB", rising(45)),
    );
    let svc = service(&provider);

    svc.get_sector_indicators(&["AAA", "BBB"], "S", "1y").unwrap();
    svc.get_sector_indicators(&["AAA", "BBB"], "S", "1y").unwrap();
    assert_eq!(provider.calls(), 2);
    assert_eq!(svc.cache_stats().hits, 2);
}

// ── Multi-symbol lookups, quotes, validation ─────────────────────────

#[test]
fn multiple_indicators_normalize_and_skip_blanks() {
    let provider = Arc::new(
        MockProvider::default()
            .with("PETR4", rising(40))
            .with("VALE3", rising(40)),
    );
    let svc = service(&provider);

    let results = svc.get_multiple_indicators(&[" petr4", "", "VALE3 ", "XXXX3"], "1y");
    let keys: Vec<_> = results.keys().cloned().collect();
    assert_eq!(keys, ["PETR4", "VALE3"]);
    assert_eq!(provider.calls(), 3);
}

#[test]
fn quote_reports_change_and_chart() {
    let provider = Arc::new(MockProvider::default().with("ITUB4", rising(45)));
    let svc = service(&provider);

    let q = svc.get_quote("ITUB4", "1mo").unwrap();
    assert_eq!(q.symbol, "ITUB4");
    assert_eq!(q.current_price, 144.0);
    assert_eq!(q.change, 1.0);
    assert_eq!(q.chart.len(), 30);
    assert_eq!(q.data_points, 45);
    assert_eq!(q.period, "1mo");
}

#[test]
fn default_quotes_use_configured_symbols() {
    let provider = Arc::new(
        MockProvider::default()
            .with("PETR4", rising(3))
            .with("VALE3", rising(3)),
    );
    let svc = service(&provider);

    let quotes = svc.get_default_quotes();
    // ITUB4 has no data in the mock
    assert_eq!(quotes.len(), 2);
    assert!(quotes.contains_key("PETR4"));
    assert_eq!(quotes["VALE3"].period, "1mo");
}

#[test]
fn validate_ticker_checks_for_data() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(1)));
    let svc = service(&provider);

    assert!(svc.validate_ticker("PETR4"));
    assert!(!svc.validate_ticker("XXXX3"));
    assert!(!svc.validate_ticker("DOWN"));
}

#[test]
fn synthetic_history_is_flagged() {
    let provider = rsl_core::data::SyntheticProvider::ending_on(
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
    );
    let svc = IndicatorService::new(provider, ServiceConfig::default());

    let r = svc.get_indicators_cached("PETR4", "1y").unwrap();
    assert!(!r.has_real_data);
    let sector = svc
        .get_sector_indicators(&["PETR4", "VALE3"], "Synthetic", "1y")
        .unwrap();
    assert!(!sector.has_real_data);
    assert_eq!(sector.success_rate, 100.0);
}

#[test]
fn quotes_with_explicit_period_are_keyed_like_default_quotes() {
    let provider = Arc::new(MockProvider::default().with("PETR4", rising(45)));
    let svc = service(&provider);

    let default_period = svc.get_multiple_quotes(&["petr4"]);
    let explicit = svc.get_multiple_quotes_for_period(&[" petr4 ", "", "XXXX3"], "3mo");

    let keys: Vec<_> = explicit.keys().cloned().collect();
    assert_eq!(keys, ["PETR4"]);
    assert_eq!(
        keys,
        default_period.keys().cloned().collect::<Vec<_>>()
    );
    assert_eq!(explicit["PETR4"].period, "3mo");
    assert_eq!(explicit["PETR4"].symbol, "PETR4");
    assert_eq!(default_period["PETR4"].period, "1mo");
}

// ── Company details ──────────────────────────────────────────────────

#[test]
fn stock_info_fills_missing_fields_and_strips_the_suffix() {
    let provider = Arc::new(MockProvider::default().with_profile(CompanyProfile {
        symbol: "PETR4.SA".into(),
        long_name: Some("Petróleo Brasileiro S.A. - Petrobras".into()),
        volume: Some(41_000_000),
        average_volume: Some(38_500_000),
        fifty_two_week_high: Some(42.5),
        fifty_two_week_low: Some(30.1),
        source: Some(DataSource::YahooFinance),
        ..Default::default()
    }));
    let svc = service(&provider);

    let info = svc.get_stock_info("PETR4").unwrap();
    assert_eq!(info.symbol, "PETR4");
    assert_eq!(info.long_name, "Petróleo Brasileiro S.A. - Petrobras");
    assert_eq!(info.sector, "N/A");
    assert_eq!(info.industry, "N/A");
    assert_eq!(info.market_cap, 0);
    assert_eq!(info.volume, 41_000_000);
    assert_eq!(info.average_volume, 38_500_000);
    assert_eq!(info.fifty_two_week_high, 42.5);
    assert_eq!(info.fifty_two_week_low, 30.1);
    assert_eq!(info.dividend_yield, 0.0);
    assert_eq!(info.pe_ratio, 0.0);
    assert!(info.has_real_data);

    let again = svc.get_stock_info("PETR4.SA").unwrap();
    assert_eq!(again.symbol, "PETR4");
    assert_eq!(provider.requested(), ["PETR4.SA", "PETR4.SA"]);
}

#[test]
fn stock_info_failures_are_none_and_not_cached() {
    let provider = Arc::new(MockProvider::default());
    let svc = service(&provider);

    assert!(svc.get_stock_info("XXXX3").is_none());
    assert!(matches!(
        svc.try_stock_info("DOWN"),
        Err(IndicatorError::Provider(DataError::NetworkUnreachable(_)))
    ));
    assert!(svc.get_stock_info("XXXX3").is_none());
    assert_eq!(provider.calls(), 3);
    assert_eq!(svc.cache_stats().current_size, 0);
}

#[test]
fn stock_info_needs_a_provider_with_company_data() {
    let svc = IndicatorService::new(HistoryOnlyProvider, ServiceConfig::default());

    assert!(svc.get_stock_info("PETR4").is_none());
    assert!(matches!(
        svc.try_stock_info("PETR4"),
        Err(IndicatorError::Provider(DataError::Other(_)))
    ));
}

#[test]
fn synthetic_stock_info_is_flagged() {
    let provider = rsl_core::data::SyntheticProvider::ending_on(
        NaiveDate::from_ymd_opt(2024, 6, 28).unwrap(),
    );
    let svc = IndicatorService::new(provider, ServiceConfig::default());

    let info = svc.get_stock_info("VALE3").unwrap();
    assert_eq!(info.symbol, "VALE3");
    assert_eq!(info.long_name, "VALE3.SA (synthetic)");
    assert!(info.fifty_two_week_high >= info.fifty_two_week_low);
    assert!(!info.has_real_data);
}
