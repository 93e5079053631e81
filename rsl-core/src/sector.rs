//! Sector aggregation: reduce per-ticker indicators into sector averages.

use crate::domain::{IndicatorResult, SectorResult};
use crate::indicators::{round2, round_to};

/// Average the per-ticker results of a sector.
///
/// `requested` is the number of tickers the caller asked for, which may be
/// larger than `results.len()`; tickers without data lower the success rate
/// but are left out of the averages. `None` when no ticker produced data.
pub fn aggregate_sector(
    sector: &str,
    requested: usize,
    results: Vec<IndicatorResult>,
) -> Option<SectorResult> {
    if results.is_empty() || requested == 0 {
        return None;
    }

    let n = results.len() as f64;
    let average_rsl = round2(results.iter().map(|r| r.rsl).sum::<f64>() / n);
    let average_volatility = round2(results.iter().map(|r| r.volatility).sum::<f64>() / n);
    let success_rate = round_to(results.len() as f64 / requested as f64 * 100.0, 1);

    Some(SectorResult {
        sector: sector.to_string(),
        average_rsl,
        average_volatility,
        tickers_with_data: results.len(),
        tickers_requested: requested,
        success_rate,
        has_real_data: results.iter().all(|r| r.has_real_data),
        tickers: results,
        computed_at: chrono::Local::now().naive_local(),
    })
}
