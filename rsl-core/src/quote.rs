//! Price summary for a ticker: latest close, daily change, recent chart.

use crate::data::PriceHistory;
use crate::domain::{ChartPoint, StockQuote};
use crate::indicators::round2;

/// Summarize a fetched history. `None` for an empty history.
///
/// The change is measured against the previous close; a single-bar history
/// has zero change.
pub fn build_quote(
    symbol: &str,
    period: &str,
    history: &PriceHistory,
    chart_points: usize,
) -> Option<StockQuote> {
    let last = history.bars.last()?;
    let previous = history
        .bars
        .len()
        .checked_sub(2)
        .map(|i| history.bars[i].close)
        .unwrap_or(last.close);

    let change = last.close - previous;
    let change_percent = if previous != 0.0 {
        change / previous * 100.0
    } else {
        0.0
    };

    let skip = history.bars.len().saturating_sub(chart_points);
    let chart = history.bars[skip..]
        .iter()
        .map(|b| ChartPoint::new(b.date, b.close, b.volume))
        .collect();

    Some(StockQuote {
        symbol: symbol.to_string(),
        current_price: round2(last.close),
        change: round2(change),
        change_percent: round2(change_percent),
        volume: last.volume,
        chart,
        last_update: chrono::Local::now().naive_local(),
        period: period.to_string(),
        data_points: history.len(),
        has_real_data: history.source.is_real(),
    })
}
