//! Synthetic price provider for offline runs.
//!
//! Bars are a seeded random walk: the same symbol and period always give the
//! same series. Results computed from it carry `has_real_data = false`.

use super::period::Period;
use super::provider::{
    CompanyProfile, DataError, DataSource, PriceBar, PriceHistory, PriceProvider,
};
use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct SyntheticProvider {
    end: NaiveDate,
}

impl SyntheticProvider {
    /// Series end on today's local date.
    pub fn new() -> Self {
        Self::ending_on(chrono::Local::now().date_naive())
    }

    /// Series end on a fixed date (reproducible across days).
    pub fn ending_on(end: NaiveDate) -> Self {
        Self { end }
    }

    fn generate(&self, symbol: &str, period: Period) -> Vec<PriceBar> {
        // Deterministic seed from symbol name
        let seed: [u8; 32] = *blake3::hash(symbol.as_bytes()).as_bytes();
        let mut rng = StdRng::from_seed(seed);

        let start = self.end - chrono::Duration::days(period.calendar_days(self.end) - 1);
        let mut price = rng.gen_range(5.0..80.0_f64);
        let mut bars = Vec::new();
        let mut current = start;

        while current <= self.end {
            let weekday = current.weekday();
            if weekday != chrono::Weekday::Sat && weekday != chrono::Weekday::Sun {
                let daily_return: f64 = rng.gen_range(-0.03..0.03);
                price *= 1.0 + daily_return;
                bars.push(PriceBar {
                    date: current,
                    close: price,
                    volume: rng.gen_range(500_000..5_000_000u64),
                });
            }
            current += chrono::Duration::days(1);
        }

        bars
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceProvider for SyntheticProvider {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceHistory, DataError> {
        let bars = self.generate(symbol, period);
        if bars.is_empty() {
            // A one-day window that lands on a weekend
            return Err(DataError::EmptySeries {
                symbol: symbol.to_string(),
                period: period.to_string(),
            });
        }
        tracing::warn!(%symbol, "serving synthetic history, results are tagged as synthetic");
        Ok(PriceHistory {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::Synthetic,
        })
    }

    /// Name, volumes and 52-week range derived from the one-year series.
    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, DataError> {
        let bars = self.generate(symbol, Period::OneYear);
        let last = bars.last().ok_or_else(|| DataError::EmptySeries {
            symbol: symbol.to_string(),
            period: Period::OneYear.to_string(),
        })?;

        // Roughly three months of sessions
        let recent = &bars[bars.len().saturating_sub(63)..];
        let average_volume = recent.iter().map(|b| b.volume).sum::<u64>() / recent.len() as u64;
        let closes = bars.iter().map(|b| b.close);

        Ok(CompanyProfile {
            symbol: symbol.to_string(),
            long_name: Some(format!("{symbol} (synthetic)")),
            volume: Some(last.volume),
            average_volume: Some(average_volume),
            fifty_two_week_high: closes.clone().reduce(f64::max),
            fifty_two_week_low: closes.reduce(f64::min),
            source: Some(DataSource::Synthetic),
            ..Default::default()
        })
    }
}
