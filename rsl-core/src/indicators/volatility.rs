//! Annualized volatility of daily returns.
//!
//! `vol = stdev(close[t] / close[t-1] - 1) * sqrt(252) * 100`, with the
//! sample (n - 1) standard deviation.

/// Minimum number of closes for a volatility reading.
pub const MIN_VOLATILITY_SAMPLES: usize = 30;

/// Trading days per year used to annualize.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Simple day-over-day returns; the result has one fewer element than `closes`.
pub fn simple_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Sample standard deviation, skipping NaN values.
///
/// `None` with fewer than two values left.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    let valid: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if valid.len() < 2 {
        return None;
    }
    let n = valid.len() as f64;
    let mean = valid.iter().sum::<f64>() / n;
    let ss: f64 = valid.iter().map(|v| (v - mean).powi(2)).sum();
    Some((ss / (n - 1.0)).sqrt())
}

/// Annualized volatility in percent, unrounded.
///
/// `None` with fewer than 30 closes or when the result is not finite
/// (e.g. a zero price producing an infinite return). A flat series gives
/// `Some(0.0)`.
pub fn compute_volatility(closes: &[f64]) -> Option<f64> {
    if closes.len() < MIN_VOLATILITY_SAMPLES {
        return None;
    }

    let vol = sample_std(&simple_returns(closes))? * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;
    vol.is_finite().then_some(vol)
}
