//! Relative Strength Level (RSL).
//!
//! Percentage distance of the close from its trailing SMA:
//! `RSL = ((close / SMA) - 1) * 100`. Only the latest valid value is
//! reported.

use super::sma::Sma;

/// Default SMA window for RSL.
pub const DEFAULT_MA_WINDOW: usize = 30;

/// Latest RSL over `closes` (oldest first), unrounded.
///
/// `None` when there are fewer closes than `window`, when `window` is zero,
/// or when no point has a finite RSL.
pub fn compute_rsl(closes: &[f64], window: usize) -> Option<f64> {
    if window == 0 || closes.len() < window {
        return None;
    }

    let sma = Sma::new(window).compute(closes);
    closes
        .iter()
        .zip(sma.iter())
        .rev()
        .map(|(close, ma)| (close / ma - 1.0) * 100.0)
        .find(|rsl| rsl.is_finite())
}

/// The SMA value the latest RSL was measured against.
pub fn latest_moving_average(closes: &[f64], window: usize) -> Option<f64> {
    if window == 0 {
        return None;
    }
    Sma::new(window).latest(closes)
}
