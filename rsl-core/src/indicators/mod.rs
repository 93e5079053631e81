//! Indicator math over closing-price series.
//!
//! Everything here is a pure function of `&[f64]` closes, oldest first.
//! Results are unrounded; rounding for display happens in the service.

pub mod rsl;
pub mod sma;
pub mod volatility;

pub use rsl::{compute_rsl, latest_moving_average, DEFAULT_MA_WINDOW};
pub use sma::Sma;
pub use volatility::{compute_volatility, MIN_VOLATILITY_SAMPLES};

/// Round to `decimals` places. Exact ties go to the even digit, so
/// `round_to(6.25, 1) == 6.2` and `round_to(6.35, 1) == 6.4`.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Round to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, 2)
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
