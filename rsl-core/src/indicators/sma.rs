//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a lookback window.
//! Lookback: period - 1 (first valid value at index period-1).

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    pub fn new(period: usize) -> Self {
        assert!(period >= 1, "SMA period must be >= 1");
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn lookback(&self) -> usize {
        self.period - 1
    }

    /// Compute the SMA for the entire close series.
    ///
    /// Same length as `closes`; warm-up values and windows containing a NaN
    /// are `f64::NAN`.
    pub fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let n = closes.len();
        let mut result = vec![f64::NAN; n];

        if n < self.period {
            return result;
        }

        let mut sum: f64 = closes[..self.period].iter().sum();
        let mut nan_in_window = closes[..self.period].iter().any(|c| c.is_nan());

        if !nan_in_window {
            result[self.period - 1] = sum / self.period as f64;
        }

        for i in self.period..n {
            let leaving = closes[i - self.period];
            let entering = closes[i];
            sum = sum - leaving + entering;

            // NaN poisons the running sum; rescan the window instead
            if entering.is_nan() || leaving.is_nan() || nan_in_window {
                let window = &closes[(i + 1 - self.period)..=i];
                nan_in_window = window.iter().any(|c| c.is_nan());
                sum = window.iter().sum();
                if nan_in_window {
                    continue;
                }
            }

            result[i] = sum / self.period as f64;
        }

        result
    }

    /// Most recent SMA value, if the series is long enough.
    pub fn latest(&self, closes: &[f64]) -> Option<f64> {
        self.compute(closes).last().copied().filter(|v| v.is_finite())
    }
}
