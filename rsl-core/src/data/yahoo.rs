//! Yahoo Finance price provider.
//!
//! Fetches daily bars from Yahoo's v8 chart API using the `range` query
//! parameter, so the lookback period is resolved by the provider rather than
//! by local date arithmetic.
//!
//! One attempt per call. A failed request surfaces as a `DataError` and the
//! caller decides what to do with it.

use super::period::Period;
use super::provider::{
    CompanyProfile, DataError, DataSource, PriceBar, PriceHistory, PriceProvider,
};
use serde::Deserialize;
use std::time::Duration;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    #[serde(default)]
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

/// Instrument summary carried alongside the bars.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartMeta {
    long_name: Option<String>,
    short_name: Option<String>,
    regular_market_volume: Option<u64>,
    fifty_two_week_high: Option<f64>,
    fifty_two_week_low: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

/// Yahoo Finance price provider.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl YahooProvider {
    pub const DEFAULT_BASE_URL: &'static str = "https://query2.finance.yahoo.com";

    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| DataError::Other(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different host (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn chart_url(&self, symbol: &str, period: Period) -> String {
        format!(
            "{}/v8/finance/chart/{symbol}?range={period}&interval=1d",
            self.base_url.trim_end_matches('/')
        )
    }

    /// Parse the chart API response into bars.
    fn parse_response(
        symbol: &str,
        period: Period,
        resp: ChartResponse,
    ) -> Result<Vec<PriceBar>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        // A listed symbol with no trades in range comes back without timestamps.
        let timestamps = data.timestamp.unwrap_or_default();

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            // Holidays and suspended sessions carry a null close
            let Some(close) = quote.close.get(i).copied().flatten() else {
                continue;
            };
            let volume = quote.volume.get(i).copied().flatten().unwrap_or(0);

            bars.push(PriceBar { date, close, volume });
        }

        if bars.is_empty() {
            return Err(DataError::EmptySeries {
                symbol: symbol.to_string(),
                period: period.to_string(),
            });
        }

        Ok(bars)
    }

    /// Company details from the chart `meta` block.
    ///
    /// The chart API has no sector, industry, market cap, dividend or P/E
    /// data; those stay `None`. Average volume is the mean over the bars in
    /// the response.
    fn parse_profile(symbol: &str, resp: ChartResponse) -> Result<CompanyProfile, DataError> {
        let result = match resp.chart.result {
            Some(result) => result,
            None => {
                return Err(match resp.chart.error {
                    Some(err) if err.code == "Not Found" => DataError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    },
                    Some(err) => DataError::ResponseFormatChanged(format!(
                        "{}: {}",
                        err.code, err.description
                    )),
                    None => DataError::ResponseFormatChanged("empty result with no error".into()),
                })
            }
        };

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;
        let meta = data
            .meta
            .ok_or_else(|| DataError::ResponseFormatChanged("chart has no meta".into()))?;

        let volumes: Vec<u64> = data
            .indicators
            .quote
            .first()
            .map(|q| q.volume.iter().flatten().copied().collect())
            .unwrap_or_default();
        let average_volume = (!volumes.is_empty())
            .then(|| volumes.iter().sum::<u64>() / volumes.len() as u64);

        Ok(CompanyProfile {
            symbol: symbol.to_string(),
            long_name: meta.long_name.or(meta.short_name),
            volume: meta.regular_market_volume.or_else(|| volumes.last().copied()),
            average_volume,
            fifty_two_week_high: meta.fifty_two_week_high,
            fifty_two_week_low: meta.fifty_two_week_low,
            source: Some(DataSource::YahooFinance),
            ..Default::default()
        })
    }

    /// One chart request with status mapping. No retry.
    fn get_chart(&self, symbol: &str, period: Period) -> Result<ChartResponse, DataError> {
        let url = self.chart_url(symbol, period);
        tracing::debug!(%symbol, %period, "requesting chart");

        let resp = self.client.get(&url).send().map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                DataError::NetworkUnreachable(e.to_string())
            } else {
                DataError::Other(e.to_string())
            }
        })?;

        let status = resp.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(DataError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(DataError::AuthenticationRequired(
                "Yahoo Finance requires authentication".into(),
            ));
        }

        // Unknown symbols come back as 404 with a chart error body
        if !status.is_success() && status != reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::Http {
                status: status.as_u16(),
                symbol: symbol.to_string(),
            });
        }

        resp.json().map_err(|e| {
            if status == reqwest::StatusCode::NOT_FOUND {
                DataError::SymbolNotFound {
                    symbol: symbol.to_string(),
                }
            } else {
                DataError::ResponseFormatChanged(format!(
                    "failed to parse response for {symbol}: {e}"
                ))
            }
        })
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch_history(&self, symbol: &str, period: Period) -> Result<PriceHistory, DataError> {
        let chart = self.get_chart(symbol, period)?;
        let bars = Self::parse_response(symbol, period, chart)?;
        Ok(PriceHistory {
            symbol: symbol.to_string(),
            bars,
            source: DataSource::YahooFinance,
        })
    }

    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, DataError> {
        // Three months of bars for the average volume
        let chart = self.get_chart(symbol, Period::ThreeMonths)?;
        Self::parse_profile(symbol, chart)
    }
}
