//! Company detail records built from provider profiles.

use crate::data::CompanyProfile;
use crate::domain::StockInfo;

const NOT_AVAILABLE: &str = "N/A";

/// Fill a `StockInfo` from a provider profile, with `"N/A"` for missing
/// text and zero for missing numbers.
pub fn build_stock_info(symbol: &str, profile: CompanyProfile) -> StockInfo {
    let text = |v: Option<String>| v.unwrap_or_else(|| NOT_AVAILABLE.to_string());

    StockInfo {
        symbol: symbol.to_string(),
        long_name: text(profile.long_name),
        sector: text(profile.sector),
        industry: text(profile.industry),
        market_cap: profile.market_cap.unwrap_or(0),
        volume: profile.volume.unwrap_or(0),
        average_volume: profile.average_volume.unwrap_or(0),
        fifty_two_week_high: profile.fifty_two_week_high.unwrap_or(0.0),
        fifty_two_week_low: profile.fifty_two_week_low.unwrap_or(0.0),
        dividend_yield: profile.dividend_yield.unwrap_or(0.0),
        pe_ratio: profile.trailing_pe.unwrap_or(0.0),
        last_update: chrono::Local::now().naive_local(),
        has_real_data: profile.source.map_or(true, |s| s.is_real()),
    }
}
