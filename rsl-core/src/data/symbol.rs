//! Ticker helpers for the market suffix the provider expects (`.SA` for B3).

/// Append `suffix` unless the symbol already ends with it.
pub fn with_market_suffix(symbol: &str, suffix: &str) -> String {
    if suffix.is_empty() || symbol.ends_with(suffix) {
        symbol.to_string()
    } else {
        format!("{symbol}{suffix}")
    }
}

/// Drop `suffix` from the end of the symbol, if present.
pub fn strip_market_suffix<'a>(symbol: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return symbol;
    }
    symbol.strip_suffix(suffix).unwrap_or(symbol)
}

/// Trim whitespace and upper-case. Returns `None` for blank input.
pub fn normalize(symbol: &str) -> Option<String> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_added_once() {
        assert_eq!(with_market_suffix("PETR4", ".SA"), "PETR4.SA");
        assert_eq!(with_market_suffix("PETR4.SA", ".SA"), "PETR4.SA");
        assert_eq!(with_market_suffix("AAPL", ""), "AAPL");
    }

    #[test]
    fn suffix_is_stripped() {
        assert_eq!(strip_market_suffix("VALE3.SA", ".SA"), "VALE3");
        assert_eq!(strip_market_suffix("VALE3", ".SA"), "VALE3");
    }

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(normalize("  petr4 ").as_deref(), Some("PETR4"));
        assert_eq!(normalize("   "), None);
    }
}
