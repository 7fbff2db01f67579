//! Ticker normalisation.

use kaidoki_traits::Symbol;

/// Suffix of Tokyo Stock Exchange listings.
pub const TOKYO_SUFFIX: &str = ".T";

/// Longest all-digit code treated as a Tokyo listing.
const MAX_TOKYO_CODE_LEN: usize = 5;

/// Normalise user input into a data-source symbol.
///
/// Input is trimmed and upper-cased. Bare numeric codes of up to five digits
/// are Japanese listings and get the `.T` suffix. Empty input gives `None`.
///
/// ```
/// use kaidoki_fetch::normalize_ticker;
///
/// assert_eq!(normalize_ticker("7203").as_deref(), Some("7203.T"));
/// assert_eq!(normalize_ticker(" aapl ").as_deref(), Some("AAPL"));
/// assert_eq!(normalize_ticker("   "), None);
/// ```
#[must_use]
pub fn normalize_ticker(input: &str) -> Option<Symbol> {
    let ticker = input.trim().to_uppercase();
    if ticker.is_empty() {
        return None;
    }

    let is_code = ticker.len() <= MAX_TOKYO_CODE_LEN && ticker.chars().all(|c| c.is_ascii_digit());
    if is_code {
        Some(format!("{ticker}{TOKYO_SUFFIX}"))
    } else {
        Some(ticker)
    }
}

/// Split a ticker list on commas and whitespace, normalising each entry.
///
/// Empty entries are skipped and duplicates keep their first position.
#[must_use]
pub fn parse_ticker_list<S: AsRef<str>>(inputs: &[S]) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = Vec::new();
    for raw in inputs {
        for part in raw.as_ref().split(|c: char| c == ',' || c.is_whitespace()) {
            if let Some(symbol) = normalize_ticker(part)
                && !symbols.contains(&symbol)
            {
                symbols.push(symbol);
            }
        }
    }
    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes_get_tokyo_suffix() {
        assert_eq!(normalize_ticker("7203").as_deref(), Some("7203.T"));
        assert_eq!(normalize_ticker("12345").as_deref(), Some("12345.T"));
        assert_eq!(normalize_ticker(" 9984\n").as_deref(), Some("9984.T"));
    }

    #[test]
    fn test_other_tickers_unchanged() {
        assert_eq!(normalize_ticker("8306.t").as_deref(), Some("8306.T"));
        assert_eq!(normalize_ticker("nvda").as_deref(), Some("NVDA"));
        assert_eq!(normalize_ticker("123456").as_deref(), Some("123456"));
        assert_eq!(normalize_ticker("BRK-B").as_deref(), Some("BRK-B"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_ticker(""), None);
        assert_eq!(normalize_ticker("  \t"), None);
    }

    #[test]
    fn test_parse_ticker_list() {
        let symbols = parse_ticker_list(&["7203,aapl", "  msft 7203", ","]);
        assert_eq!(symbols, vec!["7203.T", "AAPL", "MSFT"]);
    }
}
