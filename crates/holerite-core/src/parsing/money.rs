use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

/// Brazilian monetary pattern: thousands separated by `.`, decimal comma,
/// exactly two decimal digits ("1.234,56", "150,50").
pub const MONEY_PATTERN: &str = r"\d{1,3}(?:\.\d{3})*,\d{2}";

static MONEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MONEY_PATTERN).expect("money regex"));

/// All BR-formatted monetary substrings in a line, in order of appearance.
pub fn find_values<'a>(line: &'a str) -> Vec<&'a str> {
    MONEY_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// The right-most monetary substring in a line.
///
/// On footer/summary lines the right-most value is the most likely to be the
/// total, so callers scanning a line for "the" value take the last match.
pub fn last_value(line: &str) -> Option<&str> {
    MONEY_RE.find_iter(line).last().map(|m| m.as_str())
}

/// Parse a BR-formatted monetary string into a decimal.
///
/// Strips the thousands dots and substitutes the decimal comma. Returns None
/// when the string does not convert or the result is negative: an
/// unparseable value is absence, not an error.
pub fn parse_monetary(s: &str) -> Option<Decimal> {
    let normalized = s.trim().replace('.', "").replace(',', ".");
    let value = Decimal::from_str(&normalized).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}
