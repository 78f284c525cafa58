//! Price text parsing and normalization.
//!
//! Given an arbitrary text fragment, find a price-looking substring,
//! determine the currency from a fixed symbol table, and normalize the
//! numeric literal across US and European thousands/decimal conventions.

use regex::Regex;
use std::sync::LazyLock;

use crate::text::collapse_whitespace;

/// A parsed price: canonical decimal string plus ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceMatch {
    /// Decimal string matching `^\d+(\.\d+)?$`.
    pub price: String,
    /// ISO 4217 code, `"USD"` when no symbol was recognized.
    pub currency: String,
}

/// Symbol-to-ISO-code table, scanned in order. Multi-character dollar
/// prefixes come before the bare `$` so `A$40` resolves to AUD, not USD.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("A$", "AUD"),
    ("C$", "CAD"),
    ("£", "GBP"),
    ("€", "EUR"),
    ("¥", "JPY"),
    ("₹", "INR"),
    ("₩", "KRW"),
    ("kr", "SEK"),
    ("Fr", "CHF"),
    ("$", "USD"),
];

/// ISO codes accepted as a textual suffix ("40 EUR").
const CURRENCY_CODES: &[&str] = &[
    "AUD", "CAD", "GBP", "EUR", "JPY", "INR", "KRW", "SEK", "CHF", "USD",
];

/// Matches either a currency-symbol-prefixed numeric run, or a numeric run
/// with an optional trailing symbol or ISO code. A bare number matches the
/// second branch, so `"40"` parses (with the USD default).
#[allow(clippy::expect_used)]
static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:(?:A\$|C\$|\$|£|€|¥|₹|₩|kr|Fr)\s*\d[\d.,]*)|(?:\d[\d.,]*\s*(?:A\$|C\$|\$|£|€|¥|₹|₩|kr|Fr|[A-Z]{3})?)",
    )
    .expect("valid regex")
});

/// Extracts the numeric run from a matched price fragment.
#[allow(clippy::expect_used)]
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d.,]+").expect("valid regex"));

/// European form: dot thousands, comma decimals ("1.234,56").
#[allow(clippy::expect_used)]
static EUROPEAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(\.\d{3})+,\d{2}$").expect("valid regex"));

/// US form: comma thousands, optional dot decimals ("1,234.56").
#[allow(clippy::expect_used)]
static US_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}(,\d{3})+(\.\d{2})?$").expect("valid regex"));

/// Simple comma decimal ("29,99").
#[allow(clippy::expect_used)]
static COMMA_DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+,\d{2}$").expect("valid regex"));

/// Canonical output form.
#[allow(clippy::expect_used)]
static CANONICAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?$").expect("valid regex"));

/// Find and parse the first price-looking substring in a text fragment.
///
/// Returns `None` when no parseable price is present; callers treat that
/// as "no price from this candidate" and move on.
#[must_use]
pub fn parse_price_text(text: &str) -> Option<PriceMatch> {
    let collapsed = collapse_whitespace(text);
    let matched = PRICE_RE.find(&collapsed)?.as_str();

    let currency = detect_currency(matched);
    let raw_number = NUMBER_RE.find(matched)?.as_str();
    let price = normalize_price_number(raw_number)?;

    Some(PriceMatch { price, currency })
}

/// Check whether text begins with a known currency symbol followed
/// (optionally after spaces) by a digit. Used by the DOM heuristics to
/// accept short standalone prices like `"$40"` while rejecting prose.
#[must_use]
pub fn starts_with_currency_symbol(text: &str) -> bool {
    CURRENCY_SYMBOLS.iter().any(|(symbol, _)| {
        text.strip_prefix(symbol)
            .map(str::trim_start)
            .is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_digit()))
    })
}

/// Determine the currency of a matched price fragment, defaulting to USD.
fn detect_currency(matched: &str) -> String {
    for (symbol, code) in CURRENCY_SYMBOLS {
        if matched.contains(symbol) {
            return (*code).to_string();
        }
    }
    for code in CURRENCY_CODES {
        if matched.contains(code) {
            return (*code).to_string();
        }
    }
    "USD".to_string()
}

/// Normalize a numeric literal into the canonical `\d+(\.\d+)?` form.
///
/// Exactly one of three rules applies, in priority order; anything else
/// passes through unchanged. Ambiguous forms like `"1.234"` (European
/// thousands or a precise decimal?) are deliberately not guessed at and
/// stay as-is.
#[must_use]
pub fn normalize_price_number(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c| c == '.' || c == ',');
    if trimmed.is_empty() {
        return None;
    }

    let normalized = if EUROPEAN_RE.is_match(trimmed) {
        trimmed.replace('.', "").replace(',', ".")
    } else if US_RE.is_match(trimmed) {
        trimmed.replace(',', "")
    } else if COMMA_DECIMAL_RE.is_match(trimmed) {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    CANONICAL_RE.is_match(&normalized).then_some(normalized)
}
