//! Text utilities shared by the extractors.
//!
//! Whitespace collapsing, HTML entity decoding for merged text fields,
//! and tag stripping for HTML-bearing payloads (Shopify descriptions).

use regex::Regex;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

#[allow(clippy::expect_used)]
static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

#[allow(clippy::expect_used)]
static HEX_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#x([0-9a-fA-F]+);").expect("valid regex"));

#[allow(clippy::expect_used)]
static DEC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(\d+);").expect("valid regex"));

/// Collapse runs of whitespace into single spaces and trim.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Decode the HTML entities that commonly leak into meta-tag and JSON-LD
/// text: named quotes/brackets and numeric references.
///
/// `&amp;` is decoded last so that pre-encoded sequences like
/// `&amp;quot;` come out as the literal `&quot;` rather than `"`.
#[must_use]
pub fn decode_html_entities(text: &str) -> String {
    let text = text.replace("&quot;", "\"");
    let text = text.replace("&apos;", "'");
    let text = text.replace("&lt;", "<");
    let text = text.replace("&gt;", ">");

    let text = HEX_ENTITY_RE.replace_all(&text, |caps: &regex::Captures<'_>| {
        u32::from_str_radix(&caps[1], 16)
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });

    let text = DEC_ENTITY_RE.replace_all(&text, |caps: &regex::Captures<'_>| {
        caps[1]
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    });

    text.replace("&amp;", "&")
}

/// Strip HTML tags from a fragment and collapse the remaining whitespace.
///
/// Used for payloads that carry rendered HTML in text fields, such as the
/// `description` of a Shopify product endpoint.
#[must_use]
pub fn strip_html_tags(html: &str) -> String {
    let stripped = HTML_TAG_RE.replace_all(html, " ");
    collapse_whitespace(&decode_html_entities(&stripped))
}
