//! # rs-prodmeta
//!
//! Product metadata extraction for e-commerce pages.
//!
//! Given a product page (by URL, HTML string, or parsed document), this
//! library runs several extraction strategies — platform product endpoints,
//! JSON-LD structured data, Open Graph / meta tags, and DOM price
//! heuristics — then merges their results into a single best-effort record
//! with per-field provenance and a confidence score.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_prodmeta::{extract_from_html, Options};
//!
//! let html = r#"<html><head>
//!   <meta property="og:title" content="Stoneware Mug">
//!   <meta property="og:image" content="https://example.com/mug.jpg">
//!   <meta property="og:price:amount" content="24.00">
//! </head><body></body></html>"#;
//!
//! let options = Options { fetch_shopify_data: false, ..Options::default() };
//! let result = extract_from_html(html, "https://example.com/products/mug", &options);
//! assert_eq!(result.metadata.title.as_deref(), Some("Stoneware Mug"));
//! assert_eq!(result.metadata.price.as_deref(), Some("24.00"));
//! ```
//!
//! ## Guarantees
//!
//! - **Never panics on bad input**: malformed HTML, invalid JSON-LD, and
//!   unreachable endpoints degrade to an empty result, not an error.
//! - **Deterministic**: the same input always produces the same output.
//! - **Canonical prices**: every extracted price is a plain decimal string
//!   (`"1234.56"`), normalized across US and European number formats.

mod error;
mod merge;
mod options;
mod result;

/// Thin adapter over the `dom_query` document model.
pub mod dom;

/// Extraction strategies (JSON-LD, meta tags, Shopify, DOM heuristics).
pub mod extractors;

/// HTTP fetching with charset transcoding.
pub mod fetch;

/// E-commerce platform detection.
pub mod platform;

/// Price text parsing and normalization.
pub mod price;

/// Text utilities (whitespace, HTML entities, tag stripping).
pub mod text;

/// URL validation and resolution.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use merge::{merge_results, Context};
pub use options::Options;
pub use result::{ExtractedMetadata, ExtractionResult, MergedResult, Platform, Source};

use dom::Document;

/// Fetches a product page and extracts its metadata.
///
/// Network failures, timeouts, and non-2xx responses all degrade to an
/// empty result for the given URL rather than an error: callers always
/// get a `MergedResult` and can inspect `confidence` to judge it.
///
/// # Example
///
/// ```rust,no_run
/// use rs_prodmeta::{extract_from_url, Options};
///
/// let result = extract_from_url("https://example.com/products/mug", &Options::default());
/// println!("{}: {:?}", result.confidence, result.metadata.title);
/// ```
#[must_use]
pub fn extract_from_url(url: &str, options: &Options) -> MergedResult {
    match fetch::fetch_page(url, options) {
        Ok(html) => extract_from_html(&html, url, options),
        Err(_) => MergedResult::empty(url),
    }
}

/// Extracts product metadata from an HTML string.
///
/// Runs the Shopify endpoint, JSON-LD, and Open Graph strategies, with a
/// low-confidence HTML text scan appended only when none of them found a
/// price. Merge priority: shopify > json-ld > open-graph > html-fallback.
#[must_use]
pub fn extract_from_html(html: &str, url: &str, options: &Options) -> MergedResult {
    let doc = dom::parse(html);

    let mut results = vec![
        extractors::shopify::extract(&doc, url, options),
        extractors::json_ld::extract(&doc, url),
        extractors::meta_tags::extract(&doc, url),
    ];

    let has_price = results
        .iter()
        .flatten()
        .any(|r| r.metadata.price.is_some());
    if !has_price {
        results.push(extractors::html_fallback::extract(&doc, url));
    }

    merge_results(results, url, &doc, Context::Html)
}

/// Extracts product metadata from HTML bytes, transcoding to UTF-8 first.
///
/// Charset is sniffed from the document head (`<meta charset="...">` or
/// the `http-equiv` form); undeclared input is treated as UTF-8 with
/// lossy replacement.
///
/// # Example
///
/// ```rust
/// use rs_prodmeta::{extract_from_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\">
/// <meta property=\"og:title\" content=\"Caf\xE9 Mug\"></head><body></body></html>";
/// let options = Options { fetch_shopify_data: false, ..Options::default() };
/// let result = extract_from_bytes(html, "https://example.com/p/mug", &options);
/// assert_eq!(result.metadata.title.as_deref(), Some("Caf\u{e9} Mug"));
/// ```
#[must_use]
pub fn extract_from_bytes(html: &[u8], url: &str, options: &Options) -> MergedResult {
    let html_str = fetch::transcode_to_utf8(html);
    extract_from_html(&html_str, url, options)
}

/// Extracts product metadata from an already-parsed document.
///
/// Intended for callers that hold a live DOM (for example, one built from
/// a rendered page). Uses the DOM heuristics instead of the Shopify
/// endpoint and never performs network requests. Merge priority:
/// json-ld > dom > open-graph.
#[must_use]
pub fn extract_from_document(doc: &Document, url: &str) -> MergedResult {
    let results = vec![
        extractors::json_ld::extract(doc, url),
        extractors::dom_heuristics::extract(doc, url),
        extractors::meta_tags::extract(doc, url),
    ];

    merge_results(results, url, doc, Context::Dom)
}
