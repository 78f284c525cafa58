//! Shopify product endpoint extraction.
//!
//! When a Shopify storefront is detected and the page URL is a product
//! page (`/products/<handle>`), the store's canonical product JSON
//! endpoint (`<origin>/products/<handle>.js`) is fetched for
//! authoritative data. Any network or parse failure yields `None`; the
//! merge simply proceeds without this source.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::dom::Document;
use crate::fetch;
use crate::options::Options;
use crate::platform;
use crate::result::{ExtractedMetadata, ExtractionResult, Platform, Source};
use crate::text::strip_html_tags;

const POSSIBLE_FIELDS: &[&str] = &["title", "description", "image_url", "price", "brand"];

#[allow(clippy::expect_used)]
static PRODUCT_HANDLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/products/([A-Za-z0-9_-]+)").expect("valid regex"));

/// Shopify serves sized renditions with a `_NNNxNNN` suffix before the
/// extension; stripping it yields the full-resolution original.
#[allow(clippy::expect_used)]
static IMAGE_SIZE_SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)_\d+x\d+(\.(?:jpe?g|png|gif|webp))").expect("valid regex")
});

/// Extract product metadata from the Shopify product JSON endpoint.
///
/// Only runs when the site looks like a Shopify storefront, the URL path
/// matches `/products/<handle>`, and endpoint fetching is enabled.
#[must_use]
pub fn extract(doc: &Document, url: &str, options: &Options) -> Option<ExtractionResult> {
    if !options.fetch_shopify_data || !platform::is_shopify_site(url, doc) {
        return None;
    }

    let endpoint = product_json_endpoint(url)?;
    let payload = fetch::fetch_json(&endpoint, options).ok()?;
    Some(result_from_product_json(&payload, url))
}

/// Build the `<origin>/products/<handle>.js` endpoint for a product URL.
///
/// Returns `None` when the URL is not a product page.
#[must_use]
pub fn product_json_endpoint(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let handle = PRODUCT_HANDLE_RE
        .captures(parsed.path())?
        .get(1)?
        .as_str()
        .to_string();
    let origin = crate::url_utils::page_origin(url)?;
    Some(format!("{origin}/products/{handle}.js"))
}

/// Build an extraction result from an already-fetched product payload.
///
/// Exposed separately so the payload mapping is testable without a
/// network; `extract` calls this after fetching.
#[must_use]
pub fn result_from_product_json(payload: &Value, url: &str) -> ExtractionResult {
    let mut metadata = ExtractedMetadata::with_url(url);
    metadata.platform = Platform::Shopify;

    metadata.title = payload
        .get("title")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    metadata.description = payload
        .get("description")
        .and_then(Value::as_str)
        .map(strip_html_tags)
        .filter(|s| !s.is_empty());

    metadata.image_url = payload
        .get("featured_image")
        .and_then(Value::as_str)
        .or_else(|| {
            payload
                .get("images")
                .and_then(Value::as_array)
                .and_then(|images| images.first())
                .and_then(Value::as_str)
        })
        .map(clean_image_url);

    metadata.price = payload
        .get("price_min")
        .or_else(|| payload.get("price"))
        .and_then(cents_to_price);

    // The .js endpoint does not report store currency.
    if metadata.price.is_some() {
        metadata.currency = Some("USD".to_string());
    }

    metadata.brand = payload
        .get("vendor")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from);

    metadata.availability = payload.get("available").and_then(Value::as_bool).map(|a| {
        if a { "InStock" } else { "OutOfStock" }.to_string()
    });

    super::build_result(metadata, Source::Shopify, POSSIBLE_FIELDS)
}

/// Normalize a Shopify image URL: add a scheme to protocol-relative URLs
/// and strip the size suffix to get the full-resolution image.
#[must_use]
pub fn clean_image_url(src: &str) -> String {
    let src = src.trim();
    let with_scheme = if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    };
    IMAGE_SIZE_SUFFIX_RE
        .replace(&with_scheme, "$1")
        .into_owned()
}

/// Shopify prices arrive as integer cents; render a 2-decimal string.
fn cents_to_price(value: &Value) -> Option<String> {
    let cents = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))?;
    if cents < 0 {
        return None;
    }
    Some(format!("{}.{:02}", cents / 100, cents % 100))
}
