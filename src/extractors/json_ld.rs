//! Structured-data (JSON-LD) extraction.
//!
//! Scans `<script type="application/ld+json">` blocks for a Schema.org
//! `Product` (or `IndividualProduct`) node and reads its fields. The
//! search recurses into `@graph` arrays and plain arrays; the first
//! product node found across all script blocks wins, and invalid JSON in
//! any block is skipped rather than failing the strategy.

use serde_json::Value;

use crate::dom::{self, Document, Selection};
use crate::price::normalize_price_number;
use crate::result::{ExtractedMetadata, ExtractionResult, Source};

/// Fields this strategy can populate, for its confidence denominator.
const POSSIBLE_FIELDS: &[&str] =
    &["title", "description", "image_url", "price", "currency", "brand"];

/// Extract product metadata from the document's JSON-LD blocks.
#[must_use]
pub fn extract(doc: &Document, url: &str) -> Option<ExtractionResult> {
    for script in doc.select(r#"script[type="application/ld+json"]"#).nodes() {
        let script_sel = Selection::from(*script);
        let json_text = dom::text_content(&script_sel).trim().to_string();

        if json_text.is_empty() {
            continue;
        }

        // A parse failure is swallowed; continue to the next block.
        let data: Value = match serde_json::from_str(&json_text) {
            Ok(v) => v,
            Err(_) => continue,
        };

        if let Some(product) = find_product_node(&data) {
            return Some(result_from_product(product, url));
        }
    }

    None
}

/// Recursively locate the first Product node: direct, inside `@graph`,
/// or inside an array.
fn find_product_node(value: &Value) -> Option<&serde_json::Map<String, Value>> {
    match value {
        Value::Object(map) => {
            if map.get("@type").is_some_and(is_product_type) {
                return Some(map);
            }
            map.get("@graph").and_then(find_product_node)
        }
        Value::Array(items) => items.iter().find_map(find_product_node),
        _ => None,
    }
}

/// `@type` may be a string or an array of strings.
fn is_product_type(type_value: &Value) -> bool {
    let matches_name = |s: &str| s == "Product" || s == "IndividualProduct";
    match type_value {
        Value::String(s) => matches_name(s),
        Value::Array(items) => items
            .iter()
            .any(|item| item.as_str().is_some_and(matches_name)),
        _ => false,
    }
}

fn result_from_product(product: &serde_json::Map<String, Value>, url: &str) -> ExtractionResult {
    let mut metadata = ExtractedMetadata::with_url(url);

    metadata.title = string_field(product.get("name"));
    metadata.description = string_field(product.get("description"));
    metadata.image_url = image_field(product.get("image"));
    metadata.brand = brand_field(product.get("brand"));

    if let Some(offer) = first_offer(product.get("offers")) {
        metadata.price = price_field(offer.get("price"));
        metadata.currency = string_field(offer.get("priceCurrency"));
        metadata.availability = availability_field(offer.get("availability"));
    }

    super::build_result(metadata, Source::JsonLd, POSSIBLE_FIELDS)
}

fn string_field(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// `image` may be a string, an array of strings, or an array of
/// `{url: ...}` objects; the first usable entry wins.
fn image_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Array(items) => {
            let first = items.first()?;
            match first {
                Value::String(s) => {
                    let s = s.trim();
                    (!s.is_empty()).then(|| s.to_string())
                }
                Value::Object(obj) => string_field(obj.get("url")),
                _ => None,
            }
        }
        Value::Object(obj) => string_field(obj.get("url")),
        _ => None,
    }
}

/// `offers` may be an object or an array of objects; the first entry wins.
fn first_offer(value: Option<&Value>) -> Option<&serde_json::Map<String, Value>> {
    match value? {
        Value::Object(map) => Some(map),
        Value::Array(items) => items.first()?.as_object(),
        _ => None,
    }
}

/// `price` may be a string or a number; normalized either way.
fn price_field(value: Option<&Value>) -> Option<String> {
    let raw = match value? {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    normalize_price_number(raw.trim())
}

/// `brand` may be a string or a `{name: ...}` object.
fn brand_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Object(obj) => string_field(obj.get("name")),
        _ => None,
    }
}

/// Availability tokens often arrive as schema.org URLs; strip the prefix
/// so `"https://schema.org/InStock"` becomes `"InStock"`.
fn availability_field(value: Option<&Value>) -> Option<String> {
    let s = string_field(value)?;
    let token = s
        .trim_start_matches("https://schema.org/")
        .trim_start_matches("http://schema.org/");
    (!token.is_empty()).then(|| token.to_string())
}
