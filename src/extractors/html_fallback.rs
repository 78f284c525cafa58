//! HTML-text price fallback.
//!
//! Final pass for the HTML-string context: when neither JSON-LD, Open
//! Graph, nor the Shopify endpoint produced a price, scan elements whose
//! class mentions "price" for a parseable price fragment. The result
//! carries a fixed low confidence: it is a guess of last resort.

use crate::dom::{self, Document, Selection};
use crate::price::parse_price_text;
use crate::result::{ExtractedMetadata, ExtractionResult, Source};

/// Fixed confidence for fallback-sourced prices.
const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Scan `class*="price"` containers for the first parseable price.
#[must_use]
pub fn extract(doc: &Document, url: &str) -> Option<ExtractionResult> {
    for node in doc.select(r#"[class*="price"]"#).nodes() {
        let sel = Selection::from(*node);
        let Some(found) = parse_price_text(&dom::text_content(&sel)) else {
            continue;
        };

        let mut metadata = ExtractedMetadata::with_url(url);
        metadata.price = Some(found.price);
        metadata.currency = Some(found.currency);

        let mut result = super::build_result(metadata, Source::HtmlFallback, &["price"]);
        result.confidence = FALLBACK_CONFIDENCE;
        return Some(result);
    }
    None
}
