//! Extraction strategies.
//!
//! Each strategy inspects one facet of a product page and returns
//! `Option<ExtractionResult>`: `None` means the strategy found nothing
//! (or failed internally) and is excluded from the merge. Strategies
//! never raise; malformed input is skipped, network failure absorbed.

pub mod dom_heuristics;
pub mod html_fallback;
pub mod json_ld;
pub mod meta_tags;
pub mod shopify;

use crate::result::{ExtractedMetadata, ExtractionResult, Platform, Source};

/// Check whether a named metadata field carries a non-empty value.
pub(crate) fn field_is_present(metadata: &ExtractedMetadata, field: &str) -> bool {
    let text_field = match field {
        "title" => &metadata.title,
        "description" => &metadata.description,
        "image_url" => &metadata.image_url,
        "price" => &metadata.price,
        "currency" => &metadata.currency,
        "brand" => &metadata.brand,
        "availability" => &metadata.availability,
        "platform" => return metadata.platform != Platform::Unknown,
        _ => return false,
    };
    text_field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

/// All metadata field names, in the fixed merge order.
pub(crate) const ALL_FIELDS: &[&str] = &[
    "title",
    "description",
    "image_url",
    "price",
    "currency",
    "brand",
    "availability",
    "platform",
];

/// Assemble an `ExtractionResult` from strategy output.
///
/// `extracted_fields` lists every non-empty field; `confidence` counts
/// only the fields in the strategy's `possible` set, so different
/// strategies keep their own denominators (6 for JSON-LD and Open Graph,
/// 5 for Shopify, 3 for the DOM heuristics).
pub(crate) fn build_result(
    metadata: ExtractedMetadata,
    source: Source,
    possible: &[&str],
) -> ExtractionResult {
    let extracted_fields: Vec<String> = ALL_FIELDS
        .iter()
        .filter(|field| field_is_present(&metadata, field))
        .map(|field| (*field).to_string())
        .collect();

    let populated = possible
        .iter()
        .filter(|field| field_is_present(&metadata, field))
        .count();

    ExtractionResult {
        metadata,
        source,
        confidence: populated as f64 / possible.len() as f64,
        extracted_fields,
    }
}
