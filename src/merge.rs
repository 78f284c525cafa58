//! Merge engine.
//!
//! Combines the strategy results for one page into a single best-effort
//! `MergedResult`: null results are discarded, the rest are sorted by a
//! fixed source-priority order, and each field takes the value from the
//! highest-priority source that has it. A pure, synchronous pipeline —
//! no retries, no state, no hidden randomness.

use crate::dom::Document;
use crate::extractors::{field_is_present, ALL_FIELDS};
use crate::platform::detect_platform;
use crate::result::{
    ExtractedMetadata, ExtractionResult, MergedResult, Platform, Source,
};
use crate::text::decode_html_entities;

/// Execution context of an extraction call. The applicable strategy set
/// and the source-priority order both depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Fetched HTML string: shopify > json-ld > open-graph > html-fallback.
    Html,
    /// Live rendered DOM: json-ld > dom > open-graph. The DOM heuristics
    /// are generally more precise than generic Open Graph tags, but
    /// JSON-LD, when present, is the most authoritative.
    Dom,
}

/// Priority rank of a source within a context; lower merges first.
fn priority(source: Source, context: Context) -> usize {
    match context {
        Context::Html => match source {
            Source::Shopify => 0,
            Source::JsonLd => 1,
            Source::OpenGraph => 2,
            Source::HtmlFallback => 3,
            // Not produced in this context; rank last if it appears.
            Source::Dom => 4,
        },
        Context::Dom => match source {
            Source::JsonLd => 0,
            Source::Dom => 1,
            Source::OpenGraph => 2,
            Source::Shopify => 3,
            Source::HtmlFallback => 4,
        },
    }
}

/// Merge strategy results into a single `MergedResult`.
///
/// The document is consulted again only for the final platform-detection
/// fallback, so the merged platform is always populated (possibly as
/// `Unknown`).
#[must_use]
pub fn merge_results(
    results: Vec<Option<ExtractionResult>>,
    url: &str,
    doc: &Document,
    context: Context,
) -> MergedResult {
    let mut results: Vec<ExtractionResult> = results.into_iter().flatten().collect();
    results.sort_by_key(|r| priority(r.source, context));

    let mut metadata = ExtractedMetadata::with_url(url);
    let mut sources: Vec<Source> = Vec::new();

    for result in &results {
        let mut contributed = false;

        merge_field(&mut metadata.title, &result.metadata.title, &mut contributed);
        merge_field(&mut metadata.description, &result.metadata.description, &mut contributed);
        merge_field(&mut metadata.image_url, &result.metadata.image_url, &mut contributed);
        merge_field(&mut metadata.price, &result.metadata.price, &mut contributed);
        merge_field(&mut metadata.currency, &result.metadata.currency, &mut contributed);
        merge_field(&mut metadata.brand, &result.metadata.brand, &mut contributed);
        merge_field(&mut metadata.availability, &result.metadata.availability, &mut contributed);

        if metadata.platform == Platform::Unknown && result.metadata.platform != Platform::Unknown
        {
            metadata.platform = result.metadata.platform;
            contributed = true;
        }

        if contributed {
            sources.push(result.source);
        }
    }

    // Entities leak through meta tags and JSON-LD; decode in the two
    // free-text fields only.
    metadata.title = metadata.title.map(|t| decode_html_entities(&t));
    metadata.description = metadata.description.map(|d| decode_html_entities(&d));

    // A price without a determinable currency defaults to USD.
    if metadata.price.is_some() && metadata.currency.is_none() {
        metadata.currency = Some("USD".to_string());
    }

    // Platform is always populated: detect independently when no
    // strategy reported one.
    if metadata.platform == Platform::Unknown {
        metadata.platform = detect_platform(url, doc);
    }

    let extracted_fields: Vec<String> = ALL_FIELDS
        .iter()
        .filter(|field| field_is_present(&metadata, field))
        .map(|field| (*field).to_string())
        .collect();

    let critical_present = ["title", "image_url", "price"]
        .iter()
        .filter(|field| field_is_present(&metadata, field))
        .count();

    MergedResult {
        metadata,
        sources,
        confidence: critical_present as f64 / 3.0,
        extracted_fields,
    }
}

fn merge_field(dst: &mut Option<String>, src: &Option<String>, contributed: &mut bool) {
    if dst.is_some() {
        return;
    }
    if let Some(value) = src.as_deref() {
        let value = value.trim();
        if !value.is_empty() {
            *dst = Some(value.to_string());
            *contributed = true;
        }
    }
}
