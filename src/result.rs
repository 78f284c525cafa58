//! Result types for extraction output.
//!
//! This module defines the value objects produced by the extraction
//! strategies and the merge engine. All of them are ephemeral per-call
//! values; callers copy what they need into their own records.

use serde::{Deserialize, Serialize};

/// E-commerce storefront technology hosting the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Shopify,
    Squarespace,
    #[serde(rename = "woocommerce")]
    WooCommerce,
    #[default]
    Unknown,
}

impl Platform {
    /// Lowercase string form, matching the serialized representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shopify => "shopify",
            Self::Squarespace => "squarespace",
            Self::WooCommerce => "woocommerce",
            Self::Unknown => "unknown",
        }
    }
}

/// Tag identifying which strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Shopify,
    JsonLd,
    OpenGraph,
    Dom,
    HtmlFallback,
}

impl Source {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shopify => "shopify",
            Self::JsonLd => "json-ld",
            Self::OpenGraph => "open-graph",
            Self::Dom => "dom",
            Self::HtmlFallback => "html-fallback",
        }
    }
}

/// Canonical product facts extracted from a page.
///
/// All fields are optional except `url`; absence means the page did not
/// yield that fact, not that the fact is known to be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Canonical page URL.
    pub url: String,

    /// Product title.
    pub title: Option<String>,

    /// Product description (free text, tags stripped).
    pub description: Option<String>,

    /// Absolute URL to a representative product image.
    pub image_url: Option<String>,

    /// Decimal price string with `.` separator, no currency symbol or
    /// thousands separators (e.g. `"1234.56"`).
    pub price: Option<String>,

    /// ISO 4217 currency code. Defaults to `"USD"` when a price is found
    /// but the currency cannot be determined.
    pub currency: Option<String>,

    /// Brand or vendor name.
    pub brand: Option<String>,

    /// Schema.org-style availability token (`"InStock"`, `"OutOfStock"`).
    pub availability: Option<String>,

    /// Hosting platform, `Unknown` when no signature matched.
    #[serde(default)]
    pub platform: Platform,
}

impl ExtractedMetadata {
    /// New metadata carrying only the page URL.
    #[must_use]
    pub fn with_url(url: &str) -> Self {
        Self {
            url: url.to_string(),
            ..Self::default()
        }
    }
}

/// One strategy's output: metadata plus provenance and completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(flatten)]
    pub metadata: ExtractedMetadata,

    /// Which strategy produced this result.
    pub source: Source,

    /// Fraction of this strategy's possible fields that were populated,
    /// in `[0, 1]`. An internal completeness signal; the user-facing
    /// number is the merged confidence.
    pub confidence: f64,

    /// Names of the fields that were non-empty.
    pub extracted_fields: Vec<String>,
}

/// The merge engine's output: best-effort merged metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergedResult {
    #[serde(flatten)]
    pub metadata: ExtractedMetadata,

    /// Strategies that contributed at least one field, in priority order.
    pub sources: Vec<Source>,

    /// Completeness over the three critical fields (title, image, price),
    /// in `{0, 1/3, 2/3, 1}`.
    pub confidence: f64,

    /// Names of the fields carrying a non-empty merged value.
    pub extracted_fields: Vec<String>,
}

impl MergedResult {
    /// Degraded result used when the page could not be fetched at all.
    #[must_use]
    pub fn empty(url: &str) -> Self {
        Self {
            metadata: ExtractedMetadata::with_url(url),
            sources: Vec::new(),
            confidence: 0.0,
            extracted_fields: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::WooCommerce).unwrap();
        assert_eq!(json, r#""woocommerce""#);
        let json = serde_json::to_string(&Platform::Unknown).unwrap();
        assert_eq!(json, r#""unknown""#);
    }

    #[test]
    fn source_serializes_kebab_case() {
        let json = serde_json::to_string(&Source::JsonLd).unwrap();
        assert_eq!(json, r#""json-ld""#);
        let json = serde_json::to_string(&Source::HtmlFallback).unwrap();
        assert_eq!(json, r#""html-fallback""#);
    }

    #[test]
    fn empty_result_has_zero_confidence() {
        let result = MergedResult::empty("https://example.com/p/1");
        assert_eq!(result.confidence, 0.0);
        assert!(result.extracted_fields.is_empty());
        assert_eq!(result.metadata.url, "https://example.com/p/1");
        assert_eq!(result.metadata.platform, Platform::Unknown);
    }
}
