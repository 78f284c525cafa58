//! Storefront platform detection.
//!
//! Signature checks over the page URL and markup identify the hosting
//! e-commerce platform. Used by the Shopify extractor as a gate, by the
//! DOM heuristic extractor, and by the merge engine as a final fallback
//! so the merged result always carries a platform value.

use crate::dom::{self, Document};
use crate::result::Platform;

/// Detect whether a page is a Shopify-hosted storefront.
///
/// Signals, any of which suffices: a Shopify CDN or `.myshopify.com`
/// marker in the URL, a `generator` meta tag equal to `Shopify`, a
/// `Shopify.theme|shop|routes` script reference, or any `cdn.shopify.com`
/// occurrence in the markup.
#[must_use]
pub fn is_shopify_site(url: &str, doc: &Document) -> bool {
    if url.contains("cdn.shopify.com") || url.contains(".myshopify.com") {
        return true;
    }

    if generator_meta(doc).is_some_and(|g| g.trim() == "Shopify") {
        return true;
    }

    let html = doc.html();
    html.contains("Shopify.theme")
        || html.contains("Shopify.shop")
        || html.contains("Shopify.routes")
        || html.contains("cdn.shopify.com")
}

/// Detect the hosting platform from URL and markup signatures.
///
/// Returns `Platform::Unknown` when nothing matches; the result is inert
/// badge data with no further contract.
#[must_use]
pub fn detect_platform(url: &str, doc: &Document) -> Platform {
    if is_shopify_site(url, doc) {
        return Platform::Shopify;
    }

    let html = doc.html();
    let generator = generator_meta(doc).unwrap_or_default();

    if html.contains("squarespace-cdn")
        || html.contains("static1.squarespace.com")
        || html.contains("squarespace.com")
        || generator.contains("Squarespace")
    {
        return Platform::Squarespace;
    }

    if html.contains("woocommerce") || html.contains("wc-") {
        return Platform::WooCommerce;
    }

    Platform::Unknown
}

fn generator_meta(doc: &Document) -> Option<String> {
    dom::get_attribute(&doc.select(r#"meta[name="generator"]"#), "content")
}
