//! DOM heuristic extraction (live-DOM context only).
//!
//! Locates the current price among many candidate elements using a
//! prioritized selector cascade, finds a representative product image,
//! and detects the platform signature. The cascade order is fixed:
//! later, broader strategies risk capturing an original/"was" price
//! instead of the actual sale price, so the narrow sale-price markers
//! run first and the short-standalone-text scan runs last.
//!
//! The extractor reads the document and never mutates it.

use regex::Regex;
use std::sync::LazyLock;

use crate::dom::{self, Document, Selection};
use crate::platform;
use crate::price::{parse_price_text, starts_with_currency_symbol, PriceMatch};
use crate::result::{ExtractedMetadata, ExtractionResult, Platform, Source};
use crate::text::collapse_whitespace;
use crate::url_utils::create_absolute_url;

const POSSIBLE_FIELDS: &[&str] = &["image_url", "price", "currency"];

/// Markers strongly associated with the *current* price.
const SALE_PRICE_SELECTORS: &[&str] = &[
    r#"[data-testid*="current-price"]"#,
    r#"[data-testid*="sale-price"]"#,
    r#"[data-test*="current-price"]"#,
    ".sale-price",
    ".price--sale",
    ".price__sale",
    ".price-sale",
    ".current-price",
    ".price--current",
    ".price__current",
    ".price-current",
    ".now-price",
    ".price-now",
    ".offer-price",
    ".special-price",
    r#"[class*="salePrice"]"#,
    r#"[class*="currentPrice"]"#,
];

/// Broad price containers, subject to the compare/was exclusion check.
const GENERAL_PRICE_SELECTORS: &[&str] = &[
    ".price",
    ".product-price",
    ".price-item",
    ".amount",
    ".money",
    r#"[class*="price"]"#,
];

const ADD_TO_CART_SELECTORS: &[&str] = &[
    r#"button[name="add"]"#,
    "#AddToCart",
    ".add-to-cart",
    r#"[class*="add-to-cart"]"#,
    r#"[class*="addToCart"]"#,
    r#"form[action*="/cart/add"] button"#,
];

/// Image candidates, product/gallery containers first.
const IMAGE_SELECTORS: &[&str] = &[
    r#"img[itemprop="image"]"#,
    ".product-gallery img",
    ".product__media img",
    ".product-image img",
    ".product-photo img",
    r#"[class*="product"] img"#,
    ".gallery img",
    "main img",
];

/// Markers of an original/"was"/list price. Case-insensitive substring
/// match covers both kebab-case and camelCase spellings.
#[allow(clippy::expect_used)]
static COMPARE_PRICE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(compare|was|old|list|original|strikethrough|crossed)").expect("valid regex")
});

/// Maximum character length for the short-standalone-price scan; longer
/// text is prose that merely mentions a price.
const MAX_STANDALONE_PRICE_LEN: usize = 15;

/// Run the DOM heuristics over a live document.
#[must_use]
pub fn extract(doc: &Document, url: &str) -> Option<ExtractionResult> {
    let price = locate_price(doc);
    let image_url = locate_image(doc, url);
    let detected = platform::detect_platform(url, doc);

    if price.is_none() && image_url.is_none() && detected == Platform::Unknown {
        return None;
    }

    let mut metadata = ExtractedMetadata::with_url(url);
    metadata.image_url = image_url;
    metadata.platform = detected;
    if let Some(found) = price {
        metadata.price = Some(found.price);
        metadata.currency = Some(found.currency);
    }

    Some(super::build_result(metadata, Source::Dom, POSSIBLE_FIELDS))
}

/// The price cascade. The first strategy yielding a parseable price wins.
fn locate_price(doc: &Document) -> Option<PriceMatch> {
    sale_price_markers(doc)
        .or_else(|| itemprop_price(doc))
        .or_else(|| data_price_attribute(doc))
        .or_else(|| general_price_classes(doc))
        .or_else(|| add_to_cart_proximity(doc))
        .or_else(|| short_standalone_price(doc))
}

fn sale_price_markers(doc: &Document) -> Option<PriceMatch> {
    first_parseable(doc, SALE_PRICE_SELECTORS, |_| true)
}

/// `itemprop="price"` with a machine-readable `content` attribute,
/// paired with `itemprop="priceCurrency"` when present.
fn itemprop_price(doc: &Document) -> Option<PriceMatch> {
    let currency = dom::get_attribute(&doc.select(r#"[itemprop="priceCurrency"]"#), "content")
        .map(|c| c.trim().to_uppercase())
        .filter(|c| !c.is_empty());

    for node in doc.select(r#"[itemprop="price"]"#).nodes() {
        let sel = Selection::from(*node);
        let Some(content) = dom::get_attribute(&sel, "content") else {
            continue;
        };
        if let Some(mut found) = parse_price_text(&content) {
            if let Some(ref code) = currency {
                found.currency = code.clone();
            }
            return Some(found);
        }
    }
    None
}

/// `data-price` attributes: a digit-bearing value is parsed directly;
/// otherwise the element's visible text is tried (some sites put a
/// non-numeric token like "domestic" in the attribute while the text
/// carries the real price).
fn data_price_attribute(doc: &Document) -> Option<PriceMatch> {
    for node in doc.select("[data-price]").nodes() {
        let sel = Selection::from(*node);
        let value = dom::get_attribute(&sel, "data-price").unwrap_or_default();

        if value.chars().any(|c| c.is_ascii_digit()) {
            if let Some(found) = parse_price_text(&value) {
                return Some(found);
            }
        } else if let Some(found) = parse_price_text(&dom::text_content(&sel)) {
            return Some(found);
        }
    }
    None
}

fn general_price_classes(doc: &Document) -> Option<PriceMatch> {
    first_parseable(doc, GENERAL_PRICE_SELECTORS, |sel| {
        !is_compare_price_element(sel)
    })
}

/// Check the button's own text, then its parent container's text.
fn add_to_cart_proximity(doc: &Document) -> Option<PriceMatch> {
    for selector in ADD_TO_CART_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            if let Some(found) = parse_price_text(&dom::text_content(&sel)) {
                return Some(found);
            }
            let parent = sel.parent();
            if let Some(found) = parse_price_text(&dom::text_content(&parent)) {
                return Some(found);
            }
        }
    }
    None
}

/// Last resort: leaf-like elements (at most two children) whose short
/// text begins with a currency symbol and a digit. Longer sentences
/// that merely mention a price never match.
fn short_standalone_price(doc: &Document) -> Option<PriceMatch> {
    for node in doc.select("body *").nodes() {
        let sel = Selection::from(*node);
        if sel.children().length() > 2 {
            continue;
        }

        let text = collapse_whitespace(&dom::text_content(&sel));
        if text.is_empty() || text.chars().count() >= MAX_STANDALONE_PRICE_LEN {
            continue;
        }
        if !starts_with_currency_symbol(&text) {
            continue;
        }
        if let Some(found) = parse_price_text(&text) {
            return Some(found);
        }
    }
    None
}

fn first_parseable(
    doc: &Document,
    selectors: &[&str],
    accept: impl Fn(&Selection) -> bool,
) -> Option<PriceMatch> {
    for selector in selectors {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            if !accept(&sel) {
                continue;
            }
            if let Some(found) = parse_price_text(&dom::text_content(&sel)) {
                return Some(found);
            }
        }
    }
    None
}

/// An element whose class, id, or attribute names mark it as an
/// original/list price rather than the current one.
fn is_compare_price_element(sel: &Selection) -> bool {
    for (name, value) in dom::get_all_attributes(sel) {
        if COMPARE_PRICE_RE.is_match(&name) {
            return true;
        }
        if matches!(name.as_str(), "class" | "id" | "data-testid")
            && COMPARE_PRICE_RE.is_match(&value)
        {
            return true;
        }
    }
    false
}

fn locate_image(doc: &Document, url: &str) -> Option<String> {
    for selector in IMAGE_SELECTORS {
        for node in doc.select(selector).nodes() {
            let sel = Selection::from(*node);
            let Some(src) =
                dom::get_attribute(&sel, "src").or_else(|| dom::get_attribute(&sel, "data-src"))
            else {
                continue;
            };

            let src = src.trim().to_string();
            if src.is_empty() {
                continue;
            }
            let lower = src.to_lowercase();
            if lower.contains("logo") || lower.contains("icon") {
                continue;
            }

            return Some(create_absolute_url(&src, url));
        }
    }
    None
}
