//! Open Graph / meta-tag extraction.
//!
//! Reads `og:*`, `twitter:*`, `product:*`, and generic meta tags, trying
//! an ordered candidate list per logical field. Tags are matched through
//! the DOM, so `property=`/`name=` spelling and attribute ordering inside
//! the tag are both irrelevant. Title falls back to the document
//! `<title>` text when no meta candidate matches.

use crate::dom::{self, Document};
use crate::price::parse_price_text;
use crate::result::{ExtractedMetadata, ExtractionResult, Source};
use crate::text::collapse_whitespace;

const POSSIBLE_FIELDS: &[&str] =
    &["title", "description", "image_url", "price", "currency", "brand"];

const TITLE_CANDIDATES: &[&str] = &["og:title", "twitter:title"];
const DESCRIPTION_CANDIDATES: &[&str] = &["og:description", "twitter:description", "description"];
const IMAGE_CANDIDATES: &[&str] = &[
    "og:image",
    "og:image:secure_url",
    "twitter:image",
    "twitter:image:src",
];
const PRICE_CANDIDATES: &[&str] = &["og:price:amount", "product:price:amount"];
const CURRENCY_CANDIDATES: &[&str] = &["og:price:currency", "product:price:currency"];
const BRAND_CANDIDATES: &[&str] = &["og:brand", "product:brand"];

/// Extract product metadata from meta tags.
///
/// Returns `None` only when zero fields were found.
#[must_use]
pub fn extract(doc: &Document, url: &str) -> Option<ExtractionResult> {
    let mut metadata = ExtractedMetadata::with_url(url);

    metadata.title = first_meta_content(doc, TITLE_CANDIDATES).or_else(|| title_element(doc));
    metadata.description = first_meta_content(doc, DESCRIPTION_CANDIDATES);
    metadata.image_url = first_meta_content(doc, IMAGE_CANDIDATES);
    metadata.brand = first_meta_content(doc, BRAND_CANDIDATES);
    metadata.currency = first_meta_content(doc, CURRENCY_CANDIDATES)
        .map(|c| c.to_uppercase());

    if let Some(amount) = first_meta_content(doc, PRICE_CANDIDATES) {
        if let Some(parsed) = parse_price_text(&amount) {
            metadata.price = Some(parsed.price);
        }
    }

    let result = super::build_result(metadata, Source::OpenGraph, POSSIBLE_FIELDS);
    (!result.extracted_fields.is_empty()).then_some(result)
}

/// Content of the first candidate meta tag present, checking both the
/// `property=` and `name=` spellings.
fn first_meta_content(doc: &Document, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        for attribute in ["property", "name"] {
            let selector = format!(r#"meta[{attribute}="{candidate}"]"#);
            if let Some(content) = dom::get_attribute(&doc.select(&selector), "content") {
                let content = content.trim();
                if !content.is_empty() {
                    return Some(content.to_string());
                }
            }
        }
    }
    None
}

fn title_element(doc: &Document) -> Option<String> {
    let title = collapse_whitespace(&dom::text_content(&doc.select("title")));
    (!title.is_empty()).then_some(title)
}
