//! DOM operations adapter over the `dom_query` crate.
//!
//! Thin helpers giving the extractors a consistent, familiar API for the
//! handful of read-only operations they need. The engine only ever reads
//! the document; nothing here mutates the tree.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril so callers can hold zero-copy text
pub use tendril::StrTendril;

/// Get any attribute value from the first node of a selection.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only
/// when you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get all attributes of the first node as key-value pairs.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}
