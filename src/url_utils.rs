//! URL utilities.
//!
//! Absolute-URL checks, relative resolution for image sources, and origin
//! extraction for building platform endpoint URLs.

use url::Url;

/// Check if a string is an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|u| u.host().is_some())
}

/// Resolve a possibly-relative URL against a base page URL.
///
/// Protocol-relative (`//cdn...`) and path-relative references resolve
/// against the base; absolute URLs and `data:` URIs pass through. Returns
/// the input unchanged when resolution fails.
#[must_use]
pub fn create_absolute_url(url_str: &str, base: &str) -> String {
    let url_str = url_str.trim();

    if url_str.is_empty() || url_str.starts_with("data:") || is_absolute_url(url_str) {
        return url_str.to_string();
    }

    match Url::parse(base).and_then(|b| b.join(url_str)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => url_str.to_string(),
    }
}

/// Origin (`scheme://host[:port]`) of a URL, for building sibling
/// endpoints like Shopify's `/products/<handle>.js`.
#[must_use]
pub fn page_origin(url_str: &str) -> Option<String> {
    let url = Url::parse(url_str).ok()?;
    url.host_str()?;
    Some(url.origin().ascii_serialization())
}
