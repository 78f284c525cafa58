//! HTTP fetch layer.
//!
//! Blocking requests with bounded timeouts: one fetch for the source page
//! (bytes, transcoded to UTF-8 via charset sniffing) and one for platform
//! JSON endpoints. Callers absorb every error here into "source absent".

use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;
use crate::options::Options;

/// Matches a charset declaration in either meta form
/// (`<meta charset="...">` or `content="...; charset=..."`).
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

fn agent(timeout_secs: u64) -> ureq::Agent {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(timeout_secs)))
        .build()
        .into()
}

/// Fetch a page as a UTF-8 string, following redirects.
///
/// Sends browser-like `User-Agent`, `Accept`, and `Accept-Language`
/// headers; non-2xx responses surface as errors for the caller to absorb.
pub fn fetch_page(url: &str, options: &Options) -> Result<String> {
    let response = agent(options.timeout_secs)
        .get(url)
        .header("User-Agent", &options.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", &options.accept_language)
        .call()?;

    let bytes = response.into_body().read_to_vec()?;
    Ok(transcode_to_utf8(&bytes))
}

/// Fetch a JSON endpoint (e.g. a Shopify product payload).
pub fn fetch_json(url: &str, options: &Options) -> Result<serde_json::Value> {
    let response = agent(options.timeout_secs)
        .get(url)
        .header("User-Agent", &options.user_agent)
        .header("Accept", "application/json")
        .call()?;

    let body = response.into_body().read_to_string()?;
    Ok(serde_json::from_str(&body)?)
}

/// Transcode HTML bytes to UTF-8, sniffing the charset from the document
/// head. Defaults to lossy UTF-8 when no declaration is found; invalid
/// sequences become replacement characters rather than errors.
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let head = &bytes[..bytes.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    let encoding = CHARSET_RE
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passthrough() {
        let html = b"<html><body>Hello</body></html>";
        assert_eq!(transcode_to_utf8(html), "<html><body>Hello</body></html>");
    }

    #[test]
    fn iso88591_declared_charset_is_decoded() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn content_type_charset_form_is_detected() {
        let html = b"<meta http-equiv=\"Content-Type\" content=\"text/html; charset=windows-1252\"><body>\x93quoted\x94</body>";
        let decoded = transcode_to_utf8(html);
        assert!(decoded.contains("\u{201C}quoted\u{201D}"));
    }

    #[test]
    fn invalid_utf8_degrades_to_replacement_chars() {
        let html = b"<html><body>Test \xFF\xFE end</body></html>";
        let decoded = transcode_to_utf8(html);
        assert!(decoded.contains("Test"));
        assert!(decoded.contains("end"));
    }
}
