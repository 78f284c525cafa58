//! Open Graph / meta tag extraction through the public API.

use rs_prodmeta::{extract_from_html, Options};

const URL: &str = "https://example.com/products/mug";

fn options() -> Options {
    Options {
        fetch_shopify_data: false,
        ..Options::default()
    }
}

#[test]
fn og_tags_drive_the_merged_result() {
    let html = r#"<html><head>
        <meta property="og:title" content="Stoneware Mug">
        <meta property="og:description" content="A sturdy hand-thrown mug.">
        <meta property="og:image" content="https://example.com/mug.jpg">
        <meta property="og:price:amount" content="24.00">
        <meta property="og:price:currency" content="USD">
    </head><body></body></html>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.title.as_deref(), Some("Stoneware Mug"));
    assert_eq!(result.metadata.image_url.as_deref(), Some("https://example.com/mug.jpg"));
    assert_eq!(result.metadata.price.as_deref(), Some("24.00"));
    assert_eq!(result.metadata.currency.as_deref(), Some("USD"));
    // title + image + price all present.
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn twitter_tags_fill_in_when_og_is_missing() {
    let html = r#"<head>
        <meta name="twitter:title" content="Twitter Mug">
        <meta name="twitter:image" content="https://example.com/tw.jpg">
    </head>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.title.as_deref(), Some("Twitter Mug"));
    assert_eq!(result.metadata.image_url.as_deref(), Some("https://example.com/tw.jpg"));
}

#[test]
fn title_element_is_the_last_title_resort() {
    let html = "<html><head><title>Element Mug</title></head><body></body></html>";
    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.title.as_deref(), Some("Element Mug"));
}

#[test]
fn entities_in_meta_content_are_decoded() {
    let html = r#"<head>
        <meta property="og:title" content="Mugs &amp; More &#8211; Shop">
    </head>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.title.as_deref(), Some("Mugs & More \u{2013} Shop"));
}

#[test]
fn price_meta_with_currency_symbol() {
    let html = r#"<head>
        <meta property="product:price:amount" content="$1,299.00">
    </head>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.price.as_deref(), Some("1299.00"));
}
