//! End-to-end merge behavior through `extract_from_html`.

use rs_prodmeta::{extract_from_html, Options, Platform, Source};

const URL: &str = "https://example.com/products/mug";

fn options() -> Options {
    Options {
        fetch_shopify_data: false,
        ..Options::default()
    }
}

#[test]
fn json_ld_outranks_open_graph_per_field() {
    let html = r#"<html><head>
        <meta property="og:title" content="B">
        <meta property="og:image" content="https://example.com/og.jpg">
        <script type="application/ld+json">
        {"@type": "Product", "name": "A"}
        </script>
    </head><body></body></html>"#;

    let result = extract_from_html(html, URL, &options());
    // Title from JSON-LD; image only Open Graph had, so it fills in.
    assert_eq!(result.metadata.title.as_deref(), Some("A"));
    assert_eq!(result.metadata.image_url.as_deref(), Some("https://example.com/og.jpg"));
    assert_eq!(result.sources, vec![Source::JsonLd, Source::OpenGraph]);
}

#[test]
fn fallback_scan_runs_only_when_no_strategy_found_a_price() {
    let without_price = r#"<html><head>
        <meta property="og:title" content="Mug">
    </head><body>
        <div class="price-box">Now $18.00</div>
    </body></html>"#;

    let result = extract_from_html(without_price, URL, &options());
    assert_eq!(result.metadata.price.as_deref(), Some("18.00"));
    assert!(result.sources.contains(&Source::HtmlFallback));

    let with_price = r#"<html><head>
        <meta property="og:title" content="Mug">
        <meta property="og:price:amount" content="24.00">
    </head><body>
        <div class="price-box">Now $18.00</div>
    </body></html>"#;

    let result = extract_from_html(with_price, URL, &options());
    assert_eq!(result.metadata.price.as_deref(), Some("24.00"));
    assert!(!result.sources.contains(&Source::HtmlFallback));
}

#[test]
fn confidence_boundaries() {
    // Nothing extractable at all.
    let result = extract_from_html("<html><body></body></html>", URL, &options());
    assert_eq!(result.confidence, 0.0);
    assert!(result.sources.is_empty());

    // Two of the three critical fields (title, image; no price).
    let html = r#"<head>
        <meta property="og:title" content="Mug">
        <meta property="og:image" content="https://example.com/i.jpg">
    </head>"#;
    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.confidence, 2.0 / 3.0);

    // All three critical fields.
    let html = r#"<head>
        <meta property="og:title" content="Mug">
        <meta property="og:image" content="https://example.com/i.jpg">
        <meta property="og:price:amount" content="24.00">
    </head>"#;
    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn extraction_is_deterministic() {
    let html = r#"<html><head>
        <meta property="og:title" content="Mug">
        <script type="application/ld+json">
        {"@type": "Product", "name": "Mug", "offers": {"price": "24.00"}}
        </script>
    </head><body><div class="price">$24.00</div></body></html>"#;

    let first = serde_json::to_string(&extract_from_html(html, URL, &options()))
        .expect("serializable");
    let second = serde_json::to_string(&extract_from_html(html, URL, &options()))
        .expect("serializable");
    assert_eq!(first, second);
}

#[test]
fn entities_in_structured_data_are_decoded() {
    let html = r#"<html><head>
        <script type="application/ld+json">
        {"@type": "Product", "name": "Fish &amp; Chips &quot;Deluxe&quot; Mug"}
        </script>
    </head><body></body></html>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(
        result.metadata.title.as_deref(),
        Some("Fish & Chips \"Deluxe\" Mug")
    );
}

#[test]
fn price_without_currency_defaults_to_usd() {
    let html = r#"<head>
        <meta property="og:title" content="Mug">
        <meta property="og:price:amount" content="40">
    </head>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.price.as_deref(), Some("40"));
    assert_eq!(result.metadata.currency.as_deref(), Some("USD"));
}

#[test]
fn malformed_input_degrades_to_empty_result() {
    let result = extract_from_html("<<<%%% not even close to html", URL, &options());
    assert_eq!(result.metadata.url, URL);
    assert_eq!(result.confidence, 0.0);

    let result = extract_from_html("", URL, &options());
    assert_eq!(result.confidence, 0.0);
}

#[test]
fn platform_is_reported_even_without_product_fields() {
    let html = r#"<html><head>
        <meta name="generator" content="Shopify">
        <meta property="og:title" content="Mug">
    </head><body></body></html>"#;

    let result = extract_from_html(html, URL, &options());
    assert_eq!(result.metadata.platform, Platform::Shopify);
    assert!(result.extracted_fields.contains(&"platform".to_string()));
}
