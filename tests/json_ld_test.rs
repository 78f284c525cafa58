//! JSON-LD structured data extraction.

use rs_prodmeta::dom;
use rs_prodmeta::extractors::json_ld;
use rs_prodmeta::Source;

const URL: &str = "https://example.com/products/mug";

fn extract(html: &str) -> Option<rs_prodmeta::ExtractionResult> {
    json_ld::extract(&dom::parse(html), URL)
}

#[test]
fn full_product_block() {
    let html = r#"<html><head><script type="application/ld+json">
    {
        "@context": "https://schema.org",
        "@type": "Product",
        "name": "Stoneware Mug",
        "description": "A sturdy hand-thrown mug.",
        "image": "https://example.com/mug.jpg",
        "brand": {"@type": "Brand", "name": "Kiln Studio"},
        "offers": {
            "@type": "Offer",
            "price": "24.00",
            "priceCurrency": "USD",
            "availability": "https://schema.org/InStock"
        }
    }
    </script></head><body></body></html>"#;

    let result = extract(html).expect("product block");
    assert_eq!(result.source, Source::JsonLd);
    assert_eq!(result.metadata.title.as_deref(), Some("Stoneware Mug"));
    assert_eq!(result.metadata.description.as_deref(), Some("A sturdy hand-thrown mug."));
    assert_eq!(result.metadata.image_url.as_deref(), Some("https://example.com/mug.jpg"));
    assert_eq!(result.metadata.brand.as_deref(), Some("Kiln Studio"));
    assert_eq!(result.metadata.price.as_deref(), Some("24.00"));
    assert_eq!(result.metadata.currency.as_deref(), Some("USD"));
    assert_eq!(result.metadata.availability.as_deref(), Some("InStock"));
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn product_nested_in_graph() {
    let html = r#"<html><head><script type="application/ld+json">
    {
        "@context": "https://schema.org",
        "@graph": [
            {"@type": "WebSite", "name": "Kiln Studio Store"},
            {"@type": "Product", "name": "Graph Mug",
             "offers": {"price": 18.5, "priceCurrency": "EUR"}}
        ]
    }
    </script></head><body></body></html>"#;

    let result = extract(html).expect("graph product");
    assert_eq!(result.metadata.title.as_deref(), Some("Graph Mug"));
    assert_eq!(result.metadata.price.as_deref(), Some("18.5"));
    assert_eq!(result.metadata.currency.as_deref(), Some("EUR"));
}

#[test]
fn top_level_array_of_nodes() {
    let html = r#"<html><head><script type="application/ld+json">
    [
        {"@type": "BreadcrumbList"},
        {"@type": "Product", "name": "Array Mug"}
    ]
    </script></head><body></body></html>"#;

    let result = extract(html).expect("array product");
    assert_eq!(result.metadata.title.as_deref(), Some("Array Mug"));
}

#[test]
fn invalid_json_blocks_are_skipped() {
    let html = r#"<html><head>
    <script type="application/ld+json">{not valid json</script>
    <script type="application/ld+json">
        {"@type": "Product", "name": "Second Block Mug"}
    </script>
    </head><body></body></html>"#;

    let result = extract(html).expect("second block");
    assert_eq!(result.metadata.title.as_deref(), Some("Second Block Mug"));
}

#[test]
fn non_product_types_are_ignored() {
    let html = r#"<html><head><script type="application/ld+json">
    {"@type": "Article", "name": "Not a product"}
    </script></head><body></body></html>"#;

    assert!(extract(html).is_none());
}

#[test]
fn offers_array_uses_first_offer() {
    let html = r#"<html><head><script type="application/ld+json">
    {"@type": "Product", "name": "Multi Offer Mug",
     "offers": [
        {"price": "24.00", "priceCurrency": "USD"},
        {"price": "30.00", "priceCurrency": "USD"}
     ]}
    </script></head><body></body></html>"#;

    let result = extract(html).expect("product");
    assert_eq!(result.metadata.price.as_deref(), Some("24.00"));
}

#[test]
fn numeric_price_is_stringified() {
    let html = r#"<html><head><script type="application/ld+json">
    {"@type": "Product", "name": "Numeric Mug", "offers": {"price": 24}}
    </script></head><body></body></html>"#;

    let result = extract(html).expect("product");
    assert_eq!(result.metadata.price.as_deref(), Some("24"));
}

#[test]
fn image_array_uses_first_entry() {
    let html = r#"<html><head><script type="application/ld+json">
    {"@type": "Product", "name": "Mug",
     "image": ["https://example.com/a.jpg", "https://example.com/b.jpg"]}
    </script></head><body></body></html>"#;

    let result = extract(html).expect("product");
    assert_eq!(result.metadata.image_url.as_deref(), Some("https://example.com/a.jpg"));
}
