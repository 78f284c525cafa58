//! Simple CLI that fetches a product URL and outputs the merged
//! extraction result as JSON to stdout.

use rs_prodmeta::{extract_from_url, Options};

fn main() {
    let Some(url) = std::env::args().nth(1) else {
        eprintln!("Usage: extract_url <product-url>");
        std::process::exit(1);
    };

    let result = extract_from_url(&url, &Options::default());

    println!("{}", serde_json::to_string_pretty(&result).unwrap_or_default());
}
