//! Configuration options for extraction.
//!
//! The `Options` struct controls fetch behavior and which network-backed
//! strategies are allowed to run. Use `Default::default()` for standard
//! settings.

/// Configuration options for an extraction call.
///
/// # Example
///
/// ```rust
/// use rs_prodmeta::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     timeout_secs: 5,
///     fetch_shopify_data: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// User-Agent header for page fetches. A browser-like value; many
    /// storefronts serve reduced markup to unknown agents.
    pub user_agent: String,

    /// Accept-Language header for page fetches.
    pub accept_language: String,

    /// Per-request timeout in seconds for the page fetch and the Shopify
    /// product endpoint fetch. A source that times out is treated as
    /// absent rather than failing the call.
    ///
    /// Default: `10`
    pub timeout_secs: u64,

    /// Allow the Shopify extractor to fetch the store's product JSON
    /// endpoint when a Shopify storefront is detected. Disable for
    /// offline extraction over already-fetched HTML.
    ///
    /// Default: `true`
    pub fetch_shopify_data: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: concat!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
                "AppleWebKit/537.36 (KHTML, like Gecko) ",
                "Chrome/120.0.0.0 Safari/537.36"
            )
            .to_string(),
            accept_language: "en-US,en;q=0.9".to_string(),
            timeout_secs: 10,
            fetch_shopify_data: true,
        }
    }
}
