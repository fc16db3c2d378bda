use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A storefront product, normalized from one entry of a `products.json` page.
///
/// Built once per catalog page and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    /// Storefront product ID, stored as a string to avoid precision loss.
    pub id: String,
    pub title: String,
    /// Plain text of `body_html`, truncated to [`NormalizedProduct::DESCRIPTION_MAX_CHARS`].
    pub description: String,
    /// Price of the first variant as a decimal string, e.g. `"12.99"`.
    /// `"0"` when the product has no priced variant.
    pub price: String,
    /// Image `src` URLs in storefront order.
    pub images: Vec<String>,
    /// Variant objects exactly as the storefront returned them.
    pub variants: Vec<Map<String, Value>>,
}

impl NormalizedProduct {
    pub const DESCRIPTION_MAX_CHARS: usize = 500;

    /// Title as it would appear in a product URL: lower-cased, spaces
    /// replaced with hyphens.
    #[must_use]
    pub fn title_slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }
}
