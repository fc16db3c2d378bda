//! Raw shapes from a storefront's public `products.json` endpoint.
//!
//! ## Observed shape
//!
//! ### `id`
//! A JSON number on Shopify stores, but some proxies and headless front ends
//! re-serialize it as a string. Kept as a raw [`Value`] and stringified
//! during normalization.
//!
//! ### `body_html`
//! Raw HTML, frequently `null`.
//!
//! ### `images` / `variants`
//! Arrays, occasionally `null` on stripped-down stores. Modeled as
//! `Option<Vec<_>>` so an explicit `null` does not fail the whole entry.
//!
//! ### `variants[].price`
//! A decimal string (`"30.00"`) on Shopify; a bare number elsewhere. Variants
//! are otherwise passed through untouched.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A single entry from the `products` array.
#[derive(Debug, Deserialize)]
pub struct ShopifyProduct {
    /// Numeric or string product ID. `Null` when missing.
    #[serde(default)]
    pub id: Value,

    #[serde(default)]
    pub title: Option<String>,

    /// Raw HTML product description.
    #[serde(default)]
    pub body_html: Option<String>,

    #[serde(default)]
    pub images: Option<Vec<ShopifyImage>>,

    /// Variant objects, kept verbatim.
    #[serde(default)]
    pub variants: Option<Vec<Map<String, Value>>>,
}

/// A product image. Only the CDN URL is used.
#[derive(Debug, Deserialize)]
pub struct ShopifyImage {
    #[serde(default)]
    pub src: Option<String>,
}
