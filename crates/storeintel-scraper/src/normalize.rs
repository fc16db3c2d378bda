//! Normalization from raw `products.json` entries to [`NormalizedProduct`].

use serde_json::Value;
use storeintel_core::NormalizedProduct;

use crate::document::ParsedDocument;
use crate::extract::truncate_chars;
use crate::types::ShopifyProduct;

/// Deserializes and normalizes one entry of a `products` array.
///
/// Returns `None` (with a warning) when the entry is not an object or has
/// wrongly-typed fields.
#[must_use]
pub fn normalize_entry(entry: &Value) -> Option<NormalizedProduct> {
    match serde_json::from_value::<ShopifyProduct>(entry.clone()) {
        Ok(product) => Some(normalize_product(product)),
        Err(e) => {
            tracing::warn!(error = %e, "skipping malformed catalog entry");
            None
        }
    }
}

/// Normalizes a raw [`ShopifyProduct`] into a [`NormalizedProduct`].
///
/// - `id` is stringified (numbers and strings alike; missing → `""`).
/// - `description` is the plain text of `body_html`, at most 500 characters.
/// - `price` comes from the first variant; `"0"` when there is none.
/// - image entries without a `src` are dropped.
#[must_use]
pub fn normalize_product(product: ShopifyProduct) -> NormalizedProduct {
    let variants = product.variants.unwrap_or_default();

    let price = variants
        .first()
        .and_then(|variant| variant.get("price"))
        .and_then(value_to_string)
        .unwrap_or_else(|| "0".to_string());

    let description = product
        .body_html
        .as_deref()
        .map(|html| {
            truncate_chars(
                &ParsedDocument::parse_fragment(html).text(),
                NormalizedProduct::DESCRIPTION_MAX_CHARS,
            )
        })
        .unwrap_or_default();

    let images = product
        .images
        .unwrap_or_default()
        .into_iter()
        .filter_map(|image| image.src)
        .filter(|src| !src.is_empty())
        .collect();

    NormalizedProduct {
        id: value_to_string(&product.id).unwrap_or_default(),
        title: product.title.unwrap_or_default(),
        description,
        price,
        images,
        variants,
    }
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
