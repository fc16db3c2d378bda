//! Multi-page catalog fetch for `StoreClient`.

use serde_json::Value;
use storeintel_core::NormalizedProduct;

use crate::normalize::normalize_entry;
use crate::pagination::{catalog_page_url, is_last_page};

use super::StoreClient;

impl StoreClient {
    /// Fetches the full product catalog by walking `products.json` pages.
    ///
    /// Starts at page 1 and stops on the first page that has no `products`
    /// array, an empty one, or fewer than [`crate::pagination::PAGE_SIZE`]
    /// entries. Fetch failures end pagination quietly with whatever has been
    /// collected so far. Entries that cannot be normalized are skipped, but
    /// still count towards the page size when deciding whether to continue.
    ///
    /// Unbounded unless [`StoreClient::with_max_catalog_pages`] set a cap.
    pub async fn fetch_catalog(&self, base_url: &str) -> Vec<NormalizedProduct> {
        let mut catalog: Vec<NormalizedProduct> = Vec::new();
        let mut page = 1u32;

        loop {
            if let Some(max_pages) = self.max_catalog_pages {
                if page > max_pages {
                    tracing::warn!(
                        base_url,
                        max_pages,
                        "catalog page cap reached; returning partial catalog"
                    );
                    break;
                }
            }

            let url = catalog_page_url(base_url, page);
            let body = self.fetch_json(&url).await;

            let Some(entries) = body
                .get("products")
                .and_then(Value::as_array)
                .filter(|entries| !entries.is_empty())
            else {
                break;
            };

            catalog.extend(entries.iter().filter_map(normalize_entry));

            if is_last_page(entries.len()) {
                break;
            }
            page += 1;
        }

        tracing::debug!(base_url, pages = page, products = catalog.len(), "catalog fetched");
        catalog
    }
}
