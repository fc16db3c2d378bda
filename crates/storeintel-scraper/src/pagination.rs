//! Page-index pagination over `products.json`.
//!
//! The endpoint is requested as `{base}/products.json?limit=250&page={n}`
//! starting at `n = 1`. A page holding fewer than [`PAGE_SIZE`] entries
//! (including an empty page, or a response with no `products` array) is the
//! last one, so the loop always terminates after the first short page.

/// Entries requested per page. Also the threshold for "this was a full page".
pub const PAGE_SIZE: usize = 250;

/// Builds the `products.json` URL for `page` (1-based) under `base_url`.
///
/// Any query string or fragment on `base_url` is dropped; a trailing slash on
/// its path is ignored.
#[must_use]
pub fn catalog_page_url(base_url: &str, page: u32) -> String {
    match reqwest::Url::parse(base_url) {
        Ok(mut url) => {
            let path = format!("{}/products.json", url.path().trim_end_matches('/'));
            url.set_path(&path);
            url.set_fragment(None);
            url.set_query(None);
            url.query_pairs_mut()
                .append_pair("limit", &PAGE_SIZE.to_string())
                .append_pair("page", &page.to_string());
            url.to_string()
        }
        Err(e) => {
            tracing::debug!(base_url, error = %e, "unparsable base URL; building catalog URL by hand");
            format!(
                "{}/products.json?limit={PAGE_SIZE}&page={page}",
                base_url.trim_end_matches('/')
            )
        }
    }
}

/// `true` when a page with `entries` products means there is nothing after it.
#[must_use]
pub fn is_last_page(entries: usize) -> bool {
    entries < PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_first_page_url() {
        assert_eq!(
            catalog_page_url("https://acme.com", 1),
            "https://acme.com/products.json?limit=250&page=1"
        );
    }

    #[test]
    fn strips_trailing_slash_and_query() {
        assert_eq!(
            catalog_page_url("https://acme.com/?ref=ad", 3),
            "https://acme.com/products.json?limit=250&page=3"
        );
    }

    #[test]
    fn keeps_collection_path() {
        assert_eq!(
            catalog_page_url("https://acme.com/collections/all/", 2),
            "https://acme.com/collections/all/products.json?limit=250&page=2"
        );
    }

    #[test]
    fn falls_back_to_string_join_for_unparsable_base() {
        assert_eq!(
            catalog_page_url("not a url/", 1),
            "not a url/products.json?limit=250&page=1"
        );
    }

    #[test]
    fn short_and_empty_pages_are_last() {
        assert!(is_last_page(0));
        assert!(is_last_page(PAGE_SIZE - 1));
        assert!(!is_last_page(PAGE_SIZE));
    }
}
