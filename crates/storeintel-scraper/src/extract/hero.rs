use storeintel_core::{BrandInsights, NormalizedProduct};

use crate::document::{attr, ParsedDocument};

/// Product links considered on the homepage.
const MAX_PRODUCT_LINKS: usize = 10;

/// Catalog products that the homepage links to, at most six, in catalog order.
#[must_use]
pub fn extract_hero_products(
    doc: &ParsedDocument,
    catalog: &[NormalizedProduct],
) -> Vec<NormalizedProduct> {
    match_hero_products(&product_handles(doc), catalog)
}

/// Candidate product handles from the first ten `/products/` links: the path
/// after the last `/products/`, without query string, fragment, or trailing
/// slash. Empty handles are dropped; duplicates are kept once.
#[must_use]
pub fn product_handles(doc: &ParsedDocument) -> Vec<String> {
    let mut handles: Vec<String> = Vec::new();
    for anchor in doc
        .select("a[href]")
        .into_iter()
        .filter(|a| attr(*a, "href").is_some_and(|href| href.contains("/products/")))
        .take(MAX_PRODUCT_LINKS)
    {
        let href = attr(anchor, "href").unwrap_or_default();
        let Some(tail) = href.rsplit("/products/").next() else {
            continue;
        };
        let handle = tail
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_lowercase();
        if !handle.is_empty() && !handles.contains(&handle) {
            handles.push(handle);
        }
    }
    handles
}

/// Selects catalog products whose hyphenated, lower-cased title contains any
/// of `handles`. Output follows catalog order and stops at six.
#[must_use]
pub fn match_hero_products(
    handles: &[String],
    catalog: &[NormalizedProduct],
) -> Vec<NormalizedProduct> {
    if handles.is_empty() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|product| !product.title.is_empty())
        .filter(|product| {
            let slug = product.title_slug();
            handles.iter().any(|handle| slug.contains(handle.as_str()))
        })
        .take(BrandInsights::MAX_HERO_PRODUCTS)
        .cloned()
        .collect()
}
