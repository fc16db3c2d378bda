//! Facet extractors.
//!
//! Each extractor is a stateless function over a [`crate::ParsedDocument`]
//! that produces one facet of a [`storeintel_core::BrandInsights`]. They
//! never return errors: when the structure they look for is missing they
//! walk their fallback chain and finally return the facet's empty value.
//! [`policy`] is the only one that fetches, over its own fixed path list.

pub mod brand_name;
pub mod contact;
pub mod context;
pub mod faq;
pub mod hero;
pub mod links;
pub mod policy;
pub mod social;

pub use brand_name::extract_brand_name;
pub use contact::extract_contact_details;
pub use context::extract_brand_context;
pub use faq::extract_faqs;
pub use hero::{extract_hero_products, match_hero_products, product_handles};
pub use links::extract_important_links;
pub use policy::{fetch_policy_content, PolicyKind};
pub use social::extract_social_handles;

/// First `max` characters of `text` (not bytes).
#[must_use]
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// `true` when `text` is longer than `min` characters.
#[must_use]
pub(crate) fn longer_than(text: &str, min: usize) -> bool {
    text.chars().nth(min).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn longer_than_is_strict() {
        assert!(!longer_than("abcde", 5));
        assert!(longer_than("abcdef", 5));
    }
}
