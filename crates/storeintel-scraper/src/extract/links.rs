use storeintel_core::ImportantLinks;

use crate::client::resolve_url;
use crate::document::{attr, element_text, ParsedDocument};

const TRACKING: [&str; 3] = ["track", "order", "tracking"];
const CONTACT: [&str; 2] = ["contact", "contact us"];
const BLOG: [&str; 3] = ["blog", "news", "articles"];
const SHIPPING: [&str; 2] = ["shipping", "delivery"];
const SIZING: [&str; 3] = ["size", "guide", "sizing"];

/// Classifies every anchor by its text into the five link categories.
///
/// Relative hrefs are resolved against `base_url`. An anchor whose text hits
/// several keyword sets fills each of those categories; within a category
/// the last anchor in document order wins.
#[must_use]
pub fn extract_important_links(doc: &ParsedDocument, base_url: &str) -> ImportantLinks {
    let mut links = ImportantLinks::default();
    for anchor in doc.select("a[href]") {
        let Some(href) = attr(anchor, "href") else {
            continue;
        };
        let text = element_text(anchor).trim().to_lowercase();
        if text.is_empty() {
            continue;
        }
        let href = resolve_url(base_url, href);

        let categories = [
            (&TRACKING[..], &mut links.order_tracking),
            (&CONTACT[..], &mut links.contact_us),
            (&BLOG[..], &mut links.blogs),
            (&SHIPPING[..], &mut links.shipping_info),
            (&SIZING[..], &mut links.size_guide),
        ];
        for (keywords, slot) in categories {
            if keywords.iter().any(|keyword| text.contains(keyword)) {
                *slot = Some(href.clone());
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_and_resolves_relative_links() {
        let doc = ParsedDocument::parse(
            r#"<nav>
                <a href="/apps/track">Track Your Package</a>
                <a href="/pages/contact">Contact Us</a>
                <a href="https://acme.com/blogs/journal">Journal &amp; News</a>
                <a href="/policies/shipping-policy">Shipping</a>
                <a href="/pages/fit">Fit Guide</a>
               </nav>"#,
        );
        let links = extract_important_links(&doc, "https://acme.com");
        assert_eq!(links.order_tracking.as_deref(), Some("https://acme.com/apps/track"));
        assert_eq!(links.contact_us.as_deref(), Some("https://acme.com/pages/contact"));
        assert_eq!(links.blogs.as_deref(), Some("https://acme.com/blogs/journal"));
        assert_eq!(
            links.shipping_info.as_deref(),
            Some("https://acme.com/policies/shipping-policy")
        );
        assert_eq!(links.size_guide.as_deref(), Some("https://acme.com/pages/fit"));
    }

    #[test]
    fn one_anchor_can_fill_several_categories() {
        let doc = ParsedDocument::parse(r#"<a href="/pages/help">Order tracking and delivery</a>"#);
        let links = extract_important_links(&doc, "https://acme.com");
        assert_eq!(links.order_tracking.as_deref(), Some("https://acme.com/pages/help"));
        assert_eq!(links.shipping_info.as_deref(), Some("https://acme.com/pages/help"));
        assert!(links.contact_us.is_none());
    }

    #[test]
    fn last_match_per_category_wins() {
        let doc = ParsedDocument::parse(
            r#"<a href="/pages/contact">Contact</a><a href="/pages/contact-us">Contact us</a>"#,
        );
        let links = extract_important_links(&doc, "https://acme.com");
        assert_eq!(links.contact_us.as_deref(), Some("https://acme.com/pages/contact-us"));
    }

    #[test]
    fn unrelated_links_leave_everything_empty() {
        let doc = ParsedDocument::parse(r#"<a href="/collections/all">Shop all</a>"#);
        assert_eq!(
            extract_important_links(&doc, "https://acme.com"),
            ImportantLinks::default()
        );
    }
}
