use storeintel_core::BrandInsights;

use crate::client::extract_domain;
use crate::document::{attr, ParsedDocument};

/// Best-effort brand name. First non-empty source wins:
///
/// 1. `<meta property="og:site_name">` content
/// 2. `<title>`, cut at the first `|` and then the first `-`
/// 3. alt text of the first `<img>` whose class mentions `logo`
/// 4. the first label of the URL's host, `www.` stripped, capitalized
///
/// Falls back to `"Unknown Brand"`.
#[must_use]
pub fn extract_brand_name(doc: &ParsedDocument, url: &str) -> String {
    site_name(doc)
        .or_else(|| title_brand(doc))
        .or_else(|| logo_alt(doc))
        .or_else(|| domain_brand(url))
        .unwrap_or_else(|| BrandInsights::UNKNOWN_BRAND.to_string())
}

fn site_name(doc: &ParsedDocument) -> Option<String> {
    doc.meta_content("property", "og:site_name")
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn title_brand(doc: &ParsedDocument) -> Option<String> {
    let title = doc.select_first("title")?;
    let text = crate::document::element_text(title);
    let head = text.split('|').next().unwrap_or_default();
    let head = head.split('-').next().unwrap_or_default().trim();
    (!head.is_empty()).then(|| head.to_owned())
}

fn logo_alt(doc: &ParsedDocument) -> Option<String> {
    // Only the first logo image is consulted.
    let logo = doc.select("img[class]").into_iter().find(|img| {
        attr(*img, "class").is_some_and(|class| class.to_ascii_lowercase().contains("logo"))
    })?;
    attr(logo, "alt")
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map(str::to_owned)
}

fn domain_brand(url: &str) -> Option<String> {
    let host = extract_domain(url)?.replace("www.", "");
    let label = host.split('.').next()?;
    capitalize(label)
}

fn capitalize(word: &str) -> Option<String> {
    let mut chars = word.chars();
    let first = chars.next()?;
    Some(first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_og_site_name() {
        let doc = ParsedDocument::parse(
            r#"<head><meta property="og:site_name" content="Acme Outfitters">
               <title>Something Else | Home</title></head>"#,
        );
        assert_eq!(extract_brand_name(&doc, "https://acme.com"), "Acme Outfitters");
    }

    #[test]
    fn title_is_cut_at_pipe() {
        let doc = ParsedDocument::parse("<head><title>Acme | Home</title></head>");
        assert_eq!(extract_brand_name(&doc, "https://shop.example.com"), "Acme");
    }

    #[test]
    fn title_is_cut_at_dash_after_pipe() {
        let doc = ParsedDocument::parse("<head><title>Acme - Outdoor Gear | Home</title></head>");
        assert_eq!(extract_brand_name(&doc, "https://shop.example.com"), "Acme");
    }

    #[test]
    fn empty_site_name_falls_through_to_title() {
        let doc = ParsedDocument::parse(
            r#"<head><meta property="og:site_name" content="  "><title>Bolt | Shop</title></head>"#,
        );
        assert_eq!(extract_brand_name(&doc, "https://bolt.com"), "Bolt");
    }

    #[test]
    fn logo_alt_used_when_no_title() {
        let doc = ParsedDocument::parse(
            r#"<body><img class="hero" alt="Banner"><img class="Header__Logo" alt="Northwind"></body>"#,
        );
        assert_eq!(extract_brand_name(&doc, "https://nw.example.com"), "Northwind");
    }

    #[test]
    fn domain_fallback_strips_www_and_capitalizes() {
        let doc = ParsedDocument::parse("<body><p>nothing here</p></body>");
        assert_eq!(extract_brand_name(&doc, "https://www.gymshark.com"), "Gymshark");
    }

    #[test]
    fn domain_fallback_lowercases_rest_of_label() {
        let doc = ParsedDocument::parse("<body></body>");
        assert_eq!(extract_brand_name(&doc, "https://ALLBIRDS.com/"), "Allbirds");
    }

    #[test]
    fn unknown_brand_when_nothing_usable() {
        let doc = ParsedDocument::parse("<body></body>");
        assert_eq!(extract_brand_name(&doc, "not a url"), "Unknown Brand");
    }
}
