use storeintel_core::BrandInsights;

use crate::document::{element_text, ParsedDocument};

use super::{longer_than, truncate_chars};

const ABOUT_SELECTORS: [&str; 5] = [
    ".about",
    ".brand-story",
    ".our-story",
    ".company-info",
    r#"[class*="about"]"#,
];

const MIN_CONTEXT_CHARS: usize = 50;

/// Free-text "about the brand" blurb: the first about-like section with
/// more than 50 characters of text, else the meta description. Truncated
/// to 1000 characters.
#[must_use]
pub fn extract_brand_context(doc: &ParsedDocument) -> Option<String> {
    let from_section = ABOUT_SELECTORS.iter().find_map(|selector| {
        let section = doc.select_first(selector)?;
        let text = element_text(section);
        longer_than(&text, MIN_CONTEXT_CHARS).then_some(text)
    });

    from_section
        .or_else(|| {
            doc.meta_content("name", "description")
                .map(|content| content.trim().to_owned())
                .filter(|content| longer_than(content, MIN_CONTEXT_CHARS))
        })
        .map(|text| truncate_chars(&text, BrandInsights::BRAND_CONTEXT_MAX_CHARS))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORY: &str = "Founded in 2012 in a garage in Portland, we roast small batches every morning.";

    #[test]
    fn about_section_wins() {
        let html = format!(
            r#"<head><meta name="description" content="A meta description that is definitely longer than fifty characters."></head>
               <body><section class="our-story"><p>{STORY}</p></section></body>"#
        );
        let context = extract_brand_context(&ParsedDocument::parse(&html));
        assert_eq!(context.as_deref(), Some(STORY));
    }

    #[test]
    fn wildcard_class_matches_about_variants() {
        let html = format!(r#"<div class="homepage-about-us"><p>{STORY}</p></div>"#);
        let context = extract_brand_context(&ParsedDocument::parse(&html));
        assert_eq!(context.as_deref(), Some(STORY));
    }

    #[test]
    fn short_section_falls_through_to_meta() {
        let html = r#"<head><meta name="description" content="Cold brew coffee concentrate made from organic beans in small batches."></head>
                      <body><div class="about">About us</div></body>"#;
        let context = extract_brand_context(&ParsedDocument::parse(html));
        assert_eq!(
            context.as_deref(),
            Some("Cold brew coffee concentrate made from organic beans in small batches.")
        );
    }

    #[test]
    fn short_meta_means_absent() {
        let html = r#"<head><meta name="description" content="Coffee."></head><body></body>"#;
        assert!(extract_brand_context(&ParsedDocument::parse(html)).is_none());
    }

    #[test]
    fn long_section_is_truncated() {
        let html = format!(r#"<div class="brand-story">{}</div>"#, "story ".repeat(400));
        let context = extract_brand_context(&ParsedDocument::parse(&html)).expect("context");
        assert_eq!(context.chars().count(), 1000);
    }
}
