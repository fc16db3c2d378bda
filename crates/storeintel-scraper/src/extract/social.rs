use storeintel_core::SocialHandles;

use crate::document::{attr, ParsedDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Platform {
    Instagram,
    Facebook,
    Twitter,
    TikTok,
    YouTube,
    LinkedIn,
}

const PLATFORM_DOMAINS: [(&str, Platform); 6] = [
    ("instagram.com", Platform::Instagram),
    ("facebook.com", Platform::Facebook),
    ("twitter.com", Platform::Twitter),
    ("tiktok.com", Platform::TikTok),
    ("youtube.com", Platform::YouTube),
    ("linkedin.com", Platform::LinkedIn),
];

/// Social profile links, lower-cased. When a platform is linked more than
/// once, the last link in document order wins.
#[must_use]
pub fn extract_social_handles(doc: &ParsedDocument) -> SocialHandles {
    let mut handles = SocialHandles::default();
    for anchor in doc.select("a[href]") {
        let href = attr(anchor, "href").unwrap_or_default().to_lowercase();
        let Some(platform) = platform_of(&href) else {
            continue;
        };
        let slot = match platform {
            Platform::Instagram => &mut handles.instagram,
            Platform::Facebook => &mut handles.facebook,
            Platform::Twitter => &mut handles.twitter,
            Platform::TikTok => &mut handles.tiktok,
            Platform::YouTube => &mut handles.youtube,
            Platform::LinkedIn => &mut handles.linkedin,
        };
        *slot = Some(href);
    }
    handles
}

fn platform_of(href: &str) -> Option<Platform> {
    if let Some((_, platform)) = PLATFORM_DOMAINS
        .iter()
        .find(|(domain, _)| href.contains(domain))
    {
        return Some(*platform);
    }
    // `x.com` is a substring of too many hosts; compare the host itself.
    let url = reqwest::Url::parse(href).ok()?;
    let host = url.host_str()?;
    (host == "x.com" || host.ends_with(".x.com")).then_some(Platform::Twitter)
}
