use storeintel_core::BrandInsights;

use crate::client::{resolve_url, StoreClient};
use crate::document::{element_text, ParsedDocument};

use super::{longer_than, truncate_chars};

/// Text shorter than this is treated as navigation chrome, not a policy.
const MIN_POLICY_CHARS: usize = 100;

/// Containers probed, in order, for the body of a policy page.
const CONTENT_SELECTORS: [&str; 7] = [
    ".page-content",
    ".main-content",
    ".policy-content",
    "article",
    "main",
    ".content",
    "#content",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Privacy,
    Refund,
}

impl PolicyKind {
    /// Relative paths tried, in order, for this kind of policy.
    #[must_use]
    pub fn candidate_paths(self) -> &'static [&'static str] {
        match self {
            Self::Privacy => &[
                "/pages/privacy-policy",
                "/privacy-policy",
                "/privacy",
                "/pages/privacy",
            ],
            Self::Refund => &[
                "/pages/refund-policy",
                "/pages/return-policy",
                "/refund-policy",
                "/return-policy",
                "/pages/returns",
                "/returns",
                "/pages/refunds",
                "/refunds",
            ],
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Privacy => "privacy",
            Self::Refund => "refund",
        }
    }
}

/// Walks the candidate paths for `kind` and returns the first usable policy
/// text, truncated to 2000 characters.
///
/// A path that fails to fetch, or whose page has no meaningful text, moves
/// on to the next path. `None` once every path is exhausted.
pub async fn fetch_policy_content(
    client: &StoreClient,
    base_url: &str,
    kind: PolicyKind,
) -> Option<String> {
    for path in kind.candidate_paths() {
        let url = resolve_url(base_url, path);
        let text = match client.fetch_page(&url).await {
            Ok(doc) => policy_text(doc),
            Err(e) => {
                tracing::debug!(url, policy = kind.as_str(), error = %e, "policy path unavailable");
                continue;
            }
        };
        if let Some(text) = text {
            tracing::debug!(url, policy = kind.as_str(), "policy found");
            return Some(text);
        }
    }
    None
}

/// Policy body of an already-fetched page. Consumes the document so it is
/// dropped before the caller's next fetch.
#[must_use]
pub fn policy_text(doc: ParsedDocument) -> Option<String> {
    for selector in CONTENT_SELECTORS {
        let Some(container) = doc.select_first(selector) else {
            continue;
        };
        let text = element_text(container);
        if longer_than(&text, MIN_POLICY_CHARS) {
            return Some(truncate_chars(&text, BrandInsights::POLICY_MAX_CHARS));
        }
    }

    let text = doc.text();
    longer_than(&text, MIN_POLICY_CHARS)
        .then(|| truncate_chars(&text, BrandInsights::POLICY_MAX_CHARS))
}
