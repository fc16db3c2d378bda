//! URL normalization and resolution helpers.

use crate::error::ScraperError;

/// Prepends `https://` when `raw` carries no `http`/`https` scheme.
///
/// Given `"acme.com"`, returns `"https://acme.com"`.
#[must_use]
pub fn normalize_website_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    }
}

/// Normalizes `raw` like [`normalize_website_url`] and checks that the result
/// is an `http(s)` URL with a host.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `raw` is blank, does not parse, or
/// has no host.
pub fn parse_website_url(raw: &str) -> Result<String, ScraperError> {
    let invalid = |reason: String| ScraperError::InvalidUrl {
        url: raw.to_owned(),
        reason,
    };
    if raw.trim().is_empty() {
        return Err(invalid("must not be empty".to_string()));
    }
    let normalized = normalize_website_url(raw);
    let parsed = reqwest::Url::parse(&normalized).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("no host".to_string()));
    }
    Ok(normalized)
}

/// Resolves `href` against `base`. Absolute `http(s)` hrefs are returned
/// unchanged; if `base` cannot be parsed, `href` is returned as-is.
#[must_use]
pub fn resolve_url(base: &str, href: &str) -> String {
    if href.starts_with("http") {
        return href.to_owned();
    }
    reqwest::Url::parse(base)
        .and_then(|b| b.join(href))
        .map_or_else(
            |e| {
                tracing::debug!(base, href, error = %e, "could not resolve href against base");
                href.to_owned()
            },
            |u| u.to_string(),
        )
}

/// Hostname of `url`, or `None` if it does not parse or has no host.
#[must_use]
pub fn extract_domain(url: &str) -> Option<String> {
    reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
}
