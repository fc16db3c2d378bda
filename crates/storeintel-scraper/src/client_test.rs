use super::*;

#[test]
fn normalize_prepends_https_when_scheme_missing() {
    assert_eq!(normalize_website_url("allbirds.com"), "https://allbirds.com");
    assert_eq!(
        normalize_website_url("  memy.co.in/collections "),
        "https://memy.co.in/collections"
    );
}

#[test]
fn normalize_keeps_existing_scheme() {
    assert_eq!(normalize_website_url("http://acme.com"), "http://acme.com");
    assert_eq!(normalize_website_url("HTTPS://acme.com"), "HTTPS://acme.com");
}

#[test]
fn resolve_joins_relative_hrefs() {
    assert_eq!(
        resolve_url("https://acme.com", "/pages/contact"),
        "https://acme.com/pages/contact"
    );
    assert_eq!(
        resolve_url("https://acme.com/collections/all", "/pages/privacy-policy"),
        "https://acme.com/pages/privacy-policy"
    );
}

#[test]
fn resolve_leaves_absolute_hrefs_alone() {
    assert_eq!(
        resolve_url("https://acme.com", "https://help.acme.com/track"),
        "https://help.acme.com/track"
    );
}

#[test]
fn resolve_falls_back_to_href_on_bad_base() {
    assert_eq!(resolve_url("not a url", "/pages/faq"), "/pages/faq");
}

#[test]
fn extract_domain_strips_scheme_and_path() {
    assert_eq!(
        extract_domain("https://shop.acme.com/collections").as_deref(),
        Some("shop.acme.com")
    );
    assert!(extract_domain("garbage").is_none());
}

#[test]
fn parse_website_url_normalizes_bare_domains() {
    assert_eq!(
        parse_website_url(" allbirds.com ").ok().as_deref(),
        Some("https://allbirds.com")
    );
}

#[test]
fn parse_website_url_rejects_blank_and_hostless_input() {
    for raw in ["   ", "https://", "http://exa mple.com"] {
        let err = parse_website_url(raw).expect_err("invalid url");
        assert!(
            matches!(err, ScraperError::InvalidUrl { ref url, .. } if url == raw),
            "expected InvalidUrl for {raw:?}, got {err:?}"
        );
    }
}

#[test]
fn client_builds_with_catalog_cap() {
    let client = StoreClient::new(5, "storeintel-test/0.1")
        .expect("client")
        .with_max_catalog_pages(Some(3));
    assert_eq!(client.max_catalog_pages, Some(3));
}
