//! HTTP client for storefront pages and the public `products.json` endpoint.

mod catalog;
mod origin;

use std::time::Duration;

use reqwest::Client;
use serde_json::{Map, Value};

use crate::document::ParsedDocument;
use crate::error::ScraperError;

pub use origin::{extract_domain, normalize_website_url, parse_website_url, resolve_url};

/// HTTP client shared by every fetch in an insights run.
///
/// Every request carries the configured `User-Agent`, follows redirects, and
/// is bounded by the configured timeout.
pub struct StoreClient {
    pub(super) client: Client,
    /// Stop catalog pagination after this many pages. `None` = unbounded.
    pub(super) max_catalog_pages: Option<u32>,
}

impl StoreClient {
    /// Creates a `StoreClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            max_catalog_pages: None,
        })
    }

    /// Caps catalog pagination at `max_pages` requests.
    #[must_use]
    pub fn with_max_catalog_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_catalog_pages = max_pages;
        self
    }

    /// Fetches and parses an HTML page.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::UnreachableSite`] on any transport failure or
    /// non-2xx status.
    pub async fn fetch_page(&self, url: &str) -> Result<ParsedDocument, ScraperError> {
        let body = self
            .get_text(url, "text/html,application/xhtml+xml,*/*;q=0.8")
            .await
            .map_err(|e| ScraperError::UnreachableSite {
                url: url.to_owned(),
                reason: e.to_string(),
            })?;
        Ok(ParsedDocument::parse(&body))
    }

    /// Fetches a JSON object. Never fails: transport errors, error statuses,
    /// and bodies that are not a JSON object all yield an empty map.
    pub async fn fetch_json(&self, url: &str) -> Map<String, Value> {
        match self.try_fetch_json(url).await {
            Ok(map) => map,
            Err(e) => {
                tracing::debug!(url, error = %e, "JSON probe failed; treating as empty");
                Map::new()
            }
        }
    }

    async fn try_fetch_json(&self, url: &str) -> Result<Map<String, Value>, ScraperError> {
        let body = self.get_text(url, "application/json").await?;
        serde_json::from_str::<Map<String, Value>>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("JSON object from {url}"),
            source: e,
        })
    }

    async fn get_text(&self, url: &str, accept: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, accept)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
