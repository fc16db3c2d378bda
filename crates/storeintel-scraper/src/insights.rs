//! End-to-end insights run for one storefront.
//!
//! The homepage is the only fetch that can fail a run. Every facet after that
//! runs isolated: a panic inside one extractor is logged and replaced with
//! that facet's empty default, and the rest of the record is still assembled.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use futures::FutureExt;
use storeintel_core::{
    AppConfig, BrandInsights, ContactDetails, Faq, ImportantLinks, SocialHandles,
};

use crate::client::{normalize_website_url, StoreClient};
use crate::competitors::{CompetitorDiscovery, NoCompetitorDiscovery};
use crate::document::ParsedDocument;
use crate::error::ScraperError;
use crate::extract::{self, PolicyKind};

/// The homepage extractors an [`InsightsFetcher`] runs.
///
/// Plain function pointers so a run can be assembled with a substitute for
/// any single facet.
#[derive(Clone, Copy)]
pub struct FacetExtractors {
    pub brand_name: fn(&ParsedDocument, &str) -> String,
    pub product_handles: fn(&ParsedDocument) -> Vec<String>,
    pub faqs: fn(&ParsedDocument) -> Vec<Faq>,
    pub social_handles: fn(&ParsedDocument) -> SocialHandles,
    pub contact_details: fn(&ParsedDocument) -> ContactDetails,
    pub brand_context: fn(&ParsedDocument) -> Option<String>,
    pub important_links: fn(&ParsedDocument, &str) -> ImportantLinks,
}

impl Default for FacetExtractors {
    fn default() -> Self {
        Self {
            brand_name: extract::extract_brand_name,
            product_handles: extract::product_handles,
            faqs: extract::extract_faqs,
            social_handles: extract::extract_social_handles,
            contact_details: extract::extract_contact_details,
            brand_context: extract::extract_brand_context,
            important_links: extract::extract_important_links,
        }
    }
}

/// Facets read from the homepage before it is dropped.
struct HomepageFacets {
    brand_name: String,
    product_handles: Vec<String>,
    faqs: Vec<Faq>,
    social_handles: SocialHandles,
    contact_details: ContactDetails,
    brand_context: Option<String>,
    important_links: ImportantLinks,
}

pub struct InsightsFetcher {
    client: StoreClient,
    extractors: FacetExtractors,
    competitors: Arc<dyn CompetitorDiscovery>,
}

impl InsightsFetcher {
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self {
            client,
            extractors: FacetExtractors::default(),
            competitors: Arc::new(NoCompetitorDiscovery),
        }
    }

    /// Builds a fetcher from the scraper section of [`AppConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the HTTP client cannot be built.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = StoreClient::new(
            config.scraper_request_timeout_secs,
            &config.scraper_user_agent,
        )?
        .with_max_catalog_pages(config.scraper_max_catalog_pages);
        Ok(Self::new(client))
    }

    #[must_use]
    pub fn with_extractors(mut self, extractors: FacetExtractors) -> Self {
        self.extractors = extractors;
        self
    }

    #[must_use]
    pub fn with_competitor_discovery(mut self, discovery: Arc<dyn CompetitorDiscovery>) -> Self {
        self.competitors = discovery;
        self
    }

    /// Fetches and assembles [`BrandInsights`] for `website_url`.
    ///
    /// `https://` is prepended when the URL has no scheme.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnreachableSite`] if the homepage cannot be fetched;
    ///   nothing else is attempted in that case.
    /// - [`ScraperError::Internal`] if the run panics outside a facet.
    pub async fn fetch_store_insights(
        &self,
        website_url: &str,
    ) -> Result<BrandInsights, ScraperError> {
        let url = normalize_website_url(website_url);
        match AssertUnwindSafe(self.run(&url)).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::error!(url, error = %message, "insights run panicked");
                Err(ScraperError::Internal(message))
            }
        }
    }

    async fn run(&self, url: &str) -> Result<BrandInsights, ScraperError> {
        tracing::info!(url, "fetching store insights");

        // The parsed homepage is not `Send`; it must be gone before the next await.
        let homepage = {
            let doc = self.client.fetch_page(url).await?;
            self.homepage_facets(&doc, url)
        };

        let (catalog, privacy_policy, return_refund_policy) = tokio::join!(
            isolate_async("product_catalog", self.client.fetch_catalog(url)),
            isolate_async(
                "privacy_policy",
                extract::fetch_policy_content(&self.client, url, PolicyKind::Privacy),
            ),
            isolate_async(
                "return_refund_policy",
                extract::fetch_policy_content(&self.client, url, PolicyKind::Refund),
            ),
        );
        let product_catalog = catalog.unwrap_or_default();

        let hero_products = isolate("hero_products", || {
            extract::match_hero_products(&homepage.product_handles, &product_catalog)
        })
        .unwrap_or_default();

        let competitors = isolate_async(
            "competitors",
            self.competitors.discover(&homepage.brand_name),
        )
        .await
        .unwrap_or_default();

        tracing::info!(
            url,
            brand = %homepage.brand_name,
            products = product_catalog.len(),
            hero_products = hero_products.len(),
            faqs = homepage.faqs.len(),
            "store insights assembled"
        );

        Ok(BrandInsights {
            website_url: url.to_owned(),
            brand_name: homepage.brand_name,
            product_catalog,
            hero_products,
            privacy_policy: privacy_policy.flatten(),
            return_refund_policy: return_refund_policy.flatten(),
            faqs: homepage.faqs,
            social_handles: homepage.social_handles,
            contact_details: homepage.contact_details,
            brand_context: homepage.brand_context,
            important_links: homepage.important_links,
            competitors,
        })
    }

    fn homepage_facets(&self, doc: &ParsedDocument, url: &str) -> HomepageFacets {
        let x = &self.extractors;
        HomepageFacets {
            brand_name: isolate("brand_name", || (x.brand_name)(doc, url))
                .unwrap_or_else(|| BrandInsights::UNKNOWN_BRAND.to_string()),
            product_handles: isolate("hero_products", || (x.product_handles)(doc))
                .unwrap_or_default(),
            faqs: isolate("faqs", || (x.faqs)(doc)).unwrap_or_default(),
            social_handles: isolate("social_handles", || (x.social_handles)(doc))
                .unwrap_or_default(),
            contact_details: isolate("contact_details", || (x.contact_details)(doc))
                .unwrap_or_default(),
            brand_context: isolate("brand_context", || (x.brand_context)(doc)).flatten(),
            important_links: isolate("important_links", || (x.important_links)(doc, url))
                .unwrap_or_default(),
        }
    }
}

/// Runs one synchronous facet; `None` if it panicked.
fn isolate<T>(facet: &'static str, f: impl FnOnce() -> T) -> Option<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            tracing::warn!(
                facet,
                error = %panic_message(payload.as_ref()),
                "facet extraction failed; using empty default"
            );
            None
        }
    }
}

/// Runs one asynchronous facet; `None` if it panicked.
async fn isolate_async<T>(
    facet: &'static str,
    fut: impl std::future::Future<Output = T>,
) -> Option<T> {
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => Some(value),
        Err(payload) => {
            tracing::warn!(
                facet,
                error = %panic_message(payload.as_ref()),
                "facet fetch failed; using empty default"
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_owned()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolate_passes_values_through() {
        assert_eq!(isolate("ok", || 7), Some(7));
    }

    fn exploding_faqs() -> Vec<Faq> {
        panic!("bad markup")
    }

    async fn exploding_count() -> u8 {
        panic!("boom")
    }

    #[test]
    fn isolate_swallows_panics() {
        assert!(isolate("faqs", exploding_faqs).is_none());
    }

    #[tokio::test]
    async fn isolate_async_swallows_panics() {
        assert!(isolate_async("catalog", exploding_count()).await.is_none());
    }

    #[test]
    fn panic_message_reads_str_and_string_payloads() {
        let payload: Box<dyn Any + Send> = Box::new("static");
        assert_eq!(panic_message(payload.as_ref()), "static");
        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");
        let payload: Box<dyn Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
