//! Competitor discovery seam.

use std::future::Future;
use std::pin::Pin;

/// Finds storefronts competing with a brand.
///
/// Implementations return competitor identifiers (URLs or names) and never
/// fail; a discovery backend that errors should log and return an empty list.
pub trait CompetitorDiscovery: Send + Sync {
    fn discover<'a>(
        &'a self,
        brand_name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + 'a>>;
}

/// Discovery that never finds anything. The default for [`crate::InsightsFetcher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompetitorDiscovery;

impl CompetitorDiscovery for NoCompetitorDiscovery {
    fn discover<'a>(
        &'a self,
        _brand_name: &'a str,
    ) -> Pin<Box<dyn Future<Output = Vec<String>> + Send + 'a>> {
        Box::pin(async { Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_discovery_returns_empty() {
        assert!(NoCompetitorDiscovery.discover("Acme").await.is_empty());
    }
}
