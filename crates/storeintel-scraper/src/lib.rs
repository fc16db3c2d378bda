pub mod client;
pub mod competitors;
pub mod document;
pub mod error;
pub mod extract;
pub mod insights;
pub mod normalize;
pub mod pagination;
pub mod types;

pub use client::{
    extract_domain, normalize_website_url, parse_website_url, resolve_url, StoreClient,
};
pub use competitors::{CompetitorDiscovery, NoCompetitorDiscovery};
pub use document::ParsedDocument;
pub use error::ScraperError;
pub use extract::PolicyKind;
pub use insights::{FacetExtractors, InsightsFetcher};
pub use normalize::{normalize_entry, normalize_product};
pub use types::{ShopifyImage, ShopifyProduct};
