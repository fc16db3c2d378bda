//! The `BrandInsights` aggregate and its facet types.
//!
//! Every optional facet is an explicit `Option` (serialized as `null`) or an
//! empty collection, so one absent facet never prevents the rest of the
//! record from being assembled or stored.

use serde::{Deserialize, Serialize};

use crate::products::NormalizedProduct;

/// Email addresses and phone numbers found in a page's visible text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// At most [`ContactDetails::MAX_EMAILS`], deduplicated.
    pub emails: Vec<String>,
    /// At most [`ContactDetails::MAX_PHONE_NUMBERS`], deduplicated.
    pub phone_numbers: Vec<String>,
    /// Postal addresses. Nothing extracts these yet, so the list is always
    /// empty; the key is kept so clients always see the same shape.
    #[serde(default)]
    pub addresses: Vec<String>,
}

impl ContactDetails {
    pub const MAX_EMAILS: usize = 5;
    pub const MAX_PHONE_NUMBERS: usize = 3;

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phone_numbers.is_empty()
    }
}

/// One profile URL per social platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialHandles {
    pub instagram: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub tiktok: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialHandles {
    /// Number of platforms with a URL.
    #[must_use]
    pub fn count(&self) -> usize {
        [
            &self.instagram,
            &self.facebook,
            &self.twitter,
            &self.tiktok,
            &self.youtube,
            &self.linkedin,
        ]
        .into_iter()
        .filter(|v| v.is_some())
        .count()
    }
}

/// A single question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

/// Well-known storefront destinations, one URL per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantLinks {
    pub order_tracking: Option<String>,
    pub contact_us: Option<String>,
    pub blogs: Option<String>,
    pub shipping_info: Option<String>,
    pub size_guide: Option<String>,
}

/// Everything extracted from one storefront in a single fetch.
///
/// `website_url` is the unique key used by persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandInsights {
    pub website_url: String,
    pub brand_name: String,
    pub product_catalog: Vec<NormalizedProduct>,
    /// Subset of `product_catalog`, at most [`BrandInsights::MAX_HERO_PRODUCTS`].
    pub hero_products: Vec<NormalizedProduct>,
    pub privacy_policy: Option<String>,
    pub return_refund_policy: Option<String>,
    pub faqs: Vec<Faq>,
    pub social_handles: SocialHandles,
    pub contact_details: ContactDetails,
    pub brand_context: Option<String>,
    pub important_links: ImportantLinks,
    pub competitors: Vec<String>,
}

impl BrandInsights {
    pub const MAX_HERO_PRODUCTS: usize = 6;
    pub const MAX_FAQS: usize = 15;
    pub const POLICY_MAX_CHARS: usize = 2000;
    pub const BRAND_CONTEXT_MAX_CHARS: usize = 1000;
    pub const UNKNOWN_BRAND: &'static str = "Unknown Brand";

    /// An aggregate with every facet at its empty/absent default.
    #[must_use]
    pub fn empty(website_url: impl Into<String>) -> Self {
        Self {
            website_url: website_url.into(),
            brand_name: Self::UNKNOWN_BRAND.to_string(),
            product_catalog: Vec::new(),
            hero_products: Vec::new(),
            privacy_policy: None,
            return_refund_policy: None,
            faqs: Vec::new(),
            social_handles: SocialHandles::default(),
            contact_details: ContactDetails::default(),
            brand_context: None,
            important_links: ImportantLinks::default(),
            competitors: Vec::new(),
        }
    }
}
