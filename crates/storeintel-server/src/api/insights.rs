use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use storeintel_core::BrandInsights;
use storeintel_db::{BrandInsightsRow, BrandSummaryRow, ProductRow};
use storeintel_scraper::{normalize_website_url, parse_website_url};

use crate::middleware::RequestId;

use super::{map_db_error, map_scraper_error, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct FetchInsightsRequest {
    website_url: String,
}

#[derive(Debug, Serialize)]
pub(super) struct BrandItem {
    id: i64,
    website_url: String,
    brand_name: String,
    hero_products: Value,
    privacy_policy: Option<String>,
    return_refund_policy: Option<String>,
    faqs: Value,
    social_handles: Value,
    contact_details: Value,
    brand_context: Option<String>,
    important_links: Value,
    competitors: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(super) struct ProductItem {
    id: i64,
    product_id: String,
    title: String,
    description: String,
    price: String,
    images: Value,
    variants: Value,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(super) struct StoredInsightsResponse {
    brand: BrandItem,
    products: Vec<ProductItem>,
    total_products: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct BrandSummaryItem {
    id: i64,
    website_url: String,
    brand_name: String,
    product_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub(super) struct BrandListResponse {
    brands: Vec<BrandSummaryItem>,
    total: usize,
}

impl From<BrandInsightsRow> for BrandItem {
    fn from(row: BrandInsightsRow) -> Self {
        Self {
            id: row.id,
            website_url: row.website_url,
            brand_name: row.brand_name,
            hero_products: row.hero_products,
            privacy_policy: row.privacy_policy,
            return_refund_policy: row.return_refund_policy,
            faqs: row.faqs,
            social_handles: row.social_handles,
            contact_details: row.contact_details,
            brand_context: row.brand_context,
            important_links: row.important_links,
            competitors: row.competitors,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<ProductRow> for ProductItem {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            product_id: row.product_id,
            title: row.title,
            description: row.description,
            price: row.price,
            images: row.images,
            variants: row.variants,
            created_at: row.created_at,
        }
    }
}

impl From<BrandSummaryRow> for BrandSummaryItem {
    fn from(row: BrandSummaryRow) -> Self {
        Self {
            id: row.id,
            website_url: row.website_url,
            brand_name: row.brand_name,
            product_count: row.product_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Fetches insights for a storefront, stores them, and returns them.
pub(super) async fn fetch_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<FetchInsightsRequest>, JsonRejection>,
) -> Result<Json<BrandInsights>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;

    let website_url = parse_website_url(&body.website_url)
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;

    let insights = state
        .fetcher
        .fetch_store_insights(&website_url)
        .await
        .map_err(|e| map_scraper_error(req_id.0.clone(), &e))?;

    storeintel_db::upsert_brand_insights(&state.pool, &insights)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::info!(
        website_url = %insights.website_url,
        products = insights.product_catalog.len(),
        "insights stored"
    );
    Ok(Json(insights))
}

/// Returns a stored brand and its catalog rows.
pub(super) async fn get_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(website_url): Path<String>,
) -> Result<Json<StoredInsightsResponse>, ApiError> {
    let website_url = normalize_website_url(&website_url);

    let row = storeintel_db::get_brand_insights_by_url(&state.pool, &website_url)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("no insights stored for {website_url}"),
            )
        })?;

    let products: Vec<ProductItem> = storeintel_db::list_products_for_brand(&state.pool, row.id)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?
        .into_iter()
        .map(ProductItem::from)
        .collect();

    Ok(Json(StoredInsightsResponse {
        brand: BrandItem::from(row),
        total_products: products.len(),
        products,
    }))
}

/// Lists every stored brand.
pub(super) async fn list_brands(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<BrandListResponse>, ApiError> {
    let brands: Vec<BrandSummaryItem> = storeintel_db::list_brand_insights(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0, &e))?
        .into_iter()
        .map(BrandSummaryItem::from)
        .collect();

    Ok(Json(BrandListResponse {
        total: brands.len(),
        brands,
    }))
}
