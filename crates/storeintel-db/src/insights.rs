//! Database operations for the `brand_insights` table.
//!
//! One row per storefront, keyed by `website_url`. Facets that are lists or
//! records are stored as JSONB; the catalog lives in `products`.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::PgPool;
use storeintel_core::BrandInsights;

use crate::products::{insert_products, list_products_for_brand};
use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `brand_insights` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandInsightsRow {
    pub id: i64,
    pub website_url: String,
    pub brand_name: String,
    pub hero_products: Value,
    pub privacy_policy: Option<String>,
    pub return_refund_policy: Option<String>,
    pub faqs: Value,
    pub social_handles: Value,
    pub contact_details: Value,
    pub brand_context: Option<String>,
    pub important_links: Value,
    pub competitors: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BrandInsightsRow {
    /// Rebuilds the aggregate from this row and its catalog rows.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Serialize`] if a JSONB column does not have the
    /// shape of its facet.
    pub fn into_insights(
        self,
        product_catalog: Vec<storeintel_core::NormalizedProduct>,
    ) -> Result<BrandInsights, DbError> {
        Ok(BrandInsights {
            website_url: self.website_url,
            brand_name: self.brand_name,
            product_catalog,
            hero_products: serde_json::from_value(self.hero_products)?,
            privacy_policy: self.privacy_policy,
            return_refund_policy: self.return_refund_policy,
            faqs: serde_json::from_value(self.faqs)?,
            social_handles: serde_json::from_value(self.social_handles)?,
            contact_details: serde_json::from_value(self.contact_details)?,
            brand_context: self.brand_context,
            important_links: serde_json::from_value(self.important_links)?,
            competitors: serde_json::from_value(self.competitors)?,
        })
    }
}

/// One line of the stored-brands listing.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandSummaryRow {
    pub id: i64,
    pub website_url: String,
    pub brand_name: String,
    pub product_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

const SELECT_COLUMNS: &str = "id, website_url, brand_name, hero_products, privacy_policy, \
     return_refund_policy, faqs, social_handles, contact_details, brand_context, \
     important_links, competitors, created_at, updated_at";

// ---------------------------------------------------------------------------
// Writes
// ---------------------------------------------------------------------------

/// Inserts `insights`, or replaces every facet of the existing row with the
/// same `website_url`, and replaces its catalog rows.
///
/// Runs in one transaction: on any error nothing is written.
///
/// Returns the internal `id` of the row.
///
/// # Errors
///
/// Returns [`DbError::Serialize`] if a facet cannot be encoded, or
/// [`DbError::Sqlx`] if any statement fails.
pub async fn upsert_brand_insights(
    pool: &PgPool,
    insights: &BrandInsights,
) -> Result<i64, DbError> {
    let hero_products = serde_json::to_value(&insights.hero_products)?;
    let faqs = serde_json::to_value(&insights.faqs)?;
    let social_handles = serde_json::to_value(&insights.social_handles)?;
    let contact_details = serde_json::to_value(&insights.contact_details)?;
    let important_links = serde_json::to_value(&insights.important_links)?;
    let competitors = serde_json::to_value(&insights.competitors)?;

    let mut tx = pool.begin().await?;

    let id: i64 = sqlx::query_scalar::<_, i64>(
        "INSERT INTO brand_insights \
             (website_url, brand_name, hero_products, privacy_policy, return_refund_policy, \
              faqs, social_handles, contact_details, brand_context, important_links, competitors) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
         ON CONFLICT (website_url) DO UPDATE SET \
             brand_name           = EXCLUDED.brand_name, \
             hero_products        = EXCLUDED.hero_products, \
             privacy_policy       = EXCLUDED.privacy_policy, \
             return_refund_policy = EXCLUDED.return_refund_policy, \
             faqs                 = EXCLUDED.faqs, \
             social_handles       = EXCLUDED.social_handles, \
             contact_details      = EXCLUDED.contact_details, \
             brand_context        = EXCLUDED.brand_context, \
             important_links      = EXCLUDED.important_links, \
             competitors          = EXCLUDED.competitors, \
             updated_at           = NOW() \
         RETURNING id",
    )
    .bind(&insights.website_url)
    .bind(&insights.brand_name)
    .bind(hero_products)
    .bind(&insights.privacy_policy)
    .bind(&insights.return_refund_policy)
    .bind(faqs)
    .bind(social_handles)
    .bind(contact_details)
    .bind(&insights.brand_context)
    .bind(important_links)
    .bind(competitors)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM products WHERE brand_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    insert_products(&mut *tx, id, &insights.product_catalog).await?;

    tx.commit().await?;
    Ok(id)
}

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

/// Returns the stored row for `website_url`, or `None`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn get_brand_insights_by_url(
    pool: &PgPool,
    website_url: &str,
) -> Result<Option<BrandInsightsRow>, DbError> {
    let row = sqlx::query_as::<_, BrandInsightsRow>(&format!(
        "SELECT {SELECT_COLUMNS} FROM brand_insights WHERE website_url = $1"
    ))
    .bind(website_url)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Loads the full aggregate for `website_url`, catalog included.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if no row exists for `website_url`,
/// [`DbError::Serialize`] if a stored facet is malformed, or
/// [`DbError::Sqlx`] if a query fails.
pub async fn load_brand_insights(
    pool: &PgPool,
    website_url: &str,
) -> Result<BrandInsights, DbError> {
    let row = get_brand_insights_by_url(pool, website_url)
        .await?
        .ok_or(DbError::NotFound)?;
    let catalog = list_products_for_brand(pool, row.id)
        .await?
        .into_iter()
        .map(crate::ProductRow::into_normalized)
        .collect::<Result<Vec<_>, _>>()?;
    row.into_insights(catalog)
}

/// Returns every stored brand with its catalog size, oldest first.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_brand_insights(pool: &PgPool) -> Result<Vec<BrandSummaryRow>, DbError> {
    let rows = sqlx::query_as::<_, BrandSummaryRow>(
        "SELECT b.id, b.website_url, b.brand_name, \
                (SELECT COUNT(*) FROM products p WHERE p.brand_id = b.id) AS product_count, \
                b.created_at, b.updated_at \
         FROM brand_insights b \
         ORDER BY b.id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
