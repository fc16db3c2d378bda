//! Database operations for `products`, the catalog rows of a stored brand.

use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgConnection, PgPool};
use storeintel_core::NormalizedProduct;

use crate::DbError;

/// A row from the `products` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub brand_id: i64,
    /// Zero-based index in the storefront catalog.
    pub position: i32,
    /// Storefront product ID.
    pub product_id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub images: Value,
    pub variants: Value,
    pub created_at: DateTime<Utc>,
}

impl ProductRow {
    /// # Errors
    ///
    /// Returns [`DbError::Serialize`] if `images` or `variants` is not the
    /// expected JSON shape.
    pub fn into_normalized(self) -> Result<NormalizedProduct, DbError> {
        Ok(NormalizedProduct {
            id: self.product_id,
            title: self.title,
            description: self.description,
            price: self.price,
            images: serde_json::from_value(self.images)?,
            variants: serde_json::from_value(self.variants)?,
        })
    }
}

/// Inserts `products` under `brand_id`, keeping their order in `position`.
///
/// One `INSERT ... SELECT FROM UNNEST(...)` carries the whole catalog, so a
/// store of any size costs a single round-trip. Takes a connection so the
/// caller can run it inside its transaction.
pub(crate) async fn insert_products(
    conn: &mut PgConnection,
    brand_id: i64,
    products: &[NormalizedProduct],
) -> Result<(), DbError> {
    if products.is_empty() {
        return Ok(());
    }

    // One parallel Vec per column for UNNEST binding.
    let mut positions: Vec<i32> = Vec::with_capacity(products.len());
    let mut product_ids: Vec<&str> = Vec::with_capacity(products.len());
    let mut titles: Vec<&str> = Vec::with_capacity(products.len());
    let mut descriptions: Vec<&str> = Vec::with_capacity(products.len());
    let mut prices: Vec<&str> = Vec::with_capacity(products.len());
    let mut images: Vec<Value> = Vec::with_capacity(products.len());
    let mut variants: Vec<Value> = Vec::with_capacity(products.len());

    for (index, product) in products.iter().enumerate() {
        positions.push(i32::try_from(index).unwrap_or(i32::MAX));
        product_ids.push(&product.id);
        titles.push(&product.title);
        descriptions.push(&product.description);
        prices.push(&product.price);
        images.push(serde_json::to_value(&product.images)?);
        variants.push(serde_json::to_value(&product.variants)?);
    }

    sqlx::query(
        "INSERT INTO products \
             (brand_id, position, product_id, title, description, price, images, variants) \
         SELECT $1, * FROM UNNEST(\
              $2::int4[], $3::text[], $4::text[], $5::text[], $6::text[], \
              $7::jsonb[], $8::jsonb[])",
    )
    .bind(brand_id)
    .bind(&positions)
    .bind(&product_ids)
    .bind(&titles)
    .bind(&descriptions)
    .bind(&prices)
    .bind(&images)
    .bind(&variants)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Returns the catalog rows of `brand_id` in storefront order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_products_for_brand(
    pool: &PgPool,
    brand_id: i64,
) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, brand_id, position, product_id, title, description, price, images, \
                variants, created_at \
         FROM products \
         WHERE brand_id = $1 \
         ORDER BY position",
    )
    .bind(brand_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
