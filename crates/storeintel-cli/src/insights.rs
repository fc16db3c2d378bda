//! Command handlers for fetching, showing, and listing storefront insights.

use storeintel_db::{BrandSummaryRow, DbError};
use storeintel_scraper::{normalize_website_url, parse_website_url, InsightsFetcher};

/// Fetch insights for `url` and print them as pretty JSON.
///
/// When `pool` is `Some`, the result is also upserted.
///
/// # Errors
///
/// Returns an error if `url` is not a usable storefront URL, the storefront
/// is unreachable, the fetcher cannot be built, or the upsert fails.
pub(crate) async fn run_fetch(
    config: &storeintel_core::AppConfig,
    pool: Option<&sqlx::PgPool>,
    url: &str,
) -> anyhow::Result<()> {
    let fetcher = InsightsFetcher::from_app_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build store client: {e}"))?;

    let website_url = parse_website_url(url)?;
    let insights = fetcher.fetch_store_insights(&website_url).await?;

    if let Some(pool) = pool {
        let id = storeintel_db::upsert_brand_insights(pool, &insights).await?;
        tracing::info!(id, website_url = %insights.website_url, "insights stored");
        eprintln!(
            "stored {} with {} products",
            insights.website_url,
            insights.product_catalog.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&insights)?);
    Ok(())
}

/// Print the stored aggregate for `url`.
///
/// # Errors
///
/// Returns an error if nothing is stored for `url` or a query fails.
pub(crate) async fn run_show(pool: &sqlx::PgPool, url: &str) -> anyhow::Result<()> {
    let website_url = normalize_website_url(url);
    match storeintel_db::load_brand_insights(pool, &website_url).await {
        Ok(insights) => {
            println!("{}", serde_json::to_string_pretty(&insights)?);
            Ok(())
        }
        Err(DbError::NotFound) => {
            anyhow::bail!("no insights stored for {website_url}; run `fetch --save` first")
        }
        Err(e) => Err(e.into()),
    }
}

/// Print a table of stored storefronts.
///
/// # Errors
///
/// Returns an error if the query fails.
pub(crate) async fn run_list(pool: &sqlx::PgPool) -> anyhow::Result<()> {
    let brands = storeintel_db::list_brand_insights(pool).await?;

    if brands.is_empty() {
        println!("no stored insights; run `fetch --save` first");
        return Ok(());
    }

    println!("{}", list_header());
    for brand in &brands {
        println!("{}", list_line(brand));
    }
    Ok(())
}

fn list_header() -> String {
    format!("{:<40}{:<30}PRODUCTS", "WEBSITE", "BRAND")
}

fn list_line(brand: &BrandSummaryRow) -> String {
    let name = if brand.brand_name.chars().count() > 28 {
        format!("{}...", brand.brand_name.chars().take(25).collect::<String>())
    } else {
        brand.brand_name.clone()
    };
    format!(
        "{:<40}{:<30}{}",
        brand.website_url, name, brand.product_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn summary(brand_name: &str, product_count: i64) -> BrandSummaryRow {
        BrandSummaryRow {
            id: 1,
            website_url: "https://acme.example".to_string(),
            brand_name: brand_name.to_string(),
            product_count,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn list_line_pads_columns() {
        let line = list_line(&summary("Acme", 12));
        assert!(line.starts_with("https://acme.example"));
        assert_eq!(&line[40..44], "Acme");
        assert!(line.ends_with("12"));
    }

    #[test]
    fn list_line_truncates_long_brand_names() {
        let line = list_line(&summary("The Extremely Long Brand Name Company", 0));
        assert!(line.contains("The Extremely Long Brand ..."));
        assert!(line.ends_with('0'));
    }

    #[test]
    fn list_header_names_columns() {
        let header = list_header();
        assert!(header.starts_with("WEBSITE"));
        assert!(header.ends_with("PRODUCTS"));
    }
}
