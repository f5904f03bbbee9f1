//! Catalog repository (read-only)

use super::models::Product;
use sqlx::PgExecutor;

pub struct ProductRepository;

impl ProductRepository {
    /// Load the whole catalog, newest first
    pub async fn list_all(db: impl PgExecutor<'_>) -> Result<Vec<Product>, sqlx::Error> {
        let rows: Vec<Product> = sqlx::query_as(
            r#"SELECT id, title, description, price, category, image, rating, created_at
               FROM products_tb ORDER BY created_at DESC"#,
        )
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    /// Get product by ID
    pub async fn get_by_id(
        db: impl PgExecutor<'_>,
        product_id: i64,
    ) -> Result<Option<Product>, sqlx::Error> {
        let row: Option<Product> = sqlx::query_as(
            r#"SELECT id, title, description, price, category, image, rating, created_at
               FROM products_tb WHERE id = $1"#,
        )
        .bind(product_id)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }
}
