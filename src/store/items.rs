//! Order item repository

use super::models::{ItemWithProduct, OrderItem, Product};
use sqlx::postgres::PgRow;
use sqlx::{PgExecutor, Row};

/// Shared SELECT for item+product joins. Product columns are aliased with
/// a `p_` prefix because both tables carry `id` and `created_at`.
const ITEM_JOIN_SELECT: &str = r#"
    SELECT oi.id, oi.order_id, oi.product_id, oi.quantity, oi.archived, oi.created_at,
           p.title AS p_title, p.description AS p_description, p.price AS p_price,
           p.category AS p_category, p.image AS p_image, p.rating AS p_rating,
           p.created_at AS p_created_at
    FROM order_items_tb oi
    JOIN products_tb p ON p.id = oi.product_id
"#;

fn map_joined_row(r: &PgRow) -> ItemWithProduct {
    ItemWithProduct {
        item: OrderItem {
            id: r.get("id"),
            order_id: r.get("order_id"),
            product_id: r.get("product_id"),
            quantity: r.get("quantity"),
            archived: r.get("archived"),
            created_at: r.get("created_at"),
        },
        product: Product {
            id: r.get("product_id"),
            title: r.get("p_title"),
            description: r.get("p_description"),
            price: r.get("p_price"),
            category: r.get("p_category"),
            image: r.get("p_image"),
            rating: r.get("p_rating"),
            created_at: r.get("p_created_at"),
        },
    }
}

pub struct OrderItemRepository;

impl OrderItemRepository {
    /// All items of one order (archived or not), joined to products
    pub async fn find_by_order(
        db: impl PgExecutor<'_>,
        order_id: i64,
    ) -> Result<Vec<ItemWithProduct>, sqlx::Error> {
        let sql = format!("{} WHERE oi.order_id = $1 ORDER BY oi.id", ITEM_JOIN_SELECT);
        let rows = sqlx::query(&sql).bind(order_id).fetch_all(db).await?;

        Ok(rows.iter().map(map_joined_row).collect())
    }

    /// Items of several orders at once, filtered by archived flag
    pub async fn find_for_orders(
        db: impl PgExecutor<'_>,
        order_ids: &[i64],
        archived: bool,
    ) -> Result<Vec<ItemWithProduct>, sqlx::Error> {
        let sql = format!(
            "{} WHERE oi.order_id = ANY($1) AND oi.archived = $2 ORDER BY oi.id",
            ITEM_JOIN_SELECT
        );
        let rows = sqlx::query(&sql)
            .bind(order_ids)
            .bind(archived)
            .fetch_all(db)
            .await?;

        Ok(rows.iter().map(map_joined_row).collect())
    }

    /// Every item across all orders of one user, joined to products
    pub async fn find_for_user(
        db: impl PgExecutor<'_>,
        user_id: i64,
    ) -> Result<Vec<ItemWithProduct>, sqlx::Error> {
        let sql = format!(
            "{} JOIN orders_tb o ON o.id = oi.order_id WHERE o.user_id = $1 ORDER BY oi.id",
            ITEM_JOIN_SELECT
        );
        let rows = sqlx::query(&sql).bind(user_id).fetch_all(db).await?;

        Ok(rows.iter().map(map_joined_row).collect())
    }

    /// Create an item linking an order to a product
    pub async fn insert(
        db: impl PgExecutor<'_>,
        order_id: i64,
        product_id: i64,
        quantity: i32,
    ) -> Result<OrderItem, sqlx::Error> {
        let item: OrderItem = sqlx::query_as(
            r#"INSERT INTO order_items_tb (order_id, product_id, quantity)
               VALUES ($1, $2, $3)
               RETURNING id, order_id, product_id, quantity, archived, created_at"#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(quantity)
        .fetch_one(db)
        .await?;

        Ok(item)
    }

    /// Set an item's archived flag. Returns None if the item does not exist.
    pub async fn set_archived(
        db: impl PgExecutor<'_>,
        item_id: i64,
        archived: bool,
    ) -> Result<Option<OrderItem>, sqlx::Error> {
        let item: Option<OrderItem> = sqlx::query_as(
            r#"UPDATE order_items_tb SET archived = $2 WHERE id = $1
               RETURNING id, order_id, product_id, quantity, archived, created_at"#,
        )
        .bind(item_id)
        .bind(archived)
        .fetch_optional(db)
        .await?;

        Ok(item)
    }

    /// Parent order id of an item, if the item exists
    pub async fn order_id_of(
        db: impl PgExecutor<'_>,
        item_id: i64,
    ) -> Result<Option<i64>, sqlx::Error> {
        let order_id: Option<i64> =
            sqlx::query_scalar("SELECT order_id FROM order_items_tb WHERE id = $1")
                .bind(item_id)
                .fetch_optional(db)
                .await?;

        Ok(order_id)
    }

    /// Archived flags of every item in an order
    pub async fn archived_flags(
        db: impl PgExecutor<'_>,
        order_id: i64,
    ) -> Result<Vec<bool>, sqlx::Error> {
        let flags: Vec<bool> =
            sqlx::query_scalar("SELECT archived FROM order_items_tb WHERE order_id = $1")
                .bind(order_id)
                .fetch_all(db)
                .await?;

        Ok(flags)
    }
}
