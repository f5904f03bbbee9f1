//! Order repository

use super::models::Order;
use sqlx::PgExecutor;

pub struct OrderRepository;

impl OrderRepository {
    /// All orders of one user with the given archived flag, oldest first
    pub async fn find_for_user(
        db: impl PgExecutor<'_>,
        user_id: i64,
        archived: bool,
    ) -> Result<Vec<Order>, sqlx::Error> {
        let rows: Vec<Order> = sqlx::query_as(
            r#"SELECT id, user_id, archived, created_at
               FROM orders_tb WHERE user_id = $1 AND archived = $2
               ORDER BY id"#,
        )
        .bind(user_id)
        .bind(archived)
        .fetch_all(db)
        .await?;

        Ok(rows)
    }

    /// Get order by ID
    pub async fn get_by_id(
        db: impl PgExecutor<'_>,
        order_id: i64,
    ) -> Result<Option<Order>, sqlx::Error> {
        let row: Option<Order> = sqlx::query_as(
            r#"SELECT id, user_id, archived, created_at
               FROM orders_tb WHERE id = $1"#,
        )
        .bind(order_id)
        .fetch_optional(db)
        .await?;

        Ok(row)
    }

    /// Create a new (non-archived) order for a user
    pub async fn insert(db: impl PgExecutor<'_>, user_id: i64) -> Result<Order, sqlx::Error> {
        let order: Order = sqlx::query_as(
            r#"INSERT INTO orders_tb (user_id) VALUES ($1)
               RETURNING id, user_id, archived, created_at"#,
        )
        .bind(user_id)
        .fetch_one(db)
        .await?;

        Ok(order)
    }

    /// Set the derived archived flag. Returns false if the order is gone.
    pub async fn set_archived(
        db: impl PgExecutor<'_>,
        order_id: i64,
        archived: bool,
    ) -> Result<bool, sqlx::Error> {
        let res = sqlx::query("UPDATE orders_tb SET archived = $2 WHERE id = $1")
            .bind(order_id)
            .bind(archived)
            .execute(db)
            .await?;

        Ok(res.rows_affected() > 0)
    }

    /// Lock the order row for the duration of the caller's transaction.
    ///
    /// Serializes concurrent archival updates on items of the same order,
    /// so the derived `archived` flag is always computed against settled
    /// sibling state. Returns false if the order does not exist.
    pub async fn lock(db: impl PgExecutor<'_>, order_id: i64) -> Result<bool, sqlx::Error> {
        let row = sqlx::query("SELECT id FROM orders_tb WHERE id = $1 FOR UPDATE")
            .bind(order_id)
            .fetch_optional(db)
            .await?;

        Ok(row.is_some())
    }
}
