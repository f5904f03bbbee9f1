//! The order service
//!
//! Every procedure takes the caller's user id explicitly; the gateway
//! resolves it from the session token before calling in here.

use std::collections::HashMap;

use sqlx::PgPool;

use super::error::OrderError;
use super::types::CartLine;
use crate::store::{
    ItemWithProduct, Order, OrderItem, OrderItemRepository, OrderRepository, OrderWithItems,
    ProductRepository,
};

/// True when every item of an order is archived.
///
/// Vacuously true for an empty order, but the cascade only ever runs
/// from an item update, so at least one flag is always present there.
fn all_archived(flags: &[bool]) -> bool {
    flags.iter().all(|archived| *archived)
}

pub struct OrderService;

impl OrderService {
    /// Active (`archived = false`) or archived orders of one user, each
    /// carrying the items that share the order's archived state, joined
    /// to their products.
    pub async fn user_orders(
        pool: &PgPool,
        user_id: i64,
        archived: bool,
    ) -> Result<Vec<OrderWithItems>, OrderError> {
        let orders = OrderRepository::find_for_user(pool, user_id, archived).await?;
        if orders.is_empty() {
            return Ok(Vec::new());
        }

        let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let items = OrderItemRepository::find_for_orders(pool, &order_ids, archived).await?;

        let mut by_order: HashMap<i64, Vec<ItemWithProduct>> = HashMap::new();
        for entry in items {
            by_order.entry(entry.item.order_id).or_default().push(entry);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }

    /// Fetch one order by id.
    ///
    /// Ownership is deliberately not checked: any authenticated caller
    /// may look up any order by numeric id (see DESIGN.md).
    pub async fn get_order(pool: &PgPool, order_id: i64) -> Result<Order, OrderError> {
        OrderRepository::get_by_id(pool, order_id)
            .await?
            .ok_or(OrderError::OrderNotFound)
    }

    /// All items of one order, archived or not. An order with zero items
    /// yields an empty list, which is a valid result rather than an error.
    pub async fn items_of_order(
        pool: &PgPool,
        order_id: i64,
    ) -> Result<Vec<ItemWithProduct>, OrderError> {
        Ok(OrderItemRepository::find_by_order(pool, order_id).await?)
    }

    /// Every item across all of one user's orders
    pub async fn user_items(
        pool: &PgPool,
        user_id: i64,
    ) -> Result<Vec<ItemWithProduct>, OrderError> {
        Ok(OrderItemRepository::find_for_user(pool, user_id).await?)
    }

    /// Checkout: create one order plus one item per cart line.
    ///
    /// Runs in a single transaction. A cart line naming a missing product
    /// aborts the whole checkout with `ProductNotFound` and zero persisted
    /// rows. An empty cart is accepted and yields an order with no items.
    pub async fn place_order(
        pool: &PgPool,
        user_id: i64,
        lines: &[CartLine],
    ) -> Result<(Order, Vec<OrderItem>), OrderError> {
        let mut tx = pool.begin().await?;

        let order = OrderRepository::insert(&mut *tx, user_id).await?;

        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let product = ProductRepository::get_by_id(&mut *tx, line.product_id)
                .await?
                .ok_or(OrderError::ProductNotFound)?;
            let item =
                OrderItemRepository::insert(&mut *tx, order.id, product.id, line.quantity).await?;
            items.push(item);
        }

        tx.commit().await?;

        tracing::info!(
            "Order {} created for user {} with {} item(s)",
            order.id,
            user_id,
            items.len()
        );
        Ok((order, items))
    }

    /// Set one item's archived flag and cascade to the parent order:
    /// the order is archived exactly when all of its items are.
    ///
    /// The whole read-modify-write runs in one transaction that locks
    /// the parent order row first, so concurrent updates to sibling
    /// items serialize instead of racing on stale flags.
    pub async fn update_item(
        pool: &PgPool,
        item_id: i64,
        archived: bool,
    ) -> Result<OrderItem, OrderError> {
        let mut tx = pool.begin().await?;

        let order_id = OrderItemRepository::order_id_of(&mut *tx, item_id)
            .await?
            .ok_or(OrderError::ItemNotFound)?;

        if !OrderRepository::lock(&mut *tx, order_id).await? {
            return Err(OrderError::OrderNotFound);
        }

        let item = OrderItemRepository::set_archived(&mut *tx, item_id, archived)
            .await?
            .ok_or(OrderError::ItemNotFound)?;

        let flags = OrderItemRepository::archived_flags(&mut *tx, order_id).await?;
        let order_archived = all_archived(&flags);

        if !OrderRepository::set_archived(&mut *tx, order_id, order_archived).await? {
            return Err(OrderError::OrderNotFound);
        }

        tx.commit().await?;

        tracing::info!(
            "Item {} archived={}, order {} archived={}",
            item_id,
            archived,
            order_id,
            order_archived
        );
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_archived_mixed() {
        assert!(!all_archived(&[true, false, true]));
        assert!(!all_archived(&[false]));
    }

    #[test]
    fn test_all_archived_uniform() {
        assert!(all_archived(&[true]));
        assert!(all_archived(&[true, true, true]));
    }

    #[test]
    fn test_all_archived_vacuous() {
        // No items: the AND over nothing is true. Harmless in practice
        // because the cascade only runs from an existing item.
        assert!(all_archived(&[]));
    }
}
