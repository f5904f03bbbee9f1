//! Data models for the storefront

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

/// Catalog entry. Read-only from the order service's perspective.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    #[schema(example = "Mechanical Keyboard")]
    pub title: String,
    pub description: String,
    /// Unit price, NUMERIC(12,2) in the store
    pub price: Decimal,
    #[schema(example = "electronics")]
    pub category: String,
    pub image: String,
    pub rating: f64,
    pub created_at: DateTime<Utc>,
}

/// A customer order. Created at checkout, never deleted.
///
/// `archived` is a derived flag: it is recomputed whenever one of the
/// order's items is archived or unarchived, and is true exactly when
/// every item of the order is archived.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

/// One cart line of an order, referencing a catalog product.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

/// Order item joined to its product. The storefront always renders the
/// two together, so reads return this shape.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemWithProduct {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: Product,
}

/// An order with its (filtered) items, each joined to its product.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<ItemWithProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_with_product_serializes_flat() {
        let now = Utc::now();
        let entry = ItemWithProduct {
            item: OrderItem {
                id: 7,
                order_id: 3,
                product_id: 11,
                quantity: 2,
                archived: false,
                created_at: now,
            },
            product: Product {
                id: 11,
                title: "Desk Lamp".to_string(),
                description: String::new(),
                price: Decimal::new(1999, 2),
                category: "home".to_string(),
                image: String::new(),
                rating: 4.5,
                created_at: now,
            },
        };

        let json = serde_json::to_value(&entry).expect("should serialize");
        // Item fields are flattened to the top level, product nested
        assert_eq!(json["id"], 7);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["product"]["id"], 11);
        assert_eq!(json["product"]["price"], "19.99");
    }
}
