//! Storefront entities and repositories
//!
//! Three tables back the storefront: `products_tb` (read-only catalog),
//! `orders_tb` (one per checkout, owned by a user) and `order_items_tb`
//! (one per cart line, referencing a product).

pub mod items;
pub mod models;
pub mod orders;
pub mod products;

pub use items::OrderItemRepository;
pub use models::{ItemWithProduct, Order, OrderItem, OrderWithItems, Product};
pub use orders::OrderRepository;
pub use products::ProductRepository;
