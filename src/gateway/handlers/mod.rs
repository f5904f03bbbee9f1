pub mod health;
pub mod orders;
pub mod products;

pub use health::{HealthResponse, health_check};
pub use orders::{
    create_order, get_current_user_items, get_order, get_order_items, get_user_archived_orders,
    get_user_orders, update_item,
};
pub use products::{get_product, list_products};
