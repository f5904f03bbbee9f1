//! Amzn Store - Storefront Order Service
//!
//! A small e-commerce backend: authenticated order procedures exposed over
//! HTTP, backed by PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing initialization (rolling file + stdout)
//! - [`db`] - PostgreSQL connection pool
//! - [`store`] - entities and repositories (products, orders, order items)
//! - [`orders`] - the order service (queries, checkout, archival cascade)
//! - [`user_auth`] - user accounts and JWT authentication
//! - [`gateway`] - axum HTTP surface

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod store;
pub mod user_auth;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use orders::{CartLine, OrderError, OrderService};
pub use store::{ItemWithProduct, Order, OrderItem, OrderWithItems, Product};
