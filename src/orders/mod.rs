//! Order service: the storefront's core procedures
//!
//! Queries (user orders, order items) and mutations (checkout, item
//! archival with cascading order archival) over the relational store.

pub mod error;
pub mod service;
pub mod types;

pub use error::OrderError;
pub use service::OrderService;
pub use types::{CartLine, UpdateItemRequest};
