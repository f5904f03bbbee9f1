//! User accounts and JWT session authentication

pub mod handlers;
pub mod middleware;
pub mod service;

pub use service::{Claims, UserAuthService};
