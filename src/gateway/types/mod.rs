//! Gateway types module
//!
//! - [`ApiResponse<T>`]: Unified response wrapper
//! - [`ApiError`] / [`ApiResult`]: handler error plumbing
//! - [`error_codes`]: Standard error code constants

pub mod response;

pub use response::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};
