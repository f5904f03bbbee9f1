//! Public catalog handlers

use std::sync::Arc;

use axum::extract::{Path, State};

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResult, ok};
use crate::store::{Product, ProductRepository};

/// List the product catalog
///
/// GET /api/v1/public/products
#[utoipa::path(
    get,
    path = "/api/v1/public/products",
    responses(
        (status = 200, description = "Catalog", body = crate::gateway::types::ApiResponse<Vec<Product>>)
    ),
    tag = "Catalog"
)]
pub async fn list_products(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Product>> {
    match ProductRepository::list_all(state.db.pool()).await {
        Ok(products) => ok(products),
        Err(e) => ApiError::db_error(format!("Query failed: {}", e)).into_err(),
    }
}

/// Fetch one product by id
///
/// GET /api/v1/public/products/{product_id}
#[utoipa::path(
    get,
    path = "/api/v1/public/products/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product", body = crate::gateway::types::ApiResponse<Product>),
        (status = 404, description = "Product not found")
    ),
    tag = "Catalog"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> ApiResult<Product> {
    match ProductRepository::get_by_id(state.db.pool(), product_id).await {
        Ok(Some(product)) => ok(product),
        Ok(None) => ApiError::not_found("Product not found").into_err(),
        Err(e) => ApiError::db_error(format!("Query failed: {}", e)).into_err(),
    }
}
