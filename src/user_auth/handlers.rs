use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;
use validator::Validate;

use super::service::{AuthResponse, LoginRequest, RegisterRequest};
use crate::gateway::state::AppState;
use crate::gateway::types::{ApiError, ApiResult, created, error_codes, ok};

/// Register a new user
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = crate::gateway::types::ApiResponse<i64>),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Username or email already exists"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<i64> {
    if let Err(e) = req.validate() {
        return ApiError::bad_request(e.to_string()).into_err();
    }

    match state.user_auth.register(req).await {
        Ok(user_id) => created(user_id),
        Err(e) => {
            let err_msg = e.to_string();
            if err_msg.contains("duplicate key") {
                tracing::warn!("Registration attempt for existing user: {}", err_msg);
                ApiError::new(
                    StatusCode::CONFLICT,
                    error_codes::INVALID_PARAMETER,
                    "Username or email already exists",
                )
                .into_err()
            } else {
                tracing::error!("Registration failed: {:?}", e);
                ApiError::internal("Registration failed").into_err()
            }
        }
    }
}

/// Login user
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = crate::gateway::types::ApiResponse<AuthResponse>),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<AuthResponse> {
    match state.user_auth.login(req).await {
        Ok(resp) => ok(resp),
        Err(e) => {
            tracing::warn!("Login failed: {:?}", e);
            ApiError::new(
                StatusCode::UNAUTHORIZED,
                error_codes::AUTH_FAILED,
                "Invalid email or password",
            )
            .into_err()
        }
    }
}
