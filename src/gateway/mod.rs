pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, patch, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::Database;
use crate::user_auth::UserAuthService;
use state::AppState;

/// Start the storefront HTTP gateway
pub async fn run_server(host: &str, port: u16, db: Arc<Database>, jwt_secret: String) {
    let user_auth = Arc::new(UserAuthService::new(db.pool().clone(), jwt_secret));
    let state = Arc::new(AppState::new(db, user_auth));

    // ==========================================================================
    // Auth routes (no token required)
    // ==========================================================================
    let auth_routes = Router::new()
        .route("/register", post(crate::user_auth::handlers::register))
        .route("/login", post(crate::user_auth::handlers::login));

    // ==========================================================================
    // Public routes (catalog)
    // ==========================================================================
    let public_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product));

    // ==========================================================================
    // Order routes (JWT required)
    // ==========================================================================
    let order_routes = Router::new()
        .route(
            "/orders",
            get(handlers::get_user_orders).post(handlers::create_order),
        )
        .route("/orders/archived", get(handlers::get_user_archived_orders))
        .route("/orders/{order_id}", get(handlers::get_order))
        .route("/orders/{order_id}/items", get(handlers::get_order_items))
        .route("/items", get(handlers::get_current_user_items))
        .route("/items/{item_id}", patch(handlers::update_item))
        .layer(from_fn_with_state(
            state.clone(),
            crate::user_auth::middleware::jwt_auth_middleware,
        ));

    // Build complete router
    let app = Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/public", public_routes)
        .nest("/api/v1", order_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("📂 Public API: /api/v1/public/*");
    println!("🔒 Order API:  /api/v1/orders (auth required)");

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
