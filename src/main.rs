//! Amzn Store - Storefront Backend
//!
//! Entry point. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│ Gateway  │───▶│ Services │───▶│ Postgres │
//! │  (YAML)  │    │ (axum)   │    │ (orders) │    │ (sqlx)   │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```

use std::sync::Arc;

use amzn_store::config::AppConfig;
use amzn_store::db::Database;
use amzn_store::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = logging::init_logging(&app_config);

    tracing::info!("Starting Amzn Store backend in {} mode", env);

    // Get Gateway config from YAML, allow --port override
    let gateway_config = app_config.gateway.clone();
    let port = if let Some(override_port) = get_port_override() {
        override_port
    } else {
        gateway_config.port
    };

    println!("=== Amzn Store: Storefront Gateway ===");
    println!("Gateway will listen on {}:{}", gateway_config.host, port);

    let db = match Database::connect(&app_config.postgres_url).await {
        Ok(db) => Arc::new(db),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to connect to PostgreSQL: {}", e);
            eprintln!("   Hint: Check postgres_url in config/{}.yaml", env);
            std::process::exit(1);
        }
    };

    gateway::run_server(&gateway_config.host, port, db, app_config.jwt_secret.clone()).await;
}
