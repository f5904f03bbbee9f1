use std::sync::Arc;

use crate::db::Database;
use crate::user_auth::UserAuthService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL storefront database
    pub db: Arc<Database>,
    /// User auth service (register/login/token verification)
    pub user_auth: Arc<UserAuthService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, user_auth: Arc<UserAuthService>) -> Self {
        Self { db, user_auth }
    }
}
