//! Shared application state.

use sqlx::MySqlPool;

/// State shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: MySqlPool,
}

impl AppState {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}
