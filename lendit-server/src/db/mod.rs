//! Database access: pool construction and repositories.

pub mod repos;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Create a connection pool against the marketplace database.
pub async fn create_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
