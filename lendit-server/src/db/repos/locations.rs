//! Location repository: the type-ahead search behind the location picker.

use sqlx::MySqlPool;

use crate::models::Location;

use super::DbError;

/// Location repository
pub struct LocationRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> LocationRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Prefix-match cities by name. The pattern is bound, not interpolated;
    /// `limit` is validated by the caller.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<Location>, DbError> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT id, city, state_name
            FROM Locations
            WHERE city LIKE CONCAT(?, '%')
            ORDER BY city, state_name
            LIMIT ?
            "#,
        )
        .bind(query)
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(locations)
    }
}
