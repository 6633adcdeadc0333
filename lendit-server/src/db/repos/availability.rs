//! Product availability repository.

use sqlx::MySqlPool;

use crate::models::{Availability, NewAvailability};

use super::DbError;

/// Availability repository
pub struct AvailabilityRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> AvailabilityRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Add an availability window to a product.
    pub async fn create(
        &self,
        product_id: i64,
        new: NewAvailability,
    ) -> Result<Availability, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO Product_Availability (product_id, starts_on, ends_on, note)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(product_id)
        .bind(new.starts_on)
        .bind(new.ends_on)
        .bind(&new.note)
        .execute(self.pool)
        .await?;

        self.get(result.last_insert_id() as i64).await
    }

    /// Fetch a single availability window.
    pub async fn get(&self, availability_id: i64) -> Result<Availability, DbError> {
        sqlx::query_as::<_, Availability>(
            "SELECT * FROM Product_Availability WHERE id = ? LIMIT 1",
        )
        .bind(availability_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "availability",
            id: availability_id.to_string(),
        })
    }

    /// List every availability window of a product, earliest first.
    pub async fn list_for_product(&self, product_id: i64) -> Result<Vec<Availability>, DbError> {
        let windows = sqlx::query_as::<_, Availability>(
            "SELECT * FROM Product_Availability WHERE product_id = ? ORDER BY starts_on ASC",
        )
        .bind(product_id)
        .fetch_all(self.pool)
        .await?;

        Ok(windows)
    }

    /// Replace the window's dates and note.
    pub async fn update(
        &self,
        availability_id: i64,
        new: NewAvailability,
    ) -> Result<Availability, DbError> {
        sqlx::query(
            "UPDATE Product_Availability SET starts_on = ?, ends_on = ?, note = ? WHERE id = ?",
        )
        .bind(new.starts_on)
        .bind(new.ends_on)
        .bind(&new.note)
        .bind(availability_id)
        .execute(self.pool)
        .await?;

        self.get(availability_id).await
    }

    /// Delete a window; missing rows surface as NotFound.
    pub async fn delete(&self, availability_id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM Product_Availability WHERE id = ?")
            .bind(availability_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "availability",
                id: availability_id.to_string(),
            });
        }

        Ok(())
    }
}
