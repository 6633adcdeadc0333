//! Payment repository.
//!
//! Inserts use INSERT..SELECT so the charged `price_full` is snapshotted
//! from the product row inside the statement, never read-modify-written
//! from application state.

use sqlx::MySqlPool;
use uuid::Uuid;

use crate::models::{NewPayment, Payment};

use super::DbError;

/// Payment repository
pub struct PaymentRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PaymentRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Record a payment, snapshotting the product's current full price.
    pub async fn create(&self, new: NewPayment) -> Result<Payment, DbError> {
        let id = Uuid::new_v4();

        let result = sqlx::query(
            r#"
            INSERT INTO Payments
                (id, product_id, renter_id, dropoff_location_id,
                 starts_on, ends_on, fee_renter, fee_lender, price_full)
            SELECT ?, ?, ?, ?, ?, ?, ?, ?, p.price_full
            FROM Products p
            WHERE p.id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .bind(new.product_id)
        .bind(new.renter_id)
        .bind(new.dropoff_location_id)
        .bind(new.starts_on)
        .bind(new.ends_on)
        .bind(new.fee_renter)
        .bind(new.fee_lender)
        .bind(new.product_id)
        .execute(self.pool)
        .await?;

        // Zero rows means the product did not exist to snapshot from
        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "product",
                id: new.product_id.to_string(),
            });
        }

        self.get(id).await
    }

    /// Fetch a payment from the internal payments view.
    pub async fn get(&self, payment_id: Uuid) -> Result<Payment, DbError> {
        sqlx::query_as::<_, Payment>("SELECT * FROM View_Payments_Internal WHERE id = ? LIMIT 1")
            .bind(payment_id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "payment",
                id: payment_id.to_string(),
            })
    }
}
