//! Payout account repository.
//!
//! Stores the opaque processor-side account id; account creation at the
//! processor happens upstream.

use sqlx::MySqlPool;
use uuid::Uuid;

use crate::models::PayoutAccount;

use super::DbError;

/// Payout account repository
pub struct PayoutAccountRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> PayoutAccountRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Link a processor account to a user.
    pub async fn create(&self, user_id: i64, account_id: &str) -> Result<PayoutAccount, DbError> {
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO Payout_Accounts (id, user_id, account_id) VALUES (?, ?, ?)")
            .bind(id)
            .bind(user_id)
            .bind(account_id)
            .execute(self.pool)
            .await?;

        self.get(id, user_id).await
    }

    /// Fetch one payout account, scoped to its owner.
    pub async fn get(&self, id: Uuid, user_id: i64) -> Result<PayoutAccount, DbError> {
        sqlx::query_as::<_, PayoutAccount>(
            "SELECT * FROM Payout_Accounts WHERE id = ? AND user_id = ? LIMIT 1",
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "payout account",
            id: id.to_string(),
        })
    }

    /// List a user's payout accounts, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> Result<Vec<PayoutAccount>, DbError> {
        let accounts = sqlx::query_as::<_, PayoutAccount>(
            "SELECT * FROM Payout_Accounts WHERE user_id = ? ORDER BY created_on DESC",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(accounts)
    }
}
