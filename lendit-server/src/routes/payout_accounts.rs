//! Payout account endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::db::repos::PayoutAccountRepo;
use crate::error::ApiError;
use crate::models::{NewPayoutAccount, PayoutAccount};
use crate::state::AppState;

/// GET /users/{user_id}/payout-accounts
async fn list_accounts(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<PayoutAccount>>, ApiError> {
    let accounts = PayoutAccountRepo::new(&state.pool)
        .list_for_user(user_id)
        .await?;
    Ok(Json(accounts))
}

/// POST /users/{user_id}/payout-accounts - link a processor account
async fn create_account(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<NewPayoutAccount>,
) -> Result<(StatusCode, Json<PayoutAccount>), ApiError> {
    let account = PayoutAccountRepo::new(&state.pool)
        .create(user_id, &req.account_id)
        .await?;
    Ok((StatusCode::CREATED, Json(account)))
}

/// GET /users/{user_id}/payout-accounts/{account_id}
async fn get_account(
    State(state): State<Arc<AppState>>,
    Path((user_id, account_id)): Path<(i64, Uuid)>,
) -> Result<Json<PayoutAccount>, ApiError> {
    let account = PayoutAccountRepo::new(&state.pool)
        .get(account_id, user_id)
        .await?;
    Ok(Json(account))
}

/// Payout account routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/payout-accounts",
            get(list_accounts).post(create_account),
        )
        .route(
            "/users/{user_id}/payout-accounts/{account_id}",
            get(get_account),
        )
}
