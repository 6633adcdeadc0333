//! Payment endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use uuid::Uuid;

use crate::db::repos::PaymentRepo;
use crate::error::ApiError;
use crate::models::{NewPayment, Payment};
use crate::state::AppState;

/// POST /payments - record a payment for a booking
async fn create_payment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewPayment>,
) -> Result<(StatusCode, Json<Payment>), ApiError> {
    let payment = PaymentRepo::new(&state.pool).create(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

/// GET /payments/{payment_id}
async fn get_payment(
    State(state): State<Arc<AppState>>,
    Path(payment_id): Path<Uuid>,
) -> Result<Json<Payment>, ApiError> {
    let payment = PaymentRepo::new(&state.pool).get(payment_id).await?;
    Ok(Json(payment))
}

/// Payment routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/payments", post(create_payment))
        .route("/payments/{payment_id}", get(get_payment))
}
