//! Product availability endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::AvailabilityRepo;
use crate::error::ApiError;
use crate::models::{Availability, NewAvailability};
use crate::state::AppState;

/// GET /users/{user_id}/products/{product_id}/availability
async fn list_availability(
    State(state): State<Arc<AppState>>,
    Path((_user_id, product_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<Availability>>, ApiError> {
    let windows = AvailabilityRepo::new(&state.pool)
        .list_for_product(product_id)
        .await?;
    Ok(Json(windows))
}

/// POST /users/{user_id}/products/{product_id}/availability
async fn create_availability(
    State(state): State<Arc<AppState>>,
    Path((_user_id, product_id)): Path<(i64, i64)>,
    Json(req): Json<NewAvailability>,
) -> Result<(StatusCode, Json<Availability>), ApiError> {
    let window = AvailabilityRepo::new(&state.pool)
        .create(product_id, req)
        .await?;
    Ok((StatusCode::CREATED, Json(window)))
}

/// GET /users/{user_id}/products/{product_id}/availability/{availability_id}
async fn get_availability(
    State(state): State<Arc<AppState>>,
    Path((_user_id, _product_id, availability_id)): Path<(i64, i64, i64)>,
) -> Result<Json<Availability>, ApiError> {
    let window = AvailabilityRepo::new(&state.pool)
        .get(availability_id)
        .await?;
    Ok(Json(window))
}

/// PUT /users/{user_id}/products/{product_id}/availability/{availability_id}
async fn update_availability(
    State(state): State<Arc<AppState>>,
    Path((_user_id, _product_id, availability_id)): Path<(i64, i64, i64)>,
    Json(req): Json<NewAvailability>,
) -> Result<Json<Availability>, ApiError> {
    let window = AvailabilityRepo::new(&state.pool)
        .update(availability_id, req)
        .await?;
    Ok(Json(window))
}

/// DELETE /users/{user_id}/products/{product_id}/availability/{availability_id}
async fn delete_availability(
    State(state): State<Arc<AppState>>,
    Path((_user_id, _product_id, availability_id)): Path<(i64, i64, i64)>,
) -> Result<StatusCode, ApiError> {
    AvailabilityRepo::new(&state.pool)
        .delete(availability_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Availability routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/products/{product_id}/availability",
            get(list_availability).post(create_availability),
        )
        .route(
            "/users/{user_id}/products/{product_id}/availability/{availability_id}",
            get(get_availability)
                .put(update_availability)
                .delete(delete_availability),
        )
}
