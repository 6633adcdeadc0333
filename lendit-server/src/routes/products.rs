//! Product listing endpoints.
//!
//! Ownership and authentication are enforced by upstream middleware; the
//! `user_id` path segment is trusted here.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::ProductRepo;
use crate::error::ApiError;
use crate::models::{NewProduct, Product, UpdateProduct};
use crate::state::AppState;

/// GET /users/{user_id}/products - all of a user's listings
async fn list_products(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = ProductRepo::new(&state.pool).list_for_user(user_id).await?;
    Ok(Json(products))
}

/// POST /users/{user_id}/products - create a listing
async fn create_product(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i64>,
    Json(req): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = ProductRepo::new(&state.pool).create(user_id, req).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /users/{user_id}/products/{product_id} - one listing
async fn get_product(
    State(state): State<Arc<AppState>>,
    Path((_user_id, product_id)): Path<(i64, i64)>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).get(product_id).await?;
    Ok(Json(product))
}

/// PUT /users/{user_id}/products/{product_id} - partial update
async fn update_product(
    State(state): State<Arc<AppState>>,
    Path((_user_id, product_id)): Path<(i64, i64)>,
    Json(req): Json<UpdateProduct>,
) -> Result<Json<Product>, ApiError> {
    let product = ProductRepo::new(&state.pool).update(product_id, req).await?;
    Ok(Json(product))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users/{user_id}/products",
            get(list_products).post(create_product),
        )
        .route(
            "/users/{user_id}/products/{product_id}",
            get(get_product).put(update_product),
        )
}
