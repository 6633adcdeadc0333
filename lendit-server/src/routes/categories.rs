//! Product category browsing endpoints.
//!
//! Read-only hierarchy used by clients to build category-scoped searches;
//! the nested URL shape mirrors the major/minor/sub levels.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::db::repos::CategoryRepo;
use crate::error::ApiError;
use crate::models::{CategoryRow, MajorCategory, MinorCategory, SubCategory};
use crate::state::AppState;

/// GET /product-categories - the full hierarchy, flat
async fn all_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CategoryRow>>, ApiError> {
    let rows = CategoryRepo::new(&state.pool).all().await?;
    Ok(Json(rows))
}

/// GET /product-categories/major
async fn list_majors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MajorCategory>>, ApiError> {
    let majors = CategoryRepo::new(&state.pool).majors().await?;
    Ok(Json(majors))
}

/// GET /product-categories/major/{major_id}
async fn get_major(
    State(state): State<Arc<AppState>>,
    Path(major_id): Path<i64>,
) -> Result<Json<MajorCategory>, ApiError> {
    let major = CategoryRepo::new(&state.pool).major(major_id).await?;
    Ok(Json(major))
}

/// GET /product-categories/major/{major_id}/minor
async fn list_minors(
    State(state): State<Arc<AppState>>,
    Path(major_id): Path<i64>,
) -> Result<Json<Vec<MinorCategory>>, ApiError> {
    let minors = CategoryRepo::new(&state.pool).minors(major_id).await?;
    Ok(Json(minors))
}

/// GET /product-categories/major/{major_id}/minor/{minor_id}
async fn get_minor(
    State(state): State<Arc<AppState>>,
    Path((_major_id, minor_id)): Path<(i64, i64)>,
) -> Result<Json<MinorCategory>, ApiError> {
    let minor = CategoryRepo::new(&state.pool).minor(minor_id).await?;
    Ok(Json(minor))
}

/// GET /product-categories/major/{major_id}/minor/{minor_id}/sub
async fn list_subs(
    State(state): State<Arc<AppState>>,
    Path((_major_id, minor_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<SubCategory>>, ApiError> {
    let subs = CategoryRepo::new(&state.pool).subs(minor_id).await?;
    Ok(Json(subs))
}

/// GET /product-categories/major/{major_id}/minor/{minor_id}/sub/{sub_id}
async fn get_sub(
    State(state): State<Arc<AppState>>,
    Path((_major_id, _minor_id, sub_id)): Path<(i64, i64, i64)>,
) -> Result<Json<SubCategory>, ApiError> {
    let sub = CategoryRepo::new(&state.pool).sub(sub_id).await?;
    Ok(Json(sub))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/product-categories", get(all_categories))
        .route("/product-categories/major", get(list_majors))
        .route("/product-categories/major/{major_id}", get(get_major))
        .route(
            "/product-categories/major/{major_id}/minor",
            get(list_minors),
        )
        .route(
            "/product-categories/major/{major_id}/minor/{minor_id}",
            get(get_minor),
        )
        .route(
            "/product-categories/major/{major_id}/minor/{minor_id}/sub",
            get(list_subs),
        )
        .route(
            "/product-categories/major/{major_id}/minor/{minor_id}/sub/{sub_id}",
            get(get_sub),
        )
}
