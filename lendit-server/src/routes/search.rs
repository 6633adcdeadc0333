//! Search endpoints: products and the location type-ahead.
//!
//! The product search builds a validated request from the query string,
//! then hands it to the search repository; a category pair in the query
//! string selects the category-scoped compiler path.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use lendit_core::{
    CategorySearchRequest, Paginated, SearchParams, SearchRequest, ValidationError,
};
use lendit_core::pagination::{DEFAULT_PER_PAGE, MAX_PER_PAGE};

use crate::db::repos::{LocationRepo, SearchRepo};
use crate::error::ApiError;
use crate::models::{Location, ProductSummary};
use crate::state::AppState;

/// GET /search/products - paged product search
async fn search_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Paginated<ProductSummary>>, ApiError> {
    let repo = SearchRepo::new(&state.pool);

    let result = if params.has_category_filter() {
        let request = CategorySearchRequest::from_params(&params)?;
        repo.search_category(&request).await?
    } else {
        let request = SearchRequest::from_params(&params)?;
        repo.search(&request).await?
    };

    Ok(Json(result))
}

/// Query parameters for the location type-ahead
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationSearchParams {
    pub q: Option<String>,
    pub per_page: Option<u32>,
}

/// Result cap for location matches: default when absent, clamped to the
/// same ceiling as product pages.
fn location_limit(per_page: Option<u32>) -> u32 {
    match per_page {
        Some(n) if n >= 1 => n.min(MAX_PER_PAGE),
        _ => DEFAULT_PER_PAGE,
    }
}

/// GET /search/locations?q= - prefix search for the location picker
async fn search_locations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LocationSearchParams>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let query = params
        .q
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or(ValidationError::MissingField { field: "q" })?;

    let locations = LocationRepo::new(&state.pool)
        .search(query, location_limit(params.per_page))
        .await?;

    Ok(Json(locations))
}

/// Search routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search/products", get(search_products))
        .route("/search/locations", get(search_locations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_limit_defaults_and_clamps() {
        assert_eq!(location_limit(None), DEFAULT_PER_PAGE);
        assert_eq!(location_limit(Some(0)), DEFAULT_PER_PAGE);
        assert_eq!(location_limit(Some(50)), 50);
        assert_eq!(location_limit(Some(999)), MAX_PER_PAGE);
    }
}
