//! Product search repository.
//!
//! Implements the core's [`QueryExecutor`] boundary over sqlx: compiled
//! statements arrive with their positional parameter sequence and are bound
//! in order, nothing more. The rows and total-count statements for one
//! request run concurrently.

use async_trait::async_trait;
use sqlx::MySqlPool;

use lendit_core::{
    execute_category_search, execute_search, CategorySearchRequest, CompiledQuery,
    DataAccessError, Paginated, QueryExecutor, SearchRequest, SqlValue,
};

use crate::models::ProductSummary;

/// Search repository
pub struct SearchRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> SearchRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Run an unscoped search, returning one page plus the exact total.
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<Paginated<ProductSummary>, DataAccessError> {
        execute_search(self, request).await
    }

    /// Run a category-scoped search.
    pub async fn search_category(
        &self,
        request: &CategorySearchRequest,
    ) -> Result<Paginated<ProductSummary>, DataAccessError> {
        execute_category_search(self, request).await
    }
}

#[async_trait]
impl QueryExecutor for SearchRepo<'_> {
    type Row = ProductSummary;

    async fn select_all(
        &self,
        query: &CompiledQuery,
    ) -> Result<Vec<ProductSummary>, DataAccessError> {
        let mut stmt = sqlx::query_as::<_, ProductSummary>(&query.statement);
        for value in &query.params {
            stmt = match value {
                SqlValue::Int(v) => stmt.bind(*v),
                SqlValue::Date(d) => stmt.bind(*d),
            };
        }

        stmt.fetch_all(self.pool)
            .await
            .map_err(|e| DataAccessError::new(e.to_string()))
    }

    async fn select_scalar(&self, query: &CompiledQuery) -> Result<i64, DataAccessError> {
        let mut stmt = sqlx::query_scalar::<_, i64>(&query.statement);
        for value in &query.params {
            stmt = match value {
                SqlValue::Int(v) => stmt.bind(*v),
                SqlValue::Date(d) => stmt.bind(*d),
            };
        }

        stmt.fetch_one(self.pool)
            .await
            .map_err(|e| DataAccessError::new(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests - run with DATABASE_URL set against a seeded
    // database: cargo test -p lendit-server -- --ignored

    use super::*;
    use lendit_core::{Pagination, SortSpec};

    #[tokio::test]
    #[ignore = "requires database"]
    async fn rows_and_total_agree_with_store() {
        let pool = crate::db::create_pool(&std::env::var("DATABASE_URL").unwrap())
            .await
            .unwrap();
        let repo = SearchRepo::new(&pool);

        let request = SearchRequest::new(
            1,
            "2024-01-01".parse().unwrap(),
            "2024-01-05".parse().unwrap(),
            SortSpec::new("price", "asc").unwrap(),
            Pagination::new(1, 20).unwrap(),
        );

        let result = repo.search(&request).await.unwrap();
        assert!(result.items.len() as i64 <= result.total);
    }
}
