//! Executor boundary: where compiled queries meet the relational store.
//!
//! The compiler never performs I/O; callers hand its output to a
//! [`QueryExecutor`] implementation (the server crate provides one over
//! sqlx). A search response needs two executor calls — rows and total
//! count — and they are issued concurrently; either both succeed or the
//! whole search fails.

use async_trait::async_trait;
use futures::try_join;

use crate::error::DataAccessError;
use crate::pagination::Paginated;
use crate::query::{self, CompiledQuery};
use crate::request::{CategorySearchRequest, SearchRequest};

/// Runs compiled statements against the store.
///
/// An empty result set is not an error; [`DataAccessError`] covers
/// transport and driver faults only.
#[async_trait]
pub trait QueryExecutor {
    type Row;

    /// Execute a rows query, returning every matching row.
    async fn select_all(&self, query: &CompiledQuery) -> Result<Vec<Self::Row>, DataAccessError>;

    /// Execute a scalar query, returning its single integer projection.
    async fn select_scalar(&self, query: &CompiledQuery) -> Result<i64, DataAccessError>;
}

/// Run an unscoped search: compile both statements, execute them
/// concurrently, combine into a paged envelope.
pub async fn execute_search<E>(
    executor: &E,
    request: &SearchRequest,
) -> Result<Paginated<E::Row>, DataAccessError>
where
    E: QueryExecutor + Sync,
{
    let rows_query = query::rows(request);
    let count_query = query::total_count(request);

    let (items, total) = try_join!(
        executor.select_all(&rows_query),
        executor.select_scalar(&count_query),
    )?;

    Ok(Paginated {
        items,
        total,
        page: request.pagination().page(),
        per_page: request.pagination().per_page(),
    })
}

/// Run a category-scoped search, same two-statement contract.
pub async fn execute_category_search<E>(
    executor: &E,
    request: &CategorySearchRequest,
) -> Result<Paginated<E::Row>, DataAccessError>
where
    E: QueryExecutor + Sync,
{
    let rows_query = query::rows_in_category(request);
    let count_query = query::total_count_in_category(request);

    let (items, total) = try_join!(
        executor.select_all(&rows_query),
        executor.select_scalar(&count_query),
    )?;

    Ok(Paginated {
        items,
        total,
        page: request.search().pagination().page(),
        per_page: request.search().pagination().per_page(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;
    use crate::request::CategoryType;
    use crate::sorting::SortSpec;
    use std::sync::Mutex;

    /// Records every statement it is asked to run.
    struct RecordingExecutor {
        statements: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordingExecutor {
        fn new(fail: bool) -> Self {
            Self {
                statements: Mutex::new(vec![]),
                fail,
            }
        }
    }

    #[async_trait]
    impl QueryExecutor for RecordingExecutor {
        type Row = u32;

        async fn select_all(&self, query: &CompiledQuery) -> Result<Vec<u32>, DataAccessError> {
            self.statements
                .lock()
                .unwrap()
                .push(query.statement.clone());
            if self.fail {
                return Err(DataAccessError::new("connection refused"));
            }
            Ok(vec![1, 2, 3])
        }

        async fn select_scalar(&self, query: &CompiledQuery) -> Result<i64, DataAccessError> {
            self.statements
                .lock()
                .unwrap()
                .push(query.statement.clone());
            if self.fail {
                return Err(DataAccessError::new("connection refused"));
            }
            Ok(42)
        }
    }

    fn request() -> SearchRequest {
        SearchRequest::new(
            5,
            "2024-01-01".parse().unwrap(),
            "2024-01-05".parse().unwrap(),
            SortSpec::new("price", "asc").unwrap(),
            Pagination::new(2, 20).unwrap(),
        )
    }

    #[tokio::test]
    async fn combines_rows_and_total() {
        let executor = RecordingExecutor::new(false);
        let result = execute_search(&executor, &request()).await.unwrap();

        assert_eq!(result.items, vec![1, 2, 3]);
        assert_eq!(result.total, 42);
        assert_eq!(result.page, 2);
        assert_eq!(result.per_page, 20);

        let statements = executor.statements.lock().unwrap();
        assert_eq!(statements.len(), 2);
        assert!(statements.iter().any(|s| s.contains("LIMIT 20 OFFSET 20")));
        assert!(statements.iter().any(|s| s.contains("COUNT(*)")));
    }

    #[tokio::test]
    async fn no_partial_results_on_failure() {
        let executor = RecordingExecutor::new(true);
        let err = execute_search(&executor, &request()).await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn category_search_runs_scoped_statements() {
        let executor = RecordingExecutor::new(false);
        let scoped = CategorySearchRequest::new(request(), CategoryType::Sub, 7);
        let result = execute_category_search(&executor, &scoped).await.unwrap();
        assert_eq!(result.total, 42);

        let statements = executor.statements.lock().unwrap();
        assert!(statements
            .iter()
            .all(|s| s.contains("product_categories_sub_id")));
    }
}
