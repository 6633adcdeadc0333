//! Query compiler: one logical filter, two parameterized statements.
//!
//! The correctness contract here is that the Nth `?` placeholder in the
//! statement text always pairs with the Nth value in the parameter
//! sequence. A mismatch does not error, it silently corrupts results, so
//! text and values are built together in a single pass over the filter
//! fields by [`StatementBuilder`] — there are never two independently
//! maintained lists.

use chrono::NaiveDate;

use crate::request::{CategorySearchRequest, SearchRequest};

/// Base predicate: the store-side filter matches products available in the
/// requested window near the requested location. The compiler only supplies
/// its bound arguments, never its internals.
const SELECT_PREFIX: &str =
    "SELECT * FROM View_Search_Products p WHERE SEARCH_PRODUCTS_FILTER(p.id, ?, ?, ?) = TRUE";

/// A value bound into a compiled statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlValue {
    Int(i64),
    Date(NaiveDate),
}

/// A rendered statement and its positional parameters, in matching order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    pub statement: String,
    pub params: Vec<SqlValue>,
}

impl CompiledQuery {
    /// Number of `?` placeholders in the statement text
    pub fn placeholder_count(&self) -> usize {
        self.statement.matches('?').count()
    }
}

/// Builds statement text and parameter sequence in lockstep.
struct StatementBuilder {
    sql: String,
    params: Vec<SqlValue>,
}

impl StatementBuilder {
    /// Seed with the base predicate and its three filter arguments.
    fn base(request: &SearchRequest) -> Self {
        Self {
            sql: SELECT_PREFIX.to_owned(),
            params: vec![
                SqlValue::Int(request.location_id()),
                SqlValue::Date(request.starts_on()),
                SqlValue::Date(request.ends_on()),
            ],
        }
    }

    /// Append an equality clause on a pre-vetted column together with its
    /// bound value.
    fn push_equality(&mut self, column: &'static str, value: SqlValue) {
        self.sql.push_str(" AND ");
        self.sql.push_str(column);
        self.sql.push_str(" = ?");
        self.params.push(value);
    }

    fn into_rows(self, request: &SearchRequest) -> CompiledQuery {
        let ordered = format!("{}{}", self.sql, request.sorting().render());
        CompiledQuery {
            statement: request.pagination().rows_clause(&ordered),
            params: self.params,
        }
    }

    // Ordering is irrelevant to a count, so no ORDER BY here.
    fn into_count(self, request: &SearchRequest) -> CompiledQuery {
        CompiledQuery {
            statement: request.pagination().count_clause(&self.sql),
            params: self.params,
        }
    }
}

/// Rows query for an unscoped search: base predicate + ORDER BY + LIMIT.
pub fn rows(request: &SearchRequest) -> CompiledQuery {
    StatementBuilder::base(request).into_rows(request)
}

/// Exact-count query for an unscoped search, same filter parameters.
pub fn total_count(request: &SearchRequest) -> CompiledQuery {
    StatementBuilder::base(request).into_count(request)
}

/// Rows query scoped to one category level.
pub fn rows_in_category(request: &CategorySearchRequest) -> CompiledQuery {
    let mut builder = StatementBuilder::base(request.search());
    builder.push_equality(
        request.category_type().column(),
        SqlValue::Int(request.category_id()),
    );
    builder.into_rows(request.search())
}

/// Exact-count query scoped to one category level.
pub fn total_count_in_category(request: &CategorySearchRequest) -> CompiledQuery {
    let mut builder = StatementBuilder::base(request.search());
    builder.push_equality(
        request.category_type().column(),
        SqlValue::Int(request.category_id()),
    );
    builder.into_count(request.search())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;
    use crate::request::CategoryType;
    use crate::sorting::SortSpec;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn request(page: u32) -> SearchRequest {
        SearchRequest::new(
            5,
            date("2024-01-01"),
            date("2024-01-05"),
            SortSpec::new("price", "asc").unwrap(),
            Pagination::new(page, 20).unwrap(),
        )
    }

    fn category_request(page: u32) -> CategorySearchRequest {
        CategorySearchRequest::new(request(page), CategoryType::Minor, 9)
    }

    #[test]
    fn rows_first_page() {
        let compiled = rows(&request(1));
        assert!(compiled.statement.contains("SEARCH_PRODUCTS_FILTER(p.id, ?, ?, ?)"));
        assert!(compiled.statement.contains("ORDER BY price ASC"));
        assert!(compiled.statement.ends_with("LIMIT 20 OFFSET 0"));
        assert_eq!(
            compiled.params,
            vec![
                SqlValue::Int(5),
                SqlValue::Date(date("2024-01-01")),
                SqlValue::Date(date("2024-01-05")),
            ]
        );
    }

    #[test]
    fn rows_third_page_offsets() {
        let compiled = rows(&request(3));
        assert!(compiled.statement.ends_with("LIMIT 20 OFFSET 40"));
    }

    #[test]
    fn count_has_same_params_no_ordering() {
        let compiled = total_count(&request(3));
        assert!(compiled.statement.contains("COUNT(*)"));
        assert!(!compiled.statement.contains("ORDER BY"));
        assert!(!compiled.statement.contains("LIMIT"));
        assert!(!compiled.statement.contains("OFFSET"));
        assert_eq!(
            compiled.params,
            vec![
                SqlValue::Int(5),
                SqlValue::Date(date("2024-01-01")),
                SqlValue::Date(date("2024-01-05")),
            ]
        );
    }

    #[test]
    fn category_rows_append_column_and_param_together() {
        let compiled = rows_in_category(&category_request(1));
        assert!(compiled
            .statement
            .contains("AND product_categories_minor_id = ?"));
        assert_eq!(
            compiled.params,
            vec![
                SqlValue::Int(5),
                SqlValue::Date(date("2024-01-01")),
                SqlValue::Date(date("2024-01-05")),
                SqlValue::Int(9),
            ]
        );
    }

    #[test]
    fn placeholder_count_matches_param_count() {
        for compiled in [
            rows(&request(1)),
            total_count(&request(1)),
            rows_in_category(&category_request(2)),
            total_count_in_category(&category_request(2)),
        ] {
            assert_eq!(compiled.placeholder_count(), compiled.params.len());
        }
    }

    #[test]
    fn category_count_keeps_category_param() {
        let compiled = total_count_in_category(&category_request(1));
        assert!(compiled.statement.contains("product_categories_minor_id"));
        assert!(!compiled.statement.contains("ORDER BY"));
        assert_eq!(compiled.params.len(), 4);
    }

    #[test]
    fn compilation_is_pure() {
        let req = request(2);
        assert_eq!(rows(&req), rows(&req));
        assert_eq!(total_count(&req), total_count(&req));
    }
}
