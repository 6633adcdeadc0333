//! Error taxonomy for the search core.
//!
//! Uses `thiserror` for structured, composable errors. [`ValidationError`]
//! covers everything raised at construction time, before any SQL exists;
//! [`DataAccessError`] is raised only when a compiled query hits the store.

use thiserror::Error;

/// A malformed or missing search input, rejected before query rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required field absent from the raw request
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// Page index below 1
    #[error("page must be at least 1, got {page}")]
    InvalidPage { page: u32 },

    /// Page size below 1
    #[error("page size must be at least 1, got {per_page}")]
    InvalidPageSize { per_page: u32 },

    /// Sort field not on the allow-list
    #[error("unknown sort field '{field}'")]
    UnknownSortField { field: String },

    /// Sort direction not on the allow-list
    #[error("unknown sort direction '{direction}'")]
    UnknownSortDirection { direction: String },

    /// Category level not one of major/minor/sub
    #[error("unknown category type '{value}'")]
    UnknownCategoryType { value: String },

    /// Category type given without an id, or the reverse
    #[error("category filter requires both a type and an id")]
    IncompleteCategoryFilter,
}

/// Failure at the relational store boundary. An empty result set is never
/// an error; this covers transport and driver faults only.
#[derive(Debug, Error)]
#[error("data access failed: {reason}")]
pub struct DataAccessError {
    pub reason: String,
}

impl DataAccessError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
