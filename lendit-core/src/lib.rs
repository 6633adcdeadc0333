//! lendit-core: product search query compiler for the lendit marketplace.
//!
//! Everything in this crate is a pure value transformation: pagination and
//! sort specifications, validated search requests, and the compiler that
//! turns one logical filter into a parameterized rows query plus a matching
//! total-count query. The only I/O boundary is the [`QueryExecutor`] trait,
//! implemented by the server crate against the relational store.

pub mod error;
pub mod executor;
pub mod pagination;
pub mod query;
pub mod request;
pub mod sorting;

pub use error::{DataAccessError, ValidationError};
pub use executor::{execute_category_search, execute_search, QueryExecutor};
pub use pagination::{Paginated, Pagination};
pub use query::{CompiledQuery, SqlValue};
pub use request::{CategorySearchRequest, CategoryType, SearchParams, SearchRequest};
pub use sorting::{SortDirection, SortField, SortSpec};
