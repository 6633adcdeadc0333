//! Repositories: thin, parameterized single-table SQL over the pool.

pub mod availability;
pub mod categories;
pub mod locations;
pub mod payments;
pub mod payout_accounts;
pub mod products;
pub mod search;

pub use availability::AvailabilityRepo;
pub use categories::CategoryRepo;
pub use locations::LocationRepo;
pub use payments::PaymentRepo;
pub use payout_accounts::PayoutAccountRepo;
pub use products::ProductRepo;
pub use search::SearchRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
