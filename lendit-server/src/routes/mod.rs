//! HTTP route handlers, one module per resource.

pub mod availability;
pub mod categories;
pub mod health;
pub mod payments;
pub mod payout_accounts;
pub mod products;
pub mod search;
