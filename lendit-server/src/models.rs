//! Domain models and request/response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// ============================================================================
// Search
// ============================================================================

/// One row of the product search view
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub price_full: f64,
    pub price_half: Option<f64>,
    pub dropoff_distance: i32,
    pub minimum_age: Option<i32>,
    pub created_on: DateTime<Utc>,
}

/// A location row matched by the location type-ahead search
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Location {
    pub id: i64,
    pub city: String,
    pub state_name: String,
}

// ============================================================================
// Product categories
// ============================================================================

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MajorCategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct MinorCategory {
    pub id: i64,
    pub product_categories_major_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SubCategory {
    pub id: i64,
    pub product_categories_minor_id: i64,
    pub name: String,
}

/// One fully-joined row of the category hierarchy, for the flat listing
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CategoryRow {
    pub major_id: i64,
    pub major_name: String,
    pub minor_id: i64,
    pub minor_name: String,
    pub sub_id: i64,
    pub sub_name: String,
}

// ============================================================================
// Products
// ============================================================================

/// A product listing owned by a lender
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub product_categories_sub_id: Option<i64>,
    pub location_id: Option<i64>,
    pub dropoff_distance: Option<i32>,
    pub price_full: Option<f64>,
    pub price_half: Option<f64>,
    pub image: Option<String>,
    pub minimum_age: Option<i32>,
    pub created_on: DateTime<Utc>,
}

/// Fields accepted when creating a product
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub product_categories_sub_id: Option<i64>,
    pub location_id: Option<i64>,
    pub dropoff_distance: Option<i32>,
    pub price_full: Option<f64>,
    pub price_half: Option<f64>,
    pub image: Option<String>,
    pub minimum_age: Option<i32>,
}

/// Fields accepted when updating a product; absent fields are left as-is
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub product_categories_sub_id: Option<i64>,
    pub location_id: Option<i64>,
    pub dropoff_distance: Option<i32>,
    pub price_full: Option<f64>,
    pub price_half: Option<f64>,
    pub image: Option<String>,
    pub minimum_age: Option<i32>,
}

// ============================================================================
// Availability
// ============================================================================

/// A window in which a product can be rented
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Availability {
    pub id: i64,
    pub product_id: i64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub note: Option<String>,
    pub created_on: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAvailability {
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub note: Option<String>,
}

// ============================================================================
// Payments
// ============================================================================

/// A payment record; `price_full` is snapshotted from the product at
/// insert time so later price edits cannot change what was charged.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Payment {
    pub id: Uuid,
    pub product_id: i64,
    pub renter_id: i64,
    pub dropoff_location_id: i64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub fee_renter: f64,
    pub fee_lender: f64,
    pub price_full: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPayment {
    pub product_id: i64,
    pub renter_id: i64,
    pub dropoff_location_id: i64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub fee_renter: f64,
    pub fee_lender: f64,
}

// ============================================================================
// Payout accounts
// ============================================================================

/// A lender's account at the payment processor, referenced by opaque id
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PayoutAccount {
    pub id: Uuid,
    pub user_id: i64,
    pub account_id: String,
    pub created_on: DateTime<Utc>,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPayoutAccount {
    /// Processor-side account id, created by an upstream service
    pub account_id: String,
}
