use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored product record. `id` and `created_at` are assigned by the store
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    /// May be empty.
    pub description: String,
    /// Exact decimal monetary value, never negative once stored.
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
}

/// Decoded create payload, prior to validation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Absent price is a validation error, not a decode failure.
    pub price: Option<Decimal>,
}

/// Validated payload prior to id assignment. Only the service builds one.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}
