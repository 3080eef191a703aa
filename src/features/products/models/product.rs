use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for product
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: i64,
    pub brand_id: i64,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Product row joined with its parent category and brand names.
/// Produced by the read queries so projections carry denormalized names
/// without a second lookup.
#[derive(Debug, Clone, FromRow)]
pub struct ProductWithNames {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: i64,
    pub category_name: String,
    pub brand_id: i64,
    pub brand_name: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}
