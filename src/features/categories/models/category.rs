use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
#[derive(Debug, Clone, FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

/// Category row projected with its count of non-deleted products
#[derive(Debug, Clone, FromRow)]
pub struct CategoryProductCount {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub product_count: i64,
}
