use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for brand
#[derive(Debug, Clone, FromRow)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}
