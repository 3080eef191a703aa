use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::features::brands::models::Brand;

/// Response DTO for brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResponseDto {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponseDto {
    fn from(b: Brand) -> Self {
        Self {
            id: b.id,
            name: b.name,
            logo_url: b.logo_url,
            is_active: b.is_active,
            is_deleted: b.is_deleted,
            created_at: b.created_at,
        }
    }
}

/// Parsed multipart form for brand creation: `name` text field plus the
/// logo `file` field (original filename + bytes)
#[derive(Debug)]
pub struct CreateBrandRequest {
    pub name: String,
    pub file_name: String,
    pub file_data: Vec<u8>,
}
