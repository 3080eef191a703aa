use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::products::models::ProductWithNames;
use crate::shared::validation::validate_price;

/// Response DTO for product, including denormalized category and brand names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponseDto {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub description: String,
    pub category_id: i64,
    /// Name of the owning category
    pub category: String,
    pub brand_id: i64,
    /// Name of the owning brand
    pub brand: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProductWithNames> for ProductResponseDto {
    fn from(p: ProductWithNames) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            description: p.description,
            category_id: p.category_id,
            category: p.category_name,
            brand_id: p.brand_id,
            brand: p.brand_name,
            is_active: p.is_active,
            is_deleted: p.is_deleted,
            created_at: p.created_at,
        }
    }
}

/// Request DTO for creating a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    pub description: Option<String>,

    pub category_id: i64,

    pub brand_id: i64,
}

/// Request DTO for updating a product (full field replace).
/// The id must match the route id; the soft-delete flag cannot be changed
/// through this path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub id: i64,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(custom(function = validate_price))]
    pub price: Decimal,

    pub description: Option<String>,

    pub category_id: i64,

    pub brand_id: i64,

    pub is_active: bool,
}
