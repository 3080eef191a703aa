use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::features::categories::models::{Category, CategoryProductCount};

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            is_active: c.is_active,
            is_deleted: c.is_deleted,
            created_at: c.created_at,
        }
    }
}

/// Response DTO for a category with its non-deleted product count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProductCountDto {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub product_count: i64,
}

impl From<CategoryProductCount> for CategoryProductCountDto {
    fn from(c: CategoryProductCount) -> Self {
        Self {
            id: c.id,
            name: c.name,
            is_active: c.is_active,
            product_count: c.product_count,
        }
    }
}

/// Request DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_category_response_carries_lifecycle_fields() {
        let now = Utc::now();
        let dto: CategoryResponseDto = Category {
            id: 3,
            name: "Apparel".to_string(),
            is_active: true,
            is_deleted: false,
            created_at: now,
        }
        .into();

        assert_eq!(dto.id, 3);
        assert_eq!(dto.name, "Apparel");
        assert!(dto.is_active);
        assert!(!dto.is_deleted);
        assert_eq!(dto.created_at, now);
    }

    #[test]
    fn test_product_count_projection_carries_all_fetched_fields() {
        let dto: CategoryProductCountDto = CategoryProductCount {
            id: 5,
            name: "Footwear".to_string(),
            is_active: true,
            product_count: 12,
        }
        .into();

        assert_eq!(dto.id, 5);
        assert_eq!(dto.name, "Footwear");
        assert!(dto.is_active);
        assert_eq!(dto.product_count, 12);
    }
}
