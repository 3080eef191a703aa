use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryProductCountDto, CategoryResponseDto, CreateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryProductCount};

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all non-deleted categories
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, is_deleted, created_at
            FROM categories
            WHERE is_deleted = FALSE
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get a non-deleted category by id
    pub async fn get_by_id(&self, id: i64) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, is_active, is_deleted, created_at
            FROM categories
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category by id: {:?}", e);
            AppError::Database(e)
        })?;

        category
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(format!("Category with id {} not found", id)))
    }

    /// Create a new category; id, lifecycle flags and timestamp are generated
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to create category: {}", e)))?;

        tracing::info!("Category created: id={}, name={}", category.id, category.name);

        Ok(category.into())
    }

    /// Categories having at least one non-deleted product, each with its
    /// count of non-deleted products. The inner join doubles as the
    /// at-least-one filter.
    pub async fn product_counts(&self) -> Result<Vec<CategoryProductCountDto>> {
        let categories = sqlx::query_as::<_, CategoryProductCount>(
            r#"
            SELECT c.id, c.name, c.is_active, COUNT(p.id) AS product_count
            FROM categories c
            JOIN products p ON p.category_id = c.id AND p.is_deleted = FALSE
            GROUP BY c.id, c.name, c.is_active
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to count products by category: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }
}
