use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::brands::dtos::{BrandResponseDto, CreateBrandRequest};
use crate::features::brands::models::Brand;
use crate::modules::storage::LocalFileStore;

/// Service for brand operations
pub struct BrandService {
    pool: PgPool,
    store: Arc<LocalFileStore>,
}

impl BrandService {
    pub fn new(pool: PgPool, store: Arc<LocalFileStore>) -> Self {
        Self { pool, store }
    }

    /// List all non-deleted brands
    pub async fn list(&self) -> Result<Vec<BrandResponseDto>> {
        let brands = sqlx::query_as::<_, Brand>(
            r#"
            SELECT id, name, logo_url, is_active, is_deleted, created_at
            FROM brands
            WHERE is_deleted = FALSE
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list brands: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(brands.into_iter().map(|b| b.into()).collect())
    }

    /// Get a non-deleted brand by id
    pub async fn get_by_id(&self, id: i64) -> Result<BrandResponseDto> {
        let brand = sqlx::query_as::<_, Brand>(
            r#"
            SELECT id, name, logo_url, is_active, is_deleted, created_at
            FROM brands
            WHERE id = $1 AND is_deleted = FALSE
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get brand by id: {:?}", e);
            AppError::Database(e)
        })?;

        brand
            .map(|b| b.into())
            .ok_or_else(|| AppError::NotFound(format!("Brand with id {} not found", id)))
    }

    /// Create a brand from an uploaded logo. Upload-then-persist: the logo
    /// is validated and written first, so a rejected file never produces a
    /// brand row.
    pub async fn create(&self, request: CreateBrandRequest) -> Result<BrandResponseDto> {
        let logo_url = self
            .store
            .save(&request.file_name, &request.file_data)
            .await?;

        let brand = sqlx::query_as::<_, Brand>(
            r#"
            INSERT INTO brands (name, logo_url)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&logo_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to create brand: {}", e)))?;

        tracing::info!(
            "Brand created: id={}, name={}, logo_url={}",
            brand.id,
            brand.name,
            brand.logo_url
        );

        Ok(brand.into())
    }
}
