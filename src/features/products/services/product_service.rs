use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::products::dtos::{CreateProductDto, ProductResponseDto, UpdateProductDto};
use crate::features::products::models::{Product, ProductWithNames};

/// Shared SELECT for product reads: joins category and brand so projections
/// carry the denormalized names.
const SELECT_PRODUCT_WITH_NAMES: &str = r#"
    SELECT p.id, p.name, p.price, p.description,
           p.category_id, c.name AS category_name,
           p.brand_id, b.name AS brand_name,
           p.is_active, p.is_deleted, p.created_at
    FROM products p
    JOIN categories c ON c.id = p.category_id
    JOIN brands b ON b.id = p.brand_id
"#;

fn get_by_id_sql() -> String {
    format!("{} WHERE p.id = $1", SELECT_PRODUCT_WITH_NAMES)
}

fn list_sql() -> String {
    format!("{} WHERE p.is_deleted = FALSE", SELECT_PRODUCT_WITH_NAMES)
}

fn active_by_price_sql() -> String {
    format!(
        "{} WHERE p.is_active = TRUE AND p.is_deleted = FALSE ORDER BY p.price ASC",
        SELECT_PRODUCT_WITH_NAMES
    )
}

fn search_sql() -> String {
    format!(
        "{} WHERE p.is_deleted = FALSE AND (p.name ILIKE $1 OR p.description ILIKE $1)",
        SELECT_PRODUCT_WITH_NAMES
    )
}

fn top_expensive_sql() -> String {
    format!(
        "{} WHERE p.is_deleted = FALSE ORDER BY p.price DESC LIMIT $1",
        SELECT_PRODUCT_WITH_NAMES
    )
}

fn above_average_sql() -> String {
    format!(
        r#"{} WHERE p.is_deleted = FALSE
          AND p.price > (SELECT AVG(price) FROM products WHERE is_deleted = FALSE)"#,
        SELECT_PRODUCT_WITH_NAMES
    )
}

/// Decide whether a soft delete may proceed given the row's current flag.
/// Missing rows and already-deleted rows both read as not found, which
/// keeps the transition one-way.
fn check_delete_transition(id: i64, current: Option<bool>) -> Result<()> {
    match current {
        None | Some(true) => Err(AppError::NotFound(format!(
            "Product with id {} not found",
            id
        ))),
        Some(false) => Ok(()),
    }
}

/// Service for product queries and lifecycle operations
pub struct ProductService {
    pool: PgPool,
}

impl ProductService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all non-deleted products
    pub async fn list(&self) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, ProductWithNames>(&list_sql())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Get a product by id
    pub async fn get_by_id(&self, id: i64) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, ProductWithNames>(&get_by_id_sql())
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get product by id: {:?}", e);
                AppError::Database(e)
            })?;

        product
            .map(|p| p.into())
            .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
    }

    /// Create a new product; id, lifecycle flags and timestamp are generated
    pub async fn create(&self, dto: CreateProductDto) -> Result<ProductResponseDto> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, description, category_id, brand_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&dto.name)
        .bind(dto.price)
        .bind(dto.description.unwrap_or_default())
        .bind(dto.category_id)
        .bind(dto.brand_id)
        .fetch_one(&self.pool)
        .await
        // Insert failures (missing category/brand, constraint violations)
        // surface as client errors on this path
        .map_err(|e| AppError::BadRequest(format!("Failed to create product: {}", e)))?;

        tracing::info!("Product created: id={}, name={}", product.id, product.name);

        self.get_by_id(product.id).await
    }

    /// Update an existing product (full field replace, soft-delete state untouched)
    pub async fn update(&self, dto: UpdateProductDto) -> Result<()> {
        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM products WHERE id = $1")
            .bind(dto.id)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_none() {
            return Err(AppError::NotFound(format!(
                "Product with id {} not found",
                dto.id
            )));
        }

        sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3, description = $4,
                category_id = $5, brand_id = $6, is_active = $7
            WHERE id = $1
            "#,
        )
        .bind(dto.id)
        .bind(&dto.name)
        .bind(dto.price)
        .bind(dto.description.unwrap_or_default())
        .bind(dto.category_id)
        .bind(dto.brand_id)
        .bind(dto.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to update product: {}", e)))?;

        tracing::info!("Product updated: id={}", dto.id);

        Ok(())
    }

    /// Soft-delete a product. One-way transition: a row already flagged as
    /// deleted reads as not found, so a second delete fails.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted =
            sqlx::query_scalar::<_, bool>("SELECT is_deleted FROM products WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        check_delete_transition(id, deleted)?;

        sqlx::query("UPDATE products SET is_deleted = TRUE WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::info!("Product soft deleted: id={}", id);

        Ok(())
    }

    /// Active, non-deleted products ordered by price ascending
    pub async fn list_active_ordered_by_price(&self) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, ProductWithNames>(&active_by_price_sql())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list active products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Case-insensitive substring search over name and description
    pub async fn search_by_text(&self, text: &str) -> Result<Vec<ProductResponseDto>> {
        let pattern = format!("%{}%", escape_like(text));

        let products = sqlx::query_as::<_, ProductWithNames>(&search_sql())
            .bind(pattern)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to search products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// The `count` most expensive non-deleted products, price descending
    pub async fn list_top_expensive(&self, count: i64) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, ProductWithNames>(&top_expensive_sql())
            .bind(count.max(0))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list top expensive products: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }

    /// Non-deleted products priced strictly above the mean price of all
    /// non-deleted products. The aggregate runs as a subquery of the same
    /// statement, so both passes see one snapshot. An empty table yields a
    /// NULL mean and therefore no rows.
    pub async fn list_above_average_price(&self) -> Result<Vec<ProductResponseDto>> {
        let products = sqlx::query_as::<_, ProductWithNames>(&above_average_sql())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list products above average price: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(products.into_iter().map(|p| p.into()).collect())
    }
}

/// Escape LIKE metacharacters so the needle matches as a literal substring
fn escape_like(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_plain_text() {
        assert_eq!(escape_like("blue shirt"), "blue shirt");
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\dir"), "c:\\\\dir");
    }

    #[test]
    fn test_read_queries_exclude_soft_deleted_rows() {
        for sql in [
            list_sql(),
            active_by_price_sql(),
            search_sql(),
            top_expensive_sql(),
            above_average_sql(),
        ] {
            assert!(sql.contains("p.is_deleted = FALSE"), "{}", sql);
        }
    }

    #[test]
    fn test_get_by_id_filters_on_id() {
        assert!(get_by_id_sql().contains("WHERE p.id = $1"));
    }

    #[test]
    fn test_top_expensive_orders_by_price_descending_with_limit() {
        let sql = top_expensive_sql();
        assert!(sql.contains("ORDER BY p.price DESC"));
        assert!(sql.contains("LIMIT $1"));
    }

    #[test]
    fn test_above_average_comparison_is_strict() {
        let sql = above_average_sql();
        assert!(sql.contains("p.price > (SELECT AVG(price)"));
        assert!(!sql.contains(">="));
    }

    #[test]
    fn test_above_average_mean_ignores_soft_deleted_rows() {
        assert!(above_average_sql()
            .contains("(SELECT AVG(price) FROM products WHERE is_deleted = FALSE)"));
    }

    #[test]
    fn test_delete_of_live_row_proceeds() {
        assert!(check_delete_transition(9, Some(false)).is_ok());
    }

    #[test]
    fn test_second_delete_of_same_row_reads_as_not_found() {
        let result = check_delete_transition(9, Some(true));
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_delete_of_missing_row_reads_as_not_found() {
        let result = check_delete_transition(9, None);
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
