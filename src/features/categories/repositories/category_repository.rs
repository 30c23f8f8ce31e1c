use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::core::error::AppError;
use crate::features::categories::dtos::CategoryInput;
use crate::features::categories::handlers::CATEGORY_NOT_FOUND;
use crate::features::categories::models::Category;

/// Failure reported by a category store
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matched the given id
    #[error("record not found")]
    NotFound,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => AppError::NotFound(CATEGORY_NOT_FOUND.to_string()),
            RepositoryError::Storage(e) => AppError::Database(e),
        }
    }
}

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Persistence operations for categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, input: CategoryInput) -> RepositoryResult<Category>;

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>>;

    /// Replace name and description; `None` when the id does not exist
    async fn update(&self, id: i32, input: CategoryInput) -> RepositoryResult<Option<Category>>;

    /// Fails with `RepositoryError::NotFound` when nothing was deleted
    async fn delete(&self, id: i32) -> RepositoryResult<()>;

    async fn find_all(&self) -> RepositoryResult<Vec<Category>>;
}

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

/// Postgres-backed category store
pub struct PgCategoryRepository {
    pool: PgPool,
}

impl PgCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, input: CategoryInput) -> RepositoryResult<Category> {
        let query = format!(
            "INSERT INTO categories (name, description) VALUES ($1, $2) RETURNING {}",
            CATEGORY_COLUMNS
        );

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create category: {:?}", e);
                RepositoryError::Storage(e)
            })?;

        Ok(category)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        let query = format!("SELECT {} FROM categories WHERE id = $1", CATEGORY_COLUMNS);

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get category by id: {:?}", e);
                RepositoryError::Storage(e)
            })?;

        Ok(category)
    }

    async fn update(&self, id: i32, input: CategoryInput) -> RepositoryResult<Option<Category>> {
        let query = format!(
            r#"
            UPDATE categories
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING {}
            "#,
            CATEGORY_COLUMNS
        );

        let category = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update category {}: {:?}", id, e);
                RepositoryError::Storage(e)
            })?;

        Ok(category)
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                RepositoryError::Storage(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        let query = format!("SELECT {} FROM categories ORDER BY id", CATEGORY_COLUMNS);

        let categories = sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list categories: {:?}", e);
                RepositoryError::Storage(e)
            })?;

        Ok(categories)
    }
}
