use std::sync::Arc;

use crate::features::categories::dtos::CategoryInput;
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{CategoryRepository, RepositoryResult};

/// Service for category operations
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Create a new category
    pub async fn create(&self, input: CategoryInput) -> RepositoryResult<Category> {
        let category = self.repository.create(input).await?;
        tracing::info!("Category created: id={}, name={}", category.id, category.name);
        Ok(category)
    }

    pub async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        self.repository.find_by_id(id).await
    }

    /// Replace a category; `Ok(None)` when the id is unknown
    pub async fn update(&self, id: i32, input: CategoryInput) -> RepositoryResult<Option<Category>> {
        let category = self.repository.update(id, input).await?;
        match &category {
            Some(c) => tracing::info!("Category updated: id={}, name={}", c.id, c.name),
            None => tracing::debug!("Category update skipped, id={} not found", id),
        }
        Ok(category)
    }

    /// Delete a category; errors with `RepositoryError::NotFound` for unknown ids
    pub async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.repository.delete(id).await?;
        tracing::info!("Category deleted: id={}", id);
        Ok(())
    }

    /// All categories in store order (ascending id for Postgres)
    pub async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        self.repository.find_all().await
    }
}
