use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;

use crate::features::categories::dtos::CategoryInput;
use crate::features::categories::models::Category;
use crate::features::categories::repositories::{
    CategoryRepository, RepositoryError, RepositoryResult,
};
use crate::features::categories::{routes, CategoryService};

#[derive(Default)]
struct Store {
    next_id: i32,
    rows: Vec<Category>,
}

/// Category store kept in memory, ids assigned from 1 in insertion order
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    store: Mutex<Store>,
    mutations: AtomicUsize,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.lock().unwrap().rows.len()
    }

    /// Number of create/update/delete calls received
    pub fn mutation_count(&self) -> usize {
        self.mutations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn create(&self, input: CategoryInput) -> RepositoryResult<Category> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();
        store.next_id += 1;

        let now = Utc::now();
        let category = Category {
            id: store.next_id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        };
        store.rows.push(category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: i32) -> RepositoryResult<Option<Category>> {
        let store = self.store.lock().unwrap();
        Ok(store.rows.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, id: i32, input: CategoryInput) -> RepositoryResult<Option<Category>> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();

        Ok(store.rows.iter_mut().find(|c| c.id == id).map(|c| {
            c.name = input.name;
            c.description = input.description;
            c.updated_at = Utc::now();
            c.clone()
        }))
    }

    async fn delete(&self, id: i32) -> RepositoryResult<()> {
        self.mutations.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.lock().unwrap();

        let before = store.rows.len();
        store.rows.retain(|c| c.id != id);
        if store.rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.store.lock().unwrap().rows.clone())
    }
}

/// Store whose every call fails as if the database were unreachable
pub struct UnavailableCategoryRepository;

#[async_trait]
impl CategoryRepository for UnavailableCategoryRepository {
    async fn create(&self, _input: CategoryInput) -> RepositoryResult<Category> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_by_id(&self, _id: i32) -> RepositoryResult<Option<Category>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn update(&self, _id: i32, _input: CategoryInput) -> RepositoryResult<Option<Category>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn delete(&self, _id: i32) -> RepositoryResult<()> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Category>> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

/// Category router wired to the given store
pub fn category_app(repository: Arc<dyn CategoryRepository>) -> Router {
    routes::routes(Arc::new(CategoryService::new(repository)))
}
