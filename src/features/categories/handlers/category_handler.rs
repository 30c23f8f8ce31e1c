use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::categories::dtos::{CategoryRequestDto, CategoryResponseDto};
use crate::features::categories::repositories::RepositoryError;
use crate::features::categories::services::CategoryService;
use crate::shared::types::ErrorResponse;

pub const CATEGORY_NOT_FOUND: &str = "Category not found";

fn not_found() -> AppError {
    AppError::NotFound(CATEGORY_NOT_FOUND.to_string())
}

/// Create a category
#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CategoryRequestDto,
    responses(
        (status = 201, description = "Category created", body = CategoryResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn create_category(
    State(service): State<Arc<CategoryService>>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<(StatusCode, Json<CategoryResponseDto>)> {
    let input = dto.into_input().map_err(AppError::Validation)?;

    let category = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(category.into())))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<CategoryResponseDto>> {
    let category = service.find_by_id(id).await?.ok_or_else(not_found)?;
    Ok(Json(category.into()))
}

/// Replace a category's fields
#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    request_body = CategoryRequestDto,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn update_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
    AppJson(dto): AppJson<CategoryRequestDto>,
) -> Result<Json<CategoryResponseDto>> {
    let input = dto.into_input().map_err(AppError::Validation)?;

    let category = service.update(id, input).await?.ok_or_else(not_found)?;
    Ok(Json(category.into()))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(
        ("id" = i32, Path, description = "Category id")
    ),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Category not found", body = ErrorResponse)
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(service): State<Arc<CategoryService>>,
    AppPath(id): AppPath<i32>,
) -> Result<StatusCode> {
    match service.delete(id).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(RepositoryError::NotFound) => Err(not_found()),
        Err(e) => Err(e.into()),
    }
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = Vec<CategoryResponseDto>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<Vec<CategoryResponseDto>>> {
    let categories = service.find_all().await?;
    Ok(Json(categories.into_iter().map(|c| c.into()).collect()))
}
