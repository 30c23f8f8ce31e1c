use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::types::FieldError;
use crate::shared::validation::validate_dto;

/// Request DTO for creating or replacing a category
///
/// `name` is optional at the type level so that a missing name is reported
/// as a field error by validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequestDto {
    /// Display name (required)
    #[validate(
        required(message = "Name is required"),
        length(min = 1, max = 255, message = "Name must be 1-255 characters")
    )]
    #[schema(min_length = 1, max_length = 255)]
    pub name: Option<String>,

    /// Optional free-form description
    #[validate(length(max = 1000, message = "Description must not exceed 1000 characters"))]
    #[schema(max_length = 1000)]
    pub description: Option<String>,
}

/// Validated input handed to the repository
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryInput {
    pub name: String,
    pub description: Option<String>,
}

impl CategoryRequestDto {
    /// Validate the request and turn it into repository input
    pub fn into_input(self) -> Result<CategoryInput, Vec<FieldError>> {
        validate_dto(&self)?;

        match self.name {
            Some(name) => Ok(CategoryInput {
                name,
                description: self.description,
            }),
            None => Err(vec![FieldError::new("name", "required", "Name is required")]),
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
