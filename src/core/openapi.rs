use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::shared::types::{ErrorResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories_handlers::create_category,
        categories_handlers::get_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        categories_handlers::list_categories,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            FieldError,
            // Categories
            categories_dtos::CategoryRequestDto,
            categories_dtos::CategoryResponseDto,
        )
    ),
    tags(
        (name = "categories", description = "Category management"),
    ),
    info(
        title = "Category Service API",
        version = "0.1.0",
        description = "CRUD API for categories",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
