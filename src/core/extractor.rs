use axum::{
    body::Body,
    extract::{
        rejection::{JsonRejection, PathRejection},
        FromRequest, FromRequestParts, Path, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::types::FieldError;

/// Custom JSON extractor that reports unparseable bodies as validation errors
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppJsonRejection;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppJsonRejection(rejection)),
        }
    }
}

pub struct AppJsonRejection(JsonRejection);

impl AppJsonRejection {
    fn into_app_error(self) -> AppError {
        let field_error = match self.0 {
            JsonRejection::JsonDataError(err) => {
                FieldError::new("body", "json_data", format!("Invalid JSON data: {}", err))
            }
            JsonRejection::JsonSyntaxError(err) => {
                FieldError::new("body", "json_syntax", format!("Invalid JSON syntax: {}", err))
            }
            JsonRejection::MissingJsonContentType(err) => FieldError::new(
                "body",
                "content_type",
                format!("Missing JSON content type: {}", err),
            ),
            // Body could not be read at all (size limit, broken stream)
            JsonRejection::BytesRejection(err) => {
                return if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge(err.body_text())
                } else {
                    AppError::BadRequest(err.body_text())
                };
            }
            _ => FieldError::new("body", "json", "Failed to parse JSON body"),
        };

        AppError::Validation(vec![field_error])
    }
}

impl IntoResponse for AppJsonRejection {
    fn into_response(self) -> Response {
        self.into_app_error().into_response()
    }
}

/// Path extractor whose rejection uses the shared error body
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(path_error(rejection)),
        }
    }
}

fn path_error(rejection: PathRejection) -> AppError {
    tracing::debug!("Rejected path parameters: {}", rejection);
    AppError::BadRequest(rejection.body_text())
}
