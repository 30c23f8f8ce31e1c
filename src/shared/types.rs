use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single field-level problem with a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Offending field (`body` when the payload could not be parsed at all)
    pub field: String,
    /// Machine-readable rule name, e.g. `required` or `length`
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Body of every non-2xx response.
///
/// Not-found and server errors carry only `message`; validation failures
/// carry only `errors`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    pub fn errors(errors: Vec<FieldError>) -> Self {
        Self {
            message: None,
            errors: Some(errors),
        }
    }
}
