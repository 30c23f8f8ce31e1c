use validator::{Validate, ValidationErrors};

use crate::shared::types::FieldError;

/// Run the `validator` rules of a DTO and flatten any failures into
/// field-level errors. An `Ok` result means the DTO is safe to hand to a
/// service.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), Vec<FieldError>> {
    dto.validate().map_err(|e| field_errors(&e))
}

/// Flatten `ValidationErrors` into a list ordered by field name, then rule
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut list: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field.clone(), err.code.to_string(), message)
            })
        })
        .collect();

    list.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.code.cmp(&b.code)));
    list
}
