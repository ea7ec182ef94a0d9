use validator::{Validate, ValidationErrors};

use crate::utils::errors::ServiceError;

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Validates a payload before it is sent to the backend.
pub fn validate_dto<T: Validate>(dto: &T) -> Result<(), ServiceError> {
    dto.validate()
        .map_err(|e| ServiceError::Validation(format_errors(&e)))
}
