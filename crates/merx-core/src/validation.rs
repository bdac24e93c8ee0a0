//! Validation utilities.

use crate::MerxError;
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `MerxError` on failure.
    fn validate_request(&self) -> Result<(), MerxError> {
        self.validate().map_err(validation_errors_to_merx_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `MerxError`.
#[must_use]
pub fn validation_errors_to_merx_error(errors: ValidationErrors) -> MerxError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    MerxError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates that every image entry looks like an HTTP(S) URL.
    pub fn valid_image_urls(images: &[String]) -> Result<(), ValidationError> {
        for url in images {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::new("image_url_invalid"));
            }
        }
        Ok(())
    }
}
