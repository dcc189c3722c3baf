use thiserror::Error;

use crate::core::ValidationError;

/// Errors returned when building a registration record.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegistrationError {
    /// One or more validation rules failed.
    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),
}

impl RegistrationError {
    /// The individual rule failures, if this is a validation error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Validation(errors) => errors,
            Self::Builder(_) => &[],
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
