// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unique constraint violated: {field} = {value:?}")]
    UniqueViolation { field: String, value: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn unique_violation(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }
}
