// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Why a display name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNameKind {
    TooShort,
    TooLong,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("team name must be between {min} and {max} characters (got {length})")]
pub struct InvalidNameError {
    pub kind: InvalidNameKind,
    pub length: usize,
    pub min: usize,
    pub max: usize,
}

/// Flat classification of every domain failure, meant to be matched on by
/// callers instead of inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TooShort,
    TooLong,
    Validation,
    DuplicateSlug,
    Conflict,
    NotFound,
    Persistence,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("slug already taken: {0}")]
    DuplicateSlug(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidName(err) => match err.kind {
                InvalidNameKind::TooShort => ErrorKind::TooShort,
                InvalidNameKind::TooLong => ErrorKind::TooLong,
            },
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::DuplicateSlug(_) => ErrorKind::DuplicateSlug,
            DomainError::Conflict(_) => ErrorKind::Conflict,
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}
