// src/application/error.rs
use crate::domain::errors::{DomainError, ErrorKind};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Domain(err) => err.kind(),
            ApplicationError::Validation(_) => ErrorKind::Validation,
            ApplicationError::NotFound(_) => ErrorKind::NotFound,
            ApplicationError::Conflict(_) => ErrorKind::Conflict,
            ApplicationError::Infrastructure(_) => ErrorKind::Persistence,
        }
    }

    /// Whether the caller sent something we will never accept as-is, as
    /// opposed to a failure on our side.
    pub fn is_client_error(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Persistence)
    }
}
