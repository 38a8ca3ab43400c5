//! Categories service errors.

use thiserror::Error;

use crate::database::{StorageFailure, classify};

#[derive(Debug, Error)]
pub enum CategoriesServiceError {
    #[error("category already exists")]
    AlreadyExists,

    #[error("category not found")]
    NotFound,

    #[error("parent category not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),
}

impl From<sqlx::Error> for CategoriesServiceError {
    fn from(error: sqlx::Error) -> Self {
        match classify(&error) {
            StorageFailure::RowNotFound => Self::NotFound,
            StorageFailure::UniqueViolation => Self::AlreadyExists,
            StorageFailure::ForeignKeyViolation => Self::InvalidReference,
            StorageFailure::NotNullViolation => Self::MissingRequiredData,
            StorageFailure::CheckViolation => Self::InvalidData,
            StorageFailure::Other => Self::Sql(error),
        }
    }
}
