//! Products service errors.

use std::num::TryFromIntError;

use thiserror::Error;

use crate::database::{StorageFailure, classify};

#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("product already exists")]
    AlreadyExists,

    #[error("product not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage error")]
    Sql(#[source] sqlx::Error),

    #[error("invalid price value")]
    InvalidPrice(#[from] TryFromIntError),
}

impl From<sqlx::Error> for ProductsServiceError {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = ProductsServiceError::from(sqlx::Error::RowNotFound);

        assert!(
            matches!(error, ProductsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn pool_errors_stay_sql() {
        let error = ProductsServiceError::from(sqlx::Error::PoolTimedOut);

        assert!(
            matches!(error, ProductsServiceError::Sql(_)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn price_beyond_bigint_is_rejected() {
        let result: Result<i64, ProductsServiceError> =
            i64::try_from(u64::MAX).map_err(Into::into);

        assert!(
            matches!(result, Err(ProductsServiceError::InvalidPrice(_))),
            "expected InvalidPrice, got {result:?}"
        );
    }
}
