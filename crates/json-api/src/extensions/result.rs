//! Result helper extensions for HTTP handlers.

use std::fmt::Display;

use salvo::prelude::StatusError;
use tracing::{debug, error};

/// Map any error to an HTTP error.
pub(crate) trait ResultExt<T> {
    /// Logged internal server error.
    fn or_500(self, context: &str) -> Result<T, StatusError>;

    /// Bad request carrying `brief` back to the client.
    fn or_400(self, brief: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, context: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            error!("{context}: {error}");

            StatusError::internal_server_error()
        })
    }

    fn or_400(self, brief: &str) -> Result<T, StatusError> {
        self.map_err(|error| {
            debug!("{brief}: {error}");

            StatusError::bad_request().brief(brief)
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn or_500_maps_to_internal_server_error() {
        let result: Result<(), &str> = Err("boom");

        let status = result.or_500("context").err().map(|error| error.code);

        assert_eq!(status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn or_400_keeps_brief() {
        let result: Result<(), &str> = Err("boom");

        let error = result.or_400("bad category").err();

        assert_eq!(
            error.as_ref().map(|error| error.code),
            Some(StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            error.map(|error| error.brief),
            Some("bad category".to_string())
        );
    }

    #[test]
    fn ok_passes_through() {
        let result: Result<u8, &str> = Ok(7);

        assert_eq!(result.or_400("unused").ok(), Some(7));
    }
}
