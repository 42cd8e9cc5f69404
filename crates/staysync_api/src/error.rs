// --- File: crates/staysync_api/src/error.rs ---
use serde::Deserialize;
use staysync_common::{external_service_error, not_found, StaySyncError};
use thiserror::Error;

/// The backend this client talks to, for error reporting.
const SERVICE_NAME: &str = "reservation backend";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("API returned an error: status={status}, message='{message}'")]
    Status { status: u16, message: String },
    #[error("Failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Error envelope some backend endpoints return on failure.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// Builds a `Status` error from a non-2xx response body, preferring the
    /// backend's `message` field when the body carries one.
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { message: Some(m) }) => m,
            _ => body.to_string(),
        };
        ApiError::Status { status, message }
    }
}

impl From<ApiError> for StaySyncError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestError(e) => e.into(),
            ApiError::Status { status, message } if status == 401 || status == 403 => {
                StaySyncError::AuthError(format!("status={}, message={}", status, message))
            }
            ApiError::Status {
                status: 404,
                message,
            } => not_found(message),
            ApiError::Status { status, message } => external_service_error(
                SERVICE_NAME,
                format!("status={}, message={}", status, message),
            ),
            ApiError::ParseError(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_backend_message_field() {
        let err = ApiError::from_status(409, r#"{"message": "room already booked"}"#);
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "room already booked");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn falls_back_to_raw_body() {
        let err = ApiError::from_status(500, "Internal Server Error");
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn maps_status_codes_onto_common_error_variants() {
        let auth: StaySyncError = ApiError::from_status(401, "no token").into();
        assert!(matches!(auth, StaySyncError::AuthError(_)));

        let missing: StaySyncError = ApiError::from_status(404, "no such room").into();
        assert!(matches!(missing, StaySyncError::NotFoundError(_)));

        let other: StaySyncError = ApiError::from_status(502, "bad gateway").into();
        assert!(matches!(other, StaySyncError::ExternalServiceError { .. }));
    }
}
