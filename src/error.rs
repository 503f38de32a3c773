use serde::Serialize;
use std::fmt;
use std::io;
use thiserror::Error;

/// Custom result type for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-readable error codes returned by the SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Invalid or missing API key
    Unauthorized,
    /// Invalid request parameters or format
    InvalidRequest,
    /// Server-side error occurred
    ServerError,
    /// Operation timed out
    Timeout,
    /// File not found or invalid format
    InvalidFile,
    /// File too large to upload
    FileTooLarge,
    /// Failed to upload the file
    UploadFailed,
    /// Requested resource not found
    NotFound,
    /// Unexpected error
    UnknownError,
}

impl ErrorKind {
    /// The wire code for this kind, e.g. `not_found`
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::InvalidRequest => "invalid_request",
            ErrorKind::ServerError => "server_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::InvalidFile => "invalid_file",
            ErrorKind::FileTooLarge => "file_too_large",
            ErrorKind::UploadFailed => "upload_failed",
            ErrorKind::NotFound => "not_found",
            ErrorKind::UnknownError => "unknown_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for the Reality Defender SDK.
///
/// Each variant is one [`ErrorKind`] and carries the human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Authentication failure
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Server error from the API
    #[error("Server error: {0}")]
    ServerError(String),

    /// Operation timed out
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid file
    #[error("Invalid file: {0}")]
    InvalidFile(String),

    /// File exceeds the size limit for its type
    #[error("File too large: {0}")]
    FileTooLarge(String),

    /// Upload failed
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unknown error
    #[error("Unknown error: {0}")]
    UnknownError(String),
}

impl Error {
    /// Build an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            ErrorKind::Unauthorized => Error::Unauthorized(message),
            ErrorKind::InvalidRequest => Error::InvalidRequest(message),
            ErrorKind::ServerError => Error::ServerError(message),
            ErrorKind::Timeout => Error::Timeout(message),
            ErrorKind::InvalidFile => Error::InvalidFile(message),
            ErrorKind::FileTooLarge => Error::FileTooLarge(message),
            ErrorKind::UploadFailed => Error::UploadFailed(message),
            ErrorKind::NotFound => Error::NotFound(message),
            ErrorKind::UnknownError => Error::UnknownError(message),
        }
    }

    /// The kind tag of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Unauthorized(_) => ErrorKind::Unauthorized,
            Error::InvalidRequest(_) => ErrorKind::InvalidRequest,
            Error::ServerError(_) => ErrorKind::ServerError,
            Error::Timeout(_) => ErrorKind::Timeout,
            Error::InvalidFile(_) => ErrorKind::InvalidFile,
            Error::FileTooLarge(_) => ErrorKind::FileTooLarge,
            Error::UploadFailed(_) => ErrorKind::UploadFailed,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::UnknownError(_) => ErrorKind::UnknownError,
        }
    }

    /// The human-readable message, without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Error::Unauthorized(msg)
            | Error::InvalidRequest(msg)
            | Error::ServerError(msg)
            | Error::Timeout(msg)
            | Error::InvalidFile(msg)
            | Error::FileTooLarge(msg)
            | Error::UploadFailed(msg)
            | Error::NotFound(msg)
            | Error::UnknownError(msg) => msg,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout(format!("Request timed out: {err}"))
        } else {
            Error::UnknownError(format!("Request failed: {err}"))
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::InvalidFile(format!("Failed to read file: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::UnknownError(format!("Invalid JSON payload: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, ErrorKind};
    use std::io;

    #[test]
    fn test_error_display() {
        // Test display implementation for each error variant
        let errors = [
            (
                Error::Unauthorized("Unauthorized: Invalid API key".to_string()),
                "Unauthorized: Invalid API key",
            ),
            (
                Error::InvalidRequest("missing parameter".to_string()),
                "Invalid request: missing parameter",
            ),
            (
                Error::ServerError("internal error".to_string()),
                "Server error: internal error",
            ),
            (
                Error::Timeout("Polling timeout exceeded".to_string()),
                "Timeout: Polling timeout exceeded",
            ),
            (
                Error::InvalidFile("file not found".to_string()),
                "Invalid file: file not found",
            ),
            (
                Error::FileTooLarge("video.mp4".to_string()),
                "File too large: video.mp4",
            ),
            (
                Error::UploadFailed("connection error".to_string()),
                "Upload failed: connection error",
            ),
            (
                Error::NotFound("/api/media/users/abc".to_string()),
                "Resource not found: /api/media/users/abc",
            ),
            (
                Error::UnknownError("unexpected error".to_string()),
                "Unknown error: unexpected error",
            ),
        ];

        for (error, expected_message) in errors {
            assert_eq!(error.to_string(), expected_message);
        }
    }

    #[test]
    fn test_kind_round_trips_through_new() {
        let kinds = [
            ErrorKind::Unauthorized,
            ErrorKind::InvalidRequest,
            ErrorKind::ServerError,
            ErrorKind::Timeout,
            ErrorKind::InvalidFile,
            ErrorKind::FileTooLarge,
            ErrorKind::UploadFailed,
            ErrorKind::NotFound,
            ErrorKind::UnknownError,
        ];

        for kind in kinds {
            let error = Error::new(kind, "message");
            assert_eq!(error.kind(), kind);
            assert_eq!(error.message(), "message");
        }
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(ErrorKind::NotFound.to_string(), "not_found");
        assert_eq!(ErrorKind::FileTooLarge.as_str(), "file_too_large");
        assert_eq!(
            serde_json::to_value(ErrorKind::UnknownError).unwrap(),
            serde_json::json!("unknown_error")
        );
    }

    #[test]
    fn test_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error: Error = io_error.into();

        assert_eq!(error.kind(), ErrorKind::InvalidFile);
        assert!(error.message().contains("file not found"));
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: Error = json_error.into();

        match error {
            Error::UnknownError(msg) => assert!(msg.starts_with("Invalid JSON payload")),
            _ => panic!("Expected UnknownError variant"),
        }
    }

    #[test]
    fn test_result_type() {
        fn returns_result_error() -> crate::Result<String> {
            Err(Error::InvalidRequest("test error".to_string()))
        }

        match returns_result_error().unwrap_err() {
            Error::InvalidRequest(msg) => assert_eq!(msg, "test error"),
            _ => panic!("Wrong error type"),
        }
    }
}
