//! Error handling for the SWIFT HTTP server.
//!
//! Defines the HTTP-facing error type and its mapping to status codes and
//! JSON error responses, plus conversions from the node and core error
//! types at the crate seam.

use thiserror::Error;
use warp::Reply;

/// Result type for swift-http operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the SWIFT HTTP server.
#[derive(Error, Debug)]
pub enum Error {
    /// Message parsing or validation failure.
    #[error("{0}")]
    Message(String),

    /// File upload rejected before parsing.
    #[error("Invalid MT799 message: {0}")]
    Upload(String),

    /// No stored record with the requested identifier.
    #[error("MT799 record not found: {0}")]
    NotFound(i64),

    /// Request processing exceeded the configured timeout.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// SWIFT node error.
    #[error("Node error: {0}")]
    Node(String),

    /// HTTP server error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the HTTP status code that should be used for this error.
    pub fn status_code(&self) -> warp::http::StatusCode {
        use warp::http::StatusCode;

        match self {
            Error::Message(_) | Error::Upload(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Timeout(_) => StatusCode::REQUEST_TIMEOUT,
            Error::Node(_) | Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Config(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Http(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Creates an error response for this error.
    pub fn to_response(&self) -> warp::reply::Response {
        let status = self.status_code();
        let message = self.to_string();
        let error_type = match self {
            Error::Message(_) => "validation_error",
            Error::Upload(_) => "upload_error",
            Error::NotFound(_) => "not_found",
            Error::Timeout(_) => "timeout",
            Error::Node(_) => "node_error",
            Error::Http(_) => "http_error",
            Error::Config(_) => "configuration_error",
            Error::Io(_) => "io_error",
        };

        warp::reply::with_status(
            warp::reply::json(&serde_json::json!({
                "status": "error",
                "error": {
                    "type": error_type,
                    "message": message,
                }
            })),
            status,
        )
        .into_response()
    }
}

impl From<swift_node::Error> for Error {
    fn from(err: swift_node::Error) -> Self {
        match err {
            swift_node::Error::Message(e) => Error::Message(e.to_string()),
            swift_node::Error::NotFound(id) => Error::NotFound(id),
            swift_node::Error::Storage(e) => Error::Node(e.to_string()),
            swift_node::Error::Configuration(e) => Error::Config(e),
        }
    }
}

impl From<swift_msg::Error> for Error {
    fn from(err: swift_msg::Error) -> Self {
        Error::Message(err.to_string())
    }
}

impl warp::reject::Reject for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use warp::http::StatusCode;

    #[test]
    fn test_error_display() {
        let error = Error::Upload("No file provided.".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid MT799 message: No file provided."
        );

        let error = Error::NotFound(7);
        assert_eq!(error.to_string(), "MT799 record not found: 7");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            Error::Message("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(Error::NotFound(1).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            Error::Node("db".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_node_error_conversion() {
        let err = Error::from(swift_node::Error::NotFound(42));
        assert!(matches!(err, Error::NotFound(42)));

        let err = Error::from(swift_node::Error::Message(
            swift_msg::Error::MissingMandatoryBlock,
        ));
        assert!(matches!(err, Error::Message(_)));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
