//! Error types for the Documize SDK.

use serde::Deserialize;

/// Result type for SDK operations.
pub type DocumizeResult<T> = Result<T, DocumizeError>;

/// Error types that can occur when talking to a Documize server.
///
/// Every failure that crosses the transport boundary is normalized into one
/// of these variants; resource services and callers never see raw transport
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum DocumizeError {
    /// The authentication call itself failed (bad credential, auth endpoint
    /// unreachable or erroring).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// A request was rejected with 401 both before and after a successful
    /// re-authentication. Terminal: the credential no longer grants access.
    #[error("authorization expired and the re-authenticated retry was rejected")]
    AuthorizationExpired,

    /// The API returned a non-2xx response (other than a recoverable 401).
    /// Carries the numeric status and the server-provided message verbatim.
    #[error("Documize API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The request was sent but no response was received (network partition,
    /// timeout, connection refused or reset).
    #[error("no response received from the Documize API")]
    NoResponse,

    /// The request could not be constructed or sent at all, or a response
    /// arrived whose body could not be decoded.
    #[error("request error: {0}")]
    Request(String),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl DocumizeError {
    /// Create an API error from a status code and response body.
    ///
    /// Documize error responses usually carry `{"message": "..."}`; when the
    /// body is not that shape the raw text is kept verbatim.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| body.to_string());

        Self::Api { status, message }
    }

    /// Classify a reqwest transport failure.
    ///
    /// Builder failures mean the request never left the process; everything
    /// else (timeout, refused connection, reset mid-flight) means no response
    /// was received.
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request(err.to_string())
        } else if err.is_timeout() || err.is_connect() {
            Self::NoResponse
        } else if err.is_decode() {
            Self::Request(format!("failed to decode response body: {err}"))
        } else {
            Self::NoResponse
        }
    }
}

/// Error body shape used by the Documize API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_with_message_body() {
        let err = DocumizeError::from_response(404, r#"{"message":"not found"}"#);
        match err {
            DocumizeError::Api { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_response_with_plain_body() {
        let err = DocumizeError::from_response(500, "internal server error");
        match err {
            DocumizeError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal server error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_display_includes_status() {
        let err = DocumizeError::from_response(403, r#"{"message":"forbidden"}"#);
        assert_eq!(
            err.to_string(),
            "Documize API error (status 403): forbidden"
        );
    }
}
