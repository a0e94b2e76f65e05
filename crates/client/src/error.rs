//! Errors that can occur when talking to the backend.

use plugindesk_core::DeskError;
use thiserror::Error;

/// Errors that can occur when making API requests.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error status or a non-success envelope.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Application code from the response envelope.
        code: u16,
        /// Human-readable error message from the response body.
        message: String,
    },

    /// Failed to deserialise the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The client configuration was rejected.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Create an `Api` error.
    pub fn api(status: u16, code: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code,
            message: message.into(),
        }
    }

    /// Whether this is a "not found" (404) error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. } | Self::Api { code: 404, .. })
    }

    /// Whether this is an "unauthorized" (401) error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. } | Self::Api { code: 401, .. })
    }

    /// Readable text carried by the error, if there is any.
    ///
    /// Returns `None` when the server gave no message, so callers can fall
    /// back to their own wording.
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Api { message, .. } => {
                let message = message.trim();
                (!message.is_empty()).then(|| message.to_string())
            }
            Self::Request(e) => Some(e.to_string()),
            Self::Parse(m) => Some(m.clone()),
            Self::Config(m) => Some(m.clone()),
        }
    }

    /// `message()`, or `fallback` when the error carries no text.
    pub fn text_or(&self, fallback: &str) -> String {
        self.message().unwrap_or_else(|| fallback.to_string())
    }

    /// Get the user-facing error message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request(e) => {
                if e.is_timeout() {
                    "Request timed out. Please try again.".to_string()
                } else if e.is_connect() {
                    "Unable to connect to the server. Please check your connection.".to_string()
                } else {
                    "An unexpected network error occurred.".to_string()
                }
            }
            Self::Api { .. } => self.text_or("The server rejected the request."),
            Self::Parse(_) => "Received an unexpected response from the server.".to_string(),
            Self::Config(_) => self.to_string(),
        }
    }
}

impl From<DeskError> for ClientError {
    fn from(err: DeskError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for client calls.
pub type ClientResult<T> = Result<T, ClientError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message_extraction() {
        let err = ClientError::api(500, 500, "plugin name exists");
        assert_eq!(err.message().as_deref(), Some("plugin name exists"));
        assert_eq!(err.text_or("Create Failed"), "plugin name exists");
        assert_eq!(err.to_string(), "API error (500): plugin name exists");
    }

    #[test]
    fn test_blank_message_falls_back() {
        let err = ClientError::api(500, 500, "   ");
        assert!(err.message().is_none());
        assert_eq!(err.text_or("Delete Failed"), "Delete Failed");
        assert_eq!(err.user_message(), "The server rejected the request.");
    }

    #[test]
    fn test_status_classification() {
        assert!(ClientError::api(404, 404, "").is_not_found());
        assert!(ClientError::api(200, 404, "missing").is_not_found());
        assert!(ClientError::api(401, 401, "").is_unauthorized());
        assert!(!ClientError::Parse("bad".into()).is_not_found());
    }

    #[test]
    fn test_config_error_from_desk_error() {
        let err: ClientError = DeskError::invalid_config("timeout must be positive").into();
        assert_eq!(
            err.to_string(),
            "Invalid client configuration: Invalid configuration: timeout must be positive"
        );
    }
}
