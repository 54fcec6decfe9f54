//! API error type.

use thiserror::Error;

/// Failure of one backend call
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-2xx status
    #[error("Server responded with status {status}")]
    Status { status: u16, message: Option<String> },

    /// Response body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message supplied by the backend in the error body, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message: Some(message), .. } => Some(message),
            _ => None,
        }
    }

    /// Text for an error banner: the server's message, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Accepts `{"message": ...}` as well as problem-details `detail`/`title`.
pub(crate) fn message_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "detail", "title"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_body() {
        assert_eq!(
            message_from_body(r#"{"message": "Client 9 not found"}"#).as_deref(),
            Some("Client 9 not found")
        );
        assert_eq!(
            message_from_body(r#"{"title": "Bad Request", "detail": "Section is full"}"#).as_deref(),
            Some("Section is full")
        );
        assert_eq!(message_from_body(r#"{"message": "  "}"#), None);
        assert_eq!(message_from_body("<html>oops</html>"), None);
        assert_eq!(message_from_body(""), None);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Status { status: 400, message: Some("Section is full".into()) };
        assert_eq!(err.user_message("Failed to create inbound"), "Section is full");

        let err = ApiError::Status { status: 500, message: None };
        assert_eq!(err.user_message("Failed to create inbound"), "Failed to create inbound");

        let err = ApiError::Network("offline".into());
        assert_eq!(err.user_message("Failed"), "Failed");
    }
}
