//! API Errors
//!
//! Failures of a request to the REST backend, and how they turn into the
//! single message shown to the user.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    /// Backend answered with a non-2xx status
    #[error("request failed with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Error body sent by the backend: `{"message": "..."}` or `{"message": ["...", "..."]}`
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiError {
    /// Build a status error from a non-2xx response body
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .map(|m| match m {
                ErrorMessage::One(s) => s,
                ErrorMessage::Many(list) => list.join(", "),
            })
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Server-supplied message when there is one, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_wins() {
        let err = ApiError::from_status(401, r#"{"message":"Invalid credentials","statusCode":401}"#);
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn test_message_list_is_joined() {
        let err = ApiError::from_status(
            400,
            r#"{"message":["title should not be empty","description should not be empty"]}"#,
        );
        assert_eq!(
            err.user_message("x"),
            "title should not be empty, description should not be empty"
        );
    }

    #[test]
    fn test_fallback_without_message() {
        assert_eq!(ApiError::from_status(500, "<html>oops</html>").user_message("Login failed"), "Login failed");
        assert_eq!(ApiError::from_status(500, r#"{"message":"  "}"#).user_message("f"), "f");
        assert_eq!(ApiError::Network("offline".into()).user_message("Failed to fetch tasks"), "Failed to fetch tasks");
        assert_eq!(ApiError::Decode("bad json".into()).user_message("f"), "f");
    }
}
