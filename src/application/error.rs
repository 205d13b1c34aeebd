// Errors raised while talking to Grafana
use serde_json::Value;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum GrafanaError {
    /// Rejected before any request was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Transport, serialization or JSON parse failure.
    #[error("{method} {path} failed{}", .body.as_deref().map(|b| format!(", body: {b}")).unwrap_or_default())]
    Request {
        method: &'static str,
        path: String,
        body: Option<String>,
        #[source]
        source: BoxError,
    },

    /// Grafana answered, but not with what the operation needs.
    #[error("{operation} failed, unexpected response: {response}")]
    UnexpectedResponse { operation: String, response: Value },
}

impl GrafanaError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        GrafanaError::InvalidArgument(message.into())
    }

    pub fn unexpected_response(operation: impl Into<String>, response: Value) -> Self {
        GrafanaError::UnexpectedResponse {
            operation: operation.into(),
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_error_message() {
        let error = GrafanaError::Request {
            method: "POST",
            path: "/api/orgs".to_string(),
            body: Some(r#"{"name":"demo"}"#.to_string()),
            source: "connection refused".into(),
        };
        assert_eq!(
            error.to_string(),
            r#"POST /api/orgs failed, body: {"name":"demo"}"#
        );
        assert_eq!(
            std::error::Error::source(&error).map(|s| s.to_string()),
            Some("connection refused".to_string())
        );
    }

    #[test]
    fn test_get_error_has_no_body() {
        let error = GrafanaError::Request {
            method: "GET",
            path: "/api/orgs/name/demo".to_string(),
            body: None,
            source: "timed out".into(),
        };
        assert_eq!(error.to_string(), "GET /api/orgs/name/demo failed");
    }

    #[test]
    fn test_unexpected_response_carries_json() {
        let error = GrafanaError::unexpected_response("Create folder", json!({"message": "denied"}));
        assert_eq!(
            error.to_string(),
            r#"Create folder failed, unexpected response: {"message":"denied"}"#
        );
    }
}
