//! Response verification
//!
//! Every resource call funnels its response through [`verify`], which turns
//! a `200 OK` into the parsed JSON body and every other status into an
//! [`ApiError`] carrying the caller's message for that status.

use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{ApiError, Result};

/// Per-call messages, keyed by status category.
///
/// Categories without a message fall back to a generic description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    pub bad_request: Option<String>,
    pub unauthorized: Option<String>,
    pub forbidden: Option<String>,
    pub not_found: Option<String>,
    pub conflict: Option<String>,
    pub internal_server_error: Option<String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bad_request(mut self, msg: impl Into<String>) -> Self {
        self.bad_request = Some(msg.into());
        self
    }

    pub fn unauthorized(mut self, msg: impl Into<String>) -> Self {
        self.unauthorized = Some(msg.into());
        self
    }

    pub fn forbidden(mut self, msg: impl Into<String>) -> Self {
        self.forbidden = Some(msg.into());
        self
    }

    pub fn not_found(mut self, msg: impl Into<String>) -> Self {
        self.not_found = Some(msg.into());
        self
    }

    pub fn conflict(mut self, msg: impl Into<String>) -> Self {
        self.conflict = Some(msg.into());
        self
    }

    pub fn internal_server_error(mut self, msg: impl Into<String>) -> Self {
        self.internal_server_error = Some(msg.into());
        self
    }
}

/// Map a response status and body to the parsed payload or a typed error.
///
/// An empty `200` body yields `Value::Null`; some endpoints (deletes, state
/// changes) answer with no content.
pub fn verify(status: StatusCode, body: &str, messages: &Messages) -> Result<Value> {
    if status == StatusCode::OK {
        return parse_body(body);
    }

    Err(status_error(status, body, messages).into())
}

/// Build the error for a non-200 status.
pub fn status_error(status: StatusCode, body: &str, messages: &Messages) -> ApiError {
    let detail = |msg: &Option<String>, fallback: &str| {
        format!(
            "{} | Response: {}",
            msg.as_deref().unwrap_or(fallback),
            body.trim()
        )
    };

    match status {
        StatusCode::BAD_REQUEST => {
            ApiError::BadRequest(detail(&messages.bad_request, "Bad request"))
        }
        StatusCode::UNAUTHORIZED => {
            ApiError::Unauthorized(detail(&messages.unauthorized, "Not authenticated"))
        }
        StatusCode::FORBIDDEN => {
            ApiError::Forbidden(detail(&messages.forbidden, "Permission denied"))
        }
        StatusCode::NOT_FOUND => {
            ApiError::NotFound(detail(&messages.not_found, "Resource not found"))
        }
        StatusCode::CONFLICT => ApiError::Conflict(detail(&messages.conflict, "Conflict")),
        StatusCode::INTERNAL_SERVER_ERROR => ApiError::InternalServerError(detail(
            &messages.internal_server_error,
            "Internal server error",
        )),
        status => ApiError::Unknown { status },
    }
}

fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(|e| {
        ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    fn all_messages() -> Messages {
        Messages::new()
            .bad_request("Field is invalid")
            .unauthorized("Username or password is invalid")
            .forbidden("This scan is disabled.")
            .not_found("Scan does not exist.")
            .conflict("Scan is not active.")
            .internal_server_error("Failed to launch scan.")
    }

    fn api_err(status: u16, messages: &Messages) -> ApiError {
        let status = StatusCode::from_u16(status).unwrap();
        match verify(status, r#"{"error":"boom"}"#, messages) {
            Err(Error::Api(err)) => err,
            other => panic!("Expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_ok_returns_parsed_body() {
        let fixture = json!({
            "scans": [{ "id": 5, "name": "weekly", "status": "completed" }],
            "folders": [],
            "timestamp": 1443532190
        });
        let body = serde_json::to_string(&fixture).unwrap();

        let value = verify(StatusCode::OK, &body, &Messages::new()).unwrap();
        assert_eq!(value, fixture);
    }

    #[test]
    fn test_ok_empty_body_is_null() {
        let value = verify(StatusCode::OK, "", &all_messages()).unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_ok_invalid_json() {
        let err = verify(StatusCode::OK, "<html>", &Messages::new()).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::InvalidResponse(_))));
    }

    #[test]
    fn test_bad_request() {
        match api_err(400, &all_messages()) {
            ApiError::BadRequest(msg) => {
                assert!(msg.starts_with("Field is invalid"));
                assert!(msg.contains(r#"| Response: {"error":"boom"}"#));
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_unauthorized() {
        match api_err(401, &all_messages()) {
            ApiError::Unauthorized(msg) => {
                assert!(msg.starts_with("Username or password is invalid"))
            }
            other => panic!("Expected Unauthorized, got {:?}", other),
        }
    }

    #[test]
    fn test_forbidden() {
        match api_err(403, &all_messages()) {
            ApiError::Forbidden(msg) => assert!(msg.starts_with("This scan is disabled.")),
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        match api_err(404, &all_messages()) {
            ApiError::NotFound(msg) => assert!(msg.starts_with("Scan does not exist.")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_conflict() {
        match api_err(409, &all_messages()) {
            ApiError::Conflict(msg) => assert!(msg.starts_with("Scan is not active.")),
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_internal_server_error() {
        match api_err(500, &all_messages()) {
            ApiError::InternalServerError(msg) => {
                assert!(msg.starts_with("Failed to launch scan."))
            }
            other => panic!("Expected InternalServerError, got {:?}", other),
        }
    }

    #[test]
    fn test_unmapped_statuses_are_unknown() {
        for code in [201, 204, 302, 405, 418, 422, 429, 502, 503] {
            match api_err(code, &all_messages()) {
                ApiError::Unknown { status } => assert_eq!(status.as_u16(), code),
                other => panic!("Expected Unknown for {}, got {:?}", code, other),
            }
        }
    }

    #[test]
    fn test_missing_message_uses_default() {
        match api_err(404, &Messages::new()) {
            ApiError::NotFound(msg) => assert!(msg.starts_with("Resource not found")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_messages_builder() {
        let messages = Messages::new().conflict("User already exists");
        assert_eq!(messages.conflict.as_deref(), Some("User already exists"));
        assert!(messages.bad_request.is_none());
    }
}
