//! Error types for the Nessus6 client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for Nessus6 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the library and CLI
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Operation failed: {0}")]
    Other(String),
}

/// Errors raised while talking to the Nessus API.
///
/// The status-mapped variants carry the message supplied by the calling
/// resource method, followed by the raw response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error(
        "An unknown error occurred (HTTP {status}). Please consult Nessus for further details."
    )]
    Unknown { status: StatusCode },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// HTTP status this error was mapped from, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            ApiError::Unauthorized(_) => Some(StatusCode::UNAUTHORIZED),
            ApiError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            ApiError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            ApiError::Conflict(_) => Some(StatusCode::CONFLICT),
            ApiError::InternalServerError(_) => Some(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::Unknown { status } => Some(*status),
            ApiError::Network(_) | ApiError::InvalidResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to Nessus".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Authentication configuration errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error(
        "Authentication credentials not provided. Must provide either username and password or access key and secret key."
    )]
    MissingCredentials,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `nessus6 init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_message() {
        let err = ApiError::NotFound("Scan does not exist.".to_string());
        assert!(err.to_string().contains("Scan does not exist."));
    }

    #[test]
    fn test_api_error_unknown_mentions_status() {
        let err = ApiError::Unknown {
            status: StatusCode::IM_A_TEAPOT,
        };
        let msg = err.to_string();
        assert!(msg.contains("418"));
        assert!(msg.contains("unknown error"));
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(
            ApiError::Conflict(String::new()).status(),
            Some(StatusCode::CONFLICT)
        );
        assert_eq!(
            ApiError::Unknown {
                status: StatusCode::METHOD_NOT_ALLOWED
            }
            .status(),
            Some(StatusCode::METHOD_NOT_ALLOWED)
        );
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
    }

    #[test]
    fn test_auth_error_message() {
        let err = AuthError::MissingCredentials;
        let msg = err.to_string();
        assert!(msg.contains("username and password"));
        assert!(msg.contains("access key and secret key"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("nessus6 init"));
    }

    #[test]
    fn test_error_from_api_error() {
        let err: Error = ApiError::Forbidden("nope".to_string()).into();

        match err {
            Error::Api(ApiError::Forbidden(msg)) => assert_eq!(msg, "nope"),
            _ => panic!("Expected Error::Api(ApiError::Forbidden)"),
        }
    }

    #[test]
    fn test_error_from_auth_error() {
        let err: Error = AuthError::MissingCredentials.into();
        assert!(matches!(err, Error::Auth(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
