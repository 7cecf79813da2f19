//! Credentials and authentication headers

use std::fmt;

use crate::error::{AuthError, Result};

/// Header carrying the session token obtained from `POST /session`
pub const TOKEN_HEADER: &str = "X-Cookie";

/// Header carrying static API keys
pub const API_KEYS_HEADER: &str = "X-ApiKeys";

/// Credentials used to authenticate against Nessus
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Log in with a username and password to obtain a session token
    Password { username: String, password: String },

    /// Send API keys with every request, no login call
    ApiKeys {
        access_key: String,
        secret_key: String,
    },
}

impl Credentials {
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Password {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn api_keys(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Credentials::ApiKeys {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    /// Pick credentials from loosely supplied parts.
    ///
    /// A complete username/password pair wins over a key pair. Fails when
    /// neither pair is complete.
    pub fn from_parts(
        username: Option<&str>,
        password: Option<&str>,
        access_key: Option<&str>,
        secret_key: Option<&str>,
    ) -> Result<Self> {
        match (username, password, access_key, secret_key) {
            (Some(user), Some(pass), _, _) if !user.is_empty() && !pass.is_empty() => {
                Ok(Credentials::password(user, pass))
            }
            (_, _, Some(access), Some(secret)) if !access.is_empty() && !secret.is_empty() => {
                Ok(Credentials::api_keys(access, secret))
            }
            _ => Err(AuthError::MissingCredentials.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::ApiKeys { access_key, .. } => f
                .debug_struct("ApiKeys")
                .field("access_key", access_key)
                .field("secret_key", &"***")
                .finish(),
        }
    }
}

/// The header attached to every authenticated request
#[derive(Clone, PartialEq, Eq)]
pub enum AuthHeader {
    Token(String),
    ApiKeys {
        access_key: String,
        secret_key: String,
    },
}

impl AuthHeader {
    pub fn name(&self) -> &'static str {
        match self {
            AuthHeader::Token(_) => TOKEN_HEADER,
            AuthHeader::ApiKeys { .. } => API_KEYS_HEADER,
        }
    }

    pub fn value(&self) -> String {
        match self {
            AuthHeader::Token(token) => format!("token={}", token),
            AuthHeader::ApiKeys {
                access_key,
                secret_key,
            } => format!("accessKey={}; secretKey={}", access_key, secret_key),
        }
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthHeader").field(&self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_from_parts_prefers_password() {
        let creds =
            Credentials::from_parts(Some("admin"), Some("secret"), Some("ak"), Some("sk")).unwrap();
        assert_eq!(creds, Credentials::password("admin", "secret"));
    }

    #[test]
    fn test_from_parts_api_keys() {
        let creds = Credentials::from_parts(Some("admin"), None, Some("ak"), Some("sk")).unwrap();
        assert_eq!(creds, Credentials::api_keys("ak", "sk"));
    }

    #[test]
    fn test_from_parts_missing() {
        let err = Credentials::from_parts(Some("admin"), None, Some("ak"), None).unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::MissingCredentials)));

        let err = Credentials::from_parts(None, None, None, None).unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_from_parts_rejects_empty_strings() {
        let err = Credentials::from_parts(Some(""), Some(""), None, None).unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_token_header() {
        let header = AuthHeader::Token("abc123".to_string());
        assert_eq!(header.name(), "X-Cookie");
        assert_eq!(header.value(), "token=abc123");
    }

    #[test]
    fn test_api_keys_header() {
        let header = AuthHeader::ApiKeys {
            access_key: "ak".to_string(),
            secret_key: "sk".to_string(),
        };
        assert_eq!(header.name(), "X-ApiKeys");
        assert_eq!(header.value(), "accessKey=ak; secretKey=sk");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::password("admin", "hunter2");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("hunter2"));

        let header = AuthHeader::Token("sekrit".to_string());
        assert!(!format!("{:?}", header).contains("sekrit"));
    }
}
