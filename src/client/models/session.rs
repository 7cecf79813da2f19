//! Session models

use serde::{Deserialize, Serialize};

/// Body for `POST /session`
#[derive(Serialize)]
pub(crate) struct Login<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Token returned by `POST /session`
#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    pub token: String,
}

/// Body for `PUT /session`
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl SessionUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Body for the password change endpoints
#[derive(Serialize)]
pub(crate) struct PasswordChange<'a> {
    pub password: &'a str,
}
