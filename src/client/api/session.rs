//! Session resource: login, logout and the current user's settings

use std::sync::Arc;

use log::info;
use reqwest::{Method, StatusCode};
use serde_json::Value;

use crate::client::auth::AuthHeader;
use crate::client::models::{Login, LoginResponse, PasswordChange, SessionUpdate};
use crate::client::transport::Transport;
use crate::client::verify::{Messages, status_error};
use crate::error::{ApiError, Error, Result};

/// `/session` endpoints
#[derive(Clone)]
pub struct Sessions {
    transport: Arc<Transport>,
}

impl Sessions {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Log in and attach the returned token to every later request.
    ///
    /// Returns the token.
    pub async fn create(&self, username: &str, password: &str) -> Result<String> {
        let messages = Messages::new()
            .bad_request("Username format is not valid")
            .unauthorized("Username or password is invalid")
            .internal_server_error("Too many users are connected");

        let body = self
            .transport
            .post("session", &Login { username, password }, &messages)
            .await?;
        let login: LoginResponse = serde_json::from_value(body).map_err(|e| {
            ApiError::InvalidResponse(format!("Login response has no token: {}", e))
        })?;

        self.transport
            .set_auth(Some(AuthHeader::Token(login.token.clone())))
            .await;
        info!("Session created for {}", username);

        Ok(login.token)
    }

    /// Log out and drop the stored credentials header
    pub async fn destroy(&self) -> Result<()> {
        let (status, body) = self.transport.raw(Method::DELETE, "session").await?;

        match status {
            StatusCode::OK => {
                self.transport.set_auth(None).await;
                info!("Session destroyed");
                Ok(())
            }
            StatusCode::UNAUTHORIZED => Err(status_error(
                status,
                &body,
                &Messages::new().unauthorized("No session exists"),
            )
            .into()),
            status => Err(ApiError::Unknown { status }.into()),
        }
    }

    /// Change the current user's name and/or email
    pub async fn edit(&self, update: &SessionUpdate) -> Result<Value> {
        if update.is_empty() {
            return Err(Error::InvalidInput(
                "User's name or email was not provided".to_string(),
            ));
        }

        let messages = Messages::new()
            .forbidden("You do not have permission to edit the session data")
            .internal_server_error("Server failed to edit the user");
        self.transport.put("session", update, &messages).await
    }

    /// Current session resource
    pub async fn get(&self) -> Result<Value> {
        let messages =
            Messages::new().forbidden("You do not have permission to view the session data");
        self.transport.get("session", &messages).await
    }

    /// Change the current user's password
    pub async fn password(&self, new_password: &str) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Password is too short")
            .unauthorized("You do not have permission to change this password")
            .internal_server_error("Server failed to change the password");
        self.transport
            .put(
                "session/chpasswd",
                &PasswordChange {
                    password: new_password,
                },
                &messages,
            )
            .await
    }

    /// Generate new API keys for the current user
    pub async fn keys(&self) -> Result<Value> {
        let messages = Messages::new().unauthorized("You are not logged in / authenticated");
        self.transport.put_empty("session/keys", &messages).await
    }
}
