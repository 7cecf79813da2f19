//! User management

use std::sync::Arc;

use serde_json::Value;

use crate::client::models::{NewUser, PasswordChange, UserUpdate};
use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/users` endpoints
#[derive(Clone)]
pub struct Users {
    transport: Arc<Transport>,
}

impl Users {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn create(&self, user: &NewUser) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Field is invalid")
            .forbidden("You do not have permission to create this user")
            .conflict("User already exists");
        self.transport.post("users", user, &messages).await
    }

    pub async fn delete(&self, user_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("Not authorized to delete users")
            .not_found("User does not exist")
            .conflict("Cannot delete your own account")
            .internal_server_error("Failed to delete the user due to an internal server error");
        self.transport
            .delete(&format!("users/{}", user_id), &messages)
            .await
    }

    pub async fn edit(&self, user_id: u64, update: &UserUpdate) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Field is invalid")
            .forbidden("You do not have permission to edit this user")
            .not_found("User does not exist")
            .conflict("Cannot edit your own permissions");
        self.transport
            .put(&format!("users/{}", user_id), update, &messages)
            .await
    }

    pub async fn get(&self, user_id: u64) -> Result<Value> {
        let messages = Messages::new().not_found("User does not exist");
        self.transport
            .get(&format!("users/{}", user_id), &messages)
            .await
    }

    pub async fn list(&self) -> Result<Value> {
        let messages = Messages::new().forbidden("You do not have permission to view the list");
        self.transport.get("users", &messages).await
    }

    pub async fn password(&self, user_id: u64, new_password: &str) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Password is too short")
            .forbidden("You do not have permission to change the users password")
            .not_found("User does not exist")
            .internal_server_error("Server failed to change the password");
        self.transport
            .put(
                &format!("users/{}/chpasswd", user_id),
                &PasswordChange {
                    password: new_password,
                },
                &messages,
            )
            .await
    }

    /// Generate new API keys for a user
    pub async fn keys(&self, user_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to generate API keys")
            .not_found("User does not exist")
            .internal_server_error("Server failed to change the keys");
        self.transport
            .put_empty(&format!("users/{}/keys", user_id), &messages)
            .await
    }
}
