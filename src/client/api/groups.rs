//! User groups

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

#[derive(Serialize)]
struct GroupName<'a> {
    name: &'a str,
}

/// `/groups` endpoints
#[derive(Clone)]
pub struct Groups {
    transport: Arc<Transport>,
}

impl Groups {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Value> {
        let messages =
            Messages::new().forbidden("You do not have permission to view the groups list");
        self.transport.get("groups", &messages).await
    }

    pub async fn create(&self, name: &str) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Field is invalid")
            .forbidden("You do not have permission to create a group")
            .internal_server_error("Server failed to create the group");
        self.transport
            .post("groups", &GroupName { name }, &messages)
            .await
    }

    pub async fn edit(&self, group_id: u64, name: &str) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Field is invalid")
            .forbidden("You do not have permission to edit a group")
            .not_found("Group does not exist")
            .internal_server_error("Server failed to edit / rename the group");
        self.transport
            .put(
                &format!("groups/{}", group_id),
                &GroupName { name },
                &messages,
            )
            .await
    }

    pub async fn rename(&self, group_id: u64, name: &str) -> Result<Value> {
        self.edit(group_id, name).await
    }

    pub async fn delete(&self, group_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Group does not exist")
            .forbidden("You do not have permission to delete the group")
            .internal_server_error("Server failed to delete the group");
        self.transport
            .delete(&format!("groups/{}", group_id), &messages)
            .await
    }

    pub async fn list_users(&self, group_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the groups users list")
            .not_found("Group does not exist");
        self.transport
            .get(&format!("groups/{}/users", group_id), &messages)
            .await
    }

    pub async fn add_user(&self, group_id: u64, user_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to add users to a group")
            .not_found("Group or user does not exist")
            .internal_server_error("Server failed to add the user to the group");
        self.transport
            .post_empty(&format!("groups/{}/users/{}", group_id, user_id), &messages)
            .await
    }

    pub async fn delete_user(&self, group_id: u64, user_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to delete users from a group")
            .not_found("Group or user does not exist")
            .internal_server_error("Server failed to remove the user from the group");
        self.transport
            .delete(&format!("groups/{}/users/{}", group_id, user_id), &messages)
            .await
    }
}
