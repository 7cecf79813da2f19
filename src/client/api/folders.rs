//! Scan folders

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

#[derive(Serialize)]
struct FolderName<'a> {
    name: &'a str,
}

/// `/folders` endpoints
#[derive(Clone)]
pub struct Folders {
    transport: Arc<Transport>,
}

impl Folders {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the folder list.")
            .internal_server_error("An internal server error occurred.");
        self.transport.get("folders", &messages).await
    }

    pub async fn create(&self, name: &str) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Folder name is invalid")
            .forbidden("You do not have permission to create a folder.")
            .internal_server_error("Server failed to create the folder.");
        self.transport
            .post("folders", &FolderName { name }, &messages)
            .await
    }

    pub async fn edit(&self, folder_id: u64, name: &str) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("Cannot rename a system folder.")
            .not_found("Folder does not exist.")
            .internal_server_error("Server failed to rename the folder.");
        self.transport
            .put(
                &format!("folders/{}", folder_id),
                &FolderName { name },
                &messages,
            )
            .await
    }

    pub async fn rename(&self, folder_id: u64, name: &str) -> Result<Value> {
        self.edit(folder_id, name).await
    }

    pub async fn delete(&self, folder_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("Cannot delete a system folder.")
            .not_found("Folder does not exist.")
            .internal_server_error("Server failed to delete the folder.");
        self.transport
            .delete(&format!("folders/{}", folder_id), &messages)
            .await
    }
}
