//! Scan policies

use std::sync::Arc;

use serde_json::Value;

use crate::client::models::{PolicyImport, PolicyRequest};
use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/policies` endpoints
#[derive(Clone)]
pub struct Policies {
    transport: Arc<Transport>,
}

impl Policies {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Value> {
        let messages = Messages::new().internal_server_error("Internal server error occurred.");
        self.transport.get("policies", &messages).await
    }

    pub async fn details(&self, policy_id: u64) -> Result<Value> {
        let messages = Messages::new().not_found("Could not find a policy with that ID.");
        self.transport
            .get(&format!("policies/{}", policy_id), &messages)
            .await
    }

    pub async fn create(&self, request: &PolicyRequest) -> Result<Value> {
        let messages = Messages::new()
            .not_found("Could not find a template with the requested UUID")
            .internal_server_error("Failed to save policy. Internal server error.");
        self.transport.post("policies", request, &messages).await
    }

    pub async fn configure(&self, policy_id: u64, request: &PolicyRequest) -> Result<Value> {
        let messages = Messages::new()
            .not_found("The requested policy does not exist.")
            .internal_server_error("Error occurred while saving the configuration.");
        self.transport
            .put(&format!("policies/{}", policy_id), request, &messages)
            .await
    }

    pub async fn copy(&self, policy_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to copy this policy.")
            .not_found("The requested policy does not exist.")
            .internal_server_error("Failed to copy the policy. Internal server error.");
        self.transport
            .post_empty(&format!("policies/{}/copy", policy_id), &messages)
            .await
    }

    /// Delete a policy. Nessus answers 405 while a scan still uses it.
    pub async fn delete(&self, policy_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to delete the policy.")
            .not_found("Could not find a policy with the provided ID.");
        self.transport
            .delete(&format!("policies/{}", policy_id), &messages)
            .await
    }

    /// Export a policy as a `.nessus` XML document
    pub async fn export(&self, policy_id: u64) -> Result<Vec<u8>> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to export the policy.")
            .not_found("Policy with the provided ID does not exist");
        self.transport
            .get_bytes(&format!("policies/{}/export", policy_id), &[], &messages)
            .await
    }

    /// Import a policy previously uploaded through `Files::upload`
    pub async fn import(&self, uploaded_file: &str) -> Result<Value> {
        let messages = Messages::new().internal_server_error("Failed to import the policy.");
        self.transport
            .post(
                "policies/import",
                &PolicyImport {
                    file: uploaded_file,
                },
                &messages,
            )
            .await
    }
}
