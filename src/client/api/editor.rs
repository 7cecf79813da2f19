//! Scan and policy editor: templates, configuration details, audit files

use std::sync::Arc;

use serde_json::Value;

use crate::client::models::{EditorType, check_template_uuid};
use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/editor` endpoints
#[derive(Clone)]
pub struct Editor {
    transport: Arc<Transport>,
}

impl Editor {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Available templates
    pub async fn list(&self, editor_type: EditorType) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the templates")
            .internal_server_error("Server failed to retrieve the templates");
        self.transport
            .get(&format!("editor/{}/templates", editor_type), &messages)
            .await
    }

    pub async fn template(&self, editor_type: EditorType, template_uuid: &str) -> Result<Value> {
        let template_uuid = check_template_uuid(template_uuid)?;
        let messages = Messages::new()
            .forbidden("You do not have permission to view the template")
            .not_found("Template does not exist")
            .internal_server_error("Server failed to retrieve the template details");
        self.transport
            .get(
                &format!("editor/{}/templates/{}", editor_type, template_uuid),
                &messages,
            )
            .await
    }

    /// Editor view of an existing scan or policy
    pub async fn details(&self, editor_type: EditorType, object_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to open the object")
            .not_found("Object does not exist")
            .internal_server_error("Server failed to retrieve the editor details");
        self.transport
            .get(&format!("editor/{}/{}", editor_type, object_id), &messages)
            .await
    }

    pub async fn plugin_description(
        &self,
        policy_id: u64,
        family_id: u64,
        plugin_id: u64,
    ) -> Result<Value> {
        let messages = Messages::new()
            .not_found("Plugin does not exist")
            .internal_server_error("Server failed to retrieve the plugin description");
        self.transport
            .get(
                &format!(
                    "editor/policy/{}/families/{}/plugins/{}",
                    policy_id, family_id, plugin_id
                ),
                &messages,
            )
            .await
    }

    /// Download a custom audit file attached to a scan or policy
    pub async fn audits(
        &self,
        editor_type: EditorType,
        object_id: u64,
        file_id: u64,
    ) -> Result<Vec<u8>> {
        let messages = Messages::new()
            .forbidden("You do not have permission to export the audit file")
            .not_found("Audit file does not exist");
        self.transport
            .get_bytes(
                &format!("editor/{}/{}/audits/{}", editor_type, object_id, file_id),
                &[],
                &messages,
            )
            .await
    }
}
