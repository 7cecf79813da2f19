//! Plugin families, plugin details and plugin rules

use std::sync::Arc;

use serde_json::Value;

use crate::client::models::PluginRule;
use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/plugins` endpoints
#[derive(Clone)]
pub struct Plugins {
    transport: Arc<Transport>,
}

impl Plugins {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn families(&self) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view plugin families")
            .internal_server_error("Server failed to retrieve the plugin family list.");
        self.transport.get("plugins/families", &messages).await
    }

    pub async fn family_details(&self, family_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the plugin family")
            .not_found("Plugin family not found")
            .internal_server_error("Server failed to retrieve the plugin family details.");
        self.transport
            .get(&format!("plugins/families/{}", family_id), &messages)
            .await
    }

    pub async fn plugin_details(&self, plugin_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the plugin")
            .not_found("Plugin not found")
            .internal_server_error("Server failed to retrieve the plugin details.");
        self.transport
            .get(&format!("plugins/plugin/{}", plugin_id), &messages)
            .await
    }
}

/// `/plugin-rules` endpoints
#[derive(Clone)]
pub struct PluginRules {
    transport: Arc<Transport>,
}

impl PluginRules {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view plugin rules list")
            .internal_server_error("Server failed to retrieve the plugin rules");
        self.transport.get("plugin-rules", &messages).await
    }

    pub async fn create(&self, rule: &PluginRule) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("An argument is missing or invalid")
            .forbidden("You do not have permission to create this plugin rule")
            .not_found("Plugin not found")
            .internal_server_error("Server failed to create the plugin rule");
        self.transport.post("plugin-rules", rule, &messages).await
    }

    pub async fn edit(&self, rule_id: u64, rule: &PluginRule) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to edit the rule.")
            .not_found("Rule with that ID could not be found")
            .internal_server_error("Server failed to edit the plugin rule");
        self.transport
            .put(&format!("plugin-rules/{}", rule_id), rule, &messages)
            .await
    }

    pub async fn delete(&self, rule_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to delete the rule.")
            .not_found("Rule with that ID could not be found")
            .internal_server_error("Server failed to delete the plugin rule");
        self.transport
            .delete(&format!("plugin-rules/{}", rule_id), &messages)
            .await
    }
}
