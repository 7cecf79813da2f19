//! Agents linked to a scanner, and the groups they are organized in

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

/// `/scanners/{scanner_id}/agents` endpoints
#[derive(Clone)]
pub struct Agents {
    transport: Arc<Transport>,
}

impl Agents {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, scanner_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to list agents.")
            .internal_server_error("Internal server error occurred.");
        self.transport
            .get(&format!("scanners/{}/agents", scanner_id), &messages)
            .await
    }

    pub async fn details(&self, scanner_id: u64, agent_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to retrieve agents.")
            .not_found("Could not find an agent with that ID.");
        self.transport
            .get(
                &format!("scanners/{}/agents/{}", scanner_id, agent_id),
                &messages,
            )
            .await
    }

    /// Unlink an agent from the scanner
    pub async fn delete(&self, scanner_id: u64, agent_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to delete the agent.")
            .not_found("Could not find an agent with the provided ID.")
            .internal_server_error("Failed to delete agent. Internal server error.");
        self.transport
            .delete(
                &format!("scanners/{}/agents/{}", scanner_id, agent_id),
                &messages,
            )
            .await
    }
}

/// `/scanners/{scanner_id}/agent-groups` endpoints
#[derive(Clone)]
pub struct AgentGroups {
    transport: Arc<Transport>,
}

impl AgentGroups {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, scanner_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to list agent groups.")
            .internal_server_error("Internal server error occurred.");
        self.transport
            .get(&format!("scanners/{}/agent-groups", scanner_id), &messages)
            .await
    }

    pub async fn details(&self, scanner_id: u64, group_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to retrieve agent groups.")
            .not_found("Could not find an agent group with that ID.");
        self.transport
            .get(
                &format!("scanners/{}/agent-groups/{}", scanner_id, group_id),
                &messages,
            )
            .await
    }

    pub async fn create(&self, scanner_id: u64, name: &str) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to create the agent group.")
            .internal_server_error("Failed to create agent group. Internal server error.");
        self.transport
            .post(
                &format!("scanners/{}/agent-groups", scanner_id),
                &GroupName { name },
                &messages,
            )
            .await
    }

    /// Rename an agent group
    pub async fn configure(&self, scanner_id: u64, group_id: u64, name: &str) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to configure the agent group.")
            .not_found("Could not find an agent group with the provided ID.")
            .internal_server_error("Failed to configure agent group. Internal server error.");
        self.transport
            .put(
                &format!("scanners/{}/agent-groups/{}", scanner_id, group_id),
                &GroupName { name },
                &messages,
            )
            .await
    }

    pub async fn delete(&self, scanner_id: u64, group_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to delete the agent group.")
            .not_found("Could not find an agent group with the provided ID.")
            .internal_server_error("Failed to delete agent group. Internal server error.");
        self.transport
            .delete(
                &format!("scanners/{}/agent-groups/{}", scanner_id, group_id),
                &messages,
            )
            .await
    }

    pub async fn add_agent(&self, scanner_id: u64, group_id: u64, agent_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .not_found("Could not find an agent with the provided ID.")
            .internal_server_error("Failed to configure agent group. Internal server error.");
        self.transport
            .put_empty(
                &format!(
                    "scanners/{}/agent-groups/{}/agents/{}",
                    scanner_id, group_id, agent_id
                ),
                &messages,
            )
            .await
    }

    pub async fn delete_agent(
        &self,
        scanner_id: u64,
        group_id: u64,
        agent_id: u64,
    ) -> Result<Value> {
        let messages = Messages::new()
            .not_found("Could not find an agent with the provided ID.")
            .internal_server_error("Failed to delete agent from the group. Internal server error.");
        self.transport
            .delete(
                &format!(
                    "scanners/{}/agent-groups/{}/agents/{}",
                    scanner_id, group_id, agent_id
                ),
                &messages,
            )
            .await
    }
}
