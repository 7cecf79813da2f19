//! Scanners linked to this Nessus instance

use std::sync::Arc;

use serde_json::Value;

use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/scanners` endpoints
#[derive(Clone)]
pub struct Scanners {
    transport: Arc<Transport>,
}

impl Scanners {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the list")
            .internal_server_error("Server failed to retrieve the scanner list");
        self.transport.get("scanners", &messages).await
    }

    pub async fn list_agents(&self, scanner_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the list of agents")
            .internal_server_error("Server failed to retrieve agent list");
        self.transport
            .get(&format!("scanners/{}/agents", scanner_id), &messages)
            .await
    }

    /// Agent linking key
    pub async fn key(&self, scanner_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the agent linking key")
            .internal_server_error("Server failed to retrieve agent key");
        self.transport
            .get(&format!("scanners/{}/key", scanner_id), &messages)
            .await
    }
}
