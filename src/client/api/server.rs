//! Server information

use std::sync::Arc;

use serde_json::Value;

use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/server` endpoints
#[derive(Clone)]
pub struct Server {
    transport: Arc<Transport>,
}

impl Server {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Version, license and capability information
    pub async fn properties(&self) -> Result<Value> {
        let messages =
            Messages::new().internal_server_error("Server failed to retrieve properties");
        self.transport.get("server/properties", &messages).await
    }

    /// Readiness: `{"status": "ready", "progress": null}`
    pub async fn status(&self) -> Result<Value> {
        let messages = Messages::new().internal_server_error("Server failed to retrieve status");
        self.transport.get("server/status", &messages).await
    }
}
