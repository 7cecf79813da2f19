//! Nessus 6 API client

use std::sync::Arc;

use log::debug;

pub mod api;
pub mod auth;
pub mod models;
pub mod transport;
pub mod verify;

pub use api::{
    AgentGroups, Agents, Editor, Files, Folders, Groups, Permissions, PluginRules, Plugins,
    Policies, Scanners, Scans, Server, Sessions, Users,
};
pub use auth::{AuthHeader, Credentials};
pub use transport::{ClientOptions, DEFAULT_PORT, Endpoint, Transport};
pub use verify::{Messages, verify};

use crate::error::Result;

/// Authenticated client exposing one handle per resource collection
pub struct NessusClient {
    transport: Arc<Transport>,
}

impl NessusClient {
    /// Connect with default options and authenticate
    pub async fn connect(credentials: &Credentials, endpoint: &Endpoint) -> Result<Self> {
        Self::connect_with(credentials, endpoint, &ClientOptions::default()).await
    }

    /// Connect and authenticate.
    ///
    /// A password login calls `POST /session`; API keys are attached without
    /// any network call.
    pub async fn connect_with(
        credentials: &Credentials,
        endpoint: &Endpoint,
        options: &ClientOptions,
    ) -> Result<Self> {
        let client = Self::unauthenticated(endpoint, options)?;
        client.authenticate(credentials).await?;
        Ok(client)
    }

    /// Client with no credentials attached
    pub fn unauthenticated(endpoint: &Endpoint, options: &ClientOptions) -> Result<Self> {
        let transport = Arc::new(Transport::new(endpoint, options)?);
        Ok(Self { transport })
    }

    /// Establish credentials on the shared transport
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<()> {
        match credentials {
            Credentials::Password { username, password } => {
                debug!("Authenticating {} with password", username);
                self.session().create(username, password).await?;
            }
            Credentials::ApiKeys {
                access_key,
                secret_key,
            } => {
                debug!("Authenticating with API keys");
                self.transport
                    .set_auth(Some(AuthHeader::ApiKeys {
                        access_key: access_key.clone(),
                        secret_key: secret_key.clone(),
                    }))
                    .await;
            }
        }
        Ok(())
    }

    /// Destroy the session
    pub async fn logout(&self) -> Result<()> {
        self.session().destroy().await
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Header currently attached to requests
    pub async fn auth_header(&self) -> Option<AuthHeader> {
        self.transport.auth().await
    }

    pub fn agent_groups(&self) -> AgentGroups {
        AgentGroups::new(self.transport.clone())
    }

    pub fn agents(&self) -> Agents {
        Agents::new(self.transport.clone())
    }

    pub fn editor(&self) -> Editor {
        Editor::new(self.transport.clone())
    }

    pub fn files(&self) -> Files {
        Files::new(self.transport.clone())
    }

    pub fn folders(&self) -> Folders {
        Folders::new(self.transport.clone())
    }

    pub fn groups(&self) -> Groups {
        Groups::new(self.transport.clone())
    }

    pub fn permissions(&self) -> Permissions {
        Permissions::new(self.transport.clone())
    }

    pub fn plugin_rules(&self) -> PluginRules {
        PluginRules::new(self.transport.clone())
    }

    pub fn plugins(&self) -> Plugins {
        Plugins::new(self.transport.clone())
    }

    pub fn policies(&self) -> Policies {
        Policies::new(self.transport.clone())
    }

    pub fn scanners(&self) -> Scanners {
        Scanners::new(self.transport.clone())
    }

    pub fn scans(&self) -> Scans {
        Scans::new(self.transport.clone())
    }

    pub fn server(&self) -> Server {
        Server::new(self.transport.clone())
    }

    pub fn session(&self) -> Sessions {
        Sessions::new(self.transport.clone())
    }

    pub fn users(&self) -> Users {
        Users::new(self.transport.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_api_keys_set_header_without_login() {
        // Nothing listens on this port; a login attempt would fail
        let endpoint = Endpoint::url("http://127.0.0.1:9");
        let client = NessusClient::connect(&Credentials::api_keys("ak", "sk"), &endpoint)
            .await
            .unwrap();

        let header = client.auth_header().await.unwrap();
        assert_eq!(header.name(), "X-ApiKeys");
        assert_eq!(header.value(), "accessKey=ak; secretKey=sk");
    }

    #[test]
    fn test_unauthenticated_base_url() {
        let endpoint = Endpoint::new("scanner", None);
        let client = NessusClient::unauthenticated(&endpoint, &ClientOptions::default()).unwrap();
        assert_eq!(client.base_url(), "https://scanner:8834");
    }
}
