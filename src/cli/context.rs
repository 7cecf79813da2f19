//! Command execution context
//!
//! Loads the config, applies CLI overrides and hands out an authenticated
//! client.

use log::{debug, warn};

use nessus6::config::Config;
use nessus6::{Credentials, NessusClient, Result};

use crate::cli::{GlobalOptions, OutputFormat};

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    /// Authenticated API client
    pub client: NessusClient,
    /// Output format preference
    pub format: OutputFormat,
    credentials: Credentials,
}

impl CommandContext {
    /// Load config, resolve credentials and connect.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded, no credential pair is
    /// complete, or the login is rejected.
    pub async fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        if let Some(url) = opts.url_ref() {
            config.url = Some(url.to_string());
        }

        let credentials = config.credentials()?;
        let endpoint = config.endpoint()?;
        debug!("Connecting to {}", endpoint.base_url());

        let client =
            NessusClient::connect_with(&credentials, &endpoint, &config.client_options()).await?;

        Ok(Self {
            client,
            format: opts.format,
            credentials,
        })
    }

    /// Log out of password sessions. API keys hold no session.
    pub async fn close(self) {
        if let Credentials::Password { .. } = self.credentials {
            if let Err(err) = self.client.logout().await {
                warn!("Failed to close session: {}", err);
            }
        }
    }
}
