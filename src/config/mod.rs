//! Configuration management
//!
//! Connection settings and credentials live in a YAML file, by default
//! `~/.nessus6/config.yaml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::{ClientOptions, Credentials, DEFAULT_PORT, Endpoint};
use crate::error::{ConfigError, Result};

/// Connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Nessus host name or address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Management port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Full base URL; takes precedence over host/port
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,

    /// Accept self-signed certificates
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_accept_invalid_certs() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            port: default_port(),
            url: None,
            username: None,
            password: None,
            access_key: None,
            secret_key: None,
            accept_invalid_certs: default_accept_invalid_certs(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".nessus6").join("config.yaml"))
    }

    /// Custom path if given, otherwise the default
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional custom path
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional custom path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Credentials are stored in clear text
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Endpoint described by this configuration
    pub fn endpoint(&self) -> Result<Endpoint> {
        if let Some(url) = &self.url {
            return Ok(Endpoint::url(url.clone()));
        }

        let host = self
            .host
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ConfigError::Invalid("Nessus host not configured".to_string()))?;
        Ok(Endpoint::new(host, Some(self.port)))
    }

    /// Credentials from whichever pair is complete
    pub fn credentials(&self) -> Result<Credentials> {
        Credentials::from_parts(
            self.username.as_deref(),
            self.password.as_deref(),
            self.access_key.as_deref(),
            self.secret_key.as_deref(),
        )
    }

    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            accept_invalid_certs: self.accept_invalid_certs,
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Human-readable authentication mode
    pub fn auth_mode(&self) -> Option<&'static str> {
        match self.credentials().ok()? {
            Credentials::Password { .. } => Some("username/password"),
            Credentials::ApiKeys { .. } => Some("API keys"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AuthError, Error};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.host.is_none());
        assert_eq!(config.port, 8834);
        assert!(config.accept_invalid_certs);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_parse_minimal_yaml() {
        let config: Config =
            serde_yaml::from_str("host: 10.0.0.5\naccess_key: ak\nsecret_key: sk\n").unwrap();

        assert_eq!(config.port, 8834);
        assert_eq!(
            config.endpoint().unwrap().base_url(),
            "https://10.0.0.5:8834"
        );
        assert_eq!(config.credentials().unwrap(), Credentials::api_keys("ak", "sk"));
        assert_eq!(config.auth_mode(), Some("API keys"));
    }

    #[test]
    fn test_url_overrides_host() {
        let config = Config {
            host: Some("ignored".to_string()),
            url: Some("http://127.0.0.1:4000".to_string()),
            ..Default::default()
        };
        assert_eq!(config.endpoint().unwrap().base_url(), "http://127.0.0.1:4000");
    }

    #[test]
    fn test_missing_host() {
        let err = Config::default().endpoint().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_credentials() {
        let config = Config {
            username: Some("admin".to_string()),
            ..Default::default()
        };
        let err = config.credentials().unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::MissingCredentials)));
        assert!(config.auth_mode().is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config {
            host: Some("nessus.local".to_string()),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            timeout_secs: 10,
            ..Default::default()
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path.clone()).unwrap();
        assert_eq!(loaded.host.as_deref(), Some("nessus.local"));
        assert_eq!(loaded.timeout_secs, 10);
        assert_eq!(
            loaded.credentials().unwrap(),
            Credentials::password("admin", "secret")
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
    }
}
