//! Settings structures for Reponav-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub github: GithubSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (REPONAV_* prefix)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("REPONAV_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("REPONAV_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("REPONAV_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("REPONAV_GITHUB_CLIENT_ID") {
            self.github.client_id = Some(val);
        }
        if let Ok(val) = std::env::var("REPONAV_GITHUB_CLIENT_SECRET") {
            self.github.client_secret = Some(val);
        }
        if let Ok(val) = std::env::var("REPONAV_LOG_DIR") {
            self.logging.directory = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Reponav".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 30.0,
            pool_maxsize: 20,
        }
    }
}

/// GitHub API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSettings {
    /// Base URL of the API
    pub api_base: String,
    /// OAuth application client id, sent as a query parameter when set
    pub client_id: Option<String>,
    /// OAuth application client secret, sent as a query parameter when set
    pub client_secret: Option<String>,
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            client_id: None,
            client_secret: None,
        }
    }
}

impl GithubSettings {
    /// Credential query parameters, empty when not configured
    pub fn credential_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(ref id) = self.client_id {
            params.push(("client_id".to_string(), id.clone()));
        }
        if let Some(ref secret) = self.client_secret {
            params.push(("client_secret".to_string(), secret.clone()));
        }
        params
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Directory the rotating log files are written to
    pub directory: String,
    /// Log file name prefix
    pub file_prefix: String,
    /// Number of rotated files kept on disk
    pub max_files: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            file_prefix: "application.log".to_string(),
            max_files: 7,
        }
    }
}
