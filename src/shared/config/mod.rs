//! Client configuration module
//!
//! Where the client finds the backend and where it keeps its persisted room
//! cache.

use std::path::PathBuf;

use thiserror::Error;

/// Default backend URL (the server's default port)
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5002";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub server_url: String,
    /// Room cache file; `None` keeps the cache in memory only
    pub storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let server_url =
            std::env::var("ROOMDESK_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            storage_path: default_storage_path(),
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfigBuilder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.server_url.starts_with("http://") || self.server_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(self.server_url.clone()));
        }
        Ok(())
    }

    /// Full URL for an API path such as `/rooms/fetchRooms`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}

/// `<data_dir>/roomdesk/room-storage.json`
pub fn default_storage_path() -> Option<PathBuf> {
    let mut path = dirs::data_dir()?;
    path.push("roomdesk");
    path.push("room-storage.json");
    Some(path)
}

/// Builder for ClientConfig
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    server_url: Option<String>,
    storage_path: Option<PathBuf>,
    in_memory: bool,
}

impl ClientConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Persist the room cache at `path`
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = Some(path.into());
        self
    }

    /// Do not persist the room cache
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?
            .trim_end_matches('/')
            .to_string();

        let storage_path = if self.in_memory {
            None
        } else {
            self.storage_path.or_else(default_storage_path)
        };

        let config = ClientConfig {
            server_url,
            storage_path,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
