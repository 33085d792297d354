//! Shopfront configuration management
//!
//! Handles configuration from environment variables and TOML files with
//! sensible defaults for development.

use crate::catalog::RESULT_CAP;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// API server configuration
    pub server: ServerConfig,

    /// Vector index connection
    pub index: IndexConfig,

    /// Client-side session configuration
    pub client: ClientConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server
        if let Ok(host) = std::env::var("API_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("API_PORT") {
            config.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "API_PORT".to_string(),
                value: port,
            })?;
        }

        // CORS origins (comma-separated)
        if let Ok(origins) = std::env::var("CORS_ORIGINS") {
            config.server.cors_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Vector index
        if let Ok(url) = std::env::var("VECTOR_INDEX_URL") {
            config.index.url = url;
        }
        if let Ok(token) = std::env::var("VECTOR_INDEX_TOKEN") {
            config.index.token = token;
        }
        if let Ok(top_k) = std::env::var("VECTOR_TOP_K") {
            config.index.top_k = top_k.parse().map_err(|_| ConfigError::InvalidValue {
                key: "VECTOR_TOP_K".to_string(),
                value: top_k,
            })?;
        }

        // Client
        if let Ok(url) = std::env::var("SHOP_API_URL") {
            config.client.api_url = url;
        }
        if let Ok(ms) = std::env::var("DEBOUNCE_MS") {
            config.client.debounce_ms = ms.parse().map_err(|_| ConfigError::InvalidValue {
                key: "DEBOUNCE_MS".to_string(),
                value: ms,
            })?;
        }

        // Logging
        if let Ok(level) = std::env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(config)
    }

    /// Load from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileReadError {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path,
            message: e.to_string(),
        })
    }

    /// Merge with environment variables (env takes precedence)
    pub fn with_env_override(mut self) -> Result<Self, ConfigError> {
        let env_config = Self::from_env()?;
        let defaults = Self::default();

        // Only override if env values differ from defaults
        if env_config.server.host != defaults.server.host {
            self.server.host = env_config.server.host;
        }
        if env_config.server.port != defaults.server.port {
            self.server.port = env_config.server.port;
        }
        if !env_config.server.cors_origins.is_empty() {
            self.server.cors_origins = env_config.server.cors_origins;
        }
        if env_config.index.url != defaults.index.url {
            self.index.url = env_config.index.url;
        }
        if env_config.index.top_k != defaults.index.top_k {
            self.index.top_k = env_config.index.top_k;
        }
        if env_config.client.api_url != defaults.client.api_url {
            self.client.api_url = env_config.client.api_url;
        }
        if env_config.client.debounce_ms != defaults.client.debounce_ms {
            self.client.debounce_ms = env_config.client.debounce_ms;
        }
        if env_config.logging.level != defaults.logging.level {
            self.logging.level = env_config.logging.level;
        }

        // Always use env for sensitive values
        if !env_config.index.token.is_empty() {
            self.index.token = env_config.index.token;
        }

        Ok(self)
    }

    /// Layered load: defaults, then the TOML file named by
    /// `SHOPFRONT_CONFIG` (when set), then environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var("SHOPFRONT_CONFIG") {
            Ok(path) => Self::from_file(path)?.with_env_override(),
            Err(_) => Self::from_env(),
        }
    }
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed origins for CORS; empty means permissive (development)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors_origins: vec![],
        }
    }
}

/// Vector index connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Index REST URL; required, no useful default
    pub url: String,

    /// Bearer token for the index REST API
    pub token: String,

    /// Result cap per query
    pub top_k: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            top_k: RESULT_CAP,
        }
    }
}

/// Client session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the shopfront API
    pub api_url: String,

    /// Quiet period before a filter change triggers a re-fetch
    pub debounce_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8080".to_string(),
            debounce_ms: 400,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON format for logs
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
