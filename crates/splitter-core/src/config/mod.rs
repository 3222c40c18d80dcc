//! Application configuration with layered loading.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//!
//! 1. **Compiled defaults**: `Default` implementations and `set_default` calls
//! 2. **Config file**: optional TOML file (`--config` or `RPC_SPLITTER_CONFIG`)
//! 3. **Environment variables**: `RPC_SPLITTER__SECTION__KEY`
//! 4. **CLI flags**: applied by the binary on top of the loaded value
//!
//! # Example
//!
//! ```toml
//! [server]
//! listen = "0.0.0.0:8545"
//! enable_cors = true
//!
//! [splitter]
//! endpoints = ["https://eth-a.example.com", "https://eth-b.example.com"]
//! graceful_timeout_seconds = 1
//! total_timeout_seconds = 10
//! max_blocks_behind = 10
//!
//! [logging]
//! level = "info"
//! format = "json"
//! ```

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path, sync::Arc, time::Duration};
use url::Url;

pub use config::ConfigError;

use crate::{
    splitter::{minimum_required_responses, Requirements, Splitter, SplitterError},
    upstream::{build_client, endpoint_name, Endpoint, HttpCaller, HttpClientConfig},
};

/// Environment variable holding the config file path.
pub const CONFIG_PATH_ENV: &str = "RPC_SPLITTER_CONFIG";

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address. Defaults to `127.0.0.1:8545`.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Adds permissive CORS headers. Defaults to `false`.
    #[serde(default)]
    pub enable_cors: bool,

    /// Maximum request body size in bytes. Defaults to 5 MiB.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

fn default_listen() -> String {
    "127.0.0.1:8545".to_string()
}

fn default_max_body_bytes() -> usize {
    5 * 1024 * 1024
}

/// Fan-out settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Upstream JSON-RPC endpoint URLs (`http` or `https`).
    #[serde(default)]
    pub endpoints: Vec<String>,

    /// Hard ceiling for one logical call. Defaults to `10`.
    #[serde(default = "default_total_timeout_seconds")]
    pub total_timeout_seconds: u64,

    /// Delay after which a call may return early. Defaults to `1`.
    #[serde(default = "default_graceful_timeout_seconds")]
    pub graceful_timeout_seconds: u64,

    /// How far behind the highest reported block a height may be. Defaults to `10`.
    #[serde(default = "default_max_blocks_behind")]
    pub max_blocks_behind: u64,

    /// Overrides the derived minimum number of agreeing responses.
    #[serde(default)]
    pub min_responses: Option<usize>,

    /// Per-request HTTP timeout towards one endpoint. Defaults to `30`.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// TCP connect timeout towards one endpoint. Defaults to `5`.
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
}

fn default_total_timeout_seconds() -> u64 {
    10
}

fn default_graceful_timeout_seconds() -> u64 {
    1
}

fn default_max_blocks_behind() -> u64 {
    10
}

fn default_request_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    5
}

/// Application logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (e.g., "trace", "debug", "info", "warn", "error"). Defaults to `"info"`.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: `"json"` or `"pretty"`. Defaults to `"pretty"`.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub splitter: SplitterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            enable_cors: false,
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            endpoints: Vec::new(),
            total_timeout_seconds: default_total_timeout_seconds(),
            graceful_timeout_seconds: default_graceful_timeout_seconds(),
            max_blocks_behind: default_max_blocks_behind(),
            min_responses: None,
            request_timeout_seconds: default_request_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), format: default_log_format() }
    }
}

impl AppConfig {
    /// Loads defaults, the optional TOML file at `config_path` and `RPC_SPLITTER__*`
    /// environment overrides. Endpoint lists in the environment are comma separated.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read, parsed, or deserialized.
    pub fn from_file<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.listen", default_listen())?
            .set_default("server.enable_cors", false)?
            .set_default("splitter.total_timeout_seconds", default_total_timeout_seconds())?
            .set_default("splitter.graceful_timeout_seconds", default_graceful_timeout_seconds())?
            .set_default("splitter.max_blocks_behind", default_max_blocks_behind())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", default_log_format())?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path.as_ref()).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix("RPC_SPLITTER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("splitter.endpoints")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// # Errors
    ///
    /// Returns an error string if `server.listen` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        self.server
            .listen
            .parse()
            .map_err(|_| format!("Invalid listen address: {}", self.server.listen))
    }

    #[must_use]
    pub fn total_timeout(&self) -> Duration {
        Duration::from_secs(self.splitter.total_timeout_seconds)
    }

    #[must_use]
    pub fn graceful_timeout(&self) -> Duration {
        Duration::from_secs(self.splitter.graceful_timeout_seconds)
    }

    /// Configured override, or all endpoints when there are at most two and all but one
    /// otherwise.
    #[must_use]
    pub fn min_responses(&self) -> usize {
        self.splitter
            .min_responses
            .unwrap_or_else(|| minimum_required_responses(self.splitter.endpoints.len()))
    }

    /// # Errors
    ///
    /// Returns an error string naming the first endpoint that is not an `http`/`https` URL.
    pub fn endpoint_urls(&self) -> Result<Vec<Url>, String> {
        self.splitter
            .endpoints
            .iter()
            .map(|raw| {
                let url = Url::parse(raw).map_err(|e| format!("Invalid endpoint URL {raw}: {e}"))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(format!("Endpoint URL must use http or https: {raw}"));
                }
                Ok(url)
            })
            .collect()
    }

    /// Validates the configuration for correctness and consistency.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error string if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.splitter.endpoints.is_empty() {
            return Err("No upstream RPC endpoints configured".to_string());
        }
        self.endpoint_urls()?;
        self.socket_addr()?;

        if self.splitter.total_timeout_seconds == 0 {
            return Err("Total timeout must be greater than 0".to_string());
        }
        if self.splitter.graceful_timeout_seconds == 0 {
            return Err("Graceful timeout must be greater than 0".to_string());
        }
        if self.splitter.graceful_timeout_seconds > self.splitter.total_timeout_seconds {
            return Err("Graceful timeout must not exceed total timeout".to_string());
        }

        let endpoints = self.splitter.endpoints.len();
        if let Some(min) = self.splitter.min_responses {
            if min == 0 || min > endpoints {
                return Err(format!("Min responses must be between 1 and {endpoints}, got {min}"));
            }
        }

        if !["json", "pretty"].contains(&self.logging.format.as_str()) {
            return Err("Logging format must be 'json' or 'pretty'".to_string());
        }

        Ok(())
    }

    /// Builds a [`Splitter`] with one [`HttpCaller`] per configured endpoint, all sharing
    /// a single connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`SplitterError::InvalidConfig`] for invalid endpoint URLs or HTTP client
    /// failures, or the builder's error.
    pub fn build_splitter(&self) -> Result<Splitter, SplitterError> {
        let client = build_client(&HttpClientConfig {
            connect_timeout: Duration::from_secs(self.splitter.connect_timeout_seconds),
            request_timeout: Duration::from_secs(self.splitter.request_timeout_seconds),
            ..HttpClientConfig::default()
        })
        .map_err(|e| SplitterError::InvalidConfig(e.to_string()))?;

        let endpoints = self
            .endpoint_urls()
            .map_err(SplitterError::InvalidConfig)?
            .into_iter()
            .map(|url| {
                let name = endpoint_name(&url);
                Endpoint::new(name, Arc::new(HttpCaller::new(client.clone(), url)))
            })
            .collect();

        Splitter::builder()
            .endpoints(endpoints)
            .requirements(Requirements {
                min_responses: self.min_responses(),
                max_blocks_behind: self.splitter.max_blocks_behind,
            })
            .total_timeout(self.total_timeout())
            .graceful_timeout(self.graceful_timeout())
            .build()
    }
}
