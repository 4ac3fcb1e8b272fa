//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Harvard Art Museums API settings
    #[serde(default)]
    pub harvard: HarvardConfig,

    /// Victoria & Albert Museum API settings
    #[serde(default)]
    pub vam: VamConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4157
}

/// Harvard Art Museums API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvardConfig {
    /// API base URL
    #[serde(default = "default_harvard_base_url")]
    pub base_url: String,

    /// API key (defaults from `HARVARD_API_KEY`)
    #[serde(default = "default_harvard_api_key")]
    pub api_key: String,
}

impl Default for HarvardConfig {
    fn default() -> Self {
        Self {
            base_url: default_harvard_base_url(),
            api_key: default_harvard_api_key(),
        }
    }
}

fn default_harvard_base_url() -> String {
    "https://api.harvardartmuseums.org".to_string()
}

fn default_harvard_api_key() -> String {
    std::env::var("HARVARD_API_KEY").unwrap_or_default()
}

/// Victoria & Albert Museum API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VamConfig {
    /// API base URL
    #[serde(default = "default_vam_base_url")]
    pub base_url: String,
}

impl Default for VamConfig {
    fn default() -> Self {
        Self {
            base_url: default_vam_base_url(),
        }
    }
}

fn default_vam_base_url() -> String {
    "https://api.vam.ac.uk/v2".to_string()
}

/// Load configuration from an optional file plus `MUSEA_*` environment overrides
pub fn load_config(path: Option<&Path>) -> Result<Config, config::ConfigError> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix("MUSEA"))
        .build()?;

    settings.try_deserialize()
}
