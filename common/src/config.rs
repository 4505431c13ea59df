use serde::Deserialize;
use std::{error::Error, fs};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_METRICS_ADDRESS: &str = "0.0.0.0:9000";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_server_address")]
    pub server_address: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Where the Prometheus scrape endpoint listens
    #[serde(default = "default_metrics_address")]
    pub metrics_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_address: default_server_address(),
            log_level: default_log_level(),
            metrics_address: default_metrics_address(),
        }
    }
}

fn default_server_address() -> String {
    DEFAULT_SERVER_ADDRESS.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_metrics_address() -> String {
    DEFAULT_METRICS_ADDRESS.to_string()
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config = serde_yml::from_str(contents)?;

        Ok(config)
    }
}
