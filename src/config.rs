use crate::constants::NODE_URL_KEY;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Runtime-tunable parameters for the component. Populated from the
/// environment or from a JSON config file by the host service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: default_log_level(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let log_level =
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());

        let timeout = match std::env::var("TIMEOUT") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("TIMEOUT must be an unsigned integer, got {raw:?}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config { log_level, timeout })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// The timeout field interpreted as seconds.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// RPC endpoint URL for the BSC node, taken from the `BSC_NODE_URL` env var.
pub fn node_url() -> Result<String> {
    dotenv::dotenv().ok();

    let url = std::env::var(NODE_URL_KEY)
        .with_context(|| format!("{NODE_URL_KEY} must be set in .env"))?;
    if url.is_empty() {
        anyhow::bail!("{NODE_URL_KEY} is set but empty");
    }
    Ok(url)
}
