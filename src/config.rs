use serde::Deserialize;
use std::time::Duration;

use crate::services::PipelineSettings;

const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_base_url")]
    pub omdb_base_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Timeout applied to every outbound OMDb call, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of upstream units resolved at once during fan-out
    #[serde(default = "default_fanout_concurrency")]
    pub fanout_concurrency: usize,
}

fn default_omdb_base_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_fanout_concurrency() -> usize {
    4
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let key = self.omdb_api_key.trim();
        if key.is_empty() || key == PLACEHOLDER_API_KEY {
            anyhow::bail!("OMDB_API_KEY must be set to a real OMDb API key");
        }
        if self.fanout_concurrency == 0 {
            anyhow::bail!("FANOUT_CONCURRENCY must be at least 1");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pipeline tuning derived from this configuration
    pub fn pipeline_settings(&self) -> PipelineSettings {
        PipelineSettings {
            concurrency: self.fanout_concurrency,
            ..PipelineSettings::default()
        }
    }
}
