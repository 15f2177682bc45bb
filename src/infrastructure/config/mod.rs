//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::application::errors::ConfigError;
use crate::infrastructure::assistant::DEFAULT_ENDPOINT;

/// Client configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub bot: BotConfig,
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BotConfig {
    pub name: String,
    pub greeting: String,
    pub command_prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BackendConfig {
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                name: "counsel".to_string(),
                greeting: "Hello! I'm your Legal assistant. Ask me anything...".to_string(),
                command_prefix: "/".to_string(),
            },
            backend: BackendConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn load_env() -> Self {
        // Load from environment variables
        let mut config = Config::default();

        if let Ok(endpoint) = std::env::var("ASSISTANT_ENDPOINT") {
            config.backend.endpoint = endpoint;
        }

        if let Ok(name) = std::env::var("BOT_NAME") {
            config.bot.name = name;
        }

        if let Ok(prefix) = std::env::var("BOT_PREFIX") {
            config.bot.command_prefix = prefix;
        }

        config
    }
}
