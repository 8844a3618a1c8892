//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables.

use serde::Deserialize;

/// Server configuration composed from environment variables.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Agent execution configuration.
    #[serde(default)]
    pub agents: AgentsConfig,
}

/// Agent execution configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentsConfig {
    /// Simulated delay per agent step, in milliseconds.
    #[serde(default = "default_step_delay_ms")]
    pub step_delay_ms: u64,
}

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_step_delay_ms() -> u64 {
    2000
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            step_delay_ms: default_step_delay_ms(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values fail to parse.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agents_config_has_correct_defaults() {
        let config = AgentsConfig::default();
        assert_eq!(config.step_delay_ms, 2000);
    }

    #[test]
    fn empty_configuration_falls_back_to_defaults() {
        let config: ServerConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.agents.step_delay_ms, 2000);
    }
}
