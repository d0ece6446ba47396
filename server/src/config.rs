//! Configuration management for the server.

use std::env;
use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Snapshot file for best-effort persistence; no file, no persistence
    pub data_file: Option<PathBuf>,
    /// Seed the demo catalog when starting with an empty ledger
    pub seed_demo: bool,
    /// Secret key for token validation (placeholder for auth)
    pub auth_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let data_file = env::var("DATA_FILE").ok().map(PathBuf::from);

        let seed_demo = match env::var("SEED_DEMO") {
            Ok(value) => match value.as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidSeedDemo(value)),
            },
            Err(_) => false,
        };

        let auth_secret = env::var("AUTH_SECRET").ok();

        Ok(Self {
            host,
            port,
            data_file,
            seed_demo,
            auth_secret,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_file: None,
            seed_demo: false,
            auth_secret: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,

    #[error("Invalid SEED_DEMO value: {0}")]
    InvalidSeedDemo(String),
}
