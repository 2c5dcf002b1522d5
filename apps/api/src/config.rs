use std::path::PathBuf;

use core_config::{env_or_default, server::ServerConfig, ConfigError, FromEnv};
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the `core_config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub items: ItemsConfig,
    pub environment: Environment,
}

/// Item resource settings
#[derive(Clone, Debug)]
pub struct ItemsConfig {
    /// Directory where uploaded images are written
    pub upload_dir: PathBuf,
    /// Reject creates whose caller-supplied `id` already exists
    pub enforce_unique_ids: bool,
}

impl FromEnv for ItemsConfig {
    /// Reads from environment variables with defaults:
    /// - UPLOAD_DIR: defaults to "public/images"
    /// - ENFORCE_UNIQUE_ITEM_IDS: defaults to "false"
    fn from_env() -> Result<Self, ConfigError> {
        let upload_dir = PathBuf::from(env_or_default("UPLOAD_DIR", "public/images"));

        let enforce_unique_ids = env_or_default("ENFORCE_UNIQUE_ITEM_IDS", "false")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "ENFORCE_UNIQUE_ITEM_IDS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            upload_dir,
            enforce_unique_ids,
        })
    }
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let items = ItemsConfig::from_env()?;

        Ok(Self {
            mongodb,
            server,
            items,
            environment,
        })
    }
}
