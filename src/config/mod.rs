mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(&config_path).await?;
    parse(&config_str)
}

pub fn parse(raw: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(raw)?;

    if config.script.path.trim().is_empty() {
        return Err(Error::config("script.path must not be empty"));
    }

    Ok(config)
}
