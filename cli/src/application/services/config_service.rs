//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::SdkConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if an existing config file cannot be read or parsed.
pub fn load_config(store: &impl ConfigStore) -> Result<SdkConfig> {
    store.load()
}

/// Validate and persist a single `key = value` setting.
///
/// Returns the updated configuration.
///
/// # Errors
///
/// Returns an error if the key or value is invalid, or the file cannot be
/// written. Nothing is saved in that case.
pub fn set_config_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<SdkConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    tracing::debug!(key, value, "config updated");
    Ok(config)
}
