//! Domain types and validators for SDK configuration.
//!
//! Pure functions only: no I/O, no filesystem access.

use std::path::PathBuf;

use anyhow::Result;
use ievo_common::{Category, ModelTier};
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "defaults.author",
    "defaults.category",
    "defaults.model",
    "validation.schema",
];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.ievo/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SdkConfig {
    /// Defaults offered by `ievo-sdk new`.
    pub defaults: ScaffoldDefaults,
    /// Validation settings.
    pub validation: ValidationConfig,
}

/// Default answers for scaffolding prompts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScaffoldDefaults {
    pub author: String,
    pub category: Category,
    pub model: ModelTier,
}

impl Default for ScaffoldDefaults {
    fn default() -> Self {
        Self {
            author: default_author(),
            category: Category::default(),
            model: ModelTier::default(),
        }
    }
}

fn default_author() -> String {
    "iEvo".to_string()
}

/// Validation settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ValidationConfig {
    /// JSON schema used for deep manifest validation instead of the bundled one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<PathBuf>,
}

impl SdkConfig {
    /// Apply an already-validated `key = value` assignment.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        match key {
            "defaults.author" => self.defaults.author = value.to_string(),
            "defaults.category" => self.defaults.category = value.parse()?,
            "defaults.model" => self.defaults.model = value.parse()?,
            "validation.schema" => self.validation.schema = Some(PathBuf::from(value)),
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }

    /// Current value of `key` as displayed by `config show`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "defaults.author" => Some(self.defaults.author.clone()),
            "defaults.category" => Some(self.defaults.category.to_string()),
            "defaults.model" => Some(self.defaults.model.to_string()),
            "validation.schema" => Some(
                self.validation
                    .schema
                    .as_ref()
                    .map_or_else(|| "(bundled)".to_string(), |p| p.display().to_string()),
            ),
            _ => None,
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    let invalid = |valid: String| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        valid,
    };
    match key {
        "defaults.category" if value.parse::<Category>().is_err() => Err(invalid(
            Category::ALL.map(Category::as_str).join(", "),
        )
        .into()),
        "defaults.model" if value.parse::<ModelTier>().is_err() => Err(invalid(
            ModelTier::ALL.map(ModelTier::as_str).join(", "),
        )
        .into()),
        "defaults.author" | "validation.schema" if value.trim().is_empty() => {
            Err(invalid("any non-empty string".to_string()).into())
        }
        _ => Ok(()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
