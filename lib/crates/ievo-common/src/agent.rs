// lib/crates/ievo-common/src/agent.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Agent manifest (`agent.yaml`).
///
/// Every field is optional so that partially written manifests can still be
/// displayed; enforcing presence is the validator's job, not the parser's.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl AgentManifest {
    /// Human-readable model routing, e.g. `"opus → sonnet"`.
    ///
    /// Returns `None` when the manifest has no `model` section.
    #[must_use]
    pub fn model_display(&self) -> Option<String> {
        let model = self.model.as_ref()?;
        let primary = model.primary.as_deref().unwrap_or("?");
        match model.fallback.as_deref() {
            Some(fallback) if !fallback.is_empty() => Some(format!("{primary} → {fallback}")),
            _ => Some(primary.to_string()),
        }
    }
}

/// Model section of an agent manifest.
///
/// Tiers are kept as plain strings so an unknown tier still round-trips;
/// use [`ModelTier::from_str`] to check one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

/// Error returned when a string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} '{value}' (must be {valid})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub valid: String,
}

/// Model tier an agent runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Opus,
    #[default]
    Sonnet,
    Haiku,
}

impl ModelTier {
    pub const ALL: [ModelTier; 3] = [ModelTier::Opus, ModelTier::Sonnet, ModelTier::Haiku];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModelTier::Opus => "opus",
            ModelTier::Sonnet => "sonnet",
            ModelTier::Haiku => "haiku",
        }
    }

    /// Every tier name joined with `|`, e.g. `"opus|sonnet|haiku"`.
    #[must_use]
    pub fn choices() -> String {
        ModelTier::ALL.map(ModelTier::as_str).join("|")
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelTier {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "model tier",
                value: s.to_string(),
                valid: ModelTier::choices(),
            })
    }
}

/// Catalogue category an agent is published under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Core,
    Dev,
    Ops,
    Data,
    Security,
    #[default]
    Community,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Core,
        Category::Dev,
        Category::Ops,
        Category::Data,
        Category::Security,
        Category::Community,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Core => "core",
            Category::Dev => "dev",
            Category::Ops => "ops",
            Category::Data => "data",
            Category::Security => "security",
            Category::Community => "community",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "category",
                value: s.to_string(),
                valid: "core|dev|ops|data|security|community".to_string(),
            })
    }
}
