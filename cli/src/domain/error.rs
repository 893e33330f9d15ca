//! Typed domain error enums.
//!
//! All error types implement `thiserror::Error` and convert to
//! `anyhow::Error` via the `?` operator.

use thiserror::Error;

// ── Agent errors ──────────────────────────────────────────────────────────────

/// Errors related to agent packages.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Invalid agent name '{0}': use lowercase letters, digits and hyphens only")]
    InvalidName(String),

    #[error("Agent name '{name}' is too long ({len} chars, max {max})")]
    NameTooLong { name: String, len: usize, max: usize },

    #[error("Agent description must not be empty")]
    EmptyDescription,

    #[error("Invalid dependency '{0}': use lowercase letters, digits and hyphens only")]
    InvalidDependency(String),

    #[error("Dependency '{0}' is listed more than once")]
    DuplicateDependency(String),

    #[error("No agent.yaml in {0}")]
    ManifestNotFound(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\nValid values: {valid}")]
    InvalidValue {
        key: String,
        value: String,
        valid: String,
    },
}
