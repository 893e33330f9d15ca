//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod package;
pub mod scaffold;
pub mod schema;

pub use config::{SdkConfig, validate_config_key, validate_config_value};
pub use error::{AgentError, ConfigError};
pub use package::{ReportBuilder, ValidationResult};
pub use schema::SchemaStrategy;
