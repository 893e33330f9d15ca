//! Agent package rules: pure functions, no I/O, no async.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`. The validation engine
//! in `crate::application::services::package_validate` reads the files and
//! feeds their contents through these checks.

pub mod manifest;
pub mod report;
pub mod role;
pub mod rules;

pub use manifest::check_manifest;
pub use report::{ReportBuilder, ValidationResult};
pub use role::check_role;
pub use rules::{
    EVO_SKILL_FILE, EVOLUTION_LOG_FILE, MANIFEST_FILE, MAX_NAME_LEN, RECOMMENDED_FILES, REQUIRED_FILES, ROLE_FILE,
    is_valid_name,
};
