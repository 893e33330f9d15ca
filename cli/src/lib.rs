//! iEvo SDK library: agent package validation, scaffolding and inspection.
//!
//! The binary is a thin clap front end over these modules; everything is
//! exposed for integration testing and embedding.

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod output;

use std::path::Path;

use anyhow::Result;

pub use application::services::package_info::{FileCounts, PackageInfo};
pub use domain::package::ValidationResult;
pub use domain::scaffold::AgentSpec;

/// Validate the agent package at `path` against the bundled schema.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures; package problems are
/// reported in the returned [`ValidationResult`].
pub fn validate(path: impl AsRef<Path>) -> Result<ValidationResult> {
    let strategy = infra::schema::load_strategy(None);
    application::services::package_validate::validate_package(
        &infra::fs::LocalFs,
        &strategy,
        path.as_ref(),
    )
}

/// Scaffold a package for `spec` under `output_dir` using the embedded
/// templates. Returns the package directory.
///
/// # Errors
///
/// Returns an error if the name is invalid or the package cannot be written.
pub fn scaffold(spec: &AgentSpec, output_dir: impl AsRef<Path>) -> Result<std::path::PathBuf> {
    application::services::scaffold::scaffold_agent(
        &infra::fs::LocalFs,
        &infra::assets::EmbeddedTemplates,
        &output::reporter::SilentReporter,
        spec,
        output_dir.as_ref(),
    )
}

/// Describe the package at `path`.
///
/// # Errors
///
/// Returns an error if `agent.yaml` is missing or unparsable.
pub fn info(path: impl AsRef<Path>) -> Result<PackageInfo> {
    application::services::package_info::package_info(&infra::fs::LocalFs, path.as_ref())
}
