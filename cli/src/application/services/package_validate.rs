//! Application service: agent package validation.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through the injected [`PackageFs`] port; the checks
//! themselves are pure functions in `crate::domain::package`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::PackageFs;
use crate::domain::package::{
    EVO_SKILL_FILE, MANIFEST_FILE, RECOMMENDED_FILES, REQUIRED_FILES, ROLE_FILE, ReportBuilder,
    ValidationResult, check_manifest, check_role,
};
use crate::domain::schema::SchemaStrategy;

/// Validate the agent package rooted at `path`.
///
/// Checks run in a fixed order and their findings keep that order:
/// 1. `path` must be a directory, otherwise nothing else is inspected.
/// 2. Required files must exist, otherwise nothing else is inspected.
/// 3. `agent.yaml` structure, then the deep schema strategy.
/// 4. `ROLE.md` content heuristics.
/// 5. Recommended files.
/// 6. The self-evolution skill.
///
/// Never writes to the package directory.
///
/// # Errors
///
/// Returns an error only for unexpected I/O failures (a required file that
/// exists but cannot be read as UTF-8 text). Package problems are findings
/// in the returned [`ValidationResult`], never errors.
pub fn validate_package(
    fs: &impl PackageFs,
    schema: &SchemaStrategy,
    path: &Path,
) -> Result<ValidationResult> {
    let mut report = ReportBuilder::new();
    tracing::debug!(path = %path.display(), "validating agent package");

    if !fs.is_dir(path) {
        report.error(format!("Not a directory: {}", path.display()));
        return Ok(report.finish());
    }

    for file in REQUIRED_FILES {
        if !fs.exists(&path.join(file)) {
            report.error(format!("Missing required file: {file}"));
        }
    }
    if !report.is_valid() {
        tracing::debug!("required files missing; skipping content checks");
        return Ok(report.finish());
    }

    let manifest_path = path.join(MANIFEST_FILE);
    let manifest = fs
        .read_to_string(&manifest_path)
        .with_context(|| format!("reading {}", manifest_path.display()))?;
    tracing::debug!(schema = ?schema, "checking {MANIFEST_FILE}");
    check_manifest(&manifest, schema, &mut report);

    let role_path = path.join(ROLE_FILE);
    let role = fs
        .read_to_string(&role_path)
        .with_context(|| format!("reading {}", role_path.display()))?;
    tracing::debug!("checking {ROLE_FILE}");
    check_role(&role, &mut report);

    for file in RECOMMENDED_FILES {
        if !fs.exists(&path.join(file)) {
            report.warn(format!("Missing recommended file: {file}"));
        }
    }

    if !fs.exists(&path.join(EVO_SKILL_FILE)) {
        report.warn(format!(
            "Missing EVO skill ({EVO_SKILL_FILE}); agent won't self-evolve"
        ));
    }

    Ok(report.finish())
}
