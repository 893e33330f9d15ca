//! Application service: scaffold a new agent package.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::application::ports::{PackageFs, ProgressReporter, TemplateAssets};
use crate::domain::package::{MANIFEST_FILE, ROLE_FILE};
use crate::domain::scaffold::{AgentSpec, render_manifest, render_role};

/// Generate a complete agent package for `spec` inside `output_dir`.
///
/// Creates `<output_dir>/<name>/`, renders `agent.yaml` and `ROLE.md`, then
/// copies the static templates. Template directories that already exist in
/// the package are replaced, not merged.
///
/// Returns the path of the package directory.
///
/// # Errors
///
/// Returns an error if `spec` would produce an invalid package or any
/// filesystem operation fails. Nothing is written when `spec` is rejected.
pub fn scaffold_agent(
    fs: &impl PackageFs,
    assets: &impl TemplateAssets,
    reporter: &impl ProgressReporter,
    spec: &AgentSpec,
    output_dir: &Path,
) -> Result<PathBuf> {
    spec.check()?;

    let agent_dir = output_dir.join(&spec.name);
    reporter.step(&format!("creating {}...", agent_dir.display()));
    fs.create_dir_all(&agent_dir)?;

    let manifest = render_manifest(spec)?;
    fs.write(&agent_dir.join(MANIFEST_FILE), manifest.as_bytes())
        .with_context(|| format!("writing {MANIFEST_FILE}"))?;
    fs.write(&agent_dir.join(ROLE_FILE), render_role(spec).as_bytes())
        .with_context(|| format!("writing {ROLE_FILE}"))?;

    reporter.step("copying templates...");
    for dir in assets.directories() {
        let target = agent_dir.join(dir);
        if fs.exists(&target) {
            tracing::debug!(dir = %target.display(), "replacing existing template directory");
            fs.remove_dir_all(&target)?;
        }
    }
    for file in assets.files() {
        let target = agent_dir.join(file.path);
        if let Some(parent) = target.parent() {
            fs.create_dir_all(parent)?;
        }
        fs.write(&target, file.contents)
            .with_context(|| format!("writing {}", file.path))?;
    }

    reporter.success(&format!("agent '{}' created", spec.name));
    Ok(agent_dir)
}
