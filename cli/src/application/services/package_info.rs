//! Application service: describe an existing agent package.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ievo_common::AgentManifest;
use serde::Serialize;

use crate::application::ports::PackageFs;
use crate::domain::error::AgentError;
use crate::domain::package::{EVOLUTION_LOG_FILE, MANIFEST_FILE};

/// Summary of a package for `ievo-sdk info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    /// `primary` or `primary → fallback`.
    pub model: Option<String>,
    pub dependencies: Vec<String>,
    pub files: FileCounts,
    /// Number of entries in `EVOLUTION_LOG.md`; `None` when the log is absent.
    pub evolutions: Option<usize>,
}

/// File inventory below the package root.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FileCounts {
    /// Every file and directory.
    pub total: usize,
    pub markdown: usize,
    pub yaml: usize,
}

/// Read the manifest and inventory the package at `path`.
///
/// # Errors
///
/// Returns an error if `agent.yaml` is missing, unreadable or unparsable, or
/// if the directory tree cannot be walked.
pub fn package_info(fs: &impl PackageFs, path: &Path) -> Result<PackageInfo> {
    let manifest_path = path.join(MANIFEST_FILE);
    if !fs.exists(&manifest_path) {
        return Err(AgentError::ManifestNotFound(path.display().to_string()).into());
    }
    let content = fs.read_to_string(&manifest_path)?;
    let manifest: AgentManifest = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse {}", manifest_path.display()))?;

    let files = count_files(&fs.walk(path)?);

    let log_path = path.join(EVOLUTION_LOG_FILE);
    let evolutions = if fs.exists(&log_path) {
        Some(count_evolutions(&fs.read_to_string(&log_path)?))
    } else {
        None
    };

    Ok(PackageInfo {
        model: manifest.model_display(),
        name: manifest.name,
        version: manifest.version,
        description: manifest.description,
        category: manifest.category,
        author: manifest.author,
        dependencies: manifest.dependencies,
        files,
        evolutions,
    })
}

/// Evolution entries are level-two headings at the start of a line.
#[must_use]
pub fn count_evolutions(log: &str) -> usize {
    log.matches("\n## ").count()
}

fn count_files(entries: &[PathBuf]) -> FileCounts {
    FileCounts {
        total: entries.len(),
        markdown: entries.iter().filter(|p| extension(p) == Some("md")).count(),
        yaml: entries
            .iter()
            .filter(|p| matches!(extension(p), Some("yaml" | "yml")))
            .count(),
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}
