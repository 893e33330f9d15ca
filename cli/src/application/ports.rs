//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`: never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::domain::SdkConfig;

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts the filesystem operations needed to read, write and inventory
/// agent packages.
pub trait PackageFs {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;
    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;
    /// Read a UTF-8 text file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    fn read_to_string(&self, path: &Path) -> Result<String>;
    /// Write `content` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
    /// Create `path` and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Recursively remove the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> Result<()>;
    /// Every file and directory below `root`, excluding `root` itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree cannot be traversed.
    fn walk(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

// ── Template Port ─────────────────────────────────────────────────────────────

/// A static file copied verbatim into every new package.
#[derive(Debug, Clone, Copy)]
pub struct TemplateFile {
    /// Path relative to the package root, `/`-separated.
    pub path: &'static str,
    pub contents: &'static [u8],
}

/// Abstracts access to the static package templates.
pub trait TemplateAssets {
    /// Top-level template directories that replace any existing copy.
    fn directories(&self) -> Vec<&'static str>;
    /// All template files.
    fn files(&self) -> Vec<TemplateFile>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading and saving the user configuration file.
pub trait ConfigStore {
    /// Load configuration, returning defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or parsed.
    fn load(&self) -> Result<SdkConfig>;
    /// Persist configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    fn save(&self, config: &SdkConfig) -> Result<()>;
    /// Location of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
