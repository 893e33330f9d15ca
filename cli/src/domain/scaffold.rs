//! Agent package scaffolding: pure rendering, no I/O.
//!
//! Each function accepts an [`AgentSpec`] and returns file content. The
//! caller is responsible for creating directories and writing to disk.

#![allow(clippy::format_push_string)]

use anyhow::{Context, Result};
use ievo_common::{AgentManifest, Category, ModelSpec, ModelTier};

use crate::domain::error::AgentError;
use crate::domain::package::{MAX_NAME_LEN, is_valid_name};

/// Version written into every freshly scaffolded `agent.yaml`.
pub const INITIAL_VERSION: &str = "0.1.0";

/// Input for scaffolding a new agent package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSpec {
    pub name: String,
    pub description: String,
    pub display_name: String,
    pub author: String,
    pub category: Category,
    pub model: ModelTier,
    pub fallback: Option<ModelTier>,
    pub specialty: String,
    pub primary_responsibility: String,
    pub primary_output: String,
    /// Agent whose output this one consumes. Empty when there is none.
    pub upstream_agent: String,
    pub dependencies: Vec<String>,
}

impl AgentSpec {
    /// Spec with every optional field at its default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display_name: display_name_for(&name),
            name,
            description: "A custom iEvo agent".to_string(),
            author: "iEvo".to_string(),
            category: Category::default(),
            model: ModelTier::default(),
            fallback: None,
            specialty: "general tasks".to_string(),
            primary_responsibility: "Complete assigned tasks accurately".to_string(),
            primary_output: "Task artifacts as specified".to_string(),
            upstream_agent: String::new(),
            dependencies: Vec::new(),
        }
    }

    /// Rejects names outside the package name charset or over
    /// [`MAX_NAME_LEN`] characters.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidName`] if the name is empty or contains
    /// anything other than lowercase letters, digits and hyphens, and
    /// [`AgentError::NameTooLong`] if it is longer than the limit.
    pub fn check_name(&self) -> Result<()> {
        if !is_valid_name(&self.name) {
            return Err(AgentError::InvalidName(self.name.clone()).into());
        }
        let len = self.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(AgentError::NameTooLong {
                name: self.name.clone(),
                len,
                max: MAX_NAME_LEN,
            }
            .into());
        }
        Ok(())
    }

    /// Each dependency must be a valid package name, listed once.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::InvalidDependency`] or
    /// [`AgentError::DuplicateDependency`] for the first offending entry.
    pub fn check_dependencies(&self) -> Result<()> {
        for (i, dep) in self.dependencies.iter().enumerate() {
            if !is_valid_name(dep) {
                return Err(AgentError::InvalidDependency(dep.clone()).into());
            }
            if self.dependencies[..i].contains(dep) {
                return Err(AgentError::DuplicateDependency(dep.clone()).into());
            }
        }
        Ok(())
    }

    /// Everything the written package must satisfy to validate clean.
    ///
    /// # Errors
    ///
    /// Returns the first [`AgentError`] found: name, then description, then
    /// dependencies.
    pub fn check(&self) -> Result<()> {
        self.check_name()?;
        if self.description.trim().is_empty() {
            return Err(AgentError::EmptyDescription.into());
        }
        self.check_dependencies()
    }
}

/// Human-readable title for a package name: `code-reviewer` → `Code Reviewer`.
///
/// A letter is upper-cased when it follows a non-letter, lower-cased otherwise.
#[must_use]
pub fn display_name_for(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.replace('-', " ").chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
        } else {
            out.push(c);
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

/// Manifest written to `agent.yaml` for `spec`.
#[must_use]
pub fn manifest_for(spec: &AgentSpec) -> AgentManifest {
    AgentManifest {
        name: Some(spec.name.clone()),
        version: Some(INITIAL_VERSION.to_string()),
        description: Some(spec.description.clone()),
        display_name: Some(spec.display_name.clone()),
        author: Some(spec.author.clone()),
        category: Some(spec.category.to_string()),
        model: Some(ModelSpec {
            primary: Some(spec.model.to_string()),
            fallback: spec.fallback.map(|f| f.to_string()),
        }),
        specialty: Some(spec.specialty.clone()),
        dependencies: spec.dependencies.clone(),
    }
}

/// Generate `agent.yaml` content.
///
/// # Errors
///
/// Returns an error if the manifest cannot be serialized.
pub fn render_manifest(spec: &AgentSpec) -> Result<String> {
    let body = serde_yaml::to_string(&manifest_for(spec)).context("serializing agent.yaml")?;
    Ok(format!("# {} agent package\n{body}", spec.display_name))
}

/// Generate `ROLE.md` content.
#[must_use]
pub fn render_role(spec: &AgentSpec) -> String {
    let display = &spec.display_name;
    let specialty = &spec.specialty;

    let mut out = String::new();
    out.push_str(&format!("# {display}\n\n"));
    out.push_str(&format!(
        "You are {display}, an iEvo agent specialising in {specialty}.\n\n"
    ));
    out.push_str(&format!("{}\n\n", spec.description));

    out.push_str("## Responsibilities\n\n");
    out.push_str(&format!("- {}\n", spec.primary_responsibility));
    out.push_str("- Keep the files under memory/ current after every task\n");
    out.push_str("- Record notable changes to this role in EVOLUTION_LOG.md\n\n");

    out.push_str("## Outputs\n\n");
    out.push_str(&format!("- {}\n\n", spec.primary_output));

    if !spec.upstream_agent.is_empty() {
        out.push_str("## Inputs\n\n");
        out.push_str(&format!(
            "- Work handed over by the {} agent\n\n",
            spec.upstream_agent
        ));
    }

    out.push_str("## Rules\n\n");
    out.push_str(&format!(
        "- Stay within {specialty}; hand anything else back to the caller\n"
    ));
    out.push_str("- Ask for clarification instead of guessing at requirements\n");
    out.push_str("- Never drop memory entries without noting why in memory/DECISIONS.md\n");
    out
}

// ── Unit tests ───────────────────────────────────────────────────────────────
