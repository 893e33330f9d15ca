//! Static rule definitions for agent packages.
//!
//! Pure data and predicates: no I/O, no async.

use ievo_common::ModelTier;
use regex::Regex;
use std::sync::LazyLock;

/// Manifest file name, relative to the package root.
pub const MANIFEST_FILE: &str = "agent.yaml";

/// Role definition file name, relative to the package root.
pub const ROLE_FILE: &str = "ROLE.md";

/// Evolution skill that lets an agent improve itself.
pub const EVO_SKILL_FILE: &str = "skills/evo/SKILL.md";

/// Evolution log written by the EVO skill.
pub const EVOLUTION_LOG_FILE: &str = "EVOLUTION_LOG.md";

/// Files whose absence makes a package invalid, checked in this order.
pub const REQUIRED_FILES: &[&str] = &[MANIFEST_FILE, ROLE_FILE];

/// Files whose absence only produces a warning, checked in this order.
pub const RECOMMENDED_FILES: &[&str] = &[
    EVOLUTION_LOG_FILE,
    "memory/CONTEXT.md",
    "memory/DECISIONS.md",
    "memory/VOCABULARY.md",
    "memory/HISTORY.md",
    EVO_SKILL_FILE,
];

/// Top-level manifest keys that must be present.
pub const REQUIRED_FIELDS: &[&str] = &["name", "version", "description", "model"];

/// Longest package name the bundled schema accepts.
pub const MAX_NAME_LEN: usize = 64;

/// Trimmed `ROLE.md` shorter than this (in characters) carries no real guidance.
pub const MIN_ROLE_CHARS: usize = 50;

/// Package names: lowercase ASCII letters, digits and hyphens.
pub static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: compile-time constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9-]+$").expect("valid regex")
});

/// Strict `X.Y.Z` versions with all-digit components.
pub static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").expect("valid regex")
});

/// Returns `true` if `name` uses only lowercase alphanumerics and hyphens.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Returns `true` if `version` is three dot-separated digit runs.
#[must_use]
pub fn is_strict_version(version: &str) -> bool {
    VERSION_RE.is_match(version)
}

/// Returns `true` if `tier` names a supported model tier.
#[must_use]
pub fn is_model_tier(tier: &str) -> bool {
    tier.parse::<ModelTier>().is_ok()
}
