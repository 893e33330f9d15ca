//! Package inspection against real directories.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use ievo_sdk::{AgentSpec, FileCounts};

use crate::helpers::{GOOD_ROLE, minimal_package, write};

#[test]
fn test_info_missing_manifest_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ievo_sdk::info(dir.path()).unwrap_err();
    assert_eq!(err.to_string(), format!("No agent.yaml in {}", dir.path().display()));
}

#[test]
fn test_info_unparsable_manifest_is_an_error() {
    let dir = minimal_package("name: [unclosed", GOOD_ROLE);
    assert!(ievo_sdk::info(dir.path()).is_err());
}

#[test]
fn test_info_partial_manifest_leaves_fields_empty() {
    let dir = minimal_package("name: sketch\n", GOOD_ROLE);
    let info = ievo_sdk::info(dir.path()).unwrap();
    assert_eq!(info.name.as_deref(), Some("sketch"));
    assert_eq!(info.version, None);
    assert_eq!(info.model, None);
    assert!(info.dependencies.is_empty());
    assert_eq!(info.evolutions, None);
    assert_eq!(
        info.files,
        FileCounts {
            total: 2,
            markdown: 1,
            yaml: 1
        }
    );
}

#[test]
fn test_info_on_fresh_scaffold() {
    let out = tempfile::tempdir().unwrap();
    let mut spec = AgentSpec::new("architect");
    spec.fallback = Some(ievo_common::ModelTier::Haiku);
    let dir = ievo_sdk::scaffold(&spec, out.path()).unwrap();

    let info = ievo_sdk::info(&dir).unwrap();

    assert_eq!(info.version.as_deref(), Some("0.1.0"));
    assert_eq!(info.model.as_deref(), Some("sonnet → haiku"));
    assert_eq!(info.evolutions, Some(0));
    // agent.yaml, ROLE.md, EVOLUTION_LOG.md, memory/ + 4 files, skills/, skills/evo/, SKILL.md
    assert_eq!(
        info.files,
        FileCounts {
            total: 11,
            markdown: 7,
            yaml: 1
        }
    );
}

#[test]
fn test_info_counts_evolution_entries() {
    let dir = minimal_package("name: sketch\n", GOOD_ROLE);
    write(
        dir.path(),
        "EVOLUTION_LOG.md",
        "# Evolution Log\n\n## 2025-03-01: Sharper rules\nDone.\n\n## 2025-03-09: New skill\nDone.\n",
    );
    let info = ievo_sdk::info(dir.path()).unwrap();
    assert_eq!(info.evolutions, Some(2));
}
