//! Shared fixtures: agent package trees written into temp directories.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Manifest that passes every field check and the bundled schema.
pub const GOOD_MANIFEST: &str = "\
name: code-reviewer
version: 1.0.0
description: Reviews pull requests
category: dev
author: iEvo
model:
  primary: opus
  fallback: sonnet
dependencies: []
";

/// Role definition with a heading, responsibilities and rules.
pub const GOOD_ROLE: &str = "\
# Code Reviewer

You review pull requests for correctness and style.

## Responsibilities
- Read every changed file
- Point out bugs with line references

## Rules
- Never approve code you have not read
";

/// Write `content` to `root/rel`, creating parent directories.
pub fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(&path, content).expect("write fixture file");
}

/// Temp directory holding only `agent.yaml` and `ROLE.md`.
pub fn minimal_package(manifest: &str, role: &str) -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    write(dir.path(), "agent.yaml", manifest);
    write(dir.path(), "ROLE.md", role);
    dir
}

/// Temp directory holding a package with every recommended file.
pub fn complete_package() -> TempDir {
    let dir = minimal_package(GOOD_MANIFEST, GOOD_ROLE);
    write(dir.path(), "EVOLUTION_LOG.md", "# Evolution Log\n");
    for name in ["CONTEXT", "DECISIONS", "VOCABULARY", "HISTORY"] {
        write(dir.path(), &format!("memory/{name}.md"), &format!("# {name}\n"));
    }
    write(dir.path(), "skills/evo/SKILL.md", "# EVO\n");
    dir
}

/// Manifest text with `field` replaced by `value` (raw YAML).
pub fn manifest_with(field: &str, value: &str) -> String {
    GOOD_MANIFEST
        .lines()
        .map(|line| {
            if line.starts_with(&format!("{field}:")) {
                format!("{field}: {value}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Manifest text without the top-level `field` (and its nested lines).
pub fn manifest_without(field: &str) -> String {
    let mut out = Vec::new();
    let mut skipping = false;
    for line in GOOD_MANIFEST.lines() {
        if line.starts_with(&format!("{field}:")) {
            skipping = true;
            continue;
        }
        if skipping && line.starts_with("  ") {
            continue;
        }
        skipping = false;
        out.push(line);
    }
    out.join("\n")
}

pub fn path_of(dir: &TempDir) -> PathBuf {
    dir.path().to_path_buf()
}
