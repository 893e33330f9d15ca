//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! `domain` is pure, `application` talks to the world only through ports,
//! `infra` never renders, and `commands` stay thin.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

/// Read a file and strip comment lines to avoid false positives.
fn read_non_comment_lines(path: &Path) -> Vec<String> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    content
        .lines()
        .filter(|l| {
            let trimmed = l.trim();
            !trimmed.starts_with("//") && !trimmed.starts_with("/*") && !trimmed.starts_with('*')
        })
        .map(String::from)
        .collect()
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.starts_with("#[cfg(") && trimmed.contains("test") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Count non-test, non-comment, non-empty lines in a file.
fn count_non_test_lines(content: &str) -> usize {
    let mut tracker = CfgTestTracker::new();
    content
        .lines()
        .filter(|line| {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            !in_test && !trimmed.is_empty() && !trimmed.starts_with("//")
        })
        .count()
}

fn layer_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(name)
}

fn rel(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Lines outside `#[cfg(test)]` blocks in `dir` containing any of `needles`.
fn non_test_lines_containing(dir: &Path, needles: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(dir) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let mut tracker = CfgTestTracker::new();
        for (i, line) in content.lines().enumerate() {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            if in_test || trimmed.starts_with("//") {
                continue;
            }
            if needles.iter().any(|n| line.contains(n)) {
                violations.push(format!("{}:{}: {line}", rel(&file), i + 1));
            }
        }
    }
    violations
}

// ── Domain purity ─────────────────────────────────────────────────────────────

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let violations = non_test_lines_containing(
        &layer_dir("domain"),
        &[
            "std::fs",
            "std::process",
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "println!",
            "eprintln!",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay free of I/O and outer-layer imports:\n{}",
        violations.join("\n")
    );
}

// ── Application boundaries ────────────────────────────────────────────────────

#[test]
fn application_has_no_infra_or_output_imports() {
    let mut violations: Vec<String> = Vec::new();

    for file in collect_rs_files(&layer_dir("application")) {
        let lines = read_non_comment_lines(&file);
        for (i, line) in lines.iter().enumerate() {
            if line.contains("crate::infra::") || line.contains("crate::output::") {
                violations.push(format!("{}:{}: forbidden import: {line}", rel(&file), i + 1));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "application/ must not import from infra/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_services_do_not_touch_the_filesystem_directly() {
    let violations = non_test_lines_containing(
        &layer_dir("application"),
        &["std::fs::", "walkdir::", "println!", "eprintln!"],
    );
    assert!(
        violations.is_empty(),
        "application/ must route I/O through ports:\n{}",
        violations.join("\n")
    );
}

// ── Infra boundaries ──────────────────────────────────────────────────────────

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let mut violations: Vec<String> = Vec::new();

    for file in collect_rs_files(&layer_dir("infra")) {
        let lines = read_non_comment_lines(&file);
        for (i, line) in lines.iter().enumerate() {
            if line.contains("crate::commands") || line.contains("crate::output") {
                violations.push(format!(
                    "{}:{}: forbidden import in infra/: {line}",
                    rel(&file),
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let violations = non_test_lines_containing(&layer_dir("infra"), &["println!", "eprintln!"]);
    assert!(
        violations.is_empty(),
        "infra/ must not use println!/eprintln! outside #[cfg(test)]:\n{}",
        violations.join("\n")
    );
}

// ── Command handlers ──────────────────────────────────────────────────────────

#[test]
fn no_json_bool_parameters_in_commands() {
    let mut violations: Vec<String> = Vec::new();

    for file in collect_rs_files(&layer_dir("commands")) {
        let lines = read_non_comment_lines(&file);
        for (i, line) in lines.iter().enumerate() {
            if line.contains("json: bool") {
                violations.push(format!("{}:{}: {line}", rel(&file), i + 1));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "commands/ must ask app.is_json() instead of taking json flags:\n{}",
        violations.join("\n")
    );
}

#[test]
fn commands_use_app_prompts() {
    let violations = non_test_lines_containing(
        &layer_dir("commands"),
        &["dialoguer::", "io::stdin()"],
    );
    assert!(
        violations.is_empty(),
        "commands/ must prompt through app.prompt()/app.select():\n{}",
        violations.join("\n")
    );
}

/// Each file in `commands/` must be ≤125 lines of non-test code.
#[test]
fn command_handlers_are_reasonably_sized() {
    let mut violations: Vec<String> = Vec::new();

    for file in collect_rs_files(&layer_dir("commands")) {
        let Ok(content) = std::fs::read_to_string(&file) else {
            continue;
        };
        let line_count = count_non_test_lines(&content);
        if line_count > 125 {
            violations.push(format!("{}: {line_count} non-test lines (limit: 125)", rel(&file)));
        }
    }

    assert!(
        violations.is_empty(),
        "Command handler files exceed 125-line limit: extract logic to application services:\n{}",
        violations.join("\n")
    );
}
