//! `ROLE.md` content heuristics.
//!
//! Pure function over the file text: no I/O, no async.

use super::report::ReportBuilder;
use super::rules::{MIN_ROLE_CHARS, ROLE_FILE};

/// Check the role definition, recording findings in `report`.
///
/// Content shorter than [`MIN_ROLE_CHARS`] after trimming is fatal and ends
/// the role checks; everything else is advisory plus one summary note.
pub fn check_role(content: &str, report: &mut ReportBuilder) {
    let content = content.trim();
    let chars = content.chars().count();

    if chars < MIN_ROLE_CHARS {
        report.error(format!(
            "{ROLE_FILE} is too short (< {MIN_ROLE_CHARS} chars); needs real instructions"
        ));
        return;
    }

    if !content.starts_with('#') {
        report.warn(format!("{ROLE_FILE} should start with a markdown heading"));
    }

    let lower = content.to_lowercase();
    if !lower.contains("responsibilit") && !lower.contains("task") {
        report.warn(format!("{ROLE_FILE} should describe agent responsibilities"));
    }
    if !lower.contains("rule") && !lower.contains("constraint") {
        report.warn(format!("{ROLE_FILE} should include rules or constraints"));
    }

    let sections = content.matches("##").count();
    report.note(format!("{ROLE_FILE}: {chars} chars, {sections} sections"));
}
