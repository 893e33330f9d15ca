//! `agent.yaml` checks: parse, required fields, model tier, version and name
//! format, then the deep schema pass.
//!
//! Pure function over the manifest text: no I/O, no async.

use ievo_common::ModelTier;
use serde_yaml::Value;

use super::report::ReportBuilder;
use super::rules::{MANIFEST_FILE, REQUIRED_FIELDS, is_model_tier, is_strict_version, is_valid_name};
use crate::domain::schema::SchemaStrategy;

/// Run every manifest check against `content`, recording findings in `report`.
///
/// A parse failure or a non-mapping document records one error and stops;
/// everything after that accumulates.
pub fn check_manifest(content: &str, schema: &SchemaStrategy, report: &mut ReportBuilder) {
    let document: Value = match serde_yaml::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            report.error(format!("Invalid YAML in {MANIFEST_FILE}: {e}"));
            return;
        }
    };

    let Some(map) = document.as_mapping() else {
        report.error(format!("{MANIFEST_FILE} must be a YAML mapping"));
        return;
    };

    for field in REQUIRED_FIELDS {
        if !map.contains_key(*field) {
            report.error(format!("{MANIFEST_FILE} missing required field: {field}"));
        }
    }

    if let Some(model) = map.get("model") {
        match model.as_mapping() {
            Some(model) => {
                let primary = model.get("primary").map(render).unwrap_or_default();
                if !is_model_tier(&primary) {
                    report.error(format!(
                        "Invalid model tier: {primary} (must be {})",
                        ModelTier::choices()
                    ));
                }
            }
            None => report.error("model must be a mapping with 'primary' key"),
        }
    }

    if let Some(version) = map.get("version").filter(|v| is_truthy(v)) {
        let rendered = render(version);
        if !version.is_string() || !is_strict_version(&rendered) {
            report.error(format!("Invalid version format: {rendered} (must be X.Y.Z)"));
        }
    }

    if let Some(name) = map.get("name").filter(|v| is_truthy(v)) {
        let rendered = render(name);
        if !name.is_string() || !is_valid_name(&rendered) {
            report.error(format!(
                "Invalid name: {rendered} (lowercase alphanumeric and hyphens only)"
            ));
        }
    }

    schema.check(&document, report);
}

/// YAML truthiness: null, `false`, zero, and empty strings or collections
/// count as "not set".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(s) => !s.is_empty(),
        Value::Mapping(m) => !m.is_empty(),
        Value::Tagged(t) => is_truthy(&t.value),
    }
}

/// Render a YAML value for an error message.
fn render(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
