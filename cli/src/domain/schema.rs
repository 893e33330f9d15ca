//! Deep manifest schema validation, selected once at startup.
//!
//! `Basic` means only the hand-written field checks run. `Full` additionally
//! validates the whole manifest against a JSON schema. `Full` only exists
//! when the crate is built with the `schema` feature.

use std::fmt;

use crate::domain::package::report::ReportBuilder;

/// Note recorded when no schema validator is available.
pub const BASIC_ONLY_NOTE: &str = "Full schema validator not available; using basic validation only";

/// Note recorded when the manifest satisfies the full schema.
pub const SCHEMA_PASSED_NOTE: &str = "Schema validation passed";

/// Capability-gated schema validation strategy.
pub enum SchemaStrategy {
    /// Field checks only.
    Basic,
    /// Field checks plus a compiled JSON schema.
    #[cfg(feature = "schema")]
    Full(SchemaValidator),
}

impl SchemaStrategy {
    /// Validate a parsed manifest and record exactly one finding: a note on
    /// success or when running basic-only, an error on a schema violation.
    #[cfg_attr(not(feature = "schema"), allow(unused_variables))]
    pub fn check(&self, document: &serde_yaml::Value, report: &mut ReportBuilder) {
        match self {
            SchemaStrategy::Basic => report.note(BASIC_ONLY_NOTE),
            #[cfg(feature = "schema")]
            SchemaStrategy::Full(validator) => {
                let instance = match serde_json::to_value(document) {
                    Ok(v) => v,
                    Err(e) => {
                        report.error(format!("Schema validation: {e}"));
                        return;
                    }
                };
                match validator.first_violation(&instance) {
                    None => report.note(SCHEMA_PASSED_NOTE),
                    Some(msg) => report.error(format!("Schema validation: {msg}")),
                }
            }
        }
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        !matches!(self, SchemaStrategy::Basic)
    }
}

impl fmt::Debug for SchemaStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaStrategy::Basic => f.write_str("Basic"),
            #[cfg(feature = "schema")]
            SchemaStrategy::Full(v) => f.debug_tuple("Full").field(&v.source).finish(),
        }
    }
}

/// A compiled JSON schema plus a label describing where it came from.
#[cfg(feature = "schema")]
pub struct SchemaValidator {
    validator: jsonschema::Validator,
    source: String,
}

#[cfg(feature = "schema")]
impl SchemaValidator {
    /// Compile `schema` (draft 7).
    ///
    /// # Errors
    ///
    /// Returns the compiler's message if the schema itself is invalid.
    pub fn compile(schema: &serde_json::Value, source: impl Into<String>) -> Result<Self, String> {
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft7)
            .build(schema)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            validator,
            source: source.into(),
        })
    }

    /// Where the schema was loaded from (file path or `bundled`).
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Message of the first violation, or `None` if `instance` conforms.
    #[must_use]
    pub fn first_violation(&self, instance: &serde_json::Value) -> Option<String> {
        self.validator
            .iter_errors(instance)
            .next()
            .map(|e| e.to_string())
    }
}
