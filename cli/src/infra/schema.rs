//! Schema strategy loading.
//!
//! Resolves which JSON schema (if any) backs deep manifest validation and
//! compiles it once. A broken explicit schema degrades to basic validation
//! with a warning in the log; it never becomes a package finding.

use std::path::{Path, PathBuf};

use crate::domain::schema::SchemaStrategy;

/// Environment variable naming a schema file.
pub const SCHEMA_ENV: &str = "IEVO_SCHEMA";

/// Schema shipped with the binary.
#[cfg(feature = "schema")]
const BUNDLED_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/schemas/agent.schema.json"
));

/// Pick the schema path: `flag`, then `IEVO_SCHEMA`, then `configured`.
///
/// `None` means the bundled schema.
#[must_use]
pub fn resolve_schema_path(flag: Option<&Path>, configured: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| {
            std::env::var_os(SCHEMA_ENV)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| configured.map(Path::to_path_buf))
}

/// Build the schema strategy from `path`, or from the bundled schema when
/// `path` is `None`.
#[must_use]
#[cfg(feature = "schema")]
pub fn load_strategy(path: Option<&Path>) -> SchemaStrategy {
    use crate::domain::schema::SchemaValidator;

    let loaded = match path {
        None => serde_json::from_str(BUNDLED_SCHEMA)
            .map_err(|e| e.to_string())
            .and_then(|schema| SchemaValidator::compile(&schema, "bundled")),
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|text| serde_json::from_str(&text).map_err(|e| e.to_string()))
            .and_then(|schema| SchemaValidator::compile(&schema, path.display().to_string())),
    };

    match loaded {
        Ok(validator) => {
            tracing::debug!(source = validator.source(), "schema validator ready");
            SchemaStrategy::Full(validator)
        }
        Err(e) => {
            let source = path.map_or_else(|| "bundled".to_string(), |p| p.display().to_string());
            tracing::warn!(%source, error = %e, "cannot load schema; using basic validation");
            SchemaStrategy::Basic
        }
    }
}

/// Without the `schema` feature only basic validation exists.
#[must_use]
#[cfg(not(feature = "schema"))]
pub fn load_strategy(path: Option<&Path>) -> SchemaStrategy {
    if let Some(path) = path {
        tracing::debug!(path = %path.display(), "built without schema support; ignoring schema");
    }
    SchemaStrategy::Basic
}
