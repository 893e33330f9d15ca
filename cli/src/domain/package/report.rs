//! Finding accumulation for a single validation run.
//!
//! [`ReportBuilder`] is append-only while checks run; [`ReportBuilder::finish`]
//! freezes it into a [`ValidationResult`] whose validity is derived from the
//! error list.

use serde::Serialize;

/// Outcome of validating one agent package.
///
/// Fields are private: a result can only be produced by [`ReportBuilder`],
/// so `valid` always equals `errors().is_empty()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
    info: Vec<String>,
}

impl ValidationResult {
    /// `true` iff no fatal finding was recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Fatal findings, in check order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Advisory findings, in check order.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Informational notes, in check order.
    #[must_use]
    pub fn info(&self) -> &[String] {
        &self.info
    }
}

/// Append-only accumulator used by the validation engine.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    errors: Vec<String>,
    warnings: Vec<String>,
    info: Vec<String>,
}

impl ReportBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fatal finding. The package is invalid from here on.
    pub fn error(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(finding = "error", %msg);
        self.errors.push(msg);
    }

    /// Record an advisory finding.
    pub fn warn(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(finding = "warning", %msg);
        self.warnings.push(msg);
    }

    /// Record an informational note.
    pub fn note(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        tracing::debug!(finding = "info", %msg);
        self.info.push(msg);
    }

    /// `true` while no error has been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            info: self.info,
        }
    }
}
