//! Accumulated validation results for a single run.

use crate::diagnostics::Diagnostic;

/// Append-only collection of findings from one validation run.
///
/// The report is owned by the pipeline and filled in checker order. The
/// authoritative verdict is [`Report::is_success`]: zero accumulated
/// errors, regardless of how many warnings were collected and regardless
/// of anything an individual checker might have signalled.
#[derive(Debug, Default)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}

impl Report {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Append all diagnostics from a checker run.
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    /// All diagnostics, in the order they were collected.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// All error diagnostics, in collection order.
    #[must_use]
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error()).collect()
    }

    /// All warning diagnostics, in collection order.
    #[must_use]
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_warning()).collect()
    }

    /// Error messages as rendered strings, in collection order.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.errors().iter().map(|d| d.to_string()).collect()
    }

    /// Warning messages as rendered strings, in collection order.
    #[must_use]
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings().iter().map(|d| d.to_string()).collect()
    }

    /// Overall verdict: `true` iff no errors were collected.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{Diagnostic, A004, A008, M006};

    #[test]
    fn empty_report_is_success() {
        let report = Report::new();
        assert!(report.is_success());
        assert!(report.errors().is_empty());
        assert!(report.warnings().is_empty());
    }

    #[test]
    fn warnings_do_not_fail_the_run() {
        let mut report = Report::new();
        report.push(Diagnostic::warning(A004, "OpenAPI paths is empty"));
        report.push(Diagnostic::warning(M006, "no tools defined"));
        assert!(report.is_success());
        assert_eq!(report.warnings().len(), 2);
    }

    #[test]
    fn single_error_fails_the_run() {
        let mut report = Report::new();
        report.push(Diagnostic::warning(A004, "OpenAPI paths is empty"));
        report.push(Diagnostic::error(A008, "missing servers"));
        assert!(!report.is_success());
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.warnings().len(), 1);
    }

    #[test]
    fn messages_preserve_collection_order() {
        let mut report = Report::new();
        report.push(Diagnostic::error(A008, "first"));
        report.extend([Diagnostic::error(A008, "second")]);
        assert_eq!(report.error_messages(), vec!["first", "second"]);
    }

    #[test]
    fn warning_messages_carry_prefix() {
        let mut report = Report::new();
        report.push(Diagnostic::warning(M006, "no tools defined"));
        assert_eq!(report.warning_messages(), vec!["warning: no tools defined"]);
    }
}
