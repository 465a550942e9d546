//! The validation pipeline: load both documents, run every checker in
//! order, and aggregate all findings into a single report.

use std::path::Path;

use serde_yaml_ng::Value;

use crate::diagnostics::{Diagnostic, L001, L002, L003, L004};
use crate::errors::PluglintError;
use crate::report::Report;
use crate::{consistency, loader, meta, openapi, references};

/// Map a document load failure onto its load diagnostic.
fn load_failure(path: &Path, err: &PluglintError) -> Diagnostic {
    match err {
        PluglintError::Yaml(e) => Diagnostic::error(
            L001,
            format!("YAML syntax error in {}: {e}", path.display()),
        ),
        PluglintError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Diagnostic::error(L002, format!("file does not exist: {}", path.display()))
        }
        PluglintError::Io(e) => Diagnostic::error(
            L003,
            format!("cannot read file {}: {e}", path.display()),
        ),
        PluglintError::EmptyDocument => {
            Diagnostic::error(L004, format!("document is empty: {}", path.display()))
        }
    }
}

/// Load one document, recording a load diagnostic on failure.
fn load_into(path: &Path, report: &mut Report) -> Option<Value> {
    match loader::load_document(path) {
        Ok(doc) => Some(doc),
        Err(e) => {
            report.push(load_failure(path, &e));
            None
        }
    }
}

/// Validate a plugin package: an OpenAPI contract plus a metadata manifest.
///
/// Checkers run strictly in order (loader, specification checker,
/// manifest checker, reference checker, consistency checker) and a
/// failed load halts only the checks that need that document's tree; the
/// other document's checks still proceed. All findings accumulate; the
/// verdict is [`Report::is_success`] (zero errors), never any individual
/// checker's output.
#[must_use]
pub fn validate_package(openapi_path: &Path, meta_path: &Path) -> Report {
    let mut report = Report::new();

    let openapi_doc = load_into(openapi_path, &mut report);
    let meta_doc = load_into(meta_path, &mut report);

    if let Some(doc) = &openapi_doc {
        let source = openapi_path.display().to_string();
        report.extend(openapi::check_openapi(doc, &source));
    }

    if let Some(doc) = &meta_doc {
        let source = meta_path.display().to_string();
        report.extend(meta::check_meta(doc, &source));

        // References resolve against the metadata file's directory.
        let base_dir = meta_path.parent().unwrap_or_else(|| Path::new("."));
        report.extend(references::check_references(doc, base_dir));
    }

    // Cross-checking needs both trees; skipped entirely otherwise.
    if let (Some(openapi_doc), Some(meta_doc)) = (&openapi_doc, &meta_doc) {
        report.extend(consistency::check_consistency(openapi_doc, meta_doc));
    }

    report
}
