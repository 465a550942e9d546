//! Document loading: one YAML file in, one parsed tree out.
//!
//! Syntax and I/O failures are isolated here; the pipeline maps them onto
//! load diagnostics so the other document's checks can still proceed.

use std::path::Path;

use serde_yaml_ng::Value;

use crate::errors::{PluglintError, Result};

/// Read and parse a structured-text document into a YAML value tree.
///
/// A document whose root parses to YAML null (an empty file) is rejected
/// with [`PluglintError::EmptyDocument`] so that downstream checkers only
/// ever see populated trees.
pub fn load_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(PluglintError::EmptyDocument);
    }
    let doc: Value = serde_yaml_ng::from_str(&content)?;
    // Comments-only documents also parse to a null root.
    if doc.is_null() {
        return Err(PluglintError::EmptyDocument);
    }
    Ok(doc)
}

/// Render a scalar node for use in diagnostic messages.
///
/// Non-scalar nodes (mappings, sequences) have no useful short rendering.
pub(crate) fn scalar_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::from("<non-scalar>"),
    }
}
