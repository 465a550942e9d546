//! Reference checker: file paths declared in the manifest must exist.

use std::path::Path;

use serde_yaml_ng::Value;

use crate::diagnostics::{Diagnostic, R001, R002};

/// Verify that files referenced by each plugin exist on disk.
///
/// `base_dir` is the metadata file's containing directory; all references
/// resolve relative to it, never to the working directory. Absent
/// reference fields are skipped; the manifest checker already reported
/// them. A missing OpenAPI document blocks loading (error); a missing
/// logo is cosmetic (warning).
#[must_use]
pub fn check_references(meta: &Value, base_dir: &Path) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    let Some(plugins) = meta.as_sequence() else {
        return diags;
    };

    for (i, plugin) in plugins.iter().enumerate() {
        if let Some(file) = plugin.get("openapi_doc_file").and_then(Value::as_str) {
            let resolved = base_dir.join(file);
            if !resolved.exists() {
                diags.push(
                    Diagnostic::error(
                        R001,
                        format!(
                            "plugin #{i}: OpenAPI document does not exist: {}",
                            resolved.display()
                        ),
                    )
                    .with_field("openapi_doc_file"),
                );
            }
        }

        if let Some(logo) = plugin
            .get("manifest")
            .and_then(|m| m.get("logo_url"))
            .and_then(Value::as_str)
        {
            let resolved = base_dir.join(logo);
            if !resolved.exists() {
                diags.push(
                    Diagnostic::warning(
                        R002,
                        format!("plugin #{i}: logo file does not exist: {}", resolved.display()),
                    )
                    .with_field("logo_url"),
                );
            }
        }
    }

    diags
}
