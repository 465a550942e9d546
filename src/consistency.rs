//! Consistency checker: cross-reference tools against declared operations.

use std::collections::HashSet;

use serde_yaml_ng::Value;

use crate::diagnostics::{Diagnostic, X001};
use crate::meta::TOOL_METHODS;

/// Collect the (lower-cased method, path) pairs declared in the OpenAPI
/// paths map.
///
/// Restricted to the tool-method set: an OPTIONS or HEAD operation is
/// never part of this universe even though the specification checker
/// scans it, so a tool could not match one anyway (it would already have
/// been rejected as an unsupported tool method).
fn operation_keys(openapi: &Value) -> HashSet<(String, String)> {
    let mut keys = HashSet::new();
    let Some(paths) = openapi.get("paths").and_then(Value::as_mapping) else {
        return keys;
    };
    for (path_key, methods) in paths {
        let Some(path) = path_key.as_str() else {
            continue;
        };
        let Some(methods) = methods.as_mapping() else {
            continue;
        };
        for (method_key, _operation) in methods {
            let Some(method) = method_key.as_str() else {
                continue;
            };
            let lowered = method.to_lowercase();
            if TOOL_METHODS.contains(&lowered.as_str()) {
                keys.insert((lowered, path.to_string()));
            }
        }
    }
    keys
}

/// Flag tools declared in the metadata that have no matching operation in
/// the API-surface document.
///
/// Advisory only: a tool may legitimately reference an operation defined
/// elsewhere or added later, so mismatches are warnings, never errors.
/// Neither input tree is mutated.
#[must_use]
pub fn check_consistency(openapi: &Value, meta: &Value) -> Vec<Diagnostic> {
    let mut diags = Vec::new();
    let keys = operation_keys(openapi);

    let Some(plugins) = meta.as_sequence() else {
        return diags;
    };
    for plugin in plugins {
        let Some(tools) = plugin.get("tools").and_then(Value::as_sequence) else {
            continue;
        };
        for tool in tools {
            let (Some(method), Some(sub_url)) = (
                tool.get("method").and_then(Value::as_str),
                tool.get("sub_url").and_then(Value::as_str),
            ) else {
                continue;
            };
            let lowered = method.to_lowercase();
            if !keys.contains(&(lowered, sub_url.to_string())) {
                diags.push(
                    Diagnostic::warning(
                        X001,
                        format!(
                            "tool {} {sub_url} is declared in metadata but not found in the OpenAPI specification",
                            method.to_uppercase()
                        ),
                    )
                    .with_field("sub_url"),
                );
            }
        }
    }

    diags
}
