//! Specification checker: structural completeness of the OpenAPI document.

use serde_yaml_ng::Value;

use crate::diagnostics::{Diagnostic, A001, A002, A003, A004, A005, A006, A007, A008};
use crate::loader::scalar_display;

/// HTTP methods recognized as operations when scanning the paths map.
///
/// Wider than the tool-method set in the manifest checker: OPTIONS and
/// HEAD are scanned as operations here but are not supported tool methods.
const OPERATION_METHODS: &[&str] = &["get", "post", "put", "delete", "patch", "options", "head"];

/// Required top-level fields, in declaration order.
const REQUIRED_FIELDS: &[&str] = &["openapi", "info", "paths"];

/// Required sub-fields of the `info` block.
const INFO_FIELDS: &[&str] = &["title", "version", "description"];

/// Validate the API-surface document against its required shape.
///
/// `source` is the document's path, used in messages for traceability.
/// Returns the checker's findings; warnings never fail the run.
#[must_use]
pub fn check_openapi(doc: &Value, source: &str) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    // An empty tree means the caller already recorded a load error.
    if doc.is_null() {
        return diags;
    }

    for &field in REQUIRED_FIELDS {
        if doc.get(field).is_none() {
            diags.push(
                Diagnostic::error(
                    A001,
                    format!("OpenAPI missing required field `{field}` in {source}"),
                )
                .with_field(field),
            );
        }
    }

    if let Some(version) = doc.get("openapi") {
        let compatible = version.as_str().is_some_and(|v| v.starts_with("3.0"));
        if !compatible {
            diags.push(
                Diagnostic::warning(
                    A002,
                    format!(
                        "OpenAPI 3.0.x is recommended, current version: {}",
                        scalar_display(version)
                    ),
                )
                .with_field("openapi")
                .with_suggestion("Use an OpenAPI 3.0.x version tag"),
            );
        }
    }

    if let Some(info) = doc.get("info") {
        for &field in INFO_FIELDS {
            if info.get(field).is_none() {
                diags.push(
                    Diagnostic::error(
                        A003,
                        format!("OpenAPI info missing required field `{field}` in {source}"),
                    )
                    .with_field(field),
                );
            }
        }
    }

    if let Some(paths) = doc.get("paths") {
        let empty = match paths {
            Value::Null => true,
            Value::Mapping(map) => map.is_empty(),
            _ => false,
        };
        if empty {
            diags.push(
                Diagnostic::warning(A004, format!("OpenAPI paths is empty in {source}"))
                    .with_field("paths"),
            );
        }

        if let Value::Mapping(map) = paths {
            for (path_key, methods) in map {
                let Some(path) = path_key.as_str() else {
                    continue;
                };
                let Some(methods) = methods.as_mapping() else {
                    continue;
                };
                for (method_key, operation) in methods {
                    let Some(method) = method_key.as_str() else {
                        continue;
                    };
                    // Unrecognized method strings are skipped, not flagged.
                    if !OPERATION_METHODS.contains(&method.to_lowercase().as_str()) {
                        continue;
                    }

                    if operation.get("operationId").is_none() {
                        diags.push(
                            Diagnostic::error(
                                A005,
                                format!("missing operationId in {path} {method}"),
                            )
                            .with_field("operationId"),
                        );
                    }

                    match operation.get("responses") {
                        None => diags.push(
                            Diagnostic::error(A006, format!("missing responses in {path} {method}"))
                                .with_field("responses"),
                        ),
                        Some(responses) => {
                            if responses.get("200").is_none()
                                && responses.get("default").is_none()
                            {
                                diags.push(
                                    Diagnostic::warning(
                                        A007,
                                        format!(
                                            "no 200 or default response defined in {path} {method}"
                                        ),
                                    )
                                    .with_field("responses"),
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    let has_servers = match doc.get("servers") {
        None | Some(Value::Null) => false,
        Some(Value::Sequence(servers)) => !servers.is_empty(),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    };
    if !has_servers {
        diags.push(
            Diagnostic::error(
                A008,
                format!("OpenAPI missing servers configuration in {source}"),
            )
            .with_field("servers"),
        );
    }

    diags
}
