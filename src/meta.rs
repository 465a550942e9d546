//! Manifest checker: the metadata document's array-of-plugin structure.

use std::collections::HashSet;

use serde_yaml_ng::Value;

use crate::diagnostics::{Diagnostic, M001, M002, M003, M004, M005, M006, M007, M008, M009};
use crate::loader::scalar_display;

/// HTTP methods a tool may bind to.
///
/// Narrower than the operation scan in the OpenAPI checker: OPTIONS and
/// HEAD are valid operations there but are rejected as tool methods.
pub(crate) const TOOL_METHODS: &[&str] = &["get", "post", "put", "delete", "patch"];

/// Required top-level fields of each plugin record.
const PLUGIN_FIELDS: &[&str] = &[
    "plugin_id",
    "product_id",
    "version",
    "openapi_doc_file",
    "plugin_type",
    "manifest",
    "tools",
];

/// Required sub-fields of the embedded manifest block.
const MANIFEST_FIELDS: &[&str] = &[
    "schema_version",
    "name_for_model",
    "name_for_human",
    "description_for_model",
    "description_for_human",
    "auth",
    "logo_url",
    "api",
];

/// Required fields of each tool record.
const TOOL_FIELDS: &[&str] = &["tool_id", "method", "sub_url"];

/// Validate the metadata document: array shape, per-plugin required
/// fields, identifier uniqueness, manifest block, and tool records.
///
/// `plugin_id` uniqueness is per document; `tool_id` uniqueness is global
/// across all plugins, not per plugin. The first occurrence of an
/// identifier is canonical; later repeats are each flagged.
#[must_use]
pub fn check_meta(doc: &Value, source: &str) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    let plugins = match doc.as_sequence() {
        Some(seq) if !seq.is_empty() => seq,
        _ => {
            diags.push(Diagnostic::error(
                M001,
                format!("plugin metadata must be a non-empty array in {source}"),
            ));
            return diags;
        }
    };

    let mut plugin_ids: HashSet<String> = HashSet::new();
    let mut tool_ids: HashSet<String> = HashSet::new();

    for (i, plugin) in plugins.iter().enumerate() {
        for &field in PLUGIN_FIELDS {
            if plugin.get(field).is_none() {
                diags.push(
                    Diagnostic::error(
                        M002,
                        format!("plugin #{i} in {source}: missing required field `{field}`"),
                    )
                    .with_field(field),
                );
            }
        }

        if let Some(id) = plugin.get("plugin_id") {
            let id = scalar_display(id);
            if plugin_ids.contains(&id) {
                diags.push(
                    Diagnostic::error(
                        M003,
                        format!("plugin #{i} in {source}: duplicate plugin_id `{id}`"),
                    )
                    .with_field("plugin_id"),
                );
            } else {
                plugin_ids.insert(id);
            }
        }

        if let Some(manifest) = plugin.get("manifest") {
            for &field in MANIFEST_FIELDS {
                if manifest.get(field).is_none() {
                    diags.push(
                        Diagnostic::error(
                            M004,
                            format!(
                                "plugin #{i} in {source}: manifest missing required field `{field}`"
                            ),
                        )
                        .with_field(field),
                    );
                }
            }
            if let Some(auth) = manifest.get("auth") {
                if auth.get("type").is_none() {
                    diags.push(
                        Diagnostic::error(
                            M005,
                            format!("plugin #{i} in {source}: auth missing `type` field"),
                        )
                        .with_field("auth"),
                    );
                }
            }
        }

        match plugin.get("tools").and_then(Value::as_sequence) {
            Some(tools) if !tools.is_empty() => {
                for (j, tool) in tools.iter().enumerate() {
                    for &field in TOOL_FIELDS {
                        if tool.get(field).is_none() {
                            diags.push(
                                Diagnostic::error(
                                    M007,
                                    format!(
                                        "plugin #{i} in {source}, tool #{j}: missing required field `{field}`"
                                    ),
                                )
                                .with_field(field),
                            );
                        }
                    }

                    if let Some(id) = tool.get("tool_id") {
                        let id = scalar_display(id);
                        if tool_ids.contains(&id) {
                            diags.push(
                                Diagnostic::error(
                                    M008,
                                    format!(
                                        "plugin #{i} in {source}, tool #{j}: duplicate tool_id `{id}`"
                                    ),
                                )
                                .with_field("tool_id"),
                            );
                        } else {
                            tool_ids.insert(id);
                        }
                    }

                    if let Some(method) = tool.get("method").and_then(Value::as_str) {
                        let lowered = method.to_lowercase();
                        if !TOOL_METHODS.contains(&lowered.as_str()) {
                            diags.push(
                                Diagnostic::error(
                                    M009,
                                    format!(
                                        "plugin #{i} in {source}, tool #{j}: unsupported HTTP method `{lowered}`"
                                    ),
                                )
                                .with_field("method"),
                            );
                        }
                    }
                }
            }
            // Zero tools is structurally valid but suspicious.
            _ => diags.push(
                Diagnostic::warning(M006, format!("plugin #{i} in {source}: no tools defined"))
                    .with_field("tools"),
            ),
        }
    }

    diags
}
