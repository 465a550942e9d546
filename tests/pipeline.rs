//! End-to-end pipeline tests against the public library API.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use pluglint::validate_package;

const OPENAPI: &str = r#"
openapi: 3.0.0
info:
  title: T
  version: "1"
  description: D
paths:
  /x:
    get:
      operationId: op1
      responses:
        "200": {}
servers:
  - http://h
"#;

fn plugin_entry(plugin_id: &str, tool_id: &str) -> String {
    format!(
        r#"- plugin_id: {plugin_id}
  product_id: pr1
  version: "1"
  openapi_doc_file: a.yaml
  plugin_type: t
  manifest:
    schema_version: v1
    name_for_model: m
    name_for_human: h
    description_for_model: dm
    description_for_human: dh
    auth:
      type: none
    logo_url: logo.png
    api: {{}}
  tools:
    - tool_id: {tool_id}
      method: get
      sub_url: /x
"#
    )
}

/// Write both documents and the files they reference under `sub` inside a
/// fresh temp dir.
fn write_package_in(sub: &str, meta: &str) -> (tempfile::TempDir, PathBuf, PathBuf) {
    let parent = tempdir().unwrap();
    let dir = parent.path().join(sub);
    fs::create_dir(&dir).unwrap();
    let openapi_path = dir.join("openapi.yaml");
    let meta_path = dir.join("plugin_meta.yaml");
    fs::write(&openapi_path, OPENAPI).unwrap();
    fs::write(&meta_path, meta).unwrap();
    fs::write(dir.join("a.yaml"), "referenced: true\n").unwrap();
    fs::write(dir.join("logo.png"), [0u8; 4]).unwrap();
    (parent, openapi_path, meta_path)
}

#[test]
fn duplicate_plugin_id_reported_exactly_once() {
    let meta = format!("{}{}", plugin_entry("p1", "t1"), plugin_entry("p1", "t2"));
    let (_dir, openapi, meta) = write_package_in("pkg", &meta);
    let report = validate_package(&openapi, &meta);
    let dup: Vec<_> = report
        .error_messages()
        .into_iter()
        .filter(|e| e.contains("duplicate plugin_id"))
        .collect();
    assert_eq!(dup.len(), 1, "one error on the second occurrence: {dup:?}");
}

#[test]
fn tool_id_uniqueness_is_global_across_plugins() {
    let meta = format!("{}{}", plugin_entry("p1", "shared"), plugin_entry("p2", "shared"));
    let (_dir, openapi, meta) = write_package_in("pkg", &meta);
    let report = validate_package(&openapi, &meta);
    assert!(report
        .error_messages()
        .iter()
        .any(|e| e.contains("duplicate tool_id")));
}

#[test]
fn moving_the_package_does_not_change_the_verdict() {
    let (parent, _openapi, _meta) = write_package_in("before", &plugin_entry("p1", "t1"));
    let before = parent.path().join("before");
    let report_before = validate_package(
        &before.join("openapi.yaml"),
        &before.join("plugin_meta.yaml"),
    );

    // Move the whole package, preserving the relative layout.
    let after = parent.path().join("after");
    fs::rename(&before, &after).unwrap();
    let report_after = validate_package(
        &after.join("openapi.yaml"),
        &after.join("plugin_meta.yaml"),
    );

    assert_eq!(report_before.is_success(), report_after.is_success());
    assert_eq!(
        report_before.diagnostics().len(),
        report_after.diagnostics().len()
    );
    assert!(report_after.is_success());
}

#[test]
fn consistency_mismatch_is_one_warning_zero_errors() {
    let meta = plugin_entry("p1", "t1").replace("sub_url: /x", "sub_url: /drifted");
    let (_dir, openapi, meta) = write_package_in("pkg", &meta);
    let report = validate_package(&openapi, &meta);
    assert!(report.errors().is_empty());
    assert_eq!(report.warnings().len(), 1);
    assert!(report.warning_messages()[0].contains("GET /drifted"));
    assert!(report.is_success());
}

#[test]
fn running_twice_yields_identical_findings() {
    let meta = format!("{}{}", plugin_entry("p1", "t1"), plugin_entry("p1", "t1"));
    let (_dir, openapi, meta) = write_package_in("pkg", &meta);
    let first = validate_package(&openapi, &meta);
    let second = validate_package(&openapi, &meta);
    assert_eq!(first.error_messages(), second.error_messages());
    assert_eq!(first.warning_messages(), second.warning_messages());
}
