//! Structured diagnostics for plugin package validation.
//!
//! Every condition a checker can detect becomes a typed diagnostic with a
//! stable code and a severity; nothing expected ever escapes a checker as
//! an error value or a panic.

use std::fmt;

use serde::Serialize;

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A violation that causes validation failure.
    Error,
    /// An advisory finding that does not cause failure.
    Warning,
}

/// A structured diagnostic message from one of the validation checkers.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Stable error code (e.g., `"A001"`, `"M003"`).
    pub code: &'static str,
    /// Human-readable message naming the offending document/plugin/tool.
    pub message: String,
    /// Field that caused the diagnostic (e.g., `"servers"`, `"tool_id"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Suggested fix (actionable text).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    /// Create a new diagnostic with the given severity, code, and message.
    #[must_use]
    pub fn new(severity: Severity, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            field: None,
            suggestion: None,
        }
    }

    /// Create an error diagnostic.
    #[must_use]
    pub fn error(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message)
    }

    /// Create a warning diagnostic.
    #[must_use]
    pub fn warning(code: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message)
    }

    /// Set the field that caused this diagnostic.
    #[must_use]
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    /// Set a suggested fix for this diagnostic.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns `true` if this diagnostic is an error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Returns `true` if this diagnostic is a warning.
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }
}

/// Display format:
/// - Errors: `"message"` (no prefix)
/// - Warnings: `"warning: message"`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Error => write!(f, "{}", self.message),
            Severity::Warning => write!(f, "warning: {}", self.message),
        }
    }
}

// ── Error code constants ────────────────────────────────────────────────

// Document loading (L001–L004)

/// YAML syntax error.
pub const L001: &str = "L001";
/// File does not exist.
pub const L002: &str = "L002";
/// File could not be read.
pub const L003: &str = "L003";
/// Document parsed to an empty (null) root.
pub const L004: &str = "L004";

// OpenAPI document checks (A001–A008)

/// Missing required top-level field (`openapi`, `info`, `paths`).
pub const A001: &str = "A001";
/// Version tag is not a 3.0.x revision.
pub const A002: &str = "A002";
/// Missing required `info` sub-field (`title`, `version`, `description`).
pub const A003: &str = "A003";
/// `paths` map is empty.
pub const A004: &str = "A004";
/// Operation missing `operationId`.
pub const A005: &str = "A005";
/// Operation missing `responses`.
pub const A006: &str = "A006";
/// Responses lack both a `"200"` and a `"default"` entry.
pub const A007: &str = "A007";
/// Missing or empty `servers` list.
pub const A008: &str = "A008";

// Metadata manifest checks (M001–M009)

/// Metadata root is not a non-empty array.
pub const M001: &str = "M001";
/// Missing required plugin field.
pub const M002: &str = "M002";
/// Duplicate `plugin_id`.
pub const M003: &str = "M003";
/// Missing required manifest sub-field.
pub const M004: &str = "M004";
/// `auth` record lacks a `type` field.
pub const M005: &str = "M005";
/// No tools defined.
pub const M006: &str = "M006";
/// Missing required tool field.
pub const M007: &str = "M007";
/// Duplicate `tool_id` (global across the document).
pub const M008: &str = "M008";
/// Unsupported tool HTTP method.
pub const M009: &str = "M009";

// File reference checks (R001–R002)

/// Referenced OpenAPI document does not exist.
pub const R001: &str = "R001";
/// Referenced logo file does not exist.
pub const R002: &str = "R002";

// Cross-document consistency (X001)

/// Tool declared in metadata has no matching OpenAPI operation.
pub const X001: &str = "X001";
