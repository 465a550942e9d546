pub mod consistency;
pub mod diagnostics;
pub mod errors;
pub mod loader;
pub mod meta;
pub mod openapi;
pub mod references;
pub mod report;
pub mod validator;

// Re-export key types at crate root for convenience.
pub use diagnostics::{Diagnostic, Severity};
pub use errors::{PluglintError, Result};
pub use loader::load_document;
pub use report::Report;
pub use validator::validate_package;
