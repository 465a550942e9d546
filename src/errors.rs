use thiserror::Error;

/// Errors that can occur while loading plugin package documents.
#[derive(Error, Debug)]
pub enum PluglintError {
    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Document parsed to an empty (null) root.
    #[error("document is empty")]
    EmptyDocument,
}

/// Convenience alias for `Result<T, PluglintError>`.
pub type Result<T> = std::result::Result<T, PluglintError>;
