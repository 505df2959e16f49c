//! Error types for document loading.

use std::path::PathBuf;

use thiserror::Error;

/// An error that occurred while loading a structured document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File I/O error when reading a document.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML.
    #[error("{}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The document root is not a mapping.
    #[error("{}: document root must be a mapping", path.display())]
    NotAMapping { path: PathBuf },
}
