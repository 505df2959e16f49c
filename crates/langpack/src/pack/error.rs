//! Error types for pack loading and structural scope operations.
//!
//! Resolution misses are not errors: they propagate as `None` and degrade to
//! field placeholders. The types here cover structural failures only.

use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentError;
use crate::types::Language;

/// An error that occurred while loading pack content.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying document failed to read or parse.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A referenced pack file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Attempted to reload a language that has no backing file.
    #[error("cannot reload '{}': no backing file", language.abbreviation())]
    NoPathForReload { language: Language },
}

/// A structural error raised by scope-tree operations.
#[derive(Debug, Error)]
pub enum GroupError {
    /// The query resolved to something that is not a child scope.
    #[error("'{query}' is not a group")]
    NotAGroup { query: String },

    /// A child scope with the same name already exists.
    #[error("child group '{name}' already exists")]
    DuplicateChild { name: String },
}

/// Polling an empty string pool.
#[derive(Debug, Error)]
#[error("cannot poll an empty string pool")]
pub struct EmptyPoolError;
