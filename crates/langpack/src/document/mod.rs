//! Structured-document input layer.
//!
//! Packs ingest hierarchical key/value documents. The [`Section`] tree uses
//! the same dotted-path, case-insensitive-key convention as the scope tree,
//! so the two layers compose without re-normalization. Documents are loaded
//! from YAML.

mod error;
mod section;
mod yaml;

pub use error::DocumentError;
pub use section::{DocValue, SEPARATOR, Section};
