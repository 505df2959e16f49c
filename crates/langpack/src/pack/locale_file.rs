//! Per-language root groups bound to an on-disk document source.

use std::path::{Path, PathBuf};

use crate::document::Section;
use crate::pack::error::LoadError;
use crate::pack::group::{Group, LoadContext, ScopePath};
use crate::types::Language;

/// A [`Group`] specialized as a per-language root.
///
/// A locale file has no parent (its path is the root path) and may carry a
/// backing document path for reload and append.
#[derive(Debug)]
pub struct LocaleFile {
    group: Group,
    path: Option<PathBuf>,
}

impl LocaleFile {
    /// A root created at runtime (by `set`), with no backing file.
    pub(crate) fn runtime(language: Language) -> Self {
        Self {
            group: Group::new(language.abbreviation(), language, ScopePath::root()),
            path: None,
        }
    }

    /// A root bound to an existing document file. The file is not read
    /// until [`LocaleFile::load`].
    pub(crate) fn from_path(language: Language, path: PathBuf) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::FileNotFound { path });
        }
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| language.abbreviation().to_string());
        Ok(Self {
            group: Group::new(name, language, ScopePath::root()),
            path: Some(path),
        })
    }

    /// The language this file is bound to.
    pub fn language(&self) -> Language {
        self.group.language()
    }

    /// The backing document path, when loaded from disk.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The root scope.
    pub fn group(&self) -> &Group {
        &self.group
    }

    pub(crate) fn group_mut(&mut self) -> &mut Group {
        &mut self.group
    }

    /// Clear all entries and re-read the backing file.
    pub(crate) fn load(&mut self, ctx: &LoadContext<'_>) -> Result<(), LoadError> {
        let path = self
            .path
            .clone()
            .ok_or(LoadError::NoPathForReload {
                language: self.language(),
            })?;
        self.group.clear();
        self.append_path(&path, ctx)
    }

    /// Parse a document file and merge it into this root.
    pub(crate) fn append_path(&mut self, path: &Path, ctx: &LoadContext<'_>) -> Result<(), LoadError> {
        let section = Section::load_file(path)?;
        self.append_section(&section, ctx);
        Ok(())
    }

    /// Merge an in-memory document into this root.
    pub(crate) fn append_section(&mut self, section: &Section, ctx: &LoadContext<'_>) {
        self.group.append(section, ctx);
    }
}
