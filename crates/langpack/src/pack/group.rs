//! The scope tree: named groups of definitions and child groups.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::document::{DocValue, SEPARATOR, Section};
use crate::pack::complex::ComplexLoader;
use crate::pack::definition::Definition;
use crate::pack::error::GroupError;
use crate::types::Language;

/// Reserved top-level key carrying group metadata (imports).
pub const METADATA_KEY: &str = "__metadata__";

/// File extension appended to import names given without one.
const FILE_EXTENSION: &str = ".yml";

/// A dotted, lower-cased path addressing a scope in the tree.
///
/// The root is the empty path. `ancestors` yields progressively shorter
/// prefixes (longest first), which drives the ancestor-widening step of the
/// resolution algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScopePath(Vec<String>);

impl ScopePath {
    /// The empty path addressing a root scope.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a dotted path, lower-casing and trimming each segment.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split(SEPARATOR)
                .map(|segment| segment.trim().to_lowercase())
                .filter(|segment| !segment.is_empty())
                .collect(),
        )
    }

    /// True for the root (empty) path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments, root to leaf.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// This path extended with one more segment.
    pub fn join(&self, name: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(name.trim().to_lowercase());
        Self(segments)
    }

    /// All non-root prefixes of this path, longest (the path itself) first.
    pub fn ancestors(&self) -> Vec<ScopePath> {
        (1..=self.0.len())
            .rev()
            .map(|length| Self(self.0[..length].to_vec()))
            .collect()
    }
}

impl std::fmt::Display for ScopePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

impl From<&str> for ScopePath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

/// Import metadata read from a group's `__metadata__` section.
///
/// `import` names a single document, `imports` a list. Imports are merged
/// in listed order before the group's own entries, so entries physically
/// present in the including document override imported ones.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    imports: Vec<String>,
}

impl Metadata {
    /// Read import declarations from a metadata section.
    ///
    /// An `imports` key that is not a list falls through to the single
    /// `import` key; a declaration that is neither a string nor a list is
    /// ignored with a diagnostic.
    pub fn read(&mut self, section: &Section) {
        if let Some(list) = section.get_string_list("imports") {
            self.imports.extend(list);
        } else if let Some(import) = section.get_string("import") {
            self.imports.push(import);
        } else if section.contains("imports") || section.contains("import") {
            warn!("import declaration is neither a string nor a list; ignored");
        }
    }

    /// The declared import document names, in order.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }
}

/// Ambient state needed while ingesting documents into a group.
pub(crate) struct LoadContext<'a> {
    /// Pack directory imports are resolved against first.
    pub dir: &'a Path,
    /// Registered complex-value loaders, keyed by lower-cased type name.
    pub loaders: &'a BTreeMap<String, Box<dyn ComplexLoader>>,
}

/// A named node in the resolution tree holding child groups and fields.
///
/// Keys are lower-cased on registration and lookup. Dotted queries descend
/// the tree one child per segment; they never climb back toward the root.
#[derive(Debug)]
pub struct Group {
    name: String,
    language: Language,
    path: ScopePath,
    children: BTreeMap<String, Group>,
    fields: BTreeMap<String, Definition>,
    meta: Metadata,
}

impl Group {
    pub(crate) fn new(name: impl Into<String>, language: Language, path: ScopePath) -> Self {
        Self {
            name: name.into(),
            language,
            path,
            children: BTreeMap::new(),
            fields: BTreeMap::new(),
            meta: Metadata::default(),
        }
    }

    /// The group's own (lower-cased) name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The language this group belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The full path from the root; empty for root groups.
    pub fn path(&self) -> &ScopePath {
        &self.path
    }

    /// Import metadata recorded at load time.
    pub fn meta(&self) -> &Metadata {
        &self.meta
    }

    // =========================================================================
    // Ingestion
    // =========================================================================

    /// Merge a structured document into this group.
    ///
    /// Imports declared in `__metadata__` are applied first, in listed
    /// order; every remaining entry is classified as a complex value (a
    /// section with a string `type`), a child group (a section without
    /// one), or a literal definition.
    pub(crate) fn append(&mut self, section: &Section, ctx: &LoadContext<'_>) {
        if let Some(meta_section) = section.section(METADATA_KEY) {
            let mut metadata = Metadata::default();
            metadata.read(meta_section);
            for import in metadata.imports() {
                self.append_import(import, ctx);
            }
            self.meta.imports.extend(metadata.imports.iter().cloned());
        }

        for (key, value) in section.entries() {
            if key == METADATA_KEY {
                continue;
            }
            match value {
                DocValue::Section(child) => {
                    if child.is_string("type") {
                        self.read_complex(key, child, ctx);
                    } else {
                        self.read_group(key, child, ctx);
                    }
                }
                other => {
                    if let Some(text) = other.flatten_text() {
                        let definition =
                            Definition::literal(self.language, Some(self.path.clone()), text);
                        self.set(key, definition);
                    }
                }
            }
        }
    }

    /// Resolve and merge one import target. Unresolvable imports degrade
    /// with a diagnostic; they never abort the surrounding load.
    fn append_import(&mut self, import: &str, ctx: &LoadContext<'_>) {
        let mut file_name = import.to_string();
        if !file_name.to_lowercase().ends_with(FILE_EXTENSION) {
            file_name.push_str(FILE_EXTENSION);
        }

        // Pack directory first, absolute path second.
        let mut path = ctx.dir.join(&file_name);
        if !path.exists() {
            path = PathBuf::from(&file_name);
        }
        if !path.exists() {
            warn!(group = %self.name, import, "cannot import language file: not found");
            return;
        }

        match Section::load_file(&path) {
            Ok(imported) => {
                debug!(group = %self.name, path = %path.display(), "loading import");
                self.append(&imported, ctx);
            }
            Err(err) => {
                warn!(group = %self.name, path = %path.display(), %err, "failed to load import");
            }
        }
    }

    /// Read a nested section as a child group. Child metadata starts fresh;
    /// imports do not inherit.
    fn read_group(&mut self, key: &str, section: &Section, ctx: &LoadContext<'_>) {
        let name = key.to_lowercase();
        let mut child = Group::new(name.clone(), self.language, self.path.join(&name));
        child.append(section, ctx);
        self.set_child(child);
    }

    /// Read a typed section through the registered loader. Unknown types
    /// drop the entry with a diagnostic instead of failing the load.
    fn read_complex(&mut self, key: &str, section: &Section, ctx: &LoadContext<'_>) {
        let Some(type_name) = section.get_string("type") else {
            return;
        };
        match ctx.loaders.get(&type_name.to_lowercase()) {
            Some(loader) => {
                let value = loader.load(section);
                let definition = Definition::complex(self.language, Some(self.path.clone()), value);
                self.set(key, definition);
            }
            None => {
                warn!(group = %self.name, key, type_name, "unknown complex type; entry dropped");
            }
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Locate a definition by dotted query.
    ///
    /// A dotted query splits on the first separator and recurses into the
    /// named child; a missing child fails the whole query. This is a pure
    /// tree descent: it never climbs to the parent.
    pub fn resolve(&self, query: &str) -> Option<&Definition> {
        match query.split_once(SEPARATOR) {
            Some((head, tail)) => self
                .children
                .get(&head.trim().to_lowercase())?
                .resolve(tail),
            None => self.fields.get(&query.trim().to_lowercase()),
        }
    }

    pub(crate) fn resolve_mut(&mut self, query: &str) -> Option<&mut Definition> {
        match query.split_once(SEPARATOR) {
            Some((head, tail)) => self
                .children
                .get_mut(&head.trim().to_lowercase())?
                .resolve_mut(tail),
            None => self.fields.get_mut(&query.trim().to_lowercase()),
        }
    }

    /// A direct child group by name, case-insensitively.
    pub fn child(&self, name: &str) -> Option<&Group> {
        self.children.get(&name.trim().to_lowercase())
    }

    /// The child group at a dotted query, or a structural error when any
    /// segment is missing or not a group.
    pub fn child_at(&self, query: &str) -> Result<&Group, GroupError> {
        let mut current = self;
        for segment in query.split(SEPARATOR) {
            current = current
                .child(segment)
                .ok_or_else(|| GroupError::NotAGroup {
                    query: query.to_string(),
                })?;
        }
        Ok(current)
    }

    /// True when a field with this (non-dotted) name exists in this group.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(&name.trim().to_lowercase())
    }

    /// True when the query resolves to a complex definition.
    pub fn is_complex(&self, query: &str) -> bool {
        self.resolve(query)
            .is_some_and(|definition| definition.current().is_complex())
    }

    /// The textual value at the query, if it resolves.
    pub fn group_string(&self, query: &str) -> Option<String> {
        self.resolve(query)
            .map(|definition| definition.current().to_text())
    }

    /// Direct fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Definition)> {
        self.fields.iter().map(|(key, def)| (key.as_str(), def))
    }

    /// Direct child groups in key order.
    pub fn children(&self) -> impl Iterator<Item = &Group> {
        self.children.values()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Assign a definition, creating intermediate groups for dotted keys.
    pub fn set(&mut self, key: &str, definition: Definition) {
        match key.split_once(SEPARATOR) {
            Some((head, tail)) => {
                let name = head.trim().to_lowercase();
                let language = self.language;
                let path = self.path.join(&name);
                let child = self
                    .children
                    .entry(name.clone())
                    .or_insert_with(|| Group::new(name, language, path));
                child.set(tail, definition);
            }
            None => {
                self.fields.insert(key.trim().to_lowercase(), definition);
            }
        }
    }

    /// Remove the definition at a dotted key. Returns true when something
    /// was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match key.split_once(SEPARATOR) {
            Some((head, tail)) => self
                .children
                .get_mut(&head.trim().to_lowercase())
                .is_some_and(|child| child.remove(tail)),
            None => self.fields.remove(&key.trim().to_lowercase()).is_some(),
        }
    }

    /// Add an empty child group, failing when the name is already taken.
    pub fn insert_child(&mut self, name: &str) -> Result<&mut Group, GroupError> {
        let key = name.trim().to_lowercase();
        if self.children.contains_key(&key) {
            return Err(GroupError::DuplicateChild { name: key });
        }
        let child = Group::new(key.clone(), self.language, self.path.join(&key));
        Ok(self.children.entry(key).or_insert(child))
    }

    /// Add or replace a child group.
    pub(crate) fn set_child(&mut self, group: Group) {
        self.children.insert(group.name().to_string(), group);
    }

    /// Remove a child group by name.
    pub fn remove_child(&mut self, name: &str) -> bool {
        self.children.remove(&name.trim().to_lowercase()).is_some()
    }

    /// Drop all fields and child groups.
    pub fn clear(&mut self) {
        self.children.clear();
        self.fields.clear();
        self.meta = Metadata::default();
    }

    // =========================================================================
    // Walk support
    // =========================================================================

    /// Reset every definition in this subtree to its raw state.
    pub(crate) fn unwalk_all(&mut self) {
        for child in self.children.values_mut() {
            child.unwalk_all();
        }
        for definition in self.fields.values_mut() {
            definition.unwalk();
        }
    }

    /// Collect the full dotted path of every field in this subtree.
    pub(crate) fn collect_field_paths(&self, out: &mut Vec<String>) {
        for name in self.fields.keys() {
            if self.path.is_root() {
                out.push(name.clone());
            } else {
                out.push(format!("{}.{name}", self.path));
            }
        }
        for child in self.children.values() {
            child.collect_field_paths(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Group {
        Group::new("en", Language::English, ScopePath::root())
    }

    #[test]
    fn test_ancestors_longest_first() {
        let path = ScopePath::parse("a.b.c");
        let ancestors: Vec<String> = path
            .ancestors()
            .iter()
            .map(ScopePath::to_string)
            .collect();
        assert_eq!(ancestors, vec!["a.b.c", "a.b", "a"]);
    }

    #[test]
    fn test_root_has_no_ancestors() {
        assert!(ScopePath::root().ancestors().is_empty());
    }

    #[test]
    fn test_parse_normalizes_segments() {
        let path = ScopePath::parse(" Menu . Items ");
        assert_eq!(path.to_string(), "menu.items");
    }

    #[test]
    fn test_set_creates_intermediate_groups() {
        let mut group = root();
        let definition = Definition::literal(Language::English, None, "Play");
        group.set("menu.items.play", definition);

        assert!(group.child("menu").is_some());
        let items = group.child_at("menu.items").unwrap();
        assert_eq!(items.path().to_string(), "menu.items");
        assert!(items.contains("play"));
        assert_eq!(group.group_string("menu.items.play"), Some("Play".to_string()));
    }

    #[test]
    fn test_resolve_never_climbs() {
        let mut group = root();
        group.set("menu.title", Definition::literal(Language::English, None, "Main"));
        assert!(group.resolve("menu.title").is_some());
        assert!(group.resolve("title").is_none());
        assert!(group.child("menu").unwrap().resolve("menu.title").is_none());
    }

    #[test]
    fn test_insert_child_rejects_duplicates() {
        let mut group = root();
        group.insert_child("menu").unwrap();
        assert!(matches!(
            group.insert_child("Menu"),
            Err(GroupError::DuplicateChild { .. })
        ));
    }

    #[test]
    fn test_child_at_error_on_non_group() {
        let mut group = root();
        group.set("menu.title", Definition::literal(Language::English, None, "Main"));
        assert!(matches!(
            group.child_at("menu.title"),
            Err(GroupError::NotAGroup { .. })
        ));
    }

    #[test]
    fn test_remove_leaves_siblings() {
        let mut group = root();
        group.set("menu.a", Definition::literal(Language::English, None, "1"));
        group.set("menu.b", Definition::literal(Language::English, None, "2"));
        assert!(group.remove("menu.a"));
        assert!(!group.remove("menu.a"));
        assert!(group.resolve("menu.b").is_some());
    }
}
