//! Hierarchical key/value sections with dotted-path lookup.

use std::collections::BTreeMap;

/// The path separator used by both documents and scopes.
pub const SEPARATOR: char = '.';

/// A value stored in a [`Section`].
#[derive(Debug, Clone, PartialEq)]
pub enum DocValue {
    /// A string scalar.
    String(String),
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// An ordered list of values.
    List(Vec<DocValue>),
    /// A nested section.
    Section(Section),
}

impl DocValue {
    /// Render this value as flat text: scalars as themselves, lists as
    /// `\n`-joined lines. Sections have no textual form.
    pub fn flatten_text(&self) -> Option<String> {
        match self {
            DocValue::String(s) => Some(s.clone()),
            DocValue::Bool(b) => Some(b.to_string()),
            DocValue::Int(n) => Some(n.to_string()),
            DocValue::Float(n) => Some(n.to_string()),
            DocValue::List(values) => {
                let lines: Vec<String> = values
                    .iter()
                    .map(|value| value.flatten_text().unwrap_or_default())
                    .collect();
                Some(lines.join("\n"))
            }
            DocValue::Section(_) => None,
        }
    }
}

/// A node in a structured document: lower-cased keys mapped to values.
///
/// All path lookups accept dotted paths (`a.b.c`) and descend one nested
/// section per segment. Keys are normalized (lower-cased, trimmed) on
/// insertion, so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Section {
    name: String,
    entries: BTreeMap<String, DocValue>,
}

impl Section {
    /// Create an empty section with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// The section's own key (file stem for root sections).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a value under a (non-dotted) key. Replaces any previous value.
    pub fn insert(&mut self, key: &str, value: DocValue) {
        self.entries.insert(normalize(key), value);
    }

    /// Look up a value by dotted path.
    pub fn get(&self, path: &str) -> Option<&DocValue> {
        match path.split_once(SEPARATOR) {
            Some((head, tail)) => match self.entries.get(&normalize(head))? {
                DocValue::Section(child) => child.get(tail),
                _ => None,
            },
            None => self.entries.get(&normalize(path)),
        }
    }

    /// True when the dotted path addresses any value.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// The nested section at the dotted path, if the value is a section.
    pub fn section(&self, path: &str) -> Option<&Section> {
        match self.get(path)? {
            DocValue::Section(child) => Some(child),
            _ => None,
        }
    }

    /// True when the value at the path is a nested section.
    pub fn is_section(&self, path: &str) -> bool {
        self.section(path).is_some()
    }

    /// True when the value at the path is a string scalar.
    pub fn is_string(&self, path: &str) -> bool {
        matches!(self.get(path), Some(DocValue::String(_)))
    }

    /// True when the value at the path is a list.
    pub fn is_list(&self, path: &str) -> bool {
        matches!(self.get(path), Some(DocValue::List(_)))
    }

    /// True when the value at the path is a boolean scalar.
    pub fn is_bool(&self, path: &str) -> bool {
        matches!(self.get(path), Some(DocValue::Bool(_)))
    }

    /// The scalar at the path rendered as a string, if it is a scalar.
    pub fn get_string(&self, path: &str) -> Option<String> {
        match self.get(path)? {
            DocValue::String(s) => Some(s.clone()),
            DocValue::Bool(b) => Some(b.to_string()),
            DocValue::Int(n) => Some(n.to_string()),
            DocValue::Float(n) => Some(n.to_string()),
            DocValue::List(_) | DocValue::Section(_) => None,
        }
    }

    /// The list at the path with each entry rendered as a string.
    pub fn get_string_list(&self, path: &str) -> Option<Vec<String>> {
        match self.get(path)? {
            DocValue::List(values) => Some(
                values
                    .iter()
                    .map(|value| value.flatten_text().unwrap_or_default())
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Enumerate this section's direct entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DocValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}
