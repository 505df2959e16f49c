//! YAML document loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::error::DocumentError;
use crate::document::section::{DocValue, Section};

impl Section {
    /// Parse a YAML string into a section tree.
    ///
    /// The root of the document must be a mapping. `name` becomes the root
    /// section's name (conventionally the file stem).
    pub fn from_yaml_str(name: &str, content: &str) -> Result<Section, DocumentError> {
        let source_path = PathBuf::from(format!("<{name}>"));
        let value: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|source| DocumentError::Yaml {
                path: source_path.clone(),
                source,
            })?;
        root_section(name, &value, &source_path)
    }

    /// Read and parse a YAML file into a section tree.
    ///
    /// The root section is named after the file stem.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Section, DocumentError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|source| DocumentError::Yaml {
                path: path.to_path_buf(),
                source,
            })?;
        root_section(&name, &value, path)
    }
}

fn root_section(
    name: &str,
    value: &serde_yaml::Value,
    path: impl AsRef<Path>,
) -> Result<Section, DocumentError> {
    match value {
        serde_yaml::Value::Mapping(mapping) => Ok(convert_mapping(name, mapping)),
        // An empty document parses as null; treat it as an empty section.
        serde_yaml::Value::Null => Ok(Section::new(name)),
        _ => Err(DocumentError::NotAMapping {
            path: path.as_ref().to_path_buf(),
        }),
    }
}

fn convert_mapping(name: &str, mapping: &serde_yaml::Mapping) -> Section {
    let mut section = Section::new(name);
    for (key, value) in mapping {
        let key = yaml_key(key);
        section.insert(&key, convert_value(&key, value));
    }
    section
}

fn convert_value(key: &str, value: &serde_yaml::Value) -> DocValue {
    match value {
        serde_yaml::Value::Null => DocValue::String(String::new()),
        serde_yaml::Value::Bool(b) => DocValue::Bool(*b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                DocValue::Int(i)
            } else {
                DocValue::Float(n.as_f64().unwrap_or_default())
            }
        }
        serde_yaml::Value::String(s) => DocValue::String(s.clone()),
        serde_yaml::Value::Sequence(values) => DocValue::List(
            values
                .iter()
                .map(|value| convert_value(key, value))
                .collect(),
        ),
        serde_yaml::Value::Mapping(mapping) => DocValue::Section(convert_mapping(key, mapping)),
        serde_yaml::Value::Tagged(tagged) => convert_value(key, &tagged.value),
    }
}

fn yaml_key(key: &serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
