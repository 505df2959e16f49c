//! Pluggable complex (non-literal) field values.
//!
//! A complex value knows how to render itself, whether it needs the lazy
//! walk transformation, and how to produce a walked copy of itself. New
//! variants are registered with the pack by type name through a
//! [`ComplexLoader`]; the only built-in type is the string pool
//! (`"pool"`).

use crate::document::Section;
use crate::formatter::FieldFormatter;
use crate::pack::group::ScopePath;
use crate::pack::lang_pack::LangPack;
use crate::types::{LangArg, Language};

/// Capability handed to [`Complex::walk`] so complex payloads participate
/// in the same forward-reference substitution as plain text.
pub trait DefinitionWalker {
    /// Walk a single string, substituting its resolve-once fields.
    fn walk_string(&mut self, raw: &str) -> String;

    /// Walk a list of strings.
    fn walk_list(&mut self, raw: &[String]) -> Vec<String> {
        raw.iter().map(|string| self.walk_string(string)).collect()
    }
}

/// A pluggable non-string value resolvable through the pack.
pub trait Complex: std::fmt::Debug + Send + Sync {
    /// The registered type name this value loads under.
    fn type_name(&self) -> &str;

    /// True when the value contains resolve-once fields and must be
    /// transformed by the walk pass.
    fn needs_walk(&self, formatter: &dyn FieldFormatter) -> bool;

    /// Produce a walked copy of this value. Called once per walk pass,
    /// post-load.
    fn walk(&self, walker: &mut dyn DefinitionWalker) -> Box<dyn Complex>;

    /// Render the value through the pack's processor, substituting
    /// call-time arguments. `depth` counts nested pack lookups and is
    /// passed through to the processor.
    fn process(
        &self,
        pack: &LangPack,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> String;

    /// Render the value without processing.
    fn get(&self) -> String;

    /// Clone into a fresh boxed value.
    fn clone_box(&self) -> Box<dyn Complex>;
}

/// Builds a complex value from a structured document section.
///
/// Implemented for any `Fn(&Section) -> Box<dyn Complex>`, so plain
/// functions and closures register directly.
pub trait ComplexLoader: Send + Sync {
    /// Load a complex value from its document section.
    fn load(&self, section: &Section) -> Box<dyn Complex>;
}

impl<F> ComplexLoader for F
where
    F: Fn(&Section) -> Box<dyn Complex> + Send + Sync,
{
    fn load(&self, section: &Section) -> Box<dyn Complex> {
        self(section)
    }
}
