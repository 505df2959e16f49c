//! Field syntax: tokenization of template placeholders.
//!
//! A formatter turns template strings into parsed [`Field`] references.
//! Keeping the syntax behind a trait sanitizes the resolution core from any
//! hard-coded interpretation of one format; the reference syntax is the
//! percent-delimited [`PercentFormatter`].

mod field;
mod percent;

pub use field::Field;
pub use percent::PercentFormatter;

/// Tokenizes template strings into field references.
///
/// Tokenization is a pure function of the input: repeated calls over the
/// same string yield the same fields in the same left-to-right order.
pub trait FieldFormatter: std::fmt::Debug + Send + Sync {
    /// Parse a string into its fields, left to right.
    fn fields(&self, string: &str) -> Vec<Field>;

    /// True only when the entire string is exactly one well-formed field
    /// token.
    fn is_field(&self, string: &str) -> bool;

    /// Render a name in field syntax.
    fn format(&self, name: &str) -> String;

    /// True when at least one field in the string is marked resolve-once.
    /// This is the signal that triggers the lazy walk transformation.
    fn needs_walk(&self, value: &str) -> bool {
        self.fields(value).iter().any(Field::resolve_once)
    }

    /// True when any string in the list needs the walk transformation.
    fn needs_walk_list(&self, values: &[String]) -> bool {
        values.iter().any(|value| self.needs_walk(value))
    }
}
