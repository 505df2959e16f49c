use crate::types::Value;

/// A key → value pair used to override fields at call time.
///
/// Keys are matched against field names case-insensitively by the
/// processor.
///
/// # Example
///
/// ```
/// use langpack::LangArg;
///
/// let arg = LangArg::new("name", "Sam");
/// assert_eq!(arg.key, "name");
/// assert_eq!(arg.value.to_string(), "Sam");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LangArg {
    /// The field name to match.
    pub key: String,

    /// The value substituted for the field.
    pub value: Value,
}

impl LangArg {
    /// Create a new argument from any value convertible to [`Value`].
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
