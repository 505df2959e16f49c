/// A runtime value that can be stored in a pack entry or passed as a
/// call-time argument.
///
/// Lists render as one string with lines separated by `\n`, matching the
/// textual representation used for stored list entries.
///
/// # Example
///
/// ```
/// use langpack::Value;
///
/// let count: Value = 42.into();
/// assert_eq!(count.to_string(), "42");
///
/// let lines: Value = vec!["a".to_string(), "b".to_string()].into();
/// assert_eq!(lines.to_string(), "a\nb");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A boolean.
    Bool(bool),

    /// A string value.
    String(String),

    /// A list of strings, rendered as `\n`-joined lines.
    List(Vec<String>),
}

impl Value {
    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(lines) => Some(lines),
            _ => None,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::String(s) => write!(f, "{s}"),
            Value::List(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as i64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<String>> for Value {
    fn from(lines: Vec<String>) -> Self {
        Value::List(lines)
    }
}

impl From<&[&str]> for Value {
    fn from(lines: &[&str]) -> Self {
        Value::List(lines.iter().map(|line| (*line).to_string()).collect())
    }
}
