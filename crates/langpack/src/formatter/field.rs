/// A parsed occurrence of a template placeholder inside a string.
///
/// Fields are immutable value objects produced fresh by every tokenization
/// call. `raw` is the exact substring to replace; `name` is the lower-cased
/// identifier used for lookup; `placeholder` is the literal substituted when
/// resolution fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    raw: String,
    name: String,
    placeholder: String,
    resolve_once: bool,
    package_scope: bool,
}

impl Field {
    /// Assemble a parsed field. Formatters normalize `name` to lower-case.
    pub fn new(
        raw: impl Into<String>,
        name: impl Into<String>,
        placeholder: impl Into<String>,
        resolve_once: bool,
        package_scope: bool,
    ) -> Self {
        Self {
            raw: raw.into(),
            name: name.into(),
            placeholder: placeholder.into(),
            resolve_once,
            package_scope,
        }
    }

    /// The exact substring this field occupies in the source string.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The lower-cased lookup name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The literal used when the field cannot be resolved.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// True when the field is substituted once during the walk pass rather
    /// than at call time.
    pub fn resolve_once(&self) -> bool {
        self.resolve_once
    }

    /// True when lookups for this field start at the package scope instead
    /// of the enclosing scope.
    pub fn package_scope(&self) -> bool {
        self.package_scope
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
