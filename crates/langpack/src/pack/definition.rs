//! Definitions: the smallest resolvable unit, and their walk state.

use crate::formatter::FieldFormatter;
use crate::pack::complex::Complex;
use crate::pack::group::ScopePath;
use crate::types::Language;

/// The value held by a definition: literal text or a complex object.
///
/// The variant is decided once at ingestion; call sites match on the tag
/// instead of inspecting types at run time.
#[derive(Debug)]
pub enum DefinitionValue {
    /// Literal text (lists are stored as `\n`-joined lines).
    Literal(String),

    /// A pluggable complex value.
    Complex(Box<dyn Complex>),
}

impl DefinitionValue {
    /// Render the value as flat text. Complex values answer via
    /// [`Complex::get`].
    pub fn to_text(&self) -> String {
        match self {
            DefinitionValue::Literal(text) => text.clone(),
            DefinitionValue::Complex(value) => value.get(),
        }
    }

    /// True when the value is a complex object.
    pub fn is_complex(&self) -> bool {
        matches!(self, DefinitionValue::Complex(_))
    }
}

impl Clone for DefinitionValue {
    fn clone(&self) -> Self {
        match self {
            DefinitionValue::Literal(text) => DefinitionValue::Literal(text.clone()),
            DefinitionValue::Complex(value) => DefinitionValue::Complex(value.clone_box()),
        }
    }
}

/// Walk state of a definition: raw as loaded, or resolved by exactly one
/// transformation pass.
#[derive(Debug, Clone)]
enum WalkState {
    /// As loaded; the walk pass has not run.
    Raw,
    /// Walked. `None` when the raw value needed no transformation.
    Resolved(Option<DefinitionValue>),
}

/// A named, typed entry in a scope.
///
/// A definition owns its raw value (as loaded) and, once walked, a
/// transformed value with all resolve-once fields substituted. `unwalk`
/// always restores the raw state, so a pack can be reloaded from source
/// without leaking prior transformations.
#[derive(Debug, Clone)]
pub struct Definition {
    language: Language,
    scope: Option<ScopePath>,
    raw: DefinitionValue,
    state: WalkState,
}

impl Definition {
    /// Create a literal-text definition.
    pub fn literal(
        language: Language,
        scope: Option<ScopePath>,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            language,
            scope,
            raw: DefinitionValue::Literal(raw.into()),
            state: WalkState::Raw,
        }
    }

    /// Create a complex definition.
    pub fn complex(language: Language, scope: Option<ScopePath>, value: Box<dyn Complex>) -> Self {
        Self {
            language,
            scope,
            raw: DefinitionValue::Complex(value),
            state: WalkState::Raw,
        }
    }

    /// The language of the file this definition belongs to.
    pub fn language(&self) -> Language {
        self.language
    }

    /// The owning scope's path; `None` for scope-less definitions.
    pub fn scope(&self) -> Option<&ScopePath> {
        self.scope.as_ref()
    }

    /// The raw value as loaded.
    pub fn raw(&self) -> &DefinitionValue {
        &self.raw
    }

    /// The current value: transformed when walked, raw otherwise.
    pub fn current(&self) -> &DefinitionValue {
        match &self.state {
            WalkState::Resolved(Some(transformed)) => transformed,
            WalkState::Resolved(None) | WalkState::Raw => &self.raw,
        }
    }

    /// True once the walk pass has visited this definition.
    pub fn walked(&self) -> bool {
        matches!(self.state, WalkState::Resolved(_))
    }

    /// True when the raw value contains resolve-once fields.
    pub fn needs_walk(&self, formatter: &dyn FieldFormatter) -> bool {
        match &self.raw {
            DefinitionValue::Literal(text) => formatter.needs_walk(text),
            DefinitionValue::Complex(value) => value.needs_walk(formatter),
        }
    }

    /// Record the outcome of a walk pass.
    pub(crate) fn mark_walked(&mut self, transformed: Option<DefinitionValue>) {
        self.state = WalkState::Resolved(transformed);
    }

    /// Reset to the raw, pre-substitution state. Idempotent.
    pub fn unwalk(&mut self) {
        self.state = WalkState::Raw;
    }
}

/// A resolution snapshot: the language and scope the definition was found
/// under, plus a clone of its current value.
///
/// Snapshots keep query results independent of the registry they came from,
/// which matters when a value is found in the process-wide global pack.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// Language of the file the definition was found in.
    pub language: Language,
    /// Path of the owning scope, if any.
    pub scope: Option<ScopePath>,
    /// The definition's current (post-walk) value.
    pub value: DefinitionValue,
}

impl Resolved {
    pub(crate) fn snapshot(definition: &Definition) -> Self {
        Self {
            language: definition.language(),
            scope: definition.scope().cloned(),
            value: definition.current().clone(),
        }
    }
}
