//! Localized, template-driven text resolution.
//!
//! Definitions are loaded from per-language YAML documents into a tree of
//! named scopes, then queried with dotted paths. Template strings carry
//! `%field%` placeholders substituted either once at load time (the walk
//! pass) or at query time from caller arguments and further pack lookups.
//! Queries that miss a pack retry against a process-wide global pack.
//!
//! # Example
//!
//! ```no_run
//! use langpack::{LangPack, Language, args};
//!
//! let mut pack = LangPack::builder().dir("lang").build();
//! pack.append("mypack").unwrap();
//!
//! let greeting = pack.get_string(
//!     "menu.greeting",
//!     Language::English,
//!     None,
//!     &args!["player" => "Sam"],
//! );
//! ```

pub mod document;
pub mod formatter;
pub mod global;
pub mod pack;
pub mod types;

pub use document::{DocValue, DocumentError, SEPARATOR, Section};
pub use formatter::{Field, FieldFormatter, PercentFormatter};
pub use pack::{
    Complex, ComplexLoader, DefaultProcessor, Definition, DefinitionValue, DefinitionWalker,
    EmptyPoolError, Group, GroupError, LangCache, LangPack, LangProcessor, LoadError, LocaleFile,
    Metadata, PoolMode, Resolved, ScopePath, StringPool,
};
pub use types::{LangArg, Language, Value};

/// Creates a `Vec<LangArg>` from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats, booleans,
/// strings and string lists can be passed directly.
///
/// # Example
///
/// ```
/// use langpack::args;
///
/// let arguments = args!["player" => "Sam", "count" => 3];
/// assert_eq!(arguments.len(), 2);
/// assert_eq!(arguments[0].key, "player");
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::LangArg>::new()
    };
    [ $($key:expr => $value:expr),+ $(,)? ] => {
        ::std::vec![
            $($crate::LangArg::new($key, $value)),+
        ]
    };
}
