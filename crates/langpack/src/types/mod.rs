//! Core value types shared across the pack.

mod arg;
mod language;
mod value;

pub use arg::LangArg;
pub use language::Language;
pub use value::Value;
