//! Packs: localized definition registries and their resolution machinery.

pub mod cache;
pub mod complex;
pub mod definition;
pub mod error;
pub mod group;
pub mod lang_pack;
pub mod locale_file;
pub mod pool;
pub mod processor;

pub use cache::LangCache;
pub use complex::{Complex, ComplexLoader, DefinitionWalker};
pub use definition::{Definition, DefinitionValue, Resolved};
pub use error::{EmptyPoolError, GroupError, LoadError};
pub use group::{Group, METADATA_KEY, Metadata, ScopePath};
pub use lang_pack::LangPack;
pub use locale_file::LocaleFile;
pub use pool::{POOL_TYPE, PoolMode, StringPool};
pub use processor::{DefaultProcessor, LangProcessor};
