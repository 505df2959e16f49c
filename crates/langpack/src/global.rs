//! The process-wide global pack.
//!
//! Every non-global pack retries missed queries against this pack, so
//! definitions loaded here act as shared defaults for the whole process.
//! The lock synchronizes load-time mutation; query traffic takes the read
//! side.

use std::sync::{LazyLock, RwLock};

use crate::pack::LangPack;

static GLOBAL_PACK: LazyLock<RwLock<LangPack>> =
    LazyLock::new(|| RwLock::new(LangPack::builder().dir(".").global(true).build()));

/// Provides read access to the global pack.
pub fn with_global<T>(f: impl FnOnce(&LangPack) -> T) -> T {
    let guard = GLOBAL_PACK.read().expect("global pack lock poisoned");
    f(&guard)
}

/// Provides write access to the global pack.
pub fn with_global_mut<T>(f: impl FnOnce(&mut LangPack) -> T) -> T {
    let mut guard = GLOBAL_PACK.write().expect("global pack lock poisoned");
    f(&mut guard)
}
