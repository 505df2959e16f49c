//! String pools: complex values yielding one of several strings per query.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use tracing::warn;

use crate::document::Section;
use crate::formatter::FieldFormatter;
use crate::pack::complex::{Complex, DefinitionWalker};
use crate::pack::error::EmptyPoolError;
use crate::pack::group::ScopePath;
use crate::pack::lang_pack::LangPack;
use crate::types::{LangArg, Language};

/// Registered type name for string pools.
pub const POOL_TYPE: &str = "pool";

/// Selection order for [`StringPool::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoolMode {
    /// Uniform random draw on every poll.
    #[default]
    Random,
    /// First to last, wrapping back to the first.
    Sequential,
    /// Last to first, wrapping back to the last.
    SequentialReversed,
}

impl PoolMode {
    /// Parse a mode name as written in documents. Unknown names fall back
    /// to [`PoolMode::Random`] with a diagnostic.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "random" => PoolMode::Random,
            "sequential" => PoolMode::Sequential,
            "sequential_reversed" | "sequential-reversed" | "reversed" => {
                PoolMode::SequentialReversed
            }
            other => {
                warn!(mode = other, "unknown pool mode; defaulting to random");
                PoolMode::Random
            }
        }
    }
}

/// An ordered pool of strings polled one at a time.
///
/// The cursor is atomic so a pool can be polled through a shared
/// reference, and shared across clones so the snapshots handed out by
/// resolution keep advancing one sequence.
#[derive(Debug)]
pub struct StringPool {
    strings: Vec<String>,
    mode: PoolMode,
    cursor: Arc<AtomicUsize>,
}

impl StringPool {
    pub fn new(mode: PoolMode, strings: Vec<String>) -> Self {
        let cursor = Arc::new(AtomicUsize::new(Self::start_index(mode, strings.len())));
        Self {
            strings,
            mode,
            cursor,
        }
    }

    /// Build a pool from its document section: a `mode` name and a `pool`
    /// string list. Both keys are optional.
    pub fn from_section(section: &Section) -> Self {
        let mode = section
            .get_string("mode")
            .map_or(PoolMode::Random, |name| PoolMode::from_name(&name));
        let strings = section.get_string_list(POOL_TYPE).unwrap_or_default();
        Self::new(mode, strings)
    }

    fn start_index(mode: PoolMode, len: usize) -> usize {
        match mode {
            PoolMode::Random | PoolMode::Sequential => 0,
            PoolMode::SequentialReversed => len.saturating_sub(1),
        }
    }

    /// The selection mode.
    pub fn mode(&self) -> PoolMode {
        self.mode
    }

    /// The pooled strings, in document order.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Append a string and reset the cursor to the mode's starting edge.
    pub fn add(&mut self, string: impl Into<String>) {
        self.strings.push(string.into());
        self.cursor.store(
            Self::start_index(self.mode, self.strings.len()),
            Ordering::Relaxed,
        );
    }

    /// Yield the next string per the selection mode.
    pub fn poll(&self) -> Result<&str, EmptyPoolError> {
        let index = self.next_index().ok_or(EmptyPoolError)?;
        Ok(&self.strings[index])
    }

    fn next_index(&self) -> Option<usize> {
        let len = self.strings.len();
        if len == 0 {
            return None;
        }
        match self.mode {
            PoolMode::Random => Some(rand::rng().random_range(0..len)),
            PoolMode::Sequential => {
                let previous = self
                    .cursor
                    .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |index| {
                        Some((index + 1) % len)
                    })
                    .unwrap_or(0);
                Some(previous % len)
            }
            PoolMode::SequentialReversed => {
                let previous = self
                    .cursor
                    .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |index| {
                        Some((index + len - 1) % len)
                    })
                    .unwrap_or(0);
                Some(previous % len)
            }
        }
    }
}

impl Complex for StringPool {
    fn type_name(&self) -> &str {
        POOL_TYPE
    }

    fn needs_walk(&self, formatter: &dyn FieldFormatter) -> bool {
        formatter.needs_walk_list(&self.strings)
    }

    fn walk(&self, walker: &mut dyn DefinitionWalker) -> Box<dyn Complex> {
        Box::new(StringPool::new(self.mode, walker.walk_list(&self.strings)))
    }

    fn process(
        &self,
        pack: &LangPack,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> String {
        pack.process_text(&self.get(), language, context, args, depth)
    }

    /// The next pooled string, or the empty string for an empty pool.
    fn get(&self) -> String {
        self.poll().map(str::to_string).unwrap_or_default()
    }

    fn clone_box(&self) -> Box<dyn Complex> {
        Box::new(StringPool {
            strings: self.strings.clone(),
            mode: self.mode,
            cursor: Arc::clone(&self.cursor),
        })
    }
}

/// The built-in loader registered under [`POOL_TYPE`].
pub(crate) fn pool_loader(section: &Section) -> Box<dyn Complex> {
    Box::new(StringPool::from_section(section))
}
