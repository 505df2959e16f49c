//! Query-result memoization over a pack.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::pack::lang_pack::LangPack;
use crate::types::{LangArg, Language};

/// A memoizing view over a [`LangPack`].
///
/// Results are keyed by language and lower-cased query; arguments are only
/// applied on the filling lookup, so cache a query once per argument set
/// that matters. All methods take `&mut self`; there is no interior
/// mutability, which keeps the cache trivially `Send`.
///
/// A missed string query caches the lower-cased query itself, making the
/// miss visible in rendered output without ever failing.
#[derive(Debug)]
pub struct LangCache<'a> {
    pack: &'a LangPack,
    strings: BTreeMap<(Language, String), String>,
    lists: BTreeMap<(Language, String), Vec<String>>,
}

impl<'a> LangCache<'a> {
    pub fn new(pack: &'a LangPack) -> Self {
        Self {
            pack,
            strings: BTreeMap::new(),
            lists: BTreeMap::new(),
        }
    }

    /// The pack this cache reads through.
    pub fn pack(&self) -> &LangPack {
        self.pack
    }

    /// The processed string for a query, memoized per (language, query).
    pub fn get_string(&mut self, query: &str, language: Language, args: &[LangArg]) -> &str {
        let key = (language, query.to_lowercase());
        match self.strings.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = self
                    .pack
                    .get_string(query, language, None, args)
                    .unwrap_or_else(|| entry.key().1.clone());
                entry.insert(value)
            }
        }
    }

    /// The processed list for a query, memoized per (language, query).
    /// Misses cache the empty list.
    pub fn get_list(&mut self, query: &str, language: Language, args: &[LangArg]) -> &[String] {
        let key = (language, query.to_lowercase());
        match self.lists.entry(key) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let value = self.pack.get_list(query, language, args).unwrap_or_default();
                entry.insert(value)
            }
        }
    }

    /// True when a string result is cached for this query.
    pub fn contains_string(&self, query: &str, language: Language) -> bool {
        self.strings.contains_key(&(language, query.to_lowercase()))
    }

    /// True when a list result is cached for this query.
    pub fn contains_list(&self, query: &str, language: Language) -> bool {
        self.lists.contains_key(&(language, query.to_lowercase()))
    }

    /// Evict cached results for a language: the named queries, or every
    /// entry for the language when `names` is empty.
    pub fn clear(&mut self, language: Language, names: &[&str]) {
        if names.is_empty() {
            self.strings.retain(|(cached, _), _| *cached != language);
            self.lists.retain(|(cached, _), _| *cached != language);
            return;
        }
        for name in names {
            let key = (language, name.to_lowercase());
            self.strings.remove(&key);
            self.lists.remove(&key);
        }
    }

    /// Evict everything.
    pub fn clear_all(&mut self) {
        self.strings.clear();
        self.lists.clear();
    }

    /// Number of cached results (strings plus lists).
    pub fn len(&self) -> usize {
        self.strings.len() + self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.lists.is_empty()
    }
}
