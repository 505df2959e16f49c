//! The pack: per-language locale files plus the resolution algorithm.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::PathBuf;

use bon::Builder;
use tracing::warn;

use crate::document::{SEPARATOR, Section};
use crate::formatter::{FieldFormatter, PercentFormatter};
use crate::global;
use crate::pack::complex::{Complex, ComplexLoader, DefinitionWalker};
use crate::pack::definition::{Definition, DefinitionValue, Resolved};
use crate::pack::error::LoadError;
use crate::pack::group::{LoadContext, ScopePath};
use crate::pack::locale_file::LocaleFile;
use crate::pack::pool::{POOL_TYPE, pool_loader};
use crate::pack::processor::{DefaultProcessor, LangProcessor};
use crate::types::{LangArg, Language, Value};

/// Hard ceiling on nested lookups triggered by field substitution.
///
/// Definitions can reference each other at call time; past this depth the
/// chain is reported as a miss so mutual references terminate.
const MAX_PROCESS_DEPTH: usize = 64;

/// A registry of localized definitions, resolved per language with
/// scope-sensitive fallback.
///
/// A pack owns one [`LocaleFile`] per loaded language, the field grammar
/// ([`FieldFormatter`]), the call-time substitution strategy
/// ([`LangProcessor`]) and the complex-value loader registry. Queries that
/// miss a non-global pack are retried against the process-wide global pack.
///
/// # Example
///
/// ```no_run
/// use langpack::{LangPack, Language, args};
///
/// let mut pack = LangPack::builder().dir("lang").build();
/// pack.append("mypack").unwrap();
/// let text = pack.get_string("menu.title", Language::English, None, &args![]);
/// ```
#[derive(Builder)]
pub struct LangPack {
    /// Directory pack documents and imports are resolved against.
    #[builder(into)]
    dir: PathBuf,

    /// Language used by the no-argument convenience accessors.
    #[builder(default = Language::English)]
    default_language: Language,

    /// Field grammar. Defaults to the `%name%` syntax.
    #[builder(default = Box::new(PercentFormatter))]
    formatter: Box<dyn FieldFormatter>,

    /// Call-time substitution strategy.
    #[builder(default = Box::new(DefaultProcessor))]
    processor: Box<dyn LangProcessor>,

    /// Marks the distinguished process-wide pack, which never falls back
    /// further.
    #[builder(default)]
    global: bool,

    /// Loaded locale files, one per language.
    #[builder(skip)]
    files: BTreeMap<Language, LocaleFile>,

    /// Complex-value loaders keyed by lower-cased type name.
    #[builder(skip = default_loaders())]
    loaders: BTreeMap<String, Box<dyn ComplexLoader>>,
}

fn default_loaders() -> BTreeMap<String, Box<dyn ComplexLoader>> {
    let mut loaders: BTreeMap<String, Box<dyn ComplexLoader>> = BTreeMap::new();
    loaders.insert(POOL_TYPE.to_string(), Box::new(pool_loader));
    loaders
}

impl LangPack {
    // =========================================================================
    // Accessors
    // =========================================================================

    /// The pack directory.
    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }

    /// The language used by the convenience accessors.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// The field grammar in use.
    pub fn formatter(&self) -> &dyn FieldFormatter {
        self.formatter.as_ref()
    }

    /// The call-time substitution strategy in use.
    pub fn processor(&self) -> &dyn LangProcessor {
        self.processor.as_ref()
    }

    /// True for the process-wide global pack.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// The locale file loaded for exactly this language, if any.
    pub fn file(&self, language: Language) -> Option<&LocaleFile> {
        self.files.get(&language)
    }

    /// Loaded locale files in language order.
    pub fn files(&self) -> impl Iterator<Item = &LocaleFile> {
        self.files.values()
    }

    /// The language whose file serves queries for `language`: itself when
    /// loaded, else its single-hop static fallback.
    fn file_language(&self, language: Language) -> Option<Language> {
        if self.files.contains_key(&language) {
            return Some(language);
        }
        language
            .fallback()
            .filter(|fallback| self.files.contains_key(fallback))
    }

    fn file_mut(&mut self, language: Language) -> &mut LocaleFile {
        self.files
            .entry(language)
            .or_insert_with(|| LocaleFile::runtime(language))
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load every document named `{name}_{abbreviation}.yml` under the pack
    /// directory, one per known language, then run the walk pass.
    ///
    /// Languages already loaded receive the new document as an append;
    /// others get a fresh locale file backed by the path.
    pub fn append(&mut self, name: &str) -> Result<(), LoadError> {
        for &language in Language::ALL {
            let path = self
                .dir
                .join(format!("{name}_{}.yml", language.abbreviation()));
            if !path.exists() {
                continue;
            }
            let ctx = LoadContext {
                dir: &self.dir,
                loaders: &self.loaders,
            };
            match self.files.entry(language) {
                Entry::Occupied(mut entry) => entry.get_mut().append_path(&path, &ctx)?,
                Entry::Vacant(entry) => {
                    let mut file = LocaleFile::from_path(language, path)?;
                    file.load(&ctx)?;
                    entry.insert(file);
                }
            }
        }
        self.walk();
        Ok(())
    }

    /// Parse an in-memory document and merge it into the file for
    /// `language`, then run the walk pass.
    pub fn append_str(&mut self, language: Language, content: &str) -> Result<(), LoadError> {
        let section = Section::from_yaml_str(language.abbreviation(), content)?;
        let ctx = LoadContext {
            dir: &self.dir,
            loaders: &self.loaders,
        };
        self.files
            .entry(language)
            .or_insert_with(|| LocaleFile::runtime(language))
            .append_section(&section, &ctx);
        self.walk();
        Ok(())
    }

    /// Clear a language and re-read its backing file, then run the walk
    /// pass. Errors when the language was never loaded from disk.
    pub fn reload(&mut self, language: Language) -> Result<(), LoadError> {
        let ctx = LoadContext {
            dir: &self.dir,
            loaders: &self.loaders,
        };
        match self.files.get_mut(&language) {
            Some(file) => file.load(&ctx)?,
            None => return Err(LoadError::NoPathForReload { language }),
        }
        self.walk();
        Ok(())
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Locate a definition, trying the process-wide global pack after a
    /// local miss.
    ///
    /// The lookup order is: the query re-issued under every ancestor of
    /// `context` (longest prefix first), then the bare query, all against
    /// the file for `language` (or its single-hop fallback). Non-global
    /// packs repeat the whole sequence against the global pack.
    pub fn resolve(
        &self,
        query: &str,
        language: Language,
        context: Option<&ScopePath>,
    ) -> Option<Resolved> {
        if let Some(found) = self.resolve_local(query, language, context) {
            return Some(found);
        }
        if self.global {
            return None;
        }
        global::with_global(|pack| pack.resolve_local(query, language, context))
    }

    /// Locate a definition in this pack only (no global fallback).
    pub fn resolve_local(
        &self,
        query: &str,
        language: Language,
        context: Option<&ScopePath>,
    ) -> Option<Resolved> {
        let file_language = self.file_language(language)?;
        let group = self.files.get(&file_language)?.group();

        if let Some(scope) = context {
            for ancestor in scope.ancestors() {
                let widened = format!("{ancestor}{SEPARATOR}{query}");
                if let Some(definition) = group.resolve(&widened) {
                    return Some(Resolved::snapshot(definition));
                }
            }
        }
        group.resolve(query).map(Resolved::snapshot)
    }

    /// Resolve a query and process the result with the given arguments.
    ///
    /// The processor runs in the language and scope the definition was
    /// found under, so nested references stay relative to their owner.
    pub fn get_string(
        &self,
        query: &str,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
    ) -> Option<String> {
        self.get_string_depth(query, language, context, args, 0)
    }

    /// [`LangPack::get_string`] with an explicit nesting depth.
    ///
    /// Called by processors for lookups triggered from inside a field
    /// substitution; chains deeper than the internal ceiling report a miss.
    pub fn get_string_depth(
        &self,
        query: &str,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> Option<String> {
        if depth > MAX_PROCESS_DEPTH {
            warn!(query, depth, "reference chain too deep; reporting a miss");
            return None;
        }
        let resolved = self.resolve(query, language, context)?;
        let scope = resolved.scope;
        Some(match resolved.value {
            DefinitionValue::Literal(text) => {
                self.process_text(&text, resolved.language, scope.as_ref(), args, depth)
            }
            DefinitionValue::Complex(value) => {
                value.process(self, resolved.language, scope.as_ref(), args, depth)
            }
        })
    }

    /// Resolve a query as a list: the textual value split on newlines,
    /// each line processed independently.
    pub fn get_list(
        &self,
        query: &str,
        language: Language,
        args: &[LangArg],
    ) -> Option<Vec<String>> {
        let resolved = self.resolve(query, language, None)?;
        let scope = resolved.scope;
        let text = resolved.value.to_text();
        Some(
            text.lines()
                .map(|line| self.process_text(line, resolved.language, scope.as_ref(), args, 0))
                .collect(),
        )
    }

    /// [`LangPack::get_string`] in the default language with no context.
    pub fn get(&self, query: &str, args: &[LangArg]) -> Option<String> {
        self.get_string(query, self.default_language, None, args)
    }

    /// True when the query resolves in this pack for the language (or its
    /// fallback file). Does not consult the global pack.
    pub fn contains(&self, language: Language, query: &str) -> bool {
        self.resolve_local(query, language, None).is_some()
    }

    /// True when the query resolves to a complex value in this pack.
    pub fn is_complex(&self, language: Language, query: &str) -> bool {
        self.resolve_local(query, language, None)
            .is_some_and(|resolved| resolved.value.is_complex())
    }

    pub(crate) fn process_text(
        &self,
        text: &str,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> String {
        self.processor
            .process(text, self, language, context, args, depth)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Assign a literal value under a dotted key, creating the locale file
    /// and any intermediate groups on demand.
    pub fn set(&mut self, language: Language, key: &str, value: impl Into<Value>) {
        let definition = Definition::literal(language, Some(scope_of(key)), value.into().to_string());
        self.file_mut(language).group_mut().set(key, definition);
    }

    /// Assign a complex value under a dotted key.
    pub fn set_complex(&mut self, language: Language, key: &str, value: Box<dyn Complex>) {
        let definition = Definition::complex(language, Some(scope_of(key)), value);
        self.file_mut(language).group_mut().set(key, definition);
    }

    /// Remove the definition at a dotted key. Returns true when something
    /// was removed.
    pub fn remove(&mut self, language: Language, key: &str) -> bool {
        self.files
            .get_mut(&language)
            .is_some_and(|file| file.group_mut().remove(key))
    }

    // =========================================================================
    // Loader registry
    // =========================================================================

    /// Register a complex-value loader under a type name. Replaces any
    /// previous loader for the same name.
    pub fn register_loader(
        &mut self,
        type_name: impl Into<String>,
        loader: impl ComplexLoader + 'static,
    ) {
        self.loaders
            .insert(type_name.into().to_lowercase(), Box::new(loader));
    }

    /// Remove the loader for a type name. Returns true when one existed.
    pub fn unregister_loader(&mut self, type_name: &str) -> bool {
        self.loaders.remove(&type_name.to_lowercase()).is_some()
    }

    /// The registered loader for a type name, if any.
    pub fn loader(&self, type_name: &str) -> Option<&dyn ComplexLoader> {
        self.loaders
            .get(&type_name.to_lowercase())
            .map(Box::as_ref)
    }

    /// True when a loader is registered for the type name.
    pub fn contains_loader(&self, type_name: &str) -> bool {
        self.loaders.contains_key(&type_name.to_lowercase())
    }

    // =========================================================================
    // Walk pass
    // =========================================================================

    /// Substitute every resolve-once field across the whole pack.
    ///
    /// The pass first resets all definitions to their raw state, then
    /// transforms each one exactly once. Dependencies are walked before
    /// their dependents, so forward references see final text; circular
    /// references are broken with a diagnostic and the target's raw text.
    pub fn walk(&mut self) {
        self.unwalk();
        let mut locations = Vec::new();
        for (language, file) in &self.files {
            let mut paths = Vec::new();
            file.group().collect_field_paths(&mut paths);
            locations.extend(paths.into_iter().map(|path| (*language, path)));
        }
        let mut stack = Vec::new();
        for (language, path) in locations {
            self.walk_definition(language, &path, &mut stack);
        }
    }

    /// Reset every definition in the pack to its raw, pre-substitution
    /// state. Idempotent.
    pub fn unwalk(&mut self) {
        for file in self.files.values_mut() {
            file.group_mut().unwalk_all();
        }
    }

    /// Walk the definition at a known location, walking its resolve-once
    /// dependencies first.
    fn walk_definition(
        &mut self,
        language: Language,
        path: &str,
        stack: &mut Vec<(Language, String)>,
    ) {
        let Some(definition) = self
            .files
            .get(&language)
            .and_then(|file| file.group().resolve(path))
        else {
            return;
        };
        if definition.walked() {
            return;
        }
        if !definition.needs_walk(self.formatter.as_ref()) {
            if let Some(definition) = self
                .files
                .get_mut(&language)
                .and_then(|file| file.group_mut().resolve_mut(path))
            {
                definition.mark_walked(None);
            }
            return;
        }

        let location = (language, path.to_string());
        if stack.contains(&location) {
            warn!(%language, path, "circular resolve-once reference; using raw text");
            return;
        }

        let raw = definition.raw().clone();
        let scope = definition.scope().cloned();

        stack.push(location);
        let transformed = match raw {
            DefinitionValue::Literal(text) => {
                DefinitionValue::Literal(self.walk_text(&text, language, scope.as_ref(), stack))
            }
            DefinitionValue::Complex(value) => {
                let mut walker = PackWalker {
                    pack: self,
                    language,
                    scope,
                    stack,
                };
                DefinitionValue::Complex(value.walk(&mut walker))
            }
        };
        stack.pop();

        if let Some(definition) = self
            .files
            .get_mut(&language)
            .and_then(|file| file.group_mut().resolve_mut(path))
        {
            definition.mark_walked(Some(transformed));
        }
    }

    /// Substitute the resolve-once fields of one string. Targets that do
    /// not resolve degrade to their placeholders; non-resolve fields are
    /// left for the call-time processor.
    fn walk_text(
        &mut self,
        text: &str,
        language: Language,
        context: Option<&ScopePath>,
        stack: &mut Vec<(Language, String)>,
    ) -> String {
        let fields = self.formatter.fields(text);
        let mut output = text.to_string();
        for field in fields {
            if !field.resolve_once() {
                continue;
            }
            let scope = if field.package_scope() { None } else { context };
            let substitution = self
                .walk_resolve(field.name(), language, scope, stack)
                .unwrap_or_else(|| field.placeholder().to_string());
            output = output.replace(field.raw(), &substitution);
        }
        output
    }

    /// Walk a field's target first, then read its current text.
    ///
    /// Targets missing locally are read from the process global pack, same
    /// as call-time resolution. The global walks when its own content
    /// loads, so its current value is used as-is.
    fn walk_resolve(
        &mut self,
        query: &str,
        language: Language,
        context: Option<&ScopePath>,
        stack: &mut Vec<(Language, String)>,
    ) -> Option<String> {
        if let Some((file_language, path)) = self.locate(query, language, context) {
            self.walk_definition(file_language, &path, stack);
            let definition = self.files.get(&file_language)?.group().resolve(&path)?;
            return Some(definition.current().to_text());
        }
        if self.global {
            return None;
        }
        global::with_global(|pack| {
            pack.resolve_local(query, language, context)
                .map(|resolved| resolved.value.to_text())
        })
    }

    /// The concrete location a query resolves to, using the same ancestor
    /// widening and language fallback as [`LangPack::resolve_local`].
    fn locate(
        &self,
        query: &str,
        language: Language,
        context: Option<&ScopePath>,
    ) -> Option<(Language, String)> {
        let file_language = self.file_language(language)?;
        let group = self.files.get(&file_language)?.group();

        if let Some(scope) = context {
            for ancestor in scope.ancestors() {
                let widened = format!("{ancestor}{SEPARATOR}{query}");
                if group.resolve(&widened).is_some() {
                    return Some((file_language, widened));
                }
            }
        }
        group
            .resolve(query)
            .map(|_| (file_language, query.to_string()))
    }
}

/// The parent scope a dotted key assigns into; root for plain keys.
fn scope_of(key: &str) -> ScopePath {
    match key.rsplit_once(SEPARATOR) {
        Some((parent, _)) => ScopePath::parse(parent),
        None => ScopePath::root(),
    }
}

impl std::fmt::Debug for LangPack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LangPack")
            .field("dir", &self.dir)
            .field("default_language", &self.default_language)
            .field("global", &self.global)
            .field("files", &self.files.keys().collect::<Vec<_>>())
            .field("loaders", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Adapter giving [`Complex::walk`] implementations access to the pack's
/// string substitution, carrying the owning definition's scope.
struct PackWalker<'a> {
    pack: &'a mut LangPack,
    language: Language,
    scope: Option<ScopePath>,
    stack: &'a mut Vec<(Language, String)>,
}

impl DefinitionWalker for PackWalker<'_> {
    fn walk_string(&mut self, raw: &str) -> String {
        self.pack
            .walk_text(raw, self.language, self.scope.as_ref(), self.stack)
    }
}
