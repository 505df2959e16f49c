//! Tests for the memoizing query cache.

use langpack::{LangCache, LangPack, Language, args};
use pretty_assertions::assert_eq;

fn pack_from(content: &str) -> LangPack {
    let mut pack = LangPack::builder().dir(".").build();
    pack.append_str(Language::English, content).unwrap();
    pack
}

#[test]
fn test_hit_returns_cached_value() {
    let pack = pack_from("greeting: \"Hi %name%\"\n");
    let mut cache = LangCache::new(&pack);

    let first = cache
        .get_string("greeting", Language::English, &args!["name" => "Sam"])
        .to_string();
    assert_eq!(first, "Hi Sam");

    // Arguments only apply on the filling lookup.
    let second = cache.get_string("greeting", Language::English, &args!["name" => "Alex"]);
    assert_eq!(second, "Hi Sam");
}

#[test]
fn test_miss_caches_lowercased_query() {
    let pack = pack_from("a: x\n");
    let mut cache = LangCache::new(&pack);
    assert_eq!(cache.get_string("Missing.KEY", Language::English, &args![]), "missing.key");
    assert!(cache.contains_string("missing.key", Language::English));
}

#[test]
fn test_query_key_is_case_insensitive() {
    let pack = pack_from("greeting: Hello\n");
    let mut cache = LangCache::new(&pack);
    cache.get_string("Greeting", Language::English, &args![]);
    assert!(cache.contains_string("greeting", Language::English));
    assert_eq!(cache.len(), 1);
    cache.get_string("GREETING", Language::English, &args![]);
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_languages_are_cached_independently() {
    let mut pack = pack_from("greeting: Hello\n");
    pack.append_str(Language::German, "greeting: Hallo\n").unwrap();
    let mut cache = LangCache::new(&pack);

    assert_eq!(cache.get_string("greeting", Language::English, &args![]), "Hello");
    assert_eq!(cache.get_string("greeting", Language::German, &args![]), "Hallo");
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_get_list() {
    let pack = pack_from("motd:\n  - one\n  - two\n");
    let mut cache = LangCache::new(&pack);
    assert_eq!(
        cache.get_list("motd", Language::English, &args![]),
        ["one".to_string(), "two".to_string()]
    );
    assert!(cache.contains_list("motd", Language::English));
}

#[test]
fn test_list_miss_caches_empty() {
    let pack = pack_from("a: x\n");
    let mut cache = LangCache::new(&pack);
    assert!(cache.get_list("missing", Language::English, &args![]).is_empty());
    assert!(cache.contains_list("missing", Language::English));
}

// =========================================================================
// Eviction
// =========================================================================

#[test]
fn test_clear_named_queries() {
    let pack = pack_from("a: 1\nb: 2\n");
    let mut cache = LangCache::new(&pack);
    cache.get_string("a", Language::English, &args![]);
    cache.get_string("b", Language::English, &args![]);

    cache.clear(Language::English, &["a"]);
    assert!(!cache.contains_string("a", Language::English));
    assert!(cache.contains_string("b", Language::English));
}

#[test]
fn test_clear_whole_language() {
    let mut pack = pack_from("a: 1\n");
    pack.append_str(Language::German, "a: eins\n").unwrap();
    let mut cache = LangCache::new(&pack);
    cache.get_string("a", Language::English, &args![]);
    cache.get_string("a", Language::German, &args![]);

    cache.clear(Language::English, &[]);
    assert!(!cache.contains_string("a", Language::English));
    assert!(cache.contains_string("a", Language::German));
}

#[test]
fn test_clear_all() {
    let pack = pack_from("a: 1\n");
    let mut cache = LangCache::new(&pack);
    cache.get_string("a", Language::English, &args![]);
    cache.get_list("a", Language::English, &args![]);
    assert!(!cache.is_empty());

    cache.clear_all();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
}
