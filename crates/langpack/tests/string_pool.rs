//! Tests for string pools and their document loader.

use langpack::{Complex, DocValue, PoolMode, Section, StringPool};

fn pool_of(mode: PoolMode, strings: &[&str]) -> StringPool {
    StringPool::new(mode, strings.iter().map(|s| (*s).to_string()).collect())
}

// =========================================================================
// Polling
// =========================================================================

#[test]
fn test_sequential_wraps() {
    let pool = pool_of(PoolMode::Sequential, &["a", "b", "c"]);
    assert_eq!(pool.poll().unwrap(), "a");
    assert_eq!(pool.poll().unwrap(), "b");
    assert_eq!(pool.poll().unwrap(), "c");
    assert_eq!(pool.poll().unwrap(), "a");
}

#[test]
fn test_sequential_reversed_wraps() {
    let pool = pool_of(PoolMode::SequentialReversed, &["a", "b", "c"]);
    assert_eq!(pool.poll().unwrap(), "c");
    assert_eq!(pool.poll().unwrap(), "b");
    assert_eq!(pool.poll().unwrap(), "a");
    assert_eq!(pool.poll().unwrap(), "c");
}

#[test]
fn test_random_stays_within_pool() {
    let pool = pool_of(PoolMode::Random, &["a", "b"]);
    for _ in 0..32 {
        let polled = pool.poll().unwrap();
        assert!(polled == "a" || polled == "b");
    }
}

#[test]
fn test_empty_pool_poll_fails() {
    let pool = pool_of(PoolMode::Sequential, &[]);
    assert!(pool.poll().is_err());
}

#[test]
fn test_empty_pool_get_is_empty_string() {
    let pool = pool_of(PoolMode::Random, &[]);
    assert_eq!(pool.get(), "");
}

#[test]
fn test_single_entry_repeats() {
    let pool = pool_of(PoolMode::Sequential, &["only"]);
    assert_eq!(pool.poll().unwrap(), "only");
    assert_eq!(pool.poll().unwrap(), "only");
}

// =========================================================================
// Mutation
// =========================================================================

#[test]
fn test_add_resets_sequential_cursor() {
    let mut pool = pool_of(PoolMode::Sequential, &["a", "b"]);
    assert_eq!(pool.poll().unwrap(), "a");
    pool.add("c");
    assert_eq!(pool.poll().unwrap(), "a");
    assert_eq!(pool.poll().unwrap(), "b");
    assert_eq!(pool.poll().unwrap(), "c");
}

#[test]
fn test_add_resets_reversed_cursor_to_last() {
    let mut pool = pool_of(PoolMode::SequentialReversed, &["a", "b"]);
    assert_eq!(pool.poll().unwrap(), "b");
    pool.add("c");
    assert_eq!(pool.poll().unwrap(), "c");
}

// =========================================================================
// Loading
// =========================================================================

#[test]
fn test_from_section() {
    let mut section = Section::new("announcements");
    section.insert("type", DocValue::String("pool".to_string()));
    section.insert("mode", DocValue::String("sequential".to_string()));
    section.insert(
        "pool",
        DocValue::List(vec![
            DocValue::String("one".to_string()),
            DocValue::String("two".to_string()),
        ]),
    );

    let pool = StringPool::from_section(&section);
    assert_eq!(pool.mode(), PoolMode::Sequential);
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.poll().unwrap(), "one");
}

#[test]
fn test_unknown_mode_defaults_to_random() {
    assert_eq!(PoolMode::from_name("sideways"), PoolMode::Random);
}

#[test]
fn test_mode_names() {
    assert_eq!(PoolMode::from_name("Random"), PoolMode::Random);
    assert_eq!(PoolMode::from_name("SEQUENTIAL"), PoolMode::Sequential);
    assert_eq!(
        PoolMode::from_name("sequential_reversed"),
        PoolMode::SequentialReversed
    );
}

#[test]
fn test_missing_pool_key_is_empty() {
    let mut section = Section::new("empty");
    section.insert("type", DocValue::String("pool".to_string()));
    let pool = StringPool::from_section(&section);
    assert!(pool.is_empty());
}
