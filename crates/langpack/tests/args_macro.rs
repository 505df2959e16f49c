//! Tests for the `args!` macro and value conversions.

use langpack::{LangArg, Language, Value, args};

#[test]
fn test_empty() {
    let arguments = args![];
    assert!(arguments.is_empty());
}

#[test]
fn test_mixed_values() {
    let arguments = args!["name" => "Sam", "count" => 3, "ratio" => 0.5, "on" => true];
    assert_eq!(arguments.len(), 4);
    assert_eq!(arguments[0], LangArg::new("name", "Sam"));
    assert_eq!(arguments[1].value, Value::Number(3));
    assert_eq!(arguments[2].value, Value::Float(0.5));
    assert_eq!(arguments[3].value, Value::Bool(true));
}

#[test]
fn test_trailing_comma() {
    let arguments = args!["a" => 1, "b" => 2,];
    assert_eq!(arguments.len(), 2);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::from("text").to_string(), "text");
    assert_eq!(Value::from(7).to_string(), "7");
    assert_eq!(Value::from(false).to_string(), "false");
    assert_eq!(
        Value::from(vec!["a".to_string(), "b".to_string()]).to_string(),
        "a\nb"
    );
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::from(7).as_number(), Some(7));
    assert_eq!(Value::from("x").as_number(), None);
    assert_eq!(Value::from("x").as_string(), Some("x"));
}

#[test]
fn test_language_abbreviations_round_trip() {
    for &language in Language::ALL {
        assert_eq!(
            Language::from_abbreviation(language.abbreviation()),
            Some(language)
        );
    }
}

#[test]
fn test_fallback_is_single_hop() {
    // Every fallback target is a generic language with no further hop.
    for &language in Language::ALL {
        if let Some(fallback) = language.fallback() {
            assert_eq!(fallback.fallback(), None);
        }
    }
}
