//! The percent-delimited field syntax (`%name%`) using winnow.
//!
//! Grammar: a field is a `%`-delimited token. Inside the delimiters, `!`
//! marks resolve-once, `~` marks package-scope, and an `=suffix` supplies
//! the placeholder used when resolution fails. An unclosed `%` or an empty
//! `%%` pair is literal text, never an error.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::formatter::{Field, FieldFormatter};

/// The delimiter character for the percent syntax.
const DELIMITER: char = '%';

/// Reference [`FieldFormatter`] for the `%name%` syntax.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentFormatter;

impl FieldFormatter for PercentFormatter {
    fn fields(&self, string: &str) -> Vec<Field> {
        let mut input = string;
        let bodies: Vec<Option<&str>> = match repeat(0.., token).parse_next(&mut input) {
            Ok(bodies) => bodies,
            Err(_) => return Vec::new(),
        };
        bodies.into_iter().flatten().map(parse_field).collect()
    }

    fn is_field(&self, string: &str) -> bool {
        let mut input = string;
        match field_body.parse_next(&mut input) {
            Ok(body) => !body.is_empty() && input.is_empty(),
            Err(_) => false,
        }
    }

    fn format(&self, name: &str) -> String {
        format!("{DELIMITER}{}{DELIMITER}", name.to_lowercase())
    }
}

/// One lexical token: a field body, or a literal character (`None`).
///
/// Empty `%%` pairs are consumed but produce no field, matching the
/// delimiter-toggling behavior of the syntax: a bare pair is not a field.
fn token<'i>(input: &mut &'i str) -> ModalResult<Option<&'i str>> {
    alt((
        field_body.map(|body: &str| if body.is_empty() { None } else { Some(body) }),
        any.map(|_| None),
    ))
    .parse_next(input)
}

/// A delimited field body, possibly empty: `%...%`.
fn field_body<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited(
        DELIMITER,
        take_while(0.., |c: char| c != DELIMITER),
        DELIMITER,
    )
    .parse_next(input)
}

/// Disassemble a field body into its parsed form.
fn parse_field(body: &str) -> Field {
    let raw = format!("{DELIMITER}{body}{DELIMITER}");
    let (head, placeholder) = match body.split_once('=') {
        Some((head, placeholder)) => (head, Some(placeholder)),
        None => (body, None),
    };

    let resolve_once = head.contains('!');
    let package_scope = head.contains('~');
    let stripped: String = head.chars().filter(|c| *c != '!' && *c != '~').collect();
    let name = stripped.to_lowercase();

    // Without an explicit `=default`, the placeholder is the bare name as
    // written (flags removed, case preserved).
    let placeholder = match placeholder {
        Some(text) => text.replace(DELIMITER, ""),
        None => stripped,
    };

    Field::new(raw, name, placeholder, resolve_once, package_scope)
}
