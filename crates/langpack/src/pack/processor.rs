//! Call-time field substitution.

use crate::pack::group::ScopePath;
use crate::pack::lang_pack::LangPack;
use crate::types::{LangArg, Language};

/// Substitutes the fields of a resolved string at query time.
///
/// `depth` counts nested pack lookups triggered by field substitution and
/// is threaded back into the pack so runaway reference chains terminate.
pub trait LangProcessor: std::fmt::Debug + Send + Sync {
    /// Substitute every field using caller arguments and pack lookups.
    fn process(
        &self,
        input: &str,
        pack: &LangPack,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> String;

    /// Substitute caller arguments only; fields without a matching
    /// argument are left as-is.
    fn process_args(&self, input: &str, pack: &LangPack, args: &[LangArg]) -> String;
}

/// The standard processor.
///
/// Fields are handled left to right. Each one takes the first matching
/// caller argument (keys compared case-insensitively), else the result of
/// a fresh pack query for the field name in the same language and scope,
/// else its placeholder. A `~` field queries from the pack root instead
/// of the surrounding scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultProcessor;

impl DefaultProcessor {
    fn argument<'a>(args: &'a [LangArg], name: &str) -> Option<&'a LangArg> {
        args.iter().find(|arg| arg.key.eq_ignore_ascii_case(name))
    }
}

impl LangProcessor for DefaultProcessor {
    fn process(
        &self,
        input: &str,
        pack: &LangPack,
        language: Language,
        context: Option<&ScopePath>,
        args: &[LangArg],
        depth: usize,
    ) -> String {
        let mut output = input.to_string();
        for field in pack.formatter().fields(input) {
            let substitution = match Self::argument(args, field.name()) {
                Some(arg) => arg.value.to_string(),
                None => {
                    let scope = if field.package_scope() { None } else { context };
                    pack.get_string_depth(field.name(), language, scope, args, depth + 1)
                        .unwrap_or_else(|| field.placeholder().to_string())
                }
            };
            output = output.replace(field.raw(), &substitution);
        }
        output
    }

    fn process_args(&self, input: &str, pack: &LangPack, args: &[LangArg]) -> String {
        let mut output = input.to_string();
        for field in pack.formatter().fields(input) {
            if let Some(arg) = Self::argument(args, field.name()) {
                output = output.replace(field.raw(), &arg.value.to_string());
            }
        }
        output
    }
}
