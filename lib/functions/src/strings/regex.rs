use crate::{ScalarBinaryRdfOp, ScalarTernaryRdfOp};
use rdf_eval_model::{Boolean, EvalError, EvalResult, SimpleLiteralRef, StringLiteralRef};
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;

/// The size limit of a compiled pattern if no other limit is configured.
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1_000_000;

/// Implementation of the SPARQL `regex` function.
///
/// The binary form uses no flags. Matching succeeds if the pattern matches anywhere in the text.
#[derive(Debug)]
pub struct RegexRdfOp {
    size_limit: usize,
}

impl Default for RegexRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl RegexRdfOp {
    /// Creates a new [RegexRdfOp].
    pub fn new() -> Self {
        Self::with_size_limit(DEFAULT_REGEX_SIZE_LIMIT)
    }

    pub fn with_size_limit(size_limit: usize) -> Self {
        Self { size_limit }
    }
}

impl ScalarBinaryRdfOp for RegexRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        text: Self::ArgLhs<'data>,
        pattern: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let regex = compile_pattern(pattern.value, None, self.size_limit)?;
        Ok(regex.is_match(text.0).into())
    }
}

impl ScalarTernaryRdfOp for RegexRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = SimpleLiteralRef<'data>;
    type Arg2<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        text: Self::Arg0<'data>,
        pattern: Self::Arg1<'data>,
        flags: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let regex = compile_pattern(pattern.value, Some(flags.value), self.size_limit)?;
        Ok(regex.is_match(text.0).into())
    }
}

/// Compiles an XPath pattern with the given flags.
///
/// Supported flags are `i`, `s`, `m`, `x` and `q` (the pattern is a literal string). Other flag
/// characters are ignored.
pub(super) fn compile_pattern(
    pattern: &str,
    flags: Option<&str>,
    size_limit: usize,
) -> EvalResult<Regex> {
    let mut pattern = Cow::Borrowed(pattern);
    let flags = flags.unwrap_or_default();
    if flags.contains('q') {
        pattern = regex::escape(&pattern).into();
    }
    let mut regex_builder = RegexBuilder::new(&pattern);
    regex_builder.size_limit(size_limit);
    for flag in flags.chars() {
        match flag {
            's' => {
                regex_builder.dot_matches_new_line(true);
            }
            'm' => {
                regex_builder.multi_line(true);
            }
            'i' => {
                regex_builder.case_insensitive(true);
            }
            'x' => {
                regex_builder.ignore_whitespace(true);
            }
            _ => (),
        }
    }
    regex_builder
        .build()
        .map_err(|error| EvalError::evaluation(format!("invalid pattern {pattern:?}: {error}")))
}
