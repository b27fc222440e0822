use crate::ScalarBinaryRdfOp;
use itertools::{EitherOrBoth, Itertools};
use rdf_eval_model::{Boolean, EvalResult, SimpleLiteralRef};

/// Implementation of the SPARQL `langMatches` function.
///
/// Each subtag of the range must match the corresponding subtag of the tag, where `*` matches any
/// subtag. An empty language tag never matches.
#[derive(Debug)]
pub struct LangMatchesRdfOp;

impl Default for LangMatchesRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl LangMatchesRdfOp {
    /// Creates a new [LangMatchesRdfOp].
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for LangMatchesRdfOp {
    type ArgLhs<'data> = SimpleLiteralRef<'data>;
    type ArgRhs<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let tag = lhs.value.trim();
        let range = rhs.value.trim();
        if tag.is_empty() {
            return Ok(false.into());
        }

        let matches = range
            .split('-')
            .zip_longest(tag.split('-'))
            .all(|parts| match parts {
                EitherOrBoth::Both(range_subtag, language_subtag) => {
                    range_subtag == "*" || range_subtag.eq_ignore_ascii_case(language_subtag)
                }
                EitherOrBoth::Left(_) => false,
                EitherOrBoth::Right(_) => true,
            });
        Ok(matches.into())
    }
}
