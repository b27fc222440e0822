use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{EvalError, EvalResult, Literal, SimpleLiteralRef};

/// Attaches a language tag to a simple literal. The tag is normalized to lowercase.
#[derive(Debug)]
pub struct StrLangRdfOp;

impl Default for StrLangRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrLangRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for StrLangRdfOp {
    type ArgLhs<'data> = SimpleLiteralRef<'data>;
    type ArgRhs<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = Literal;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Literal::new_language_tagged_literal(lhs.value, rhs.value.to_ascii_lowercase())
            .map_err(|error| EvalError::evaluation(error.to_string()))
    }
}
