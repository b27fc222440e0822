use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{Boolean, EvalResult, Term};

/// Structural term equality. Language tags are compared case-insensitively.
#[derive(Debug)]
pub struct SameTermRdfOp;

impl Default for SameTermRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SameTermRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for SameTermRdfOp {
    type ArgLhs<'data> = &'data Term;
    type ArgRhs<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let result = match (lhs, rhs) {
            (Term::Literal(lhs), Term::Literal(rhs)) => match (lhs.language(), rhs.language()) {
                (Some(lhs_language), Some(rhs_language)) => {
                    lhs.value() == rhs.value() && lhs_language.eq_ignore_ascii_case(rhs_language)
                }
                _ => lhs == rhs,
            },
            _ => lhs == rhs,
        };
        Ok(result.into())
    }
}
