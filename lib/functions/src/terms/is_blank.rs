use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Boolean, EvalResult, Term, TermExt};

#[derive(Debug)]
pub struct IsBlankRdfOp;

impl Default for IsBlankRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsBlankRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsBlankRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.is_blank().into())
    }
}
