use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Boolean, EvalResult, Term};

#[derive(Debug)]
pub struct IsLiteralRdfOp;

impl Default for IsLiteralRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsLiteralRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsLiteralRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.is_literal().into())
    }
}
