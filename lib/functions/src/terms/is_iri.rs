use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Boolean, EvalResult, Term, TermExt};

#[derive(Debug)]
pub struct IsIriRdfOp;

impl Default for IsIriRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsIriRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsIriRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.is_iri().into())
    }
}
