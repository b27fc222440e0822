use crate::{effective_boolean_value, ScalarUnaryRdfOp};
use rdf_eval_model::{Boolean, EvalResult, Term};

#[derive(Debug)]
pub struct NotRdfOp;

impl Default for NotRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl NotRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for NotRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok((!effective_boolean_value(value)?).into())
    }
}
