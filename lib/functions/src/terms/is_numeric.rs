use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{numeric, Boolean, EvalResult, Term};

#[derive(Debug)]
pub struct IsNumericRdfOp;

impl Default for IsNumericRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl IsNumericRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for IsNumericRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(numeric(value).is_ok().into())
    }
}
