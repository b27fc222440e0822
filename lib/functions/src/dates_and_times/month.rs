use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Date, EvalResult, Integer};

#[derive(Debug)]
pub struct MonthRdfOp;

impl Default for MonthRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for MonthRdfOp {
    type Arg<'data> = Date;
    type Result<'data> = Integer;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.month().into())
    }
}
