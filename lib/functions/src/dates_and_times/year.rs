use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Date, EvalResult, Integer};

#[derive(Debug)]
pub struct YearRdfOp;

impl Default for YearRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl YearRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for YearRdfOp {
    type Arg<'data> = Date;
    type Result<'data> = Integer;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.year().into())
    }
}
