use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Date, EvalResult, Integer};

#[derive(Debug)]
pub struct DayRdfOp;

impl Default for DayRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl DayRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for DayRdfOp {
    type Arg<'data> = Date;
    type Result<'data> = Integer;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.day().into())
    }
}
