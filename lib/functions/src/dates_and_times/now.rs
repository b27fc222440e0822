use crate::ScalarNullaryRdfOp;
use rdf_eval_model::{DateTime, EvalResult};

/// Returns the timestamp fixed for the whole query.
#[derive(Debug)]
pub struct NowRdfOp {
    now: DateTime,
}

impl NowRdfOp {
    pub fn new(now: DateTime) -> Self {
        Self { now }
    }
}

impl ScalarNullaryRdfOp for NowRdfOp {
    type Result<'data> = DateTime;

    fn evaluate<'data>(&self) -> EvalResult<Self::Result<'data>> {
        Ok(self.now)
    }
}
