use crate::ScalarNullaryRdfOp;
use rdf_eval_model::{Double, EvalResult};

/// `RAND()`: a pseudo-random `xsd:double` in `[0, 1)`. Every call draws a new number.
#[derive(Debug)]
pub struct RandRdfOp;

impl Default for RandRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl RandRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for RandRdfOp {
    type Result<'data> = Double;

    fn evaluate<'data>(&self) -> EvalResult<Self::Result<'data>> {
        let sample: f64 = rand::random();
        Ok(Double::from(sample))
    }
}
