use crate::numeric::overflow;
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, Numeric};

#[derive(Debug)]
pub struct UnaryMinusRdfOp;

impl Default for UnaryMinusRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl UnaryMinusRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for UnaryMinusRdfOp {
    type Arg<'data> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Numeric::Integer(value) => value.checked_neg().map(Numeric::Integer),
            Numeric::Decimal(value) => value.checked_neg().map(Numeric::Decimal),
            Numeric::Float(value) => Some(Numeric::Float(-value)),
            Numeric::Double(value) => Some(Numeric::Double(-value)),
        }
        .ok_or_else(overflow)
    }
}
