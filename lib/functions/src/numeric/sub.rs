use crate::numeric::overflow;
use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{EvalResult, Numeric, NumericPair};

#[derive(Debug)]
pub struct SubRdfOp;

impl Default for SubRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SubRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for SubRdfOp {
    type ArgLhs<'lhs> = Numeric;
    type ArgRhs<'rhs> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        match NumericPair::with_casts_from(lhs, rhs) {
            NumericPair::Integer(lhs, rhs) => lhs.checked_sub(rhs).map(Numeric::Integer),
            NumericPair::Decimal(lhs, rhs) => lhs.checked_sub(rhs).map(Numeric::Decimal),
            NumericPair::Float(lhs, rhs) => Some(Numeric::Float(lhs - rhs)),
            NumericPair::Double(lhs, rhs) => Some(Numeric::Double(lhs - rhs)),
        }
        .ok_or_else(overflow)
    }
}
