use crate::numeric::overflow;
use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{EvalResult, Numeric, NumericPair};

#[derive(Debug)]
pub struct MulRdfOp;

impl Default for MulRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl MulRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for MulRdfOp {
    type ArgLhs<'lhs> = Numeric;
    type ArgRhs<'rhs> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        match NumericPair::with_casts_from(lhs, rhs) {
            NumericPair::Integer(lhs, rhs) => lhs.checked_mul(rhs).map(Numeric::Integer),
            NumericPair::Decimal(lhs, rhs) => lhs.checked_mul(rhs).map(Numeric::Decimal),
            NumericPair::Float(lhs, rhs) => Some(Numeric::Float(lhs * rhs)),
            NumericPair::Double(lhs, rhs) => Some(Numeric::Double(lhs * rhs)),
        }
        .ok_or_else(overflow)
    }
}
