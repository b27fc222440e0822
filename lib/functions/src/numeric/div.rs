use crate::numeric::overflow;
use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{Decimal, EvalError, EvalResult, Numeric, NumericPair};

/// Division with promotion. Dividing two integers yields a decimal and a zero divisor is an
/// error for every numeric category, including `xsd:float` and `xsd:double`.
#[derive(Debug)]
pub struct DivRdfOp;

impl Default for DivRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl DivRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for DivRdfOp {
    type ArgLhs<'lhs> = Numeric;
    type ArgRhs<'rhs> = Numeric;
    type Result<'data> = Numeric;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        if rhs.is_zero() {
            return Err(EvalError::evaluation("divide by zero"));
        }

        match NumericPair::with_casts_from(lhs, rhs) {
            NumericPair::Integer(lhs, rhs) => {
                Decimal::from(lhs).checked_div(rhs).map(Numeric::Decimal)
            }
            NumericPair::Decimal(lhs, rhs) => lhs.checked_div(rhs).map(Numeric::Decimal),
            NumericPair::Float(lhs, rhs) => Some(Numeric::Float(lhs / rhs)),
            NumericPair::Double(lhs, rhs) => Some(Numeric::Double(lhs / rhs)),
        }
        .ok_or_else(overflow)
    }
}
