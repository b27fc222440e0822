use crate::numeric::overflow;
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, Numeric, NumericLiteralRef};

#[derive(Debug)]
pub struct AbsRdfOp;

impl Default for AbsRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl AbsRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for AbsRdfOp {
    type Arg<'data> = NumericLiteralRef<'data>;
    type Result<'data> = NumericLiteralRef<'data>;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let result = match value.value {
            Numeric::Integer(value) => value.checked_abs().map(Numeric::Integer),
            Numeric::Decimal(value) => value.checked_abs().map(Numeric::Decimal),
            Numeric::Float(value) => Some(Numeric::Float(value.abs())),
            Numeric::Double(value) => Some(Numeric::Double(value.abs())),
        }
        .ok_or_else(overflow)?;
        Ok(NumericLiteralRef {
            value: result,
            datatype: value.datatype,
        })
    }
}
