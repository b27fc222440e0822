use crate::numeric::overflow;
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, Numeric, NumericLiteralRef};

#[derive(Debug)]
pub struct CeilRdfOp;

impl Default for CeilRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CeilRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CeilRdfOp {
    type Arg<'data> = NumericLiteralRef<'data>;
    type Result<'data> = NumericLiteralRef<'data>;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let result = match value.value {
            Numeric::Integer(_) => Some(value.value),
            Numeric::Decimal(value) => value.checked_ceil().map(Numeric::Decimal),
            Numeric::Float(value) => Some(Numeric::Float(value.ceil())),
            Numeric::Double(value) => Some(Numeric::Double(value.ceil())),
        }
        .ok_or_else(overflow)?;
        Ok(NumericLiteralRef {
            value: result,
            datatype: value.datatype,
        })
    }
}
