use crate::numeric::overflow;
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, Numeric, NumericLiteralRef};

#[derive(Debug)]
pub struct FloorRdfOp;

impl Default for FloorRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl FloorRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for FloorRdfOp {
    type Arg<'data> = NumericLiteralRef<'data>;
    type Result<'data> = NumericLiteralRef<'data>;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let result = match value.value {
            Numeric::Integer(_) => Some(value.value),
            Numeric::Decimal(value) => value.checked_floor().map(Numeric::Decimal),
            Numeric::Float(value) => Some(Numeric::Float(value.floor())),
            Numeric::Double(value) => Some(Numeric::Double(value.floor())),
        }
        .ok_or_else(overflow)?;
        Ok(NumericLiteralRef {
            value: result,
            datatype: value.datatype,
        })
    }
}
