use crate::numeric::overflow;
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{Decimal, Double, EvalResult, Float, Numeric, NumericLiteralRef};

/// Rounds to the nearest integral value. Ties are rounded away from zero (`-2.5` becomes `-3`)
/// and the datatype of the operand is kept.
#[derive(Debug)]
pub struct RoundRdfOp;

impl Default for RoundRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for RoundRdfOp {
    type Arg<'data> = NumericLiteralRef<'data>;
    type Result<'data> = NumericLiteralRef<'data>;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let result = match value.value {
            Numeric::Integer(_) => Some(value.value),
            Numeric::Decimal(value) => round_decimal(value).map(Numeric::Decimal),
            Numeric::Float(value) => Some(Numeric::Float(Float::from(f32::from(value).round()))),
            Numeric::Double(value) => {
                Some(Numeric::Double(Double::from(f64::from(value).round())))
            }
        }
        .ok_or_else(overflow)?;
        Ok(NumericLiteralRef {
            value: result,
            datatype: value.datatype,
        })
    }
}

/// [Decimal::checked_round] rounds ties towards positive infinity.
fn round_decimal(value: Decimal) -> Option<Decimal> {
    if value.is_negative() {
        value.checked_neg()?.checked_round()?.checked_neg()
    } else {
        value.checked_round()
    }
}
