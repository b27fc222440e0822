use crate::conversion::{cast_error, cast_source};
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{Double, EvalResult, Numeric, Term, TypedValueRef};
use std::str::FromStr;

#[derive(Debug)]
pub struct CastDoubleRdfOp;

impl Default for CastDoubleRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastDoubleRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastDoubleRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let literal = cast_source(value, xsd::DOUBLE)?;
        let converted = match TypedValueRef::from_literal(literal) {
            TypedValueRef::BooleanLiteral(v) => Double::from(v),
            TypedValueRef::SimpleLiteral(v) => Double::from_str(v.value.trim())?,
            TypedValueRef::NumericLiteral(numeric) => match numeric {
                Numeric::Integer(v) => Double::from(v),
                Numeric::Decimal(v) => Double::from(v),
                Numeric::Float(v) => Double::from(v),
                Numeric::Double(v) => v,
            },
            _ => return Err(cast_error(literal, xsd::DOUBLE)),
        };
        Ok(Numeric::Double(converted))
    }
}
