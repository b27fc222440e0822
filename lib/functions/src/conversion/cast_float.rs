use crate::conversion::{cast_error, cast_source};
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{Float, EvalResult, Numeric, Term, TypedValueRef};
use std::str::FromStr;

#[derive(Debug)]
pub struct CastFloatRdfOp;

impl Default for CastFloatRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastFloatRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastFloatRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Numeric;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let literal = cast_source(value, xsd::FLOAT)?;
        let converted = match TypedValueRef::from_literal(literal) {
            TypedValueRef::BooleanLiteral(v) => Float::from(v),
            TypedValueRef::SimpleLiteral(v) => Float::from_str(v.value.trim())?,
            TypedValueRef::NumericLiteral(numeric) => match numeric {
                Numeric::Integer(v) => Float::from(v),
                Numeric::Decimal(v) => Float::from(v),
                Numeric::Float(v) => v,
                Numeric::Double(v) => Float::from(v),
            },
            _ => return Err(cast_error(literal, xsd::FLOAT)),
        };
        Ok(Numeric::Float(converted))
    }
}
