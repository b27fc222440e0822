use crate::conversion::{cast_error, cast_source};
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{EvalResult, Integer, Numeric, Term, TypedValueRef};
use std::str::FromStr;

/// Casts to `xsd:integer`. Fractional numbers are truncated.
#[derive(Debug)]
pub struct CastIntegerRdfOp;

impl Default for CastIntegerRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastIntegerRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastIntegerRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Integer;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let literal = cast_source(value, xsd::INTEGER)?;
        Ok(match TypedValueRef::from_literal(literal) {
            TypedValueRef::BooleanLiteral(v) => Integer::from(v),
            TypedValueRef::SimpleLiteral(v) => Integer::from_str(v.value.trim())?,
            TypedValueRef::NumericLiteral(numeric) => match numeric {
                Numeric::Integer(v) => v,
                Numeric::Decimal(v) => Integer::try_from(v)?,
                Numeric::Float(v) => Integer::try_from(v)?,
                Numeric::Double(v) => Integer::try_from(v)?,
            },
            _ => return Err(cast_error(literal, xsd::INTEGER)),
        })
    }
}
