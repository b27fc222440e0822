use crate::conversion::{cast_error, cast_source};
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{Decimal, EvalResult, Numeric, Term, TypedValueRef};
use std::str::FromStr;

/// Casts to `xsd:decimal`. Lexical forms with an exponent are rejected.
#[derive(Debug)]
pub struct CastDecimalRdfOp;

impl Default for CastDecimalRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastDecimalRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastDecimalRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Decimal;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let literal = cast_source(value, xsd::DECIMAL)?;
        let decoded = TypedValueRef::from_literal(literal);
        if let TypedValueRef::BooleanLiteral(v) = decoded {
            return Ok(Decimal::from(v));
        }
        if literal.value().contains(['e', 'E']) {
            return Err(cast_error(literal, xsd::DECIMAL));
        }

        Ok(match decoded {
            TypedValueRef::SimpleLiteral(v) => Decimal::from_str(v.value.trim())?,
            TypedValueRef::NumericLiteral(numeric) => match numeric {
                Numeric::Integer(v) => Decimal::from(v),
                Numeric::Decimal(v) => v,
                Numeric::Float(v) => Decimal::try_from(v)?,
                Numeric::Double(v) => Decimal::try_from(v)?,
            },
            _ => return Err(cast_error(literal, xsd::DECIMAL)),
        })
    }
}
