use crate::conversion::{cast_error, cast_source};
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{Boolean, EvalResult, Term};

/// Casts to `xsd:boolean`. Only the lexical forms `0`, `1`, `true` and `false` are accepted,
/// ignoring case.
#[derive(Debug)]
pub struct CastBooleanRdfOp;

impl Default for CastBooleanRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastBooleanRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastBooleanRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let literal = cast_source(value, xsd::BOOLEAN)?;
        match literal.value().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true.into()),
            "0" | "false" => Ok(false.into()),
            _ => Err(cast_error(literal, xsd::BOOLEAN)),
        }
    }
}
