use crate::conversion::{cast_error, cast_source};
use crate::ScalarUnaryRdfOp;
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{DateTime, EvalResult, Term};
use std::str::FromStr;

/// Casts a dateTime or a string to `xsd:dateTime`.
#[derive(Debug)]
pub struct CastDateTimeRdfOp;

impl Default for CastDateTimeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastDateTimeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastDateTimeRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = DateTime;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let literal = cast_source(value, xsd::DATE_TIME)?;
        if !matches!(literal.datatype(), xsd::DATE_TIME | xsd::STRING) {
            return Err(cast_error(literal, xsd::DATE_TIME));
        }
        Ok(DateTime::from_str(literal.value().trim())?)
    }
}
