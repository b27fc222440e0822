use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, Integer, StringLiteralRef};

/// `STRLEN`: the number of characters (not bytes) of a string literal.
#[derive(Debug)]
pub struct StrLenRdfOp;

impl Default for StrLenRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrLenRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for StrLenRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = Integer;

    fn evaluate<'data>(&self, text: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let characters = i64::try_from(text.len())?;
        Ok(Integer::from(characters))
    }
}
