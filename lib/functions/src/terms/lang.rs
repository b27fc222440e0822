use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, LiteralRef, OwnedStringLiteral};

#[derive(Debug)]
pub struct LangRdfOp;

impl Default for LangRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl LangRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for LangRdfOp {
    type Arg<'data> = LiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let language = value.language().unwrap_or_default().to_owned();
        Ok(OwnedStringLiteral::new(language, None))
    }
}
