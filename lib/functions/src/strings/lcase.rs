use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

/// `LCASE`: lower-cases the lexical form and keeps the language tag.
#[derive(Debug)]
pub struct LCaseRdfOp;

impl Default for LCaseRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl LCaseRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for LCaseRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, text: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let StringLiteralRef(value, language) = text;
        Ok(OwnedStringLiteral(
            value.to_lowercase(),
            language.map(str::to_owned),
        ))
    }
}
