use crate::ScalarUnaryRdfOp;
use sha1::{Digest, Sha1};
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct Sha1RdfOp;

impl Default for Sha1RdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha1RdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for Sha1RdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut hasher = Sha1::new();
        hasher.update(value.0);
        let result = hasher.finalize();
        Ok(OwnedStringLiteral::new(hex::encode(result), None))
    }
}
