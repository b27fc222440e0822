use crate::ScalarUnaryRdfOp;
use sha2::{Digest, Sha256};
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct Sha256RdfOp;

impl Default for Sha256RdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256RdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for Sha256RdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut hasher = Sha256::new();
        hasher.update(value.0);
        let result = hasher.finalize();
        Ok(OwnedStringLiteral::new(hex::encode(result), None))
    }
}
