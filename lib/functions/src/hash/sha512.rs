use crate::ScalarUnaryRdfOp;
use sha2::{Digest, Sha512};
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct Sha512RdfOp;

impl Default for Sha512RdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha512RdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for Sha512RdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut hasher = Sha512::new();
        hasher.update(value.0);
        let result = hasher.finalize();
        Ok(OwnedStringLiteral::new(hex::encode(result), None))
    }
}
