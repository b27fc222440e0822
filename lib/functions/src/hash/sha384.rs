use crate::ScalarUnaryRdfOp;
use sha2::{Digest, Sha384};
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct Sha384RdfOp;

impl Default for Sha384RdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha384RdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for Sha384RdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut hasher = Sha384::new();
        hasher.update(value.0);
        let result = hasher.finalize();
        Ok(OwnedStringLiteral::new(hex::encode(result), None))
    }
}
