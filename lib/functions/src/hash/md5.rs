use crate::ScalarUnaryRdfOp;
use md5::{Digest, Md5};
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

#[derive(Debug)]
pub struct Md5RdfOp;

impl Default for Md5RdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5RdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for Md5RdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut hasher = Md5::new();
        hasher.update(value.0);
        let result = hasher.finalize();
        Ok(OwnedStringLiteral::new(hex::encode(result), None))
    }
}
