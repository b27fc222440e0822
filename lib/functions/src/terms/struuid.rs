use crate::ScalarNullaryRdfOp;
use rdf_eval_model::{EvalResult, OwnedStringLiteral};
use uuid::Uuid;

#[derive(Debug)]
pub struct StrUuidRdfOp;

impl Default for StrUuidRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrUuidRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for StrUuidRdfOp {
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self) -> EvalResult<Self::Result<'data>> {
        Ok(OwnedStringLiteral::new(Uuid::new_v4().to_string(), None))
    }
}
