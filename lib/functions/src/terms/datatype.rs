use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, LiteralRef, NamedNode};

/// Returns the datatype of a literal. Language-tagged literals have the datatype
/// `rdf:langString`.
#[derive(Debug)]
pub struct DatatypeRdfOp;

impl Default for DatatypeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl DatatypeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for DatatypeRdfOp {
    type Arg<'data> = LiteralRef<'data>;
    type Result<'data> = NamedNode;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        Ok(value.datatype().into_owned())
    }
}
