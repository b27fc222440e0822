use crate::ScalarNullaryRdfOp;
use rdf_eval_model::{BlankNode, EvalResult};

/// Creates a fresh blank node.
#[derive(Debug)]
pub struct BNodeRdfOp;

impl Default for BNodeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl BNodeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarNullaryRdfOp for BNodeRdfOp {
    type Result<'data> = BlankNode;

    fn evaluate<'data>(&self) -> EvalResult<Self::Result<'data>> {
        Ok(BlankNode::default())
    }
}
