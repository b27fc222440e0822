use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{EvalResult, Literal, NamedNodeRef, SimpleLiteralRef};

#[derive(Debug)]
pub struct StrDtRdfOp;

impl Default for StrDtRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrDtRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for StrDtRdfOp {
    type ArgLhs<'data> = SimpleLiteralRef<'data>;
    type ArgRhs<'data> = NamedNodeRef<'data>;
    type Result<'data> = Literal;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Ok(Literal::new_typed_literal(lhs.value, rhs))
    }
}
