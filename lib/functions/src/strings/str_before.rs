use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{CompatibleStringArgs, EvalResult, StringLiteralRef};

/// Implementation of the SPARQL `strbefore` function.
#[derive(Debug)]
pub struct StrBeforeRdfOp;

impl Default for StrBeforeRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrBeforeRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for StrBeforeRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = StringLiteralRef<'data>;
    type Result<'data> = StringLiteralRef<'data>;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let args = CompatibleStringArgs::try_from(lhs, rhs)?;
        Ok(match args.lhs.find(args.rhs) {
            Some(position) => StringLiteralRef(&args.lhs[..position], args.language),
            None => StringLiteralRef("", None),
        })
    }
}
