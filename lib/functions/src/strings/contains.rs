use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{Boolean, CompatibleStringArgs, EvalResult, StringLiteralRef};

/// `CONTAINS(haystack, needle)`: whether `needle` occurs in `haystack`.
///
/// The arguments must be compatible string literals. An empty needle is contained in every
/// string.
#[derive(Debug)]
pub struct ContainsRdfOp;

impl Default for ContainsRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainsRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for ContainsRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = StringLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        haystack: Self::ArgLhs<'data>,
        needle: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let args = CompatibleStringArgs::try_from(haystack, needle)?;
        Ok(Boolean::from(args.lhs.contains(args.rhs)))
    }
}
