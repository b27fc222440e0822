use crate::ScalarBinaryRdfOp;
use rdf_eval_model::{Boolean, CompatibleStringArgs, EvalResult, StringLiteralRef};

/// `STRENDS(text, suffix)`. Fails with a type error if `suffix` carries a language tag that
/// differs from the one of `text`.
#[derive(Debug)]
pub struct StrEndsRdfOp;

impl Default for StrEndsRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrEndsRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for StrEndsRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = StringLiteralRef<'data>;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        text: Self::ArgLhs<'data>,
        suffix: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let args = CompatibleStringArgs::try_from(text, suffix)?;
        Ok(Boolean::from(args.lhs.ends_with(args.rhs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_eval_model::ErrorKind;

    #[test]
    fn suffixes() {
        let op = StrEndsRdfOp::new();
        let text = StringLiteralRef("report.csv", Some("en"));
        assert_eq!(op.evaluate(text, StringLiteralRef(".csv", None)), Ok(true.into()));
        assert_eq!(op.evaluate(text, StringLiteralRef(".CSV", Some("en"))), Ok(false.into()));
    }

    #[test]
    fn plain_text_with_tagged_suffix() {
        let result = StrEndsRdfOp::new()
            .evaluate(StringLiteralRef("abc", None), StringLiteralRef("c", Some("en")));
        assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Type));
    }
}
