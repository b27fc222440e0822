use crate::{ScalarBinaryRdfOp, ScalarTernaryRdfOp};
use rdf_eval_model::{Double, EvalResult, Numeric, OwnedStringLiteral, StringLiteralRef};

/// Implementation of the SPARQL `substr` function.
///
/// Positions start at 1. The characters at positions `p` with
/// `round(start) <= p < round(start) + round(length)` are kept, which makes out-of-range
/// arguments produce a shorter or empty string instead of an error. The language tag is kept.
#[derive(Debug)]
pub struct SubStrRdfOp;

impl Default for SubStrRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl SubStrRdfOp {
    /// Creates a new [SubStrRdfOp].
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarBinaryRdfOp for SubStrRdfOp {
    type ArgLhs<'data> = StringLiteralRef<'data>;
    type ArgRhs<'data> = Numeric;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(
        &self,
        source: Self::ArgLhs<'data>,
        start: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Ok(evaluate_substr(source, start, None))
    }
}

impl ScalarTernaryRdfOp for SubStrRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = Numeric;
    type Arg2<'data> = Numeric;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(
        &self,
        source: Self::Arg0<'data>,
        start: Self::Arg1<'data>,
        length: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        Ok(evaluate_substr(source, start, Some(length)))
    }
}

fn evaluate_substr(
    source: StringLiteralRef<'_>,
    start: Numeric,
    length: Option<Numeric>,
) -> OwnedStringLiteral {
    let start = round_position(start);
    let end = length.map(|length| start + round_position(length));

    // NaN bounds select nothing because all comparisons fail.
    let mut position = 0.0;
    let mut result = String::new();
    for c in source.0.chars() {
        position += 1.0;
        if position >= start && end.map_or(true, |end| position < end) {
            result.push(c);
        }
    }

    OwnedStringLiteral::new(result, source.1.map(ToOwned::to_owned))
}

/// Rounds half towards positive infinity, as `fn:round` does.
fn round_position(value: Numeric) -> f64 {
    let value = f64::from(match value {
        Numeric::Integer(value) => Double::from(value),
        Numeric::Decimal(value) => Double::from(value),
        Numeric::Float(value) => Double::from(value),
        Numeric::Double(value) => value,
    });
    (value + 0.5).floor()
}
