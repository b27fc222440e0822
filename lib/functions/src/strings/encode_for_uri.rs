use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalResult, OwnedStringLiteral, StringLiteralRef};

/// Percent-encodes every byte of the UTF-8 representation that is not an unreserved character
/// of RFC 3986.
#[derive(Debug)]
pub struct EncodeForUriRdfOp;

impl Default for EncodeForUriRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl EncodeForUriRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for EncodeForUriRdfOp {
    type Arg<'data> = StringLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let mut result = Vec::with_capacity(value.0.len());
        for c in value.0.bytes() {
            match c {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                    result.push(c);
                }
                _ => {
                    result.push(b'%');
                    let high = c / 16;
                    let low = c % 16;
                    result.push(if high < 10 {
                        b'0' + high
                    } else {
                        b'A' + (high - 10)
                    });
                    result.push(if low < 10 {
                        b'0' + low
                    } else {
                        b'A' + (low - 10)
                    });
                }
            }
        }

        let value = String::from_utf8(result)?;
        Ok(OwnedStringLiteral::new(value, None))
    }
}
