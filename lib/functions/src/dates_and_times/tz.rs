use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{DateTime, EvalResult, OwnedStringLiteral};

/// `TZ`: the timezone of a dateTime as written in its lexical form.
///
/// UTC is `"Z"`, other offsets are `"+hh:mm"`/`"-hh:mm"`. A dateTime without timezone yields `""`
/// instead of an error, unlike `TIMEZONE`.
#[derive(Debug)]
pub struct TzRdfOp;

impl Default for TzRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl TzRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for TzRdfOp {
    type Arg<'data> = DateTime;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(&self, date_time: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        let name = match date_time.timezone_offset() {
            Some(offset) => offset.to_string(),
            None => String::new(),
        };
        Ok(OwnedStringLiteral(name, None))
    }
}
