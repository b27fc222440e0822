use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{DateTime, DayTimeDuration, EvalError, EvalResult};

/// Returns the timezone of a dateTime as an `xsd:dayTimeDuration` (`"PT0S"` for UTC).
#[derive(Debug)]
pub struct TimezoneRdfOp;

impl Default for TimezoneRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl TimezoneRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for TimezoneRdfOp {
    type Arg<'data> = DateTime;
    type Result<'data> = DayTimeDuration;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        value
            .timezone()
            .ok_or_else(|| EvalError::evaluation(format!("{value} has no timezone")))
    }
}
