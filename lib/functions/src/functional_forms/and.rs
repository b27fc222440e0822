use crate::effective_boolean_value;
use rdf_eval_model::{EvalResult, Term};

/// Evaluates a conjunction over all `operands`.
///
/// Every operand is consumed. The result is `false` if any operand is false, regardless of
/// errors. Otherwise, the first error is returned, or `true` if there was none.
pub fn evaluate_and<I>(operands: I) -> EvalResult<bool>
where
    I: IntoIterator<Item = EvalResult<Term>>,
{
    let mut result = true;
    let mut first_error = None;
    for operand in operands {
        match operand.and_then(|operand| effective_boolean_value(&operand)) {
            Ok(true) => {}
            Ok(false) => result = false,
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }

    match first_error {
        Some(error) if result => Err(error),
        _ => Ok(result),
    }
}
