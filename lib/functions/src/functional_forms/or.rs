use crate::effective_boolean_value;
use rdf_eval_model::{EvalResult, Term};

/// Evaluates a disjunction, stopping at the first operand that is true.
///
/// Errors of earlier operands are absorbed by a later true operand. If no operand is true, the
/// first error is returned, or `false` if there was none.
pub fn evaluate_or<I>(operands: I) -> EvalResult<bool>
where
    I: IntoIterator<Item = EvalResult<Term>>,
{
    let mut first_error = None;
    for operand in operands {
        match operand.and_then(|operand| effective_boolean_value(&operand)) {
            Ok(true) => return Ok(true),
            Ok(false) => {}
            Err(error) => {
                first_error.get_or_insert(error);
            }
        }
    }
    first_error.map_or(Ok(false), Err)
}
