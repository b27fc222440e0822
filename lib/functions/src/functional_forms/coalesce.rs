use rdf_eval_model::{EvalError, EvalResult, Term};

/// Returns the first operand that has a value.
///
/// All operands are consumed, even after a value was found.
pub fn evaluate_coalesce<I>(operands: I) -> EvalResult<Term>
where
    I: IntoIterator<Item = EvalResult<Term>>,
{
    let mut result = None;
    for operand in operands {
        if let Ok(term) = operand {
            result.get_or_insert(term);
        }
    }
    result.ok_or_else(|| EvalError::evaluation("no argument of COALESCE has a value"))
}
