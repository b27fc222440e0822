use rdf_eval_model::{partial_cmp_literals, EvalError, EvalResult, Term, TypedValueRef};
use std::cmp::Ordering;

/// Value equality as used by `=`, `!=` and `IN`.
///
/// Numeric literals are compared by value after promotion, strings by value and language, and
/// date/time values by their position on the timeline. Literals of different value spaces are
/// never equal. Two literals of the same unrecognized datatype are equal if they are the same
/// term. If their lexical forms differ, equality cannot be decided and a type error is raised.
/// IRIs and blank nodes are compared structurally.
pub fn equal(lhs: &Term, rhs: &Term) -> EvalResult<bool> {
    let lhs_value = TypedValueRef::from_term(lhs);
    let rhs_value = TypedValueRef::from_term(rhs);
    if !lhs_value.is_literal() || !rhs_value.is_literal() {
        return Ok(lhs == rhs);
    }

    match (lhs_value, rhs_value) {
        (TypedValueRef::OtherLiteral(a), TypedValueRef::OtherLiteral(b)) => {
            if a == b {
                Ok(true)
            } else if a.datatype() == b.datatype() && a.language() == b.language() {
                EvalError::expected_type(format!(
                    "cannot decide whether {lhs} and {rhs} are equal"
                ))
            } else {
                Ok(false)
            }
        }
        (a, b) => Ok(partial_cmp_literals(a, b) == Some(Ordering::Equal)),
    }
}
