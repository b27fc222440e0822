use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{is_numeric_datatype, EvalError, EvalResult, Term, TypedValueRef};

/// Computes the effective boolean value of a term.
///
/// Relevant Resources:
/// - [SPARQL 1.1 - Effective Boolean Value](https://www.w3.org/TR/sparql11-query/#ebv)
pub fn effective_boolean_value(term: &Term) -> EvalResult<bool> {
    match TypedValueRef::from_term(term) {
        TypedValueRef::BooleanLiteral(value) => Ok(value.into()),
        TypedValueRef::NumericLiteral(value) => Ok(!value.is_nan() && !value.is_zero()),
        TypedValueRef::SimpleLiteral(value) => Ok(!value.is_empty()),
        TypedValueRef::LanguageStringLiteral(value) => Ok(!value.value.is_empty()),
        // An invalid lexical form of a boolean or numeric datatype is false.
        TypedValueRef::OtherLiteral(literal)
            if literal.datatype() == xsd::BOOLEAN || is_numeric_datatype(literal.datatype()) =>
        {
            Ok(false)
        }
        _ => EvalError::expected_type(format!("{term} has no effective boolean value")),
    }
}
