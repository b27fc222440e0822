use crate::{
    EvalError, EvalResult, Numeric, NumericLiteralRef, StringLiteralRef, TermExt, TypedValueRef,
};
use oxrdf::Term;
use oxsdatatypes::{Date, DateTime};

/// Extracts the numeric value of a literal whose datatype is numeric.
pub fn numeric(term: &Term) -> EvalResult<Numeric> {
    numeric_literal(term).map(|literal| literal.value)
}

/// Extracts the numeric value of a literal together with its original datatype.
pub fn numeric_literal(term: &Term) -> EvalResult<NumericLiteralRef<'_>> {
    let literal = term.literal()?;
    match TypedValueRef::from_literal(literal) {
        TypedValueRef::NumericLiteral(value) => Ok(NumericLiteralRef {
            value,
            datatype: literal.datatype(),
        }),
        _ => EvalError::expected_type(format!("{term} is not a numeric literal")),
    }
}

/// Extracts the value and language of a simple or language-tagged literal.
pub fn string(term: &Term) -> EvalResult<StringLiteralRef<'_>> {
    match TypedValueRef::from_term(term) {
        TypedValueRef::SimpleLiteral(lit) => Ok(StringLiteralRef(lit.value, None)),
        TypedValueRef::LanguageStringLiteral(lit) => {
            Ok(StringLiteralRef(lit.value, Some(lit.language)))
        }
        _ => EvalError::expected_type(format!("{term} is not a string literal")),
    }
}

/// Extracts an `xsd:date` value. An `xsd:dateTime` is truncated to its date.
pub fn date(term: &Term) -> EvalResult<Date> {
    match TypedValueRef::from_term(term) {
        TypedValueRef::DateLiteral(value) => Ok(value),
        TypedValueRef::DateTimeLiteral(value) => Ok(Date::try_from(value)?),
        _ => EvalError::expected_type(format!("{term} is not a date literal")),
    }
}

/// Extracts an `xsd:dateTime` value.
pub fn datetime(term: &Term) -> EvalResult<DateTime> {
    match TypedValueRef::from_term(term) {
        TypedValueRef::DateTimeLiteral(value) => Ok(value),
        _ => EvalError::expected_type(format!("{term} is not a dateTime literal")),
    }
}
