use crate::{
    date, datetime, numeric_literal, string, EvalError, EvalResult, Numeric, NumericLiteralRef,
    SimpleLiteralRef, StringLiteralRef, TermExt, TypedValueRef,
};
use oxrdf::{LiteralRef, NamedNodeRef, Term};
use oxsdatatypes::{Boolean, Date, DateTime};

/// Extracts an operator argument from an evaluated term.
///
/// A failed extraction is a type error of the operator.
pub trait RdfValueArg<'data>: Sized {
    fn from_term(term: &'data Term) -> EvalResult<Self>;
}

impl<'data> RdfValueArg<'data> for &'data Term {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        Ok(term)
    }
}

impl<'data> RdfValueArg<'data> for TypedValueRef<'data> {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        Ok(TypedValueRef::from_term(term))
    }
}

impl<'data> RdfValueArg<'data> for NamedNodeRef<'data> {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        term.as_iri()
            .ok_or_else(|| EvalError::type_error(format!("{term} is not an IRI")))
    }
}

impl<'data> RdfValueArg<'data> for LiteralRef<'data> {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        term.literal()
    }
}

impl RdfValueArg<'_> for Boolean {
    fn from_term(term: &Term) -> EvalResult<Self> {
        match TypedValueRef::from_term(term) {
            TypedValueRef::BooleanLiteral(value) => Ok(value),
            _ => EvalError::expected_type(format!("{term} is not a boolean literal")),
        }
    }
}

impl RdfValueArg<'_> for Numeric {
    fn from_term(term: &Term) -> EvalResult<Self> {
        numeric_literal(term).map(|literal| literal.value)
    }
}

impl<'data> RdfValueArg<'data> for NumericLiteralRef<'data> {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        numeric_literal(term)
    }
}

impl<'data> RdfValueArg<'data> for SimpleLiteralRef<'data> {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        SimpleLiteralRef::try_from(TypedValueRef::from_term(term))
    }
}

impl<'data> RdfValueArg<'data> for StringLiteralRef<'data> {
    fn from_term(term: &'data Term) -> EvalResult<Self> {
        string(term)
    }
}

impl RdfValueArg<'_> for Date {
    fn from_term(term: &Term) -> EvalResult<Self> {
        date(term)
    }
}

impl RdfValueArg<'_> for DateTime {
    fn from_term(term: &Term) -> EvalResult<Self> {
        datetime(term)
    }
}
