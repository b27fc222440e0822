mod cast_boolean;
mod cast_date_time;
mod cast_decimal;
mod cast_double;
mod cast_float;
mod cast_integer;
mod cast_string;

pub use cast_boolean::CastBooleanRdfOp;
pub use cast_date_time::CastDateTimeRdfOp;
pub use cast_decimal::CastDecimalRdfOp;
pub use cast_double::CastDoubleRdfOp;
pub use cast_float::CastFloatRdfOp;
pub use cast_integer::CastIntegerRdfOp;
pub use cast_string::CastStringRdfOp;

use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{
    is_recognized_datatype, EvalError, EvalResult, LiteralRef, NamedNodeRef, Term, TermExt,
};

/// Returns the literal that is cast to `target`, which must not be `xsd:string`.
///
/// Only literals of recognized datatypes can be cast. A language-tagged literal is cast from its
/// lexical form like a simple literal. A `xsd:dateTime` can only be cast to `xsd:dateTime` or
/// `xsd:string`.
fn cast_source<'data>(
    term: &'data Term,
    target: NamedNodeRef<'_>,
) -> EvalResult<LiteralRef<'data>> {
    let Some(literal) = term.as_literal() else {
        return Err(EvalError::evaluation(format!(
            "cannot cast {term} to {target}, only literals can be cast to non-string datatypes"
        )));
    };
    if literal.language().is_some() {
        return Ok(LiteralRef::new_simple_literal(literal.value()));
    }
    if !is_recognized_datatype(literal.datatype()) {
        return Err(EvalError::evaluation(format!(
            "cannot cast literal with unknown datatype {}",
            literal.datatype()
        )));
    }
    if literal.datatype() == xsd::DATE_TIME && target != xsd::DATE_TIME {
        return Err(cast_error(literal, target));
    }
    Ok(literal)
}

fn cast_error(literal: LiteralRef<'_>, target: NamedNodeRef<'_>) -> EvalError {
    EvalError::evaluation(format!("cannot cast {literal} to {target}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch_unary;
    use crate::ScalarUnaryRdfOp;
    use rdf_eval_model::{BlankNode, ErrorKind, Literal, NamedNode};

    fn typed(value: &str, datatype: NamedNodeRef<'_>) -> Term {
        Literal::new_typed_literal(value, datatype).into()
    }

    fn cast(op: &impl ScalarUnaryRdfOp, value: Term) -> EvalResult<Term> {
        dispatch_unary(op, &value)
    }

    #[test]
    fn cast_to_string() {
        let iri = Term::from(NamedNode::new_unchecked("http://example.com/"));
        assert_eq!(
            cast(&CastStringRdfOp::new(), iri),
            Ok(Literal::new_simple_literal("http://example.com/").into())
        );
        assert_eq!(
            cast(&CastStringRdfOp::new(), typed("01", xsd::INTEGER)),
            Ok(Literal::new_simple_literal("01").into())
        );
        let blank = cast(&CastStringRdfOp::new(), BlankNode::default().into());
        assert!(blank.is_err(), "blank nodes cannot be cast");
    }

    #[test]
    fn cast_to_date_time() {
        assert_eq!(
            cast(
                &CastDateTimeRdfOp::new(),
                Literal::new_simple_literal("2020-01-01T00:00:00Z").into()
            ),
            Ok(typed("2020-01-01T00:00:00Z", xsd::DATE_TIME))
        );
        let from_date = cast(&CastDateTimeRdfOp::new(), typed("2020-01-01", xsd::DATE));
        assert!(from_date.is_err(), "dates cannot be cast to dateTime");
    }

    #[test]
    fn date_times_only_cast_to_date_time_and_string() {
        let value = typed("2020-01-01T00:00:00Z", xsd::DATE_TIME);
        assert!(cast(&CastIntegerRdfOp::new(), value.clone()).is_err());
        assert!(cast(&CastBooleanRdfOp::new(), value.clone()).is_err());
        assert!(cast(&CastStringRdfOp::new(), value).is_ok());
    }

    #[test]
    fn numeric_casts() {
        assert_eq!(
            cast(&CastIntegerRdfOp::new(), typed("3.7", xsd::DECIMAL)),
            Ok(typed("3", xsd::INTEGER))
        );
        assert_eq!(
            cast(&CastIntegerRdfOp::new(), Literal::new_simple_literal(" 42 ").into()),
            Ok(typed("42", xsd::INTEGER))
        );
        assert_eq!(
            cast(&CastDoubleRdfOp::new(), typed("true", xsd::BOOLEAN)),
            Ok(typed("1", xsd::DOUBLE))
        );
        assert_eq!(
            cast(&CastFloatRdfOp::new(), Literal::new_simple_literal("1.5").into()),
            Ok(typed("1.5", xsd::FLOAT))
        );
        assert_eq!(
            cast(&CastDecimalRdfOp::new(), typed("2", xsd::INTEGER)),
            Ok(typed("2", xsd::DECIMAL))
        );
    }

    #[test]
    fn decimal_rejects_exponent() {
        let result = cast(&CastDecimalRdfOp::new(), typed("1e3", xsd::DOUBLE));
        assert_eq!(result.map_err(|error| error.kind()), Err(ErrorKind::Evaluation));
        let result = cast(&CastDecimalRdfOp::new(), Literal::new_simple_literal("1E3").into());
        assert!(result.is_err(), "exponents are not allowed in decimals");
    }

    #[test]
    fn boolean_cast_accepts_only_four_forms() {
        let t = Term::from(Literal::from(true));
        let f = Term::from(Literal::from(false));
        assert_eq!(
            cast(&CastBooleanRdfOp::new(), Literal::new_simple_literal("TRUE").into()),
            Ok(t.clone())
        );
        assert_eq!(cast(&CastBooleanRdfOp::new(), typed("1", xsd::INTEGER)), Ok(t));
        assert_eq!(cast(&CastBooleanRdfOp::new(), Literal::new_simple_literal("0").into()), Ok(f));
        assert!(cast(&CastBooleanRdfOp::new(), typed("2", xsd::INTEGER)).is_err());
        assert!(cast(&CastBooleanRdfOp::new(), Literal::new_simple_literal("yes").into()).is_err());
    }

    #[test]
    fn unknown_datatypes_cannot_be_cast() {
        let datatype = NamedNode::new_unchecked("http://example.com/dt");
        let result = cast(&CastIntegerRdfOp::new(), typed("1", datatype.as_ref()));
        assert!(result.is_err(), "unknown datatypes cannot be cast");
    }

    #[test]
    fn language_tagged_literals_are_cast_from_their_lexical_form() {
        let tagged =
            |value: &str| Term::from(Literal::new_language_tagged_literal_unchecked(value, "en"));
        assert_eq!(
            cast(&CastIntegerRdfOp::new(), tagged("1")),
            Ok(Literal::from(1).into())
        );
        assert_eq!(
            cast(&CastBooleanRdfOp::new(), tagged("false")),
            Ok(Literal::from(false).into())
        );
        assert_eq!(
            cast(&CastDateTimeRdfOp::new(), tagged("2020-01-01T00:00:00Z")),
            Ok(Literal::new_typed_literal("2020-01-01T00:00:00Z", xsd::DATE_TIME).into())
        );
        assert!(cast(&CastDecimalRdfOp::new(), tagged("1e3")).is_err());
    }
}
