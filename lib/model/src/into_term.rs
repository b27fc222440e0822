use crate::{Numeric, NumericLiteralRef, OwnedStringLiteral, StringLiteralRef};
use oxrdf::vocab::xsd;
use oxrdf::{BlankNode, Literal, NamedNode, Term};
use oxsdatatypes::{
    Boolean, Date, DateTime, DayTimeDuration, Decimal, Double, Duration, Integer, Time,
    YearMonthDuration,
};

/// Converts the result of an operator back into a [Term].
pub trait IntoTerm {
    fn into_term(self) -> Term;
}

impl IntoTerm for Term {
    fn into_term(self) -> Term {
        self
    }
}

impl IntoTerm for NamedNode {
    fn into_term(self) -> Term {
        self.into()
    }
}

impl IntoTerm for BlankNode {
    fn into_term(self) -> Term {
        self.into()
    }
}

impl IntoTerm for Literal {
    fn into_term(self) -> Term {
        self.into()
    }
}

impl IntoTerm for Boolean {
    fn into_term(self) -> Term {
        Literal::from(bool::from(self)).into()
    }
}

impl IntoTerm for Numeric {
    fn into_term(self) -> Term {
        self.into_literal().into()
    }
}

impl IntoTerm for NumericLiteralRef<'_> {
    fn into_term(self) -> Term {
        self.into_literal().into()
    }
}

impl IntoTerm for OwnedStringLiteral {
    fn into_term(self) -> Term {
        self.into_literal().into()
    }
}

impl IntoTerm for StringLiteralRef<'_> {
    fn into_term(self) -> Term {
        OwnedStringLiteral::from(self).into_term()
    }
}

macro_rules! impl_into_typed_literal {
    ($TYPE: ty, $DATATYPE: expr) => {
        impl IntoTerm for $TYPE {
            fn into_term(self) -> Term {
                Literal::new_typed_literal(self.to_string(), $DATATYPE).into()
            }
        }
    };
}

impl_into_typed_literal!(Integer, xsd::INTEGER);
impl_into_typed_literal!(Decimal, xsd::DECIMAL);
impl_into_typed_literal!(Double, xsd::DOUBLE);
impl_into_typed_literal!(DateTime, xsd::DATE_TIME);
impl_into_typed_literal!(Date, xsd::DATE);
impl_into_typed_literal!(Time, xsd::TIME);
impl_into_typed_literal!(Duration, xsd::DURATION);
impl_into_typed_literal!(YearMonthDuration, xsd::YEAR_MONTH_DURATION);
impl_into_typed_literal!(DayTimeDuration, xsd::DAY_TIME_DURATION);
