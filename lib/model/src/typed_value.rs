use crate::{
    is_integer_datatype, parse_integer, LanguageStringRef, Numeric, SimpleLiteralRef,
};
use oxrdf::vocab::xsd;
use oxrdf::{BlankNodeRef, LiteralRef, NamedNodeRef, Term};
use oxsdatatypes::{
    Boolean, Date, DateTime, DayTimeDuration, Decimal, Double, Duration, Float, Time,
    YearMonthDuration,
};
use std::cmp::Ordering;
use std::str::FromStr;

/// A term whose literal value has been decoded according to its datatype.
///
/// Literals with an ill-formed lexical form (e.g., `"abc"^^xsd:integer`) and literals of datatypes
/// that are not decoded are kept as [TypedValueRef::OtherLiteral].
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TypedValueRef<'value> {
    NamedNode(NamedNodeRef<'value>),
    BlankNode(BlankNodeRef<'value>),
    BooleanLiteral(Boolean),
    NumericLiteral(Numeric),
    SimpleLiteral(SimpleLiteralRef<'value>),
    LanguageStringLiteral(LanguageStringRef<'value>),
    DateTimeLiteral(DateTime),
    TimeLiteral(Time),
    DateLiteral(Date),
    DurationLiteral(Duration),
    YearMonthDurationLiteral(YearMonthDuration),
    DayTimeDurationLiteral(DayTimeDuration),
    OtherLiteral(LiteralRef<'value>),
}

impl<'value> TypedValueRef<'value> {
    pub fn from_term(term: &'value Term) -> Self {
        match term {
            Term::NamedNode(node) => TypedValueRef::NamedNode(node.as_ref()),
            Term::BlankNode(node) => TypedValueRef::BlankNode(node.as_ref()),
            Term::Literal(literal) => Self::from_literal(literal.as_ref()),
        }
    }

    pub fn from_literal(literal: LiteralRef<'value>) -> Self {
        if let Some(language) = literal.language() {
            return TypedValueRef::LanguageStringLiteral(LanguageStringRef {
                value: literal.value(),
                language,
            });
        }

        let value = literal.value();
        let datatype = literal.datatype();
        let decoded = match datatype {
            xsd::STRING => Some(TypedValueRef::SimpleLiteral(SimpleLiteralRef::new(value))),
            xsd::BOOLEAN => Boolean::from_str(value)
                .ok()
                .map(TypedValueRef::BooleanLiteral),
            xsd::FLOAT => Float::from_str(value)
                .ok()
                .map(|v| TypedValueRef::NumericLiteral(Numeric::Float(v))),
            xsd::DOUBLE => Double::from_str(value)
                .ok()
                .map(|v| TypedValueRef::NumericLiteral(Numeric::Double(v))),
            xsd::DECIMAL => Decimal::from_str(value)
                .ok()
                .map(|v| TypedValueRef::NumericLiteral(Numeric::Decimal(v))),
            xsd::DATE_TIME => DateTime::from_str(value)
                .ok()
                .map(TypedValueRef::DateTimeLiteral),
            xsd::DATE => Date::from_str(value).ok().map(TypedValueRef::DateLiteral),
            xsd::TIME => Time::from_str(value).ok().map(TypedValueRef::TimeLiteral),
            xsd::DURATION => Duration::from_str(value)
                .ok()
                .map(TypedValueRef::DurationLiteral),
            xsd::YEAR_MONTH_DURATION => YearMonthDuration::from_str(value)
                .ok()
                .map(TypedValueRef::YearMonthDurationLiteral),
            xsd::DAY_TIME_DURATION => DayTimeDuration::from_str(value)
                .ok()
                .map(TypedValueRef::DayTimeDurationLiteral),
            _ if is_integer_datatype(datatype) => parse_integer(value, datatype)
                .map(|v| TypedValueRef::NumericLiteral(Numeric::Integer(v))),
            _ => None,
        };
        decoded.unwrap_or(TypedValueRef::OtherLiteral(literal))
    }

    pub fn is_literal(&self) -> bool {
        !matches!(
            self,
            TypedValueRef::NamedNode(_) | TypedValueRef::BlankNode(_)
        )
    }
}

impl PartialOrd for TypedValueRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match *self {
            TypedValueRef::BlankNode(a) => Some(match other {
                TypedValueRef::BlankNode(b) => a.as_str().cmp(b.as_str()),
                _ => Ordering::Less,
            }),
            TypedValueRef::NamedNode(a) => Some(match other {
                TypedValueRef::BlankNode(_) => Ordering::Greater,
                TypedValueRef::NamedNode(b) => a.as_str().cmp(b.as_str()),
                _ => Ordering::Less,
            }),
            a => match other {
                TypedValueRef::NamedNode(_) | TypedValueRef::BlankNode(_) => {
                    Some(Ordering::Greater)
                }
                _ => partial_cmp_literals(a, *other),
            },
        }
    }
}

/// Compares two decoded literals by value.
///
/// Returns `None` if the literals are not comparable, for example, because they belong to
/// different value spaces or because the comparison of two date/time values is indeterminate.
pub fn partial_cmp_literals(a: TypedValueRef<'_>, b: TypedValueRef<'_>) -> Option<Ordering> {
    match a {
        TypedValueRef::SimpleLiteral(a) => {
            if let TypedValueRef::SimpleLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::LanguageStringLiteral(a) => {
            if let TypedValueRef::LanguageStringLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::BooleanLiteral(a) => {
            if let TypedValueRef::BooleanLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::NumericLiteral(a) => {
            if let TypedValueRef::NumericLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::DateTimeLiteral(a) => {
            if let TypedValueRef::DateTimeLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::TimeLiteral(a) => {
            if let TypedValueRef::TimeLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::DateLiteral(a) => {
            if let TypedValueRef::DateLiteral(b) = b {
                a.partial_cmp(&b)
            } else {
                None
            }
        }
        TypedValueRef::DurationLiteral(a) => match b {
            TypedValueRef::DurationLiteral(b) => a.partial_cmp(&b),
            TypedValueRef::YearMonthDurationLiteral(b) => a.partial_cmp(&b),
            TypedValueRef::DayTimeDurationLiteral(b) => a.partial_cmp(&b),
            _ => None,
        },
        TypedValueRef::YearMonthDurationLiteral(a) => match b {
            TypedValueRef::DurationLiteral(b) => a.partial_cmp(&b),
            TypedValueRef::YearMonthDurationLiteral(b) => a.partial_cmp(&b),
            TypedValueRef::DayTimeDurationLiteral(b) => a.partial_cmp(&b),
            _ => None,
        },
        TypedValueRef::DayTimeDurationLiteral(a) => match b {
            TypedValueRef::DurationLiteral(b) => a.partial_cmp(&b),
            TypedValueRef::YearMonthDurationLiteral(b) => a.partial_cmp(&b),
            TypedValueRef::DayTimeDurationLiteral(b) => a.partial_cmp(&b),
            _ => None,
        },
        TypedValueRef::OtherLiteral(a) => match b {
            TypedValueRef::OtherLiteral(b) if a.datatype() == b.datatype() => {
                if a.value() == b.value() {
                    Some(Ordering::Equal)
                } else {
                    None
                }
            }
            _ => None,
        },
        TypedValueRef::NamedNode(_) | TypedValueRef::BlankNode(_) => None,
    }
}
