use crate::AdditiveOperator;
use rdf_eval_model::{
    is_date_time_datatype, is_duration_datatype, Date, DateTime, DayTimeDuration, Duration,
    EvalError, EvalResult, IntoTerm, Term, TermExt, Time, TypedValueRef, YearMonthDuration,
};

/// A point in time that can be shifted by a duration.
#[derive(Clone, Copy, Debug, PartialEq)]
enum TemporalValue {
    DateTime(DateTime),
    Date(Date),
    Time(Time),
}

impl TemporalValue {
    /// Returns `None` if both values are not of the same type.
    fn difference(self, rhs: TemporalValue) -> Option<Option<DayTimeDuration>> {
        match (self, rhs) {
            (TemporalValue::DateTime(lhs), TemporalValue::DateTime(rhs)) => {
                Some(lhs.checked_sub(rhs))
            }
            (TemporalValue::Date(lhs), TemporalValue::Date(rhs)) => Some(lhs.checked_sub(rhs)),
            (TemporalValue::Time(lhs), TemporalValue::Time(rhs)) => Some(lhs.checked_sub(rhs)),
            _ => None,
        }
    }

    fn into_term(self) -> Term {
        match self {
            TemporalValue::DateTime(value) => value.into_term(),
            TemporalValue::Date(value) => value.into_term(),
            TemporalValue::Time(value) => value.into_term(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DurationValue {
    Duration(Duration),
    YearMonth(YearMonthDuration),
    DayTime(DayTimeDuration),
}

/// A duration operand together with the lexical form it was written in.
#[derive(Clone, Copy, Debug)]
struct DurationOperand<'data> {
    value: DurationValue,
    lexical: &'data str,
}

impl DurationOperand<'_> {
    fn has_time_component(&self) -> bool {
        self.lexical.contains('T')
    }

    fn has_date_component(&self) -> bool {
        !self.lexical.trim_start_matches('-').starts_with("PT")
    }
}

#[derive(Clone, Copy, Debug)]
enum TemporalOperand<'data> {
    Temporal(TemporalValue),
    Duration(DurationOperand<'data>),
}

impl<'data> TemporalOperand<'data> {
    fn from_term(term: &'data Term) -> Option<Self> {
        let lexical = term.as_literal()?.value();
        let duration = |value| {
            Some(TemporalOperand::Duration(DurationOperand { value, lexical }))
        };
        match TypedValueRef::from_term(term) {
            TypedValueRef::DateTimeLiteral(value) => {
                Some(TemporalOperand::Temporal(TemporalValue::DateTime(value)))
            }
            TypedValueRef::DateLiteral(value) => {
                Some(TemporalOperand::Temporal(TemporalValue::Date(value)))
            }
            TypedValueRef::TimeLiteral(value) => {
                Some(TemporalOperand::Temporal(TemporalValue::Time(value)))
            }
            TypedValueRef::DurationLiteral(value) => duration(DurationValue::Duration(value)),
            TypedValueRef::YearMonthDurationLiteral(value) => {
                duration(DurationValue::YearMonth(value))
            }
            TypedValueRef::DayTimeDurationLiteral(value) => {
                duration(DurationValue::DayTime(value))
            }
            _ => None,
        }
    }
}

fn incompatible() -> EvalError {
    EvalError::evaluation("incompatible datetime operation")
}

/// Checks whether the datatype of `term` makes an additive chain a date/time computation.
pub fn is_temporal_operand(term: &Term) -> bool {
    term.as_literal().is_some_and(|literal| {
        is_date_time_datatype(literal.datatype()) || is_duration_datatype(literal.datatype())
    })
}

/// Folds an additive chain whose first operand is a date, time, dateTime or duration.
///
/// Legal steps are:
/// - subtracting two values of the same date/time type, which yields an `xsd:duration` and is
///   only allowed if the chain has a single continuation,
/// - adding or subtracting a compatible duration to a date/time value,
/// - adding a dateTime value to a duration.
///
/// A `date` is compatible with a duration without time component, a `time` with a duration
/// without date component and a `dateTime` with any duration.
pub fn evaluate_temporal_chain(
    first: &Term,
    rest: &[(AdditiveOperator, Term)],
) -> EvalResult<Term> {
    if rest.is_empty() {
        return Ok(first.clone());
    }

    let mut current = TemporalOperand::from_term(first).ok_or_else(incompatible)?;
    for (operator, term) in rest {
        let operand = TemporalOperand::from_term(term).ok_or_else(incompatible)?;
        current = match (current, operand) {
            (TemporalOperand::Temporal(lhs), TemporalOperand::Temporal(rhs))
                if *operator == AdditiveOperator::Subtract =>
            {
                let difference = lhs.difference(rhs).ok_or_else(incompatible)?;
                if rest.len() > 1 {
                    return Err(EvalError::evaluation(
                        "cannot subtract more than two date/time values",
                    ));
                }
                let difference = difference
                    .ok_or_else(|| EvalError::evaluation("date/time difference overflows"))?;
                return Ok(Duration::from(difference).into_term());
            }
            (TemporalOperand::Temporal(lhs), TemporalOperand::Duration(rhs)) => {
                TemporalOperand::Temporal(shift(lhs, *operator, rhs)?)
            }
            (
                TemporalOperand::Duration(lhs),
                TemporalOperand::Temporal(rhs @ TemporalValue::DateTime(_)),
            ) if *operator == AdditiveOperator::Add => {
                TemporalOperand::Temporal(shift(rhs, AdditiveOperator::Add, lhs)?)
            }
            _ => return Err(incompatible()),
        };
    }

    match current {
        TemporalOperand::Temporal(value) => Ok(value.into_term()),
        TemporalOperand::Duration(_) => Err(incompatible()),
    }
}

fn is_compatible(value: TemporalValue, duration: DurationOperand<'_>) -> bool {
    match (value, duration.value) {
        (TemporalValue::DateTime(_), _) => true,
        (TemporalValue::Date(_), DurationValue::YearMonth(_)) => true,
        (TemporalValue::Date(_), _) => !duration.has_time_component(),
        (TemporalValue::Time(_), DurationValue::YearMonth(_)) => false,
        (TemporalValue::Time(_), _) => !duration.has_date_component(),
    }
}

fn shift(
    value: TemporalValue,
    operator: AdditiveOperator,
    duration: DurationOperand<'_>,
) -> EvalResult<TemporalValue> {
    if !is_compatible(value, duration) {
        return Err(incompatible());
    }

    let result = match operator {
        AdditiveOperator::Add => checked_add(value, duration.value),
        AdditiveOperator::Subtract => checked_sub(value, duration.value),
    };
    result.ok_or_else(|| EvalError::evaluation("date/time arithmetic overflows"))
}

fn checked_add(value: TemporalValue, duration: DurationValue) -> Option<TemporalValue> {
    Some(match (value, duration) {
        (TemporalValue::DateTime(v), DurationValue::Duration(d)) => {
            TemporalValue::DateTime(v.checked_add_duration(d)?)
        }
        (TemporalValue::DateTime(v), DurationValue::YearMonth(d)) => {
            TemporalValue::DateTime(v.checked_add_year_month_duration(d)?)
        }
        (TemporalValue::DateTime(v), DurationValue::DayTime(d)) => {
            TemporalValue::DateTime(v.checked_add_day_time_duration(d)?)
        }
        (TemporalValue::Date(v), DurationValue::Duration(d)) => {
            TemporalValue::Date(v.checked_add_duration(d)?)
        }
        (TemporalValue::Date(v), DurationValue::YearMonth(d)) => {
            TemporalValue::Date(v.checked_add_year_month_duration(d)?)
        }
        (TemporalValue::Date(v), DurationValue::DayTime(d)) => {
            TemporalValue::Date(v.checked_add_day_time_duration(d)?)
        }
        (TemporalValue::Time(v), DurationValue::Duration(d)) => {
            TemporalValue::Time(v.checked_add_duration(d)?)
        }
        (TemporalValue::Time(v), DurationValue::DayTime(d)) => {
            TemporalValue::Time(v.checked_add_day_time_duration(d)?)
        }
        (TemporalValue::Time(_), DurationValue::YearMonth(_)) => return None,
    })
}

fn checked_sub(value: TemporalValue, duration: DurationValue) -> Option<TemporalValue> {
    Some(match (value, duration) {
        (TemporalValue::DateTime(v), DurationValue::Duration(d)) => {
            TemporalValue::DateTime(v.checked_sub_duration(d)?)
        }
        (TemporalValue::DateTime(v), DurationValue::YearMonth(d)) => {
            TemporalValue::DateTime(v.checked_sub_year_month_duration(d)?)
        }
        (TemporalValue::DateTime(v), DurationValue::DayTime(d)) => {
            TemporalValue::DateTime(v.checked_sub_day_time_duration(d)?)
        }
        (TemporalValue::Date(v), DurationValue::Duration(d)) => {
            TemporalValue::Date(v.checked_sub_duration(d)?)
        }
        (TemporalValue::Date(v), DurationValue::YearMonth(d)) => {
            TemporalValue::Date(v.checked_sub_year_month_duration(d)?)
        }
        (TemporalValue::Date(v), DurationValue::DayTime(d)) => {
            TemporalValue::Date(v.checked_sub_day_time_duration(d)?)
        }
        (TemporalValue::Time(v), DurationValue::Duration(d)) => {
            TemporalValue::Time(v.checked_sub_duration(d)?)
        }
        (TemporalValue::Time(v), DurationValue::DayTime(d)) => {
            TemporalValue::Time(v.checked_sub_day_time_duration(d)?)
        }
        (TemporalValue::Time(_), DurationValue::YearMonth(_)) => return None,
    })
}
