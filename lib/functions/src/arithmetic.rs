use crate::{
    dispatch_binary, evaluate_temporal_chain, is_temporal_operand, AddRdfOp, DivRdfOp, MulRdfOp,
    SubRdfOp,
};
use rdf_eval_model::{EvalResult, Term};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdditiveOperator {
    Add,
    Subtract,
}

impl Display for AdditiveOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            AdditiveOperator::Add => "+",
            AdditiveOperator::Subtract => "-",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MultiplicativeOperator {
    Multiply,
    Divide,
}

impl Display for MultiplicativeOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MultiplicativeOperator::Multiply => "*",
            MultiplicativeOperator::Divide => "/",
        })
    }
}

/// Folds an already evaluated additive chain from left to right.
///
/// If the first operand is a date/time or duration literal, the whole chain is computed with
/// date/time arithmetic. Otherwise, every operand must be numeric.
pub fn evaluate_additive_chain(
    first: &Term,
    rest: &[(AdditiveOperator, Term)],
) -> EvalResult<Term> {
    if is_temporal_operand(first) {
        return evaluate_temporal_chain(first, rest);
    }

    let mut result = first.clone();
    for (operator, operand) in rest {
        result = match operator {
            AdditiveOperator::Add => dispatch_binary(&AddRdfOp::new(), &result, operand)?,
            AdditiveOperator::Subtract => dispatch_binary(&SubRdfOp::new(), &result, operand)?,
        };
    }
    if rest.is_empty() {
        // A lone operand still has to be numeric.
        rdf_eval_model::numeric(&result)?;
    }
    Ok(result)
}

/// Folds an already evaluated multiplicative chain from left to right.
pub fn evaluate_multiplicative_chain(
    first: &Term,
    rest: &[(MultiplicativeOperator, Term)],
) -> EvalResult<Term> {
    let mut result = first.clone();
    for (operator, operand) in rest {
        result = match operator {
            MultiplicativeOperator::Multiply => {
                dispatch_binary(&MulRdfOp::new(), &result, operand)?
            }
            MultiplicativeOperator::Divide => {
                dispatch_binary(&DivRdfOp::new(), &result, operand)?
            }
        };
    }
    if rest.is_empty() {
        rdf_eval_model::numeric(&result)?;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_eval_model::vocab::xsd;
    use rdf_eval_model::{EvalError, Literal, NamedNodeRef};

    fn typed(value: &str, datatype: NamedNodeRef<'_>) -> Term {
        Literal::new_typed_literal(value, datatype).into()
    }

    #[test]
    fn promotes_to_the_widest_operand() {
        let result = evaluate_additive_chain(
            &typed("1", xsd::INTEGER),
            &[
                (AdditiveOperator::Add, typed("0.5", xsd::DECIMAL)),
                (AdditiveOperator::Subtract, typed("1", xsd::INTEGER)),
            ],
        )
        .unwrap();
        assert_eq!(result, typed("0.5", xsd::DECIMAL));

        let result = evaluate_additive_chain(
            &typed("1", xsd::INTEGER),
            &[(AdditiveOperator::Add, typed("1.5", xsd::DOUBLE))],
        )
        .unwrap();
        assert_eq!(result, typed("2.5", xsd::DOUBLE));
    }

    #[test]
    fn decimal_arithmetic_is_exact() {
        let result = evaluate_additive_chain(
            &typed("0.1", xsd::DECIMAL),
            &[(AdditiveOperator::Add, typed("0.2", xsd::DECIMAL))],
        )
        .unwrap();
        assert_eq!(result, typed("0.3", xsd::DECIMAL));
    }

    #[test]
    fn derived_integers_add_to_integer() {
        let result = evaluate_additive_chain(
            &typed("1", xsd::BYTE),
            &[(AdditiveOperator::Add, typed("2", xsd::SHORT))],
        )
        .unwrap();
        assert_eq!(result, typed("3", xsd::INTEGER));
    }

    #[test]
    fn strings_are_not_added() {
        let result = evaluate_additive_chain(
            &typed("1", xsd::INTEGER),
            &[(AdditiveOperator::Add, Literal::new_simple_literal("1").into())],
        );
        assert!(matches!(result, Err(EvalError::Type(_))));
    }

    #[test]
    fn multiply_then_divide() {
        let result = evaluate_multiplicative_chain(
            &typed("3", xsd::INTEGER),
            &[
                (MultiplicativeOperator::Multiply, typed("2", xsd::INTEGER)),
                (MultiplicativeOperator::Divide, typed("4", xsd::INTEGER)),
            ],
        )
        .unwrap();
        assert_eq!(result, typed("1.5", xsd::DECIMAL));
    }

    #[test]
    fn divide_by_zero() {
        let result = evaluate_multiplicative_chain(
            &typed("3", xsd::INTEGER),
            &[(MultiplicativeOperator::Divide, typed("0", xsd::INTEGER))],
        );
        assert_eq!(result, Err(EvalError::evaluation("divide by zero")));
    }

    #[test]
    fn date_chain_is_delegated() {
        let result = evaluate_additive_chain(
            &typed("2020-01-01", xsd::DATE),
            &[(AdditiveOperator::Add, typed("P1Y", xsd::YEAR_MONTH_DURATION))],
        )
        .unwrap();
        assert_eq!(result, typed("2021-01-01", xsd::DATE));
    }
}
