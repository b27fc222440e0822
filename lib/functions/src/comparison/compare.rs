use crate::{equal, ScalarBinaryRdfOp};
use rdf_eval_model::{
    is_recognized_datatype, partial_cmp_literals, Boolean, EvalError, EvalResult, LiteralRef,
    Term, TermExt, TypedValueRef,
};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    Greater,
    LessOrEqual,
    GreaterOrEqual,
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ComparisonOperator::Equal => "=",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::Greater => ">",
            ComparisonOperator::LessOrEqual => "<=",
            ComparisonOperator::GreaterOrEqual => ">=",
        })
    }
}

/// Evaluates one of the relational operators.
///
/// `=` and `!=` accept any pair of terms. The ordering operators require two literals, and at
/// least one of them must belong to the recognized XSD datatypes.
#[derive(Debug)]
pub struct CompareRdfOp {
    operator: ComparisonOperator,
}

impl CompareRdfOp {
    pub fn new(operator: ComparisonOperator) -> Self {
        Self { operator }
    }
}

impl ScalarBinaryRdfOp for CompareRdfOp {
    type ArgLhs<'data> = &'data Term;
    type ArgRhs<'data> = &'data Term;
    type Result<'data> = Boolean;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        let result = match self.operator {
            ComparisonOperator::Equal => equal(lhs, rhs)?,
            ComparisonOperator::NotEqual => !equal(lhs, rhs)?,
            operator => {
                let (Some(lhs_literal), Some(rhs_literal)) = (lhs.as_literal(), rhs.as_literal())
                else {
                    return EvalError::expected_type(format!(
                        "operator {operator} requires literals, got {lhs} and {rhs}"
                    ));
                };
                if !is_ordered_literal(lhs_literal) && !is_ordered_literal(rhs_literal) {
                    return Err(EvalError::evaluation(format!(
                        "operator {operator} is not defined for {lhs} and {rhs}"
                    )));
                }

                let ordering = partial_cmp_literals(
                    TypedValueRef::from_literal(lhs_literal),
                    TypedValueRef::from_literal(rhs_literal),
                )
                .ok_or_else(|| {
                    EvalError::type_error(format!("{lhs} and {rhs} are not comparable"))
                })?;
                match operator {
                    ComparisonOperator::Less => ordering.is_lt(),
                    ComparisonOperator::Greater => ordering.is_gt(),
                    ComparisonOperator::LessOrEqual => ordering.is_le(),
                    ComparisonOperator::GreaterOrEqual => ordering.is_ge(),
                    ComparisonOperator::Equal | ComparisonOperator::NotEqual => ordering.is_eq(),
                }
            }
        };
        Ok(result.into())
    }
}

fn is_ordered_literal(literal: LiteralRef<'_>) -> bool {
    literal.language().is_some() || is_recognized_datatype(literal.datatype())
}
