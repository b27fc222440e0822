use crate::{Comparison, Expression, FunctionCall};

/// Removes chain nodes without a continuation from `expression`.
///
/// A chain node ([Expression::Or], [Expression::And], [Expression::Relational],
/// [Expression::Additive] or [Expression::Multiplicative]) whose `other` is `None` is replaced by
/// its simplified leading operand. All other nodes are kept, but their children are simplified.
/// Simplifying an already simplified expression returns it unchanged.
pub fn simplify(expression: Expression) -> Expression {
    match expression {
        Expression::Or { expr, other: None }
        | Expression::And { expr, other: None }
        | Expression::Relational { expr, other: None }
        | Expression::Additive { expr, other: None }
        | Expression::Multiplicative { expr, other: None } => simplify(*expr),
        Expression::Or {
            expr,
            other: Some(other),
        } => Expression::Or {
            expr: simplify_boxed(expr),
            other: Some(simplify_all(other)),
        },
        Expression::And {
            expr,
            other: Some(other),
        } => Expression::And {
            expr: simplify_boxed(expr),
            other: Some(simplify_all(other)),
        },
        Expression::Relational {
            expr,
            other: Some(other),
        } => Expression::Relational {
            expr: simplify_boxed(expr),
            other: Some(simplify_comparison(other)),
        },
        Expression::Additive {
            expr,
            other: Some(other),
        } => Expression::Additive {
            expr: simplify_boxed(expr),
            other: Some(
                other
                    .into_iter()
                    .map(|(operator, operand)| (operator, simplify(operand)))
                    .collect(),
            ),
        },
        Expression::Multiplicative {
            expr,
            other: Some(other),
        } => Expression::Multiplicative {
            expr: simplify_boxed(expr),
            other: Some(
                other
                    .into_iter()
                    .map(|(operator, operand)| (operator, simplify(operand)))
                    .collect(),
            ),
        },
        Expression::Not(inner) => Expression::Not(simplify_boxed(inner)),
        Expression::UnaryMinus(inner) => Expression::UnaryMinus(simplify_boxed(inner)),
        Expression::UnaryPlus(inner) => Expression::UnaryPlus(simplify_boxed(inner)),
        Expression::If(condition, if_true, if_false) => Expression::If(
            simplify_boxed(condition),
            simplify_boxed(if_true),
            simplify_boxed(if_false),
        ),
        Expression::Coalesce(args) => Expression::Coalesce(simplify_all(args)),
        Expression::Builtin(function, args) => Expression::Builtin(function, simplify_all(args)),
        Expression::FunctionCall(FunctionCall { iri, args }) => {
            Expression::FunctionCall(FunctionCall {
                iri,
                args: simplify_all(args),
            })
        }
        Expression::Constant(_)
        | Expression::Variable(_)
        | Expression::Bound(_)
        | Expression::Exists { .. } => expression,
    }
}

fn simplify_boxed(expression: Box<Expression>) -> Box<Expression> {
    Box::new(simplify(*expression))
}

fn simplify_all(expressions: Vec<Expression>) -> Vec<Expression> {
    expressions.into_iter().map(simplify).collect()
}

fn simplify_comparison(comparison: Comparison) -> Comparison {
    match comparison {
        Comparison::Compare(operator, rhs) => Comparison::Compare(operator, simplify_boxed(rhs)),
        Comparison::In(candidates) => Comparison::In(simplify_all(candidates)),
        Comparison::NotIn(candidates) => Comparison::NotIn(simplify_all(candidates)),
    }
}
