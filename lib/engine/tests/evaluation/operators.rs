use crate::{evaluate, evaluate_with, failing, render, simple, typed, var};
use insta::assert_snapshot;
use rdf_eval::{
    simplify, AdditiveOperator, Comparison, ComparisonOperator, ErrorKind, EvalError,
    EvaluatorConfig, Expression, ExpressionEvaluator, MultiplicativeOperator, QueryContext,
};
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{Literal, NamedNode, Term, Variable};
use std::sync::Arc;

fn additive(first: Expression, rest: Vec<(AdditiveOperator, Expression)>) -> Expression {
    Expression::Additive {
        expr: Box::new(first),
        other: Some(rest),
    }
}

fn multiplicative(
    first: Expression,
    rest: Vec<(MultiplicativeOperator, Expression)>,
) -> Expression {
    Expression::Multiplicative {
        expr: Box::new(first),
        other: Some(rest),
    }
}

fn in_list(needle: Expression, candidates: Vec<Expression>) -> Expression {
    Expression::Relational {
        expr: Box::new(needle),
        other: Some(Comparison::In(candidates)),
    }
}

fn not_in_list(needle: Expression, candidates: Vec<Expression>) -> Expression {
    Expression::Relational {
        expr: Box::new(needle),
        other: Some(Comparison::NotIn(candidates)),
    }
}

fn or(operands: Vec<Expression>) -> Expression {
    let mut operands = operands.into_iter();
    let first = operands.next().unwrap();
    Expression::Or {
        expr: Box::new(first),
        other: Some(operands.collect()),
    }
}

fn condition(expression: &Expression) -> Result<bool, EvalError> {
    ExpressionEvaluator::default().evaluate_condition(expression, &QueryContext::new())
}

#[test]
fn effective_boolean_value_truth_table() {
    assert_eq!(condition(&Literal::from(true).into()), Ok(true));
    assert_eq!(condition(&simple("")), Ok(false));
    assert_eq!(condition(&simple("x")), Ok(true));
    assert_eq!(condition(&typed("0", xsd::INTEGER)), Ok(false));
    assert_eq!(condition(&typed("0.0", xsd::DECIMAL)), Ok(false));
    assert_eq!(condition(&typed("NaN", xsd::DOUBLE)), Ok(false));
    assert_eq!(condition(&typed("2", xsd::INTEGER)), Ok(true));

    let iri = NamedNode::new_unchecked("http://example.com/").into();
    assert_eq!(condition(&iri).map_err(|e| e.kind()), Err(ErrorKind::Type));
}

#[test]
fn numeric_promotion() {
    let integer_plus_decimal = additive(
        typed("1", xsd::INTEGER),
        vec![(AdditiveOperator::Add, typed("1.5", xsd::DECIMAL))],
    );
    assert_snapshot!(render(&integer_plus_decimal), @r#""2.5"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);

    let decimal_plus_double = additive(
        typed("1.5", xsd::DECIMAL),
        vec![(AdditiveOperator::Add, typed("1", xsd::DOUBLE))],
    );
    assert_snapshot!(render(&decimal_plus_double), @r#""2.5"^^<http://www.w3.org/2001/XMLSchema#double>"#);

    let exact_decimal = additive(
        typed("0.1", xsd::DECIMAL),
        vec![(AdditiveOperator::Add, typed("0.2", xsd::DECIMAL))],
    );
    assert_snapshot!(render(&exact_decimal), @r#""0.3"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);

    let integer_times_integer = multiplicative(
        typed("6", xsd::INTEGER),
        vec![(MultiplicativeOperator::Multiply, typed("7", xsd::INTEGER))],
    );
    assert_snapshot!(render(&integer_times_integer), @r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#);
}

#[test]
fn division() {
    let half = multiplicative(
        typed("1", xsd::INTEGER),
        vec![(MultiplicativeOperator::Divide, typed("2", xsd::INTEGER))],
    );
    assert_snapshot!(render(&half), @r#""0.5"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);

    let by_zero = multiplicative(
        typed("1", xsd::DOUBLE),
        vec![(MultiplicativeOperator::Divide, typed("0", xsd::INTEGER))],
    );
    assert_snapshot!(render(&by_zero), @"EvaluationError: evaluation error: divide by zero");
}

#[test]
fn arithmetic_on_non_numeric_fails() {
    let expression = additive(
        simple("a"),
        vec![(AdditiveOperator::Add, typed("1", xsd::INTEGER))],
    );
    assert!(evaluate(&expression).is_err());
}

#[test]
fn unary_operators() {
    let minus = Expression::UnaryMinus(Box::new(typed("2", xsd::INTEGER)));
    assert_snapshot!(render(&minus), @r#""-2"^^<http://www.w3.org/2001/XMLSchema#integer>"#);
    let not = Expression::not(Literal::from(false).into());
    assert_snapshot!(render(&not), @r#""true"^^<http://www.w3.org/2001/XMLSchema#boolean>"#);
}

#[test]
fn date_arithmetic() {
    let date_plus_years = additive(
        typed("2020-01-01", xsd::DATE),
        vec![(AdditiveOperator::Add, typed("P1Y", xsd::YEAR_MONTH_DURATION))],
    );
    assert_snapshot!(render(&date_plus_years), @r#""2021-01-01"^^<http://www.w3.org/2001/XMLSchema#date>"#);

    let time_plus_years = additive(
        typed("10:00:00", xsd::TIME),
        vec![(AdditiveOperator::Add, typed("P1Y", xsd::YEAR_MONTH_DURATION))],
    );
    assert_snapshot!(render(&time_plus_years), @"EvaluationError: evaluation error: incompatible datetime operation");

    let date_minus_date_time = additive(
        typed("2020-01-01", xsd::DATE),
        vec![(
            AdditiveOperator::Subtract,
            typed("2020-01-01T00:00:00Z", xsd::DATE_TIME),
        )],
    );
    assert_snapshot!(render(&date_minus_date_time), @"EvaluationError: evaluation error: incompatible datetime operation");

    let difference = additive(
        typed("2020-01-02T00:00:00Z", xsd::DATE_TIME),
        vec![(
            AdditiveOperator::Subtract,
            typed("2020-01-01T00:00:00Z", xsd::DATE_TIME),
        )],
    );
    assert_snapshot!(render(&difference), @r#""P1D"^^<http://www.w3.org/2001/XMLSchema#duration>"#);

    let years_plus_date = additive(
        typed("P1Y", xsd::YEAR_MONTH_DURATION),
        vec![(AdditiveOperator::Add, typed("2020-01-01", xsd::DATE))],
    );
    assert_snapshot!(render(&years_plus_date), @"EvaluationError: evaluation error: incompatible datetime operation");

    let hours_plus_time = additive(
        typed("PT1H", xsd::DAY_TIME_DURATION),
        vec![(AdditiveOperator::Add, typed("10:00:00", xsd::TIME))],
    );
    assert_snapshot!(render(&hours_plus_time), @"EvaluationError: evaluation error: incompatible datetime operation");

    let hours_plus_date_time = additive(
        typed("PT1H", xsd::DAY_TIME_DURATION),
        vec![(AdditiveOperator::Add, typed("2020-01-01T10:00:00Z", xsd::DATE_TIME))],
    );
    assert_snapshot!(render(&hours_plus_date_time), @r#""2020-01-01T11:00:00Z"^^<http://www.w3.org/2001/XMLSchema#dateTime>"#);
}

#[test]
fn chained_date_time_subtraction_fails() {
    let expression = additive(
        typed("2020-01-03T00:00:00Z", xsd::DATE_TIME),
        vec![
            (
                AdditiveOperator::Subtract,
                typed("2020-01-02T00:00:00Z", xsd::DATE_TIME),
            ),
            (
                AdditiveOperator::Subtract,
                typed("2020-01-01T00:00:00Z", xsd::DATE_TIME),
            ),
        ],
    );
    assert_eq!(
        evaluate(&expression).map_err(|e| e.kind()),
        Err(ErrorKind::Evaluation)
    );
}

#[test]
fn comparisons() {
    let less = Expression::compare(
        ComparisonOperator::Less,
        typed("1", xsd::INTEGER),
        typed("2", xsd::DECIMAL),
    );
    assert_eq!(evaluate(&less), Ok(Literal::from(true).into()));

    let iri = || Expression::from(NamedNode::new_unchecked("http://example.com/"));
    let iri_order = Expression::compare(ComparisonOperator::Less, iri(), iri());
    assert_eq!(
        evaluate(&iri_order).map_err(|e| e.kind()),
        Err(ErrorKind::Type)
    );
    let iri_equal = Expression::compare(ComparisonOperator::Equal, iri(), iri());
    assert_eq!(evaluate(&iri_equal), Ok(Literal::from(true).into()));

    let custom = NamedNode::new_unchecked("http://example.com/datatype");
    let unknown_order = Expression::compare(
        ComparisonOperator::Less,
        typed("a", custom.as_ref()),
        typed("b", custom.as_ref()),
    );
    assert_eq!(
        evaluate(&unknown_order).map_err(|e| e.kind()),
        Err(ErrorKind::Evaluation)
    );
}

#[test]
fn in_prefers_match_over_earlier_error() {
    let five = || typed("5", xsd::INTEGER);

    let matched = in_list(five(), vec![failing(), five()]);
    assert_eq!(evaluate(&matched), Ok(Literal::from(true).into()));

    let unmatched = in_list(five(), vec![failing(), typed("6", xsd::INTEGER)]);
    assert_eq!(
        evaluate(&unmatched),
        Err(EvalError::Unbound(Variable::new_unchecked("unbound")))
    );

    let empty = in_list(five(), vec![]);
    assert_eq!(evaluate(&empty), Ok(Literal::from(false).into()));
}

#[test]
fn not_in_negates_in() {
    let five = || typed("5", xsd::INTEGER);

    let not_in = not_in_list(five(), vec![typed("6", xsd::INTEGER)]);
    assert_eq!(evaluate(&not_in), Ok(Literal::from(true).into()));

    let failing_not_in = not_in_list(five(), vec![failing()]);
    assert!(evaluate(&failing_not_in).is_err());
}

#[test]
fn or_and_and_reconcile_errors() {
    let t = || Expression::from(Literal::from(true));
    let f = || Expression::from(Literal::from(false));

    assert_eq!(
        evaluate(&or(vec![failing(), t()])),
        Ok(Literal::from(true).into())
    );
    assert!(evaluate(&or(vec![failing(), f()])).is_err());
    assert_eq!(
        evaluate(&or(vec![f(), f()])),
        Ok(Literal::from(false).into())
    );

    assert_eq!(
        evaluate(&Expression::and_all([failing(), f()])),
        Ok(Literal::from(false).into())
    );
    assert!(evaluate(&Expression::and_all([failing(), t()])).is_err());
    assert_eq!(
        evaluate(&Expression::and_all([t(), t()])),
        Ok(Literal::from(true).into())
    );
}

#[test]
fn if_evaluates_only_the_selected_branch() {
    let expression = Expression::If(
        Box::new(Literal::from(true).into()),
        Box::new(typed("1", xsd::INTEGER)),
        Box::new(failing()),
    );
    assert_eq!(
        evaluate(&expression),
        Ok(Literal::new_typed_literal("1", xsd::INTEGER).into())
    );
}

#[test]
fn coalesce_skips_unbound_and_errors() {
    let division_by_zero = multiplicative(
        typed("1", xsd::INTEGER),
        vec![(MultiplicativeOperator::Divide, typed("0", xsd::INTEGER))],
    );
    let expression = Expression::Coalesce(vec![failing(), division_by_zero, simple("x")]);
    assert_eq!(evaluate(&expression), Ok(Literal::new_simple_literal("x").into()));

    let nothing = Expression::Coalesce(vec![failing()]);
    assert_eq!(
        evaluate(&nothing).map_err(|e| e.kind()),
        Err(ErrorKind::Evaluation)
    );
}

#[test]
fn bound_and_variables() {
    let context = QueryContext::new()
        .with_binding(Variable::new_unchecked("x"), Literal::new_simple_literal("v"));
    let bound = Expression::Bound(Variable::new_unchecked("x"));
    let unbound = Expression::Bound(Variable::new_unchecked("y"));

    assert_eq!(evaluate_with(&bound, &context), Ok(Literal::from(true).into()));
    assert_eq!(evaluate_with(&unbound, &context), Ok(Literal::from(false).into()));
    assert_eq!(
        evaluate_with(&var("x"), &context),
        Ok(Term::from(Literal::new_simple_literal("v")))
    );
}

#[test]
fn chains_without_continuation_evaluate_to_their_operand() {
    let wrapped = Expression::Or {
        expr: Box::new(Expression::Additive {
            expr: Box::new(simple("a")),
            other: None,
        }),
        other: None,
    };
    assert_eq!(evaluate(&wrapped), Ok(Literal::new_simple_literal("a").into()));
    assert_eq!(evaluate(&simplify(wrapped.clone())), evaluate(&wrapped));
}

#[test]
fn depth_limit() {
    let mut expression = Expression::from(Literal::from(true));
    for _ in 0..4 {
        expression = Expression::not(expression);
    }

    let evaluator = ExpressionEvaluator::with_config(
        Arc::default(),
        EvaluatorConfig::default().with_max_depth(3),
    );
    assert_eq!(
        evaluator.evaluate(&expression, &QueryContext::new()),
        Err(EvalError::DepthLimitExceeded(3))
    );

    let evaluator = ExpressionEvaluator::with_config(
        Arc::default(),
        EvaluatorConfig::default().with_max_depth(5),
    );
    assert_eq!(
        evaluator.evaluate(&expression, &QueryContext::new()),
        Ok(Literal::from(true).into())
    );
}
