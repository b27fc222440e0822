use crate::{failing, simple};
use rdf_eval::{
    CustomFunction, ErrorKind, Evaluation, Expression, ExpressionEvaluator, FunctionArity,
    FunctionCall, FunctionRegistry, QueryContext, RawFunction, RegistryError, ScalarFunction,
};
use rdf_eval_model::{EvalError, EvalResult, Literal, NamedNode, Term, TermExt};
use std::sync::Arc;

/// Joins the lexical forms of its two arguments with `separator`.
#[derive(Debug)]
struct Join {
    separator: &'static str,
}

impl ScalarFunction for Join {
    fn arity(&self) -> FunctionArity {
        FunctionArity::Fixed(2)
    }

    fn evaluate(&self, args: &[Term]) -> EvalResult<Term> {
        let values = args
            .iter()
            .map(|arg| {
                arg.as_literal()
                    .map(|literal| literal.value())
                    .ok_or_else(|| EvalError::type_error("join expects literals"))
            })
            .collect::<EvalResult<Vec<_>>>()?;
        Ok(Literal::new_simple_literal(values.join(self.separator)).into())
    }
}

/// Returns its first argument and never evaluates the others.
#[derive(Debug)]
struct First;

impl RawFunction for First {
    fn evaluate(&self, call: &FunctionCall, evaluation: &Evaluation<'_>) -> EvalResult<Term> {
        let first = call
            .args
            .first()
            .ok_or_else(|| EvalError::evaluation("first expects an argument"))?;
        evaluation.evaluate(first)
    }
}

fn join_iri() -> NamedNode {
    NamedNode::new_unchecked("http://example.com/join")
}

fn join_call() -> Expression {
    Expression::call(join_iri(), [simple("a"), simple("b")])
}

fn evaluate(registry: &Arc<FunctionRegistry>, expression: &Expression) -> EvalResult<Term> {
    ExpressionEvaluator::new(Arc::clone(registry)).evaluate(expression, &QueryContext::new())
}

#[test]
fn by_value_function_receives_evaluated_arguments() {
    let registry = Arc::new(FunctionRegistry::new());
    registry
        .register(
            join_iri(),
            CustomFunction::ByValue(Arc::new(Join { separator: "-" })),
            false,
        )
        .unwrap();

    assert_eq!(
        evaluate(&registry, &join_call()),
        Ok(Literal::new_simple_literal("a-b").into())
    );
}

#[test]
fn override_replaces_the_binding() {
    let registry = Arc::new(FunctionRegistry::new());
    registry
        .register(
            join_iri(),
            CustomFunction::ByValue(Arc::new(Join { separator: "-" })),
            false,
        )
        .unwrap();

    let replacement = CustomFunction::ByValue(Arc::new(Join { separator: "+" }));
    assert_eq!(
        registry.register(join_iri(), replacement.clone(), false),
        Err(RegistryError::AlreadyRegistered(join_iri()))
    );
    registry.register(join_iri(), replacement, true).unwrap();

    assert_eq!(
        evaluate(&registry, &join_call()),
        Ok(Literal::new_simple_literal("a+b").into())
    );
}

#[test]
fn wrong_argument_count_is_an_arity_error() {
    let registry = Arc::new(FunctionRegistry::new());
    registry
        .register(
            join_iri(),
            CustomFunction::ByValue(Arc::new(Join { separator: "-" })),
            false,
        )
        .unwrap();

    let expression = Expression::call(join_iri(), [simple("a")]);
    assert_eq!(
        evaluate(&registry, &expression).map_err(|e| e.kind()),
        Err(ErrorKind::Arity)
    );
}

#[test]
fn unknown_function_is_an_evaluation_error() {
    let registry = Arc::new(FunctionRegistry::new());
    assert_eq!(
        evaluate(&registry, &join_call()),
        Err(EvalError::evaluation(
            "unknown function <http://example.com/join>"
        ))
    );
}

#[test]
fn raw_function_controls_evaluation() {
    let registry = Arc::new(FunctionRegistry::new());
    let iri = NamedNode::new_unchecked("http://example.com/first");
    registry
        .register(iri.clone(), CustomFunction::Raw(Arc::new(First)), false)
        .unwrap();

    let expression = Expression::call(iri, [simple("kept"), failing()]);
    assert_eq!(
        evaluate(&registry, &expression),
        Ok(Literal::new_simple_literal("kept").into())
    );
}

#[test]
fn unregistered_function_is_unknown() {
    let registry = Arc::new(FunctionRegistry::new());
    let function = CustomFunction::ByValue(Arc::new(Join { separator: "-" }));
    registry
        .register(join_iri(), function.clone(), false)
        .unwrap();
    registry.unregister(&join_iri(), &function).unwrap();

    assert!(evaluate(&registry, &join_call()).is_err());
    assert_eq!(
        registry.unregister(&join_iri(), &function),
        Err(RegistryError::NotRegistered(join_iri()))
    );
}
