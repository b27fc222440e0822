use crate::evaluate_with;
use rdf_eval::{
    Bindings, EvaluationContext, Expression, PatternEvaluator, QueryContext, Solutions,
};
use rdf_eval_model::{ErrorKind, Literal, Variable};
use spargebra::algebra::GraphPattern;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Produces `limit` solutions (or infinitely many) and counts how many were requested.
#[derive(Debug)]
struct CountingPatternEvaluator {
    limit: Option<usize>,
    requested: AtomicUsize,
}

impl CountingPatternEvaluator {
    fn new(limit: Option<usize>) -> Arc<Self> {
        Arc::new(Self {
            limit,
            requested: AtomicUsize::new(0),
        })
    }

    fn requested(&self) -> usize {
        self.requested.load(Ordering::SeqCst)
    }
}

impl PatternEvaluator for CountingPatternEvaluator {
    fn solutions<'solutions>(
        &'solutions self,
        _pattern: &'solutions GraphPattern,
        scope: &'solutions dyn EvaluationContext,
    ) -> Solutions<'solutions> {
        let variable = Variable::new_unchecked("outer");
        let solutions = std::iter::repeat_with(move || {
            self.requested.fetch_add(1, Ordering::SeqCst);
            let mut solution = Bindings::new();
            if let Some(term) = scope.lookup(&variable) {
                solution.insert(variable.clone(), term.clone());
            }
            Ok(solution)
        });
        match self.limit {
            Some(limit) => Box::new(solutions.take(limit)),
            None => Box::new(solutions),
        }
    }
}

fn exists(negated: bool) -> Expression {
    Expression::Exists {
        pattern: Box::new(GraphPattern::Bgp { patterns: vec![] }),
        negated,
    }
}

#[test]
fn exists_stops_after_the_first_solution() {
    let pattern_evaluator = CountingPatternEvaluator::new(None);
    let context = QueryContext::new()
        .with_binding(Variable::new_unchecked("outer"), Literal::new_simple_literal("v"))
        .with_pattern_evaluator(Arc::clone(&pattern_evaluator) as Arc<dyn PatternEvaluator>);

    assert_eq!(
        evaluate_with(&exists(false), &context),
        Ok(Literal::from(true).into())
    );
    assert_eq!(pattern_evaluator.requested(), 1);

    assert_eq!(
        evaluate_with(&exists(true), &context),
        Ok(Literal::from(false).into())
    );
    assert_eq!(pattern_evaluator.requested(), 2);
}

#[test]
fn exists_without_solutions() {
    let pattern_evaluator = CountingPatternEvaluator::new(Some(0));
    let context = QueryContext::new()
        .with_pattern_evaluator(Arc::clone(&pattern_evaluator) as Arc<dyn PatternEvaluator>);

    assert_eq!(
        evaluate_with(&exists(false), &context),
        Ok(Literal::from(false).into())
    );
    assert_eq!(
        evaluate_with(&exists(true), &context),
        Ok(Literal::from(true).into())
    );
    assert_eq!(pattern_evaluator.requested(), 0);
}

#[test]
fn exists_requires_a_pattern_evaluator() {
    let result = evaluate_with(&exists(false), &QueryContext::new());
    assert_eq!(result.map_err(|e| e.kind()), Err(ErrorKind::Evaluation));
}
