mod builtin;

use crate::{
    Comparison, CustomFunction, EvaluationContext, EvaluatorConfig, Expression, FunctionCall,
    FunctionRegistry,
};
use rdf_eval_functions::{
    dispatch_binary, dispatch_unary, effective_boolean_value, evaluate_additive_chain,
    evaluate_and, evaluate_coalesce, evaluate_in, evaluate_multiplicative_chain, evaluate_or,
    CompareRdfOp, NotRdfOp, UnaryMinusRdfOp, UnaryPlusRdfOp,
};
use rdf_eval_model::{EvalError, EvalResult, Literal, Term};
use spargebra::algebra::GraphPattern;
use std::cell::Cell;
use std::iter::once;
use std::sync::Arc;

/// Evaluates [Expression]s against an [EvaluationContext].
///
/// The evaluator itself is stateless and can be shared between threads. Each call to
/// [ExpressionEvaluator::evaluate] creates a new [Evaluation].
#[derive(Debug, Clone)]
pub struct ExpressionEvaluator {
    registry: Arc<FunctionRegistry>,
    config: EvaluatorConfig,
}

impl ExpressionEvaluator {
    /// Creates a new [ExpressionEvaluator] with the default [EvaluatorConfig].
    pub fn new(registry: Arc<FunctionRegistry>) -> Self {
        Self::with_config(registry, EvaluatorConfig::default())
    }

    pub fn with_config(registry: Arc<FunctionRegistry>, config: EvaluatorConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<FunctionRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates `expression` against `context`.
    pub fn evaluate(
        &self,
        expression: &Expression,
        context: &dyn EvaluationContext,
    ) -> EvalResult<Term> {
        Evaluation::new(self, context).evaluate(expression)
    }

    /// Evaluates `expression` and returns its effective boolean value, e.g., for a filter.
    pub fn evaluate_condition(
        &self,
        expression: &Expression,
        context: &dyn EvaluationContext,
    ) -> EvalResult<bool> {
        effective_boolean_value(&self.evaluate(expression, context)?)
    }
}

impl Default for ExpressionEvaluator {
    fn default() -> Self {
        Self::new(Arc::new(FunctionRegistry::with_casts()))
    }
}

/// A single evaluation of an expression against a context.
///
/// Tracks the nesting depth of the evaluated expression. [RawFunction](crate::RawFunction)s use
/// the evaluation to evaluate their arguments.
pub struct Evaluation<'eval> {
    evaluator: &'eval ExpressionEvaluator,
    context: &'eval dyn EvaluationContext,
    depth: Cell<usize>,
}

impl<'eval> Evaluation<'eval> {
    pub fn new(
        evaluator: &'eval ExpressionEvaluator,
        context: &'eval dyn EvaluationContext,
    ) -> Self {
        Self {
            evaluator,
            context,
            depth: Cell::new(0),
        }
    }

    pub fn context(&self) -> &'eval dyn EvaluationContext {
        self.context
    }

    pub fn config(&self) -> &'eval EvaluatorConfig {
        &self.evaluator.config
    }

    /// Evaluates `expression`.
    ///
    /// Fails with [EvalError::DepthLimitExceeded] if the expression is nested deeper than
    /// [EvaluatorConfig::max_depth].
    pub fn evaluate(&self, expression: &Expression) -> EvalResult<Term> {
        let depth = self.depth.get() + 1;
        let max_depth = self.config().max_depth;
        if depth > max_depth {
            tracing::debug!(max_depth, "Expression exceeds the maximum nesting depth");
            return Err(EvalError::DepthLimitExceeded(max_depth));
        }

        self.depth.set(depth);
        let result = self.evaluate_node(expression);
        self.depth.set(depth - 1);
        result
    }

    fn evaluate_node(&self, expression: &Expression) -> EvalResult<Term> {
        match expression {
            Expression::Constant(term) => Ok(term.clone()),
            Expression::Variable(variable) => self
                .context
                .lookup(variable)
                .cloned()
                .ok_or_else(|| EvalError::Unbound(variable.clone())),
            Expression::Or { expr, other: None }
            | Expression::And { expr, other: None }
            | Expression::Relational { expr, other: None }
            | Expression::Additive { expr, other: None }
            | Expression::Multiplicative { expr, other: None } => self.evaluate(expr),
            Expression::Or {
                expr,
                other: Some(other),
            } => {
                let operands = once(expr.as_ref())
                    .chain(other)
                    .map(|operand| self.evaluate(operand));
                Ok(Literal::from(evaluate_or(operands)?).into())
            }
            Expression::And {
                expr,
                other: Some(other),
            } => {
                let operands = once(expr.as_ref())
                    .chain(other)
                    .map(|operand| self.evaluate(operand));
                Ok(Literal::from(evaluate_and(operands)?).into())
            }
            Expression::Relational {
                expr,
                other: Some(comparison),
            } => self.evaluate_relational(expr, comparison),
            Expression::Additive {
                expr,
                other: Some(other),
            } => {
                let first = self.evaluate(expr)?;
                let rest = other
                    .iter()
                    .map(|(operator, operand)| Ok((*operator, self.evaluate(operand)?)))
                    .collect::<EvalResult<Vec<_>>>()?;
                evaluate_additive_chain(&first, &rest)
            }
            Expression::Multiplicative {
                expr,
                other: Some(other),
            } => {
                let first = self.evaluate(expr)?;
                let rest = other
                    .iter()
                    .map(|(operator, operand)| Ok((*operator, self.evaluate(operand)?)))
                    .collect::<EvalResult<Vec<_>>>()?;
                evaluate_multiplicative_chain(&first, &rest)
            }
            Expression::Not(inner) => dispatch_unary(&NotRdfOp::new(), &self.evaluate(inner)?),
            Expression::UnaryMinus(inner) => {
                dispatch_unary(&UnaryMinusRdfOp::new(), &self.evaluate(inner)?)
            }
            Expression::UnaryPlus(inner) => {
                dispatch_unary(&UnaryPlusRdfOp::new(), &self.evaluate(inner)?)
            }
            Expression::If(condition, if_true, if_false) => {
                if effective_boolean_value(&self.evaluate(condition)?)? {
                    self.evaluate(if_true)
                } else {
                    self.evaluate(if_false)
                }
            }
            Expression::Coalesce(args) => {
                evaluate_coalesce(args.iter().map(|arg| self.evaluate(arg)))
            }
            Expression::Bound(variable) => {
                Ok(Literal::from(self.context.lookup(variable).is_some()).into())
            }
            Expression::Builtin(function, args) => self.evaluate_builtin(*function, args),
            Expression::Exists { pattern, negated } => {
                let exists = self.evaluate_exists(pattern)?;
                Ok(Literal::from(exists != *negated).into())
            }
            Expression::FunctionCall(call) => self.evaluate_function_call(call),
        }
    }

    fn evaluate_relational(
        &self,
        expr: &Expression,
        comparison: &Comparison,
    ) -> EvalResult<Term> {
        let lhs = self.evaluate(expr)?;
        match comparison {
            Comparison::Compare(operator, rhs) => {
                let rhs = self.evaluate(rhs)?;
                dispatch_binary(&CompareRdfOp::new(*operator), &lhs, &rhs)
            }
            Comparison::In(candidates) => {
                let result = evaluate_in(&lhs, candidates.iter().map(|c| self.evaluate(c)))?;
                Ok(Literal::from(result).into())
            }
            Comparison::NotIn(candidates) => {
                let result = evaluate_in(&lhs, candidates.iter().map(|c| self.evaluate(c)))?;
                Ok(Literal::from(!result).into())
            }
        }
    }

    /// Returns whether `pattern` has at least one solution. Stops after the first solution.
    fn evaluate_exists(&self, pattern: &GraphPattern) -> EvalResult<bool> {
        let pattern_evaluator = self
            .context
            .pattern_evaluator()
            .ok_or_else(|| EvalError::evaluation("EXISTS requires a pattern evaluator"))?;
        let scope = self.context.thaw();
        let mut solutions = pattern_evaluator.solutions(pattern, scope.as_ref());
        match solutions.next() {
            Some(solution) => solution.map(|_| true),
            None => Ok(false),
        }
    }

    fn evaluate_function_call(&self, call: &FunctionCall) -> EvalResult<Term> {
        let Some(function) = self.evaluator.registry.get(&call.iri) else {
            tracing::debug!(function = %call.iri, "Call to unknown function");
            return Err(EvalError::evaluation(format!(
                "unknown function {}",
                call.iri
            )));
        };

        match function {
            CustomFunction::ByValue(function) => {
                let arity = function.arity();
                if !arity.accepts(call.args.len()) {
                    return Err(EvalError::Arity {
                        function: call.iri.to_string(),
                        expected: arity.to_string(),
                        actual: call.args.len(),
                    });
                }
                let args = call
                    .args
                    .iter()
                    .map(|arg| self.evaluate(arg))
                    .collect::<EvalResult<Vec<_>>>()?;
                function.evaluate(&args)
            }
            CustomFunction::Raw(function) => function.evaluate(call, self),
        }
    }
}
