#![doc(test(attr(deny(warnings))))]

//! Evaluation of SPARQL scalar expressions.
//!
//! An [Expression] is evaluated against an [EvaluationContext] by an [ExpressionEvaluator]. The
//! evaluator consults a [FunctionRegistry] for custom functions and casts.

mod arity;
mod casts;
mod config;
mod context;
mod evaluator;
mod expression;
mod registry;
mod simplifier;

pub use arity::FunctionArity;
pub use config::EvaluatorConfig;
pub use context::{
    BlankNodeCache, Bindings, EvaluationContext, PatternEvaluator, QueryContext, Solutions,
};
pub use evaluator::{Evaluation, ExpressionEvaluator};
pub use expression::{BuiltinFunction, Comparison, Expression, FunctionCall};
pub use registry::{CustomFunction, FunctionRegistry, RawFunction, RegistryError, ScalarFunction};
pub use simplifier::simplify;

pub use rdf_eval_functions::{AdditiveOperator, ComparisonOperator, MultiplicativeOperator};
pub use rdf_eval_model::{ErrorKind, EvalError, EvalResult};
