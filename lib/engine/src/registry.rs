use crate::casts::CastFunction;
use crate::{Evaluation, FunctionArity, FunctionCall};
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{EvalResult, NamedNode, Term};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, PoisonError, RwLock};
use thiserror::Error;

/// A custom function that receives the values of its arguments.
pub trait ScalarFunction: Debug + Send + Sync {
    /// The number of arguments the function accepts. Calls with a different number of arguments
    /// fail with [EvalError::Arity](crate::EvalError::Arity).
    fn arity(&self) -> FunctionArity;

    /// Computes the result for the evaluated `args`.
    fn evaluate(&self, args: &[Term]) -> EvalResult<Term>;
}

/// A custom function that receives its unevaluated call.
///
/// The function decides which arguments to evaluate, and in which order, using `evaluation`.
pub trait RawFunction: Debug + Send + Sync {
    fn evaluate(&self, call: &FunctionCall, evaluation: &Evaluation<'_>) -> EvalResult<Term>;
}

/// A function registered in a [FunctionRegistry], together with its calling convention.
#[derive(Debug, Clone)]
pub enum CustomFunction {
    /// The function receives the evaluated arguments.
    ByValue(Arc<dyn ScalarFunction>),
    /// The function receives the unevaluated call and the evaluation scope.
    Raw(Arc<dyn RawFunction>),
}

impl CustomFunction {
    /// Returns whether both refer to the same function instance.
    pub fn is_same(&self, other: &CustomFunction) -> bool {
        match (self, other) {
            (CustomFunction::ByValue(lhs), CustomFunction::ByValue(rhs)) => Arc::ptr_eq(lhs, rhs),
            (CustomFunction::Raw(lhs), CustomFunction::Raw(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a function is already registered as {0}")]
    AlreadyRegistered(NamedNode),
    #[error("this function is not registered as {0}")]
    NotRegistered(NamedNode),
}

/// Maps function IRIs to custom functions.
///
/// The registry can be shared between evaluators and threads. Lookups take a read lock, while
/// registering and unregistering take a write lock.
#[derive(Debug, Default)]
pub struct FunctionRegistry {
    functions: RwLock<HashMap<NamedNode, CustomFunction>>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that contains the XSD casts for `xsd:string`, `xsd:dateTime`,
    /// `xsd:float`, `xsd:double`, `xsd:decimal`, `xsd:integer` and `xsd:boolean`.
    pub fn with_casts() -> Self {
        let casts = [
            xsd::STRING,
            xsd::DATE_TIME,
            xsd::FLOAT,
            xsd::DOUBLE,
            xsd::DECIMAL,
            xsd::INTEGER,
            xsd::BOOLEAN,
        ]
        .into_iter()
        .filter_map(|target| {
            let function = CastFunction::for_target(target)?;
            Some((
                target.into_owned(),
                CustomFunction::Raw(Arc::new(function)),
            ))
        })
        .collect();
        Self {
            functions: RwLock::new(casts),
        }
    }

    /// Registers `function` as `iri`.
    ///
    /// Fails if `iri` is already registered, unless `override_existing` is set.
    pub fn register(
        &self,
        iri: NamedNode,
        function: CustomFunction,
        override_existing: bool,
    ) -> Result<(), RegistryError> {
        let mut functions = self.functions.write().unwrap_or_else(PoisonError::into_inner);
        if !override_existing && functions.contains_key(&iri) {
            return Err(RegistryError::AlreadyRegistered(iri));
        }
        tracing::debug!(function = %iri, override_existing, "Registering custom function");
        functions.insert(iri, function);
        Ok(())
    }

    /// Removes the registration of `iri`.
    ///
    /// Fails if `iri` is not registered with the same instance as `function`.
    pub fn unregister(
        &self,
        iri: &NamedNode,
        function: &CustomFunction,
    ) -> Result<(), RegistryError> {
        let mut functions = self.functions.write().unwrap_or_else(PoisonError::into_inner);
        match functions.get(iri) {
            Some(registered) if registered.is_same(function) => {
                tracing::debug!(function = %iri, "Unregistering custom function");
                functions.remove(iri);
                Ok(())
            }
            _ => Err(RegistryError::NotRegistered(iri.clone())),
        }
    }

    /// Returns the function registered as `iri`.
    pub fn get(&self, iri: &NamedNode) -> Option<CustomFunction> {
        self.functions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(iri)
            .cloned()
    }

    pub fn contains(&self, iri: &NamedNode) -> bool {
        self.functions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_eval_model::Literal;

    #[derive(Debug)]
    struct Constant(&'static str);

    impl ScalarFunction for Constant {
        fn arity(&self) -> FunctionArity {
            FunctionArity::Nullary
        }

        fn evaluate(&self, _args: &[Term]) -> EvalResult<Term> {
            Ok(Literal::new_simple_literal(self.0).into())
        }
    }

    fn iri() -> NamedNode {
        NamedNode::new_unchecked("http://example.com/f")
    }

    #[test]
    fn register_twice_requires_override() {
        let registry = FunctionRegistry::new();
        let first = CustomFunction::ByValue(Arc::new(Constant("a")));
        let second = CustomFunction::ByValue(Arc::new(Constant("b")));

        registry.register(iri(), first, false).unwrap();
        assert_eq!(
            registry.register(iri(), second.clone(), false),
            Err(RegistryError::AlreadyRegistered(iri()))
        );
        registry.register(iri(), second.clone(), true).unwrap();
        assert!(registry.get(&iri()).unwrap().is_same(&second));
    }

    #[test]
    fn unregister_requires_same_instance() {
        let registry = FunctionRegistry::new();
        let registered = CustomFunction::ByValue(Arc::new(Constant("a")));
        let lookalike = CustomFunction::ByValue(Arc::new(Constant("a")));
        registry.register(iri(), registered.clone(), false).unwrap();

        assert_eq!(
            registry.unregister(&iri(), &lookalike),
            Err(RegistryError::NotRegistered(iri()))
        );
        registry.unregister(&iri(), &registered).unwrap();
        assert!(!registry.contains(&iri()));
    }

    #[test]
    fn casts_are_registered_as_raw_functions() {
        let registry = FunctionRegistry::with_casts();
        for target in [xsd::STRING, xsd::INTEGER, xsd::BOOLEAN, xsd::DATE_TIME] {
            assert!(matches!(
                registry.get(&target.into_owned()),
                Some(CustomFunction::Raw(_))
            ));
        }
        assert!(!registry.contains(&xsd::DATE.into_owned()));
    }
}
