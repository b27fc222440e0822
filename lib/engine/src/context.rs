use dashmap::DashMap;
use oxiri::Iri;
use rdf_eval_model::{BlankNode, DateTime, EvalResult, Literal, Term, Variable};
use spargebra::algebra::GraphPattern;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

/// A mapping from variables to the terms they are bound to. Absent variables are unbound.
pub type Bindings = HashMap<Variable, Term>;

/// A lazy sequence of solutions of a graph pattern.
///
/// Consumers may stop after any item; implementations must not compute solutions in advance.
pub type Solutions<'solutions> = Box<dyn Iterator<Item = EvalResult<Bindings>> + 'solutions>;

/// The environment an expression is evaluated in.
///
/// The surrounding query engine creates one context per solution.
pub trait EvaluationContext {
    /// Returns the term bound to `variable`, if any.
    fn lookup(&self, variable: &Variable) -> Option<&Term>;

    /// The timestamp returned by `NOW()`. Must be the same for the whole query.
    fn now(&self) -> DateTime;

    /// The base IRI that `IRI()` resolves relative IRIs against.
    fn base_iri(&self) -> Option<&Iri<String>>;

    /// Returns the blank node for `literal`. Repeated calls with equal literals return the same
    /// blank node for the lifetime of the cache.
    fn bnode_for(&self, literal: &Literal) -> BlankNode;

    /// Creates a nested scope for evaluating the pattern of an `EXISTS`. The scope keeps all
    /// bindings of this context.
    fn thaw(&self) -> Box<dyn EvaluationContext + '_>;

    /// The evaluator used for `EXISTS` patterns.
    fn pattern_evaluator(&self) -> Option<&dyn PatternEvaluator>;
}

/// Evaluates graph patterns for `EXISTS` and `NOT EXISTS`.
pub trait PatternEvaluator: Debug + Send + Sync {
    /// Returns the solutions of `pattern` that are compatible with the bindings of `scope`.
    fn solutions<'solutions>(
        &'solutions self,
        pattern: &'solutions GraphPattern,
        scope: &'solutions dyn EvaluationContext,
    ) -> Solutions<'solutions>;
}

/// Caches the blank nodes created by `BNODE(literal)`.
///
/// Cloning the cache yields a handle to the same blank nodes. Sharing one cache between the
/// contexts of a query makes `BNODE` return the same blank node for equal literals across
/// solutions.
#[derive(Debug, Clone, Default)]
pub struct BlankNodeCache {
    blank_nodes: Arc<DashMap<Literal, BlankNode>>,
}

impl BlankNodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&self, literal: &Literal) -> BlankNode {
        if let Some(blank_node) = self.blank_nodes.get(literal) {
            return blank_node.value().clone();
        }
        self.blank_nodes
            .entry(literal.clone())
            .or_default()
            .value()
            .clone()
    }

    pub fn len(&self) -> usize {
        self.blank_nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blank_nodes.is_empty()
    }
}

/// An [EvaluationContext] that owns its bindings.
#[derive(Debug, Clone)]
pub struct QueryContext {
    bindings: Bindings,
    now: DateTime,
    base_iri: Option<Iri<String>>,
    blank_nodes: BlankNodeCache,
    pattern_evaluator: Option<Arc<dyn PatternEvaluator>>,
}

impl QueryContext {
    /// Creates a context without bindings whose `NOW()` is the current time.
    pub fn new() -> Self {
        Self {
            bindings: Bindings::new(),
            now: DateTime::now(),
            base_iri: None,
            blank_nodes: BlankNodeCache::new(),
            pattern_evaluator: None,
        }
    }

    #[must_use]
    pub fn with_now(mut self, now: DateTime) -> Self {
        self.now = now;
        self
    }

    #[must_use]
    pub fn with_base_iri(mut self, base_iri: Iri<String>) -> Self {
        self.base_iri = Some(base_iri);
        self
    }

    #[must_use]
    pub fn with_blank_node_cache(mut self, blank_nodes: BlankNodeCache) -> Self {
        self.blank_nodes = blank_nodes;
        self
    }

    #[must_use]
    pub fn with_pattern_evaluator(mut self, pattern_evaluator: Arc<dyn PatternEvaluator>) -> Self {
        self.pattern_evaluator = Some(pattern_evaluator);
        self
    }

    #[must_use]
    pub fn with_binding(mut self, variable: Variable, term: impl Into<Term>) -> Self {
        self.bind(variable, term);
        self
    }

    /// Binds `variable` to `term`, replacing a previous binding.
    pub fn bind(&mut self, variable: Variable, term: impl Into<Term>) {
        self.bindings.insert(variable, term.into());
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn blank_node_cache(&self) -> &BlankNodeCache {
        &self.blank_nodes
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationContext for QueryContext {
    fn lookup(&self, variable: &Variable) -> Option<&Term> {
        self.bindings.get(variable)
    }

    fn now(&self) -> DateTime {
        self.now
    }

    fn base_iri(&self) -> Option<&Iri<String>> {
        self.base_iri.as_ref()
    }

    fn bnode_for(&self, literal: &Literal) -> BlankNode {
        self.blank_nodes.get_or_create(literal)
    }

    fn thaw(&self) -> Box<dyn EvaluationContext + '_> {
        Box::new(self.clone())
    }

    fn pattern_evaluator(&self) -> Option<&dyn PatternEvaluator> {
        self.pattern_evaluator.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_returns_same_blank_node_for_equal_literals() {
        let cache = BlankNodeCache::new();
        let first = cache.get_or_create(&Literal::new_simple_literal("a"));
        let second = cache.get_or_create(&Literal::new_simple_literal("a"));
        let other = cache.get_or_create(&Literal::new_simple_literal("b"));
        assert_eq!(first, second);
        assert_ne!(first, other);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn thawed_scope_keeps_bindings_and_cache() {
        let variable = Variable::new_unchecked("x");
        let context = QueryContext::new()
            .with_binding(variable.clone(), Literal::new_simple_literal("v"));
        let literal = Literal::new_simple_literal("key");
        let blank_node = context.bnode_for(&literal);

        let scope = context.thaw();
        assert_eq!(
            scope.lookup(&variable),
            Some(&Term::from(Literal::new_simple_literal("v")))
        );
        assert_eq!(scope.now(), context.now());
        assert_eq!(scope.bnode_for(&literal), blank_node);
    }
}
