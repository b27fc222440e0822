use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalError, EvalResult, Literal, Term};

/// Casts an IRI or a literal to a simple literal of its lexical form.
#[derive(Debug)]
pub struct CastStringRdfOp;

impl Default for CastStringRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl CastStringRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for CastStringRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Literal;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Term::NamedNode(node) => Ok(Literal::new_simple_literal(node.as_str())),
            Term::Literal(literal) => Ok(Literal::new_simple_literal(literal.value())),
            Term::BlankNode(_) => Err(EvalError::evaluation(format!(
                "cannot cast {value} to a string"
            ))),
        }
    }
}
