use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalError, EvalResult, Literal, Term};

/// Returns the lexical form of a literal or the string of an IRI as a simple literal.
#[derive(Debug)]
pub struct StrRdfOp;

impl Default for StrRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl StrRdfOp {
    pub fn new() -> Self {
        Self {}
    }
}

impl ScalarUnaryRdfOp for StrRdfOp {
    type Arg<'data> = &'data Term;
    type Result<'data> = Literal;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            Term::NamedNode(node) => Ok(Literal::new_simple_literal(node.as_str())),
            Term::Literal(literal) => Ok(Literal::new_simple_literal(literal.value())),
            Term::BlankNode(_) => {
                EvalError::expected_type(format!("STR is not defined for blank node {value}"))
            }
        }
    }
}
