use crate::ScalarUnaryRdfOp;
use rdf_eval_model::{EvalError, EvalResult, Iri, NamedNode, TypedValueRef};

/// Implementation of the SPARQL `iri` function.
///
/// IRIs are returned unchanged. The lexical form of a string literal, with or without language
/// tag, is resolved against the base IRI if there is one.
#[derive(Debug)]
pub struct IriRdfOp {
    base_iri: Option<Iri<String>>,
}

impl IriRdfOp {
    pub fn new(base_iri: Option<Iri<String>>) -> Self {
        Self { base_iri }
    }

    fn resolve(&self, value: &str) -> EvalResult<NamedNode> {
        let iri = match &self.base_iri {
            Some(base_iri) => base_iri.resolve(value)?,
            None => Iri::parse(value.to_owned())?,
        };
        Ok(NamedNode::from(iri))
    }
}

impl ScalarUnaryRdfOp for IriRdfOp {
    type Arg<'data> = TypedValueRef<'data>;
    type Result<'data> = NamedNode;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>> {
        match value {
            TypedValueRef::NamedNode(named_node) => Ok(named_node.into_owned()),
            TypedValueRef::SimpleLiteral(literal) => self.resolve(literal.value),
            TypedValueRef::LanguageStringLiteral(literal) => self.resolve(literal.value),
            _ => EvalError::expected_type("IRI expects an IRI or a string literal"),
        }
    }
}
