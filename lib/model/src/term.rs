use crate::{EvalError, EvalResult};
use oxrdf::{BlankNodeRef, LiteralRef, NamedNodeRef, Term};

/// Classification helpers for [Term].
///
/// The accessors return `None` instead of failing so that callers decide which error to raise.
pub trait TermExt {
    fn is_iri(&self) -> bool;

    fn is_blank(&self) -> bool;

    fn is_literal(&self) -> bool;

    fn as_iri(&self) -> Option<NamedNodeRef<'_>>;

    fn as_blank_node(&self) -> Option<BlankNodeRef<'_>>;

    fn as_literal(&self) -> Option<LiteralRef<'_>>;

    /// Returns the literal or a type error naming the offending term.
    fn literal(&self) -> EvalResult<LiteralRef<'_>>;
}

impl TermExt for Term {
    fn is_iri(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    fn as_iri(&self) -> Option<NamedNodeRef<'_>> {
        match self {
            Term::NamedNode(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    fn as_blank_node(&self) -> Option<BlankNodeRef<'_>> {
        match self {
            Term::BlankNode(node) => Some(node.as_ref()),
            _ => None,
        }
    }

    fn as_literal(&self) -> Option<LiteralRef<'_>> {
        match self {
            Term::Literal(literal) => Some(literal.as_ref()),
            _ => None,
        }
    }

    fn literal(&self) -> EvalResult<LiteralRef<'_>> {
        self.as_literal()
            .ok_or_else(|| EvalError::type_error(format!("{self} is not a literal")))
    }
}
