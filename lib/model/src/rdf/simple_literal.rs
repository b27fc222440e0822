use crate::{EvalError, TypedValueRef};

/// A literal without a language tag whose datatype is `xsd:string`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, PartialOrd, Ord, Hash)]
pub struct SimpleLiteralRef<'value> {
    pub value: &'value str,
}

impl<'value> SimpleLiteralRef<'value> {
    pub fn new(value: &'value str) -> Self {
        Self { value }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<'a> TryFrom<TypedValueRef<'a>> for SimpleLiteralRef<'a> {
    type Error = EvalError;

    fn try_from(value: TypedValueRef<'a>) -> Result<Self, Self::Error> {
        match value {
            TypedValueRef::SimpleLiteral(lit) => Ok(lit),
            _ => EvalError::expected_type("expected a simple literal"),
        }
    }
}
