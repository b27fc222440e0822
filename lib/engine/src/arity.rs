use std::fmt::{Display, Formatter};

/// Defines the number of arguments a function accepts.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum FunctionArity {
    /// No arguments.
    Nullary,
    /// A fixed number of arguments.
    ///
    /// `FunctionArity::Fixed(0)` is equivalent to [FunctionArity::Nullary].
    Fixed(usize),
    /// One of the given [FunctionArity].
    OneOf(Vec<FunctionArity>),
    /// Any number of arguments (including zero).
    Variadic,
}

impl FunctionArity {
    /// Returns whether a call with `count` arguments is valid.
    pub fn accepts(&self, count: usize) -> bool {
        match self {
            FunctionArity::Nullary => count == 0,
            FunctionArity::Fixed(n) => count == *n,
            FunctionArity::OneOf(arities) => arities.iter().any(|arity| arity.accepts(count)),
            FunctionArity::Variadic => true,
        }
    }
}

impl Display for FunctionArity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FunctionArity::Nullary => write!(f, "0"),
            FunctionArity::Fixed(n) => write!(f, "{n}"),
            FunctionArity::OneOf(arities) => {
                for (i, arity) in arities.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    arity.fmt(f)?;
                }
                Ok(())
            }
            FunctionArity::Variadic => write!(f, "any number of"),
        }
    }
}
