use oxiri::IriParseError;
use oxrdf::{BlankNodeIdParseError, Variable};
use oxsdatatypes::{
    DateTimeOverflowError, OppositeSignInDurationComponentsError, ParseDateTimeError,
    ParseDecimalError, ParseDurationError, TooLargeForDecimalError, TooLargeForIntegerError,
};
use std::fmt::{Display, Formatter};
use std::num::{ParseFloatError, ParseIntError, TryFromIntError};
use std::str::ParseBoolError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The result of evaluating an expression or one of its operators.
pub type EvalResult<T> = Result<T, EvalError>;

/// An error raised while evaluating an expression.
///
/// Every error belongs to one of the three [ErrorKind]s. The surrounding engine decides whether an
/// error fails the whole row or is treated as a false filter condition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// An operand has the wrong kind of term or the wrong datatype.
    #[error("type error: {0}")]
    Type(String),
    /// An operation cannot produce a value for well-typed operands.
    #[error("evaluation error: {0}")]
    Evaluation(String),
    /// A function was called with an unsupported number of arguments.
    #[error("{function} expects {expected} arguments, but {actual} were given")]
    Arity {
        function: String,
        expected: String,
        actual: usize,
    },
    /// A variable without a binding was used where a value is required.
    #[error("variable {0} is not bound")]
    Unbound(Variable),
    /// The expression is nested deeper than the evaluator allows.
    #[error("expression exceeds the maximum nesting depth of {0}")]
    DepthLimitExceeded(usize),
}

/// The coarse classification of an [EvalError].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Evaluation,
    Arity,
}

impl EvalError {
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::Type(message.into())
    }

    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation(message.into())
    }

    /// Creates a result with a [EvalError::Type].
    pub fn expected_type<T>(message: impl Into<String>) -> EvalResult<T> {
        Err(Self::type_error(message))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(_) | Self::Unbound(_) => ErrorKind::Type,
            Self::Evaluation(_) | Self::DepthLimitExceeded(_) => ErrorKind::Evaluation,
            Self::Arity { .. } => ErrorKind::Arity,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::Type => "TypeError",
            ErrorKind::Evaluation => "EvaluationError",
            ErrorKind::Arity => "ArityError",
        })
    }
}

macro_rules! implement_from {
    ($t:ty) => {
        impl From<$t> for EvalError {
            fn from(error: $t) -> Self {
                EvalError::Evaluation(error.to_string())
            }
        }
    };
}

implement_from!(TooLargeForDecimalError);
implement_from!(TooLargeForIntegerError);
implement_from!(ParseBoolError);
implement_from!(ParseIntError);
implement_from!(ParseFloatError);
implement_from!(ParseDecimalError);
implement_from!(ParseDateTimeError);
implement_from!(ParseDurationError);
implement_from!(BlankNodeIdParseError);
implement_from!(IriParseError);
implement_from!(TryFromIntError);
implement_from!(DateTimeOverflowError);
implement_from!(OppositeSignInDurationComponentsError);
implement_from!(FromUtf8Error);
