use crate::{Evaluation, FunctionCall, RawFunction};
use rdf_eval_functions::{
    dispatch_unary, CastBooleanRdfOp, CastDateTimeRdfOp, CastDecimalRdfOp, CastDoubleRdfOp,
    CastFloatRdfOp, CastIntegerRdfOp, CastStringRdfOp,
};
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{EvalError, EvalResult, NamedNodeRef, Term};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CastTarget {
    String,
    DateTime,
    Float,
    Double,
    Decimal,
    Integer,
    Boolean,
}

/// The XSD constructor functions, e.g. `xsd:integer(?x)`.
///
/// Casts are raw functions, as they inspect the lexical form and datatype of the argument instead
/// of a coerced value.
#[derive(Debug)]
pub(crate) struct CastFunction {
    target: CastTarget,
}

impl CastFunction {
    /// Returns the cast to `target`, if there is one.
    pub(crate) fn for_target(target: NamedNodeRef<'_>) -> Option<Self> {
        let target = match target {
            xsd::STRING => CastTarget::String,
            xsd::DATE_TIME => CastTarget::DateTime,
            xsd::FLOAT => CastTarget::Float,
            xsd::DOUBLE => CastTarget::Double,
            xsd::DECIMAL => CastTarget::Decimal,
            xsd::INTEGER => CastTarget::Integer,
            xsd::BOOLEAN => CastTarget::Boolean,
            _ => return None,
        };
        Some(Self { target })
    }

    fn cast(&self, value: &Term) -> EvalResult<Term> {
        match self.target {
            CastTarget::String => dispatch_unary(&CastStringRdfOp::new(), value),
            CastTarget::DateTime => dispatch_unary(&CastDateTimeRdfOp::new(), value),
            CastTarget::Float => dispatch_unary(&CastFloatRdfOp::new(), value),
            CastTarget::Double => dispatch_unary(&CastDoubleRdfOp::new(), value),
            CastTarget::Decimal => dispatch_unary(&CastDecimalRdfOp::new(), value),
            CastTarget::Integer => dispatch_unary(&CastIntegerRdfOp::new(), value),
            CastTarget::Boolean => dispatch_unary(&CastBooleanRdfOp::new(), value),
        }
    }
}

impl RawFunction for CastFunction {
    fn evaluate(&self, call: &FunctionCall, evaluation: &Evaluation<'_>) -> EvalResult<Term> {
        match call.args.as_slice() {
            [] => Err(EvalError::evaluation("nothing given to cast")),
            [arg] => self.cast(&evaluation.evaluate(arg)?),
            _ => Err(EvalError::evaluation("cannot cast more than one thing")),
        }
    }
}
