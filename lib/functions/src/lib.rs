mod arithmetic;
mod comparison;
mod conversion;
mod dates_and_times;
mod dispatch;
mod functional_forms;
mod hash;
mod numeric;
mod strings;
mod terms;

pub use arithmetic::*;
pub use comparison::*;
pub use conversion::*;
pub use dates_and_times::*;
pub use dispatch::*;
pub use functional_forms::*;
pub use hash::*;
pub use numeric::*;
pub use strings::*;
pub use terms::*;

use rdf_eval_model::{EvalResult, IntoTerm, RdfValueArg};

pub trait ScalarNullaryRdfOp {
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(&self) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarUnaryRdfOp {
    type Arg<'data>: RdfValueArg<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(&self, value: Self::Arg<'data>) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarBinaryRdfOp {
    type ArgLhs<'data>: RdfValueArg<'data>;
    type ArgRhs<'data>: RdfValueArg<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(
        &self,
        lhs: Self::ArgLhs<'data>,
        rhs: Self::ArgRhs<'data>,
    ) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarTernaryRdfOp {
    type Arg0<'data>: RdfValueArg<'data>;
    type Arg1<'data>: RdfValueArg<'data>;
    type Arg2<'data>: RdfValueArg<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(
        &self,
        arg0: Self::Arg0<'data>,
        arg1: Self::Arg1<'data>,
        arg2: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarQuaternaryRdfOp {
    type Arg0<'data>: RdfValueArg<'data>;
    type Arg1<'data>: RdfValueArg<'data>;
    type Arg2<'data>: RdfValueArg<'data>;
    type Arg3<'data>: RdfValueArg<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(
        &self,
        arg0: Self::Arg0<'data>,
        arg1: Self::Arg1<'data>,
        arg2: Self::Arg2<'data>,
        arg3: Self::Arg3<'data>,
    ) -> EvalResult<Self::Result<'data>>;
}

pub trait ScalarNAryRdfOp {
    type Args<'data>: RdfValueArg<'data>;
    type Result<'data>: IntoTerm;

    fn evaluate<'data>(&self, args: &[Self::Args<'data>]) -> EvalResult<Self::Result<'data>>;
}
