use crate::{
    ScalarBinaryRdfOp, ScalarNAryRdfOp, ScalarNullaryRdfOp, ScalarQuaternaryRdfOp,
    ScalarTernaryRdfOp, ScalarUnaryRdfOp,
};
use rdf_eval_model::{EvalResult, IntoTerm, RdfValueArg, Term};

pub fn dispatch_nullary<Op: ScalarNullaryRdfOp>(op: &Op) -> EvalResult<Term> {
    Ok(op.evaluate()?.into_term())
}

pub fn dispatch_unary<'data, Op: ScalarUnaryRdfOp>(
    op: &Op,
    arg: &'data Term,
) -> EvalResult<Term> {
    let arg = <Op::Arg<'data> as RdfValueArg<'data>>::from_term(arg)?;
    Ok(op.evaluate(arg)?.into_term())
}

pub fn dispatch_binary<'data, Op: ScalarBinaryRdfOp>(
    op: &Op,
    lhs: &'data Term,
    rhs: &'data Term,
) -> EvalResult<Term> {
    let lhs = <Op::ArgLhs<'data> as RdfValueArg<'data>>::from_term(lhs)?;
    let rhs = <Op::ArgRhs<'data> as RdfValueArg<'data>>::from_term(rhs)?;
    Ok(op.evaluate(lhs, rhs)?.into_term())
}

pub fn dispatch_ternary<'data, Op: ScalarTernaryRdfOp>(
    op: &Op,
    arg0: &'data Term,
    arg1: &'data Term,
    arg2: &'data Term,
) -> EvalResult<Term> {
    let arg0 = <Op::Arg0<'data> as RdfValueArg<'data>>::from_term(arg0)?;
    let arg1 = <Op::Arg1<'data> as RdfValueArg<'data>>::from_term(arg1)?;
    let arg2 = <Op::Arg2<'data> as RdfValueArg<'data>>::from_term(arg2)?;
    Ok(op.evaluate(arg0, arg1, arg2)?.into_term())
}

pub fn dispatch_quaternary<'data, Op: ScalarQuaternaryRdfOp>(
    op: &Op,
    arg0: &'data Term,
    arg1: &'data Term,
    arg2: &'data Term,
    arg3: &'data Term,
) -> EvalResult<Term> {
    let arg0 = <Op::Arg0<'data> as RdfValueArg<'data>>::from_term(arg0)?;
    let arg1 = <Op::Arg1<'data> as RdfValueArg<'data>>::from_term(arg1)?;
    let arg2 = <Op::Arg2<'data> as RdfValueArg<'data>>::from_term(arg2)?;
    let arg3 = <Op::Arg3<'data> as RdfValueArg<'data>>::from_term(arg3)?;
    Ok(op.evaluate(arg0, arg1, arg2, arg3)?.into_term())
}

pub fn dispatch_n_ary<'data, Op: ScalarNAryRdfOp>(
    op: &Op,
    args: &'data [Term],
) -> EvalResult<Term> {
    let args = args
        .iter()
        .map(<Op::Args<'data> as RdfValueArg<'data>>::from_term)
        .collect::<EvalResult<Vec<_>>>()?;
    Ok(op.evaluate(&args)?.into_term())
}
