use crate::{BuiltinFunction, Evaluation, Expression};
use rdf_eval_functions::{
    dispatch_binary, dispatch_n_ary, dispatch_nullary, dispatch_quaternary, dispatch_ternary,
    dispatch_unary, AbsRdfOp, BNodeRdfOp, CeilRdfOp, ConcatRdfOp, ContainsRdfOp, DatatypeRdfOp,
    DayRdfOp, EncodeForUriRdfOp, FloorRdfOp, HoursRdfOp, IriRdfOp, IsBlankRdfOp, IsIriRdfOp,
    IsLiteralRdfOp, IsNumericRdfOp, LCaseRdfOp, LangMatchesRdfOp, LangRdfOp, Md5RdfOp,
    MinutesRdfOp, MonthRdfOp, NowRdfOp, RandRdfOp, RegexRdfOp, ReplaceRdfOp, RoundRdfOp,
    SameTermRdfOp, SecondsRdfOp, Sha1RdfOp, Sha256RdfOp, Sha384RdfOp, Sha512RdfOp, StrAfterRdfOp,
    StrBeforeRdfOp, StrDtRdfOp, StrEndsRdfOp, StrLangRdfOp, StrLenRdfOp, StrRdfOp,
    StrStartsRdfOp, StrUuidRdfOp, SubStrRdfOp, TimezoneRdfOp, TzRdfOp, UCaseRdfOp, UuidRdfOp,
    YearRdfOp,
};
use rdf_eval_model::{EvalError, EvalResult, Term};

impl Evaluation<'_> {
    /// Evaluates all `args` and calls `function` with the results.
    pub(super) fn evaluate_builtin(
        &self,
        function: BuiltinFunction,
        args: &[Expression],
    ) -> EvalResult<Term> {
        let arity = function.arity();
        if !arity.accepts(args.len()) {
            return Err(arity_error(function, args.len()));
        }
        let args = args
            .iter()
            .map(|arg| self.evaluate(arg))
            .collect::<EvalResult<Vec<_>>>()?;
        let regex_size_limit = self.config().regex_size_limit;

        match function {
            // Functions on RDF terms
            BuiltinFunction::IsIri => dispatch_unary(&IsIriRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::IsBlank => dispatch_unary(&IsBlankRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::IsLiteral => {
                dispatch_unary(&IsLiteralRdfOp::new(), unary_args(&args)?)
            }
            BuiltinFunction::IsNumeric => {
                dispatch_unary(&IsNumericRdfOp::new(), unary_args(&args)?)
            }
            BuiltinFunction::Str => dispatch_unary(&StrRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Lang => dispatch_unary(&LangRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Datatype => dispatch_unary(&DatatypeRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Iri => {
                let op = IriRdfOp::new(self.context().base_iri().cloned());
                dispatch_unary(&op, unary_args(&args)?)
            }
            BuiltinFunction::BNode => match args.as_slice() {
                [] => dispatch_nullary(&BNodeRdfOp::new()),
                [Term::Literal(literal)] => Ok(self.context().bnode_for(literal).into()),
                [_] => EvalError::expected_type("BNODE expects a literal"),
                _ => Err(arity_error(function, args.len())),
            },
            BuiltinFunction::StrDt => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&StrDtRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::StrLang => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&StrLangRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::Uuid => dispatch_nullary(&UuidRdfOp::new()),
            BuiltinFunction::StrUuid => dispatch_nullary(&StrUuidRdfOp::new()),
            BuiltinFunction::SameTerm => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&SameTermRdfOp::new(), lhs, rhs)
            }
            // Strings
            BuiltinFunction::StrLen => dispatch_unary(&StrLenRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::SubStr => match args.as_slice() {
                [text, start] => dispatch_binary(&SubStrRdfOp::new(), text, start),
                [text, start, length] => {
                    dispatch_ternary(&SubStrRdfOp::new(), text, start, length)
                }
                _ => Err(arity_error(function, args.len())),
            },
            BuiltinFunction::UCase => dispatch_unary(&UCaseRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::LCase => dispatch_unary(&LCaseRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::StrStarts => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&StrStartsRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::StrEnds => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&StrEndsRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::Contains => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&ContainsRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::StrBefore => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&StrBeforeRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::StrAfter => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&StrAfterRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::EncodeForUri => {
                dispatch_unary(&EncodeForUriRdfOp::new(), unary_args(&args)?)
            }
            BuiltinFunction::Concat => dispatch_n_ary(&ConcatRdfOp::new(), &args),
            BuiltinFunction::LangMatches => {
                let (lhs, rhs) = binary_args(&args)?;
                dispatch_binary(&LangMatchesRdfOp::new(), lhs, rhs)
            }
            BuiltinFunction::Regex => {
                let op = RegexRdfOp::with_size_limit(regex_size_limit);
                match args.as_slice() {
                    [text, pattern] => dispatch_binary(&op, text, pattern),
                    [text, pattern, flags] => dispatch_ternary(&op, text, pattern, flags),
                    _ => Err(arity_error(function, args.len())),
                }
            }
            BuiltinFunction::Replace => {
                let op = ReplaceRdfOp::with_size_limit(regex_size_limit);
                match args.as_slice() {
                    [text, pattern, replacement] => {
                        dispatch_ternary(&op, text, pattern, replacement)
                    }
                    [text, pattern, replacement, flags] => {
                        dispatch_quaternary(&op, text, pattern, replacement, flags)
                    }
                    _ => Err(arity_error(function, args.len())),
                }
            }
            // Numeric
            BuiltinFunction::Abs => dispatch_unary(&AbsRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Round => dispatch_unary(&RoundRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Ceil => dispatch_unary(&CeilRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Floor => dispatch_unary(&FloorRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Rand => dispatch_nullary(&RandRdfOp::new()),
            // Dates & Durations
            BuiltinFunction::Now => dispatch_nullary(&NowRdfOp::new(self.context().now())),
            BuiltinFunction::Year => dispatch_unary(&YearRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Month => dispatch_unary(&MonthRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Day => dispatch_unary(&DayRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Hours => dispatch_unary(&HoursRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Minutes => dispatch_unary(&MinutesRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Seconds => dispatch_unary(&SecondsRdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Timezone => {
                dispatch_unary(&TimezoneRdfOp::new(), unary_args(&args)?)
            }
            BuiltinFunction::Tz => dispatch_unary(&TzRdfOp::new(), unary_args(&args)?),
            // Hashing
            BuiltinFunction::Md5 => dispatch_unary(&Md5RdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Sha1 => dispatch_unary(&Sha1RdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Sha256 => dispatch_unary(&Sha256RdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Sha384 => dispatch_unary(&Sha384RdfOp::new(), unary_args(&args)?),
            BuiltinFunction::Sha512 => dispatch_unary(&Sha512RdfOp::new(), unary_args(&args)?),
        }
    }
}

fn arity_error(function: BuiltinFunction, actual: usize) -> EvalError {
    EvalError::Arity {
        function: function.to_string(),
        expected: function.arity().to_string(),
        actual,
    }
}

fn unary_args(args: &[Term]) -> EvalResult<&Term> {
    match args {
        [arg] => Ok(arg),
        _ => Err(EvalError::evaluation("unsupported argument list for unary function")),
    }
}

fn binary_args(args: &[Term]) -> EvalResult<(&Term, &Term)> {
    match args {
        [lhs, rhs] => Ok((lhs, rhs)),
        _ => Err(EvalError::evaluation("unsupported argument list for binary function")),
    }
}
