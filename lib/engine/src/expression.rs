use crate::FunctionArity;
use rdf_eval_functions::{AdditiveOperator, ComparisonOperator, MultiplicativeOperator};
use rdf_eval_model::{Literal, NamedNode, Term, Variable};
use spargebra::algebra::GraphPattern;
use std::fmt::{Display, Formatter};

/// A SPARQL scalar expression.
///
/// The chain variants ([Expression::Or], [Expression::And], [Expression::Relational],
/// [Expression::Additive] and [Expression::Multiplicative]) mirror the shape a precedence-climbing
/// parser produces: a leading operand plus an optional continuation. A chain without a
/// continuation evaluates to its leading operand; [simplify](crate::simplify) removes such nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A constant term.
    Constant(Term),
    /// A variable that is looked up in the context.
    Variable(Variable),
    /// `expr || other[0] || other[1] ...`
    Or {
        expr: Box<Expression>,
        other: Option<Vec<Expression>>,
    },
    /// `expr && other[0] && other[1] ...`
    And {
        expr: Box<Expression>,
        other: Option<Vec<Expression>>,
    },
    /// A comparison, `IN` or `NOT IN`.
    Relational {
        expr: Box<Expression>,
        other: Option<Comparison>,
    },
    /// `expr + other[0].1 - other[1].1 ...`
    Additive {
        expr: Box<Expression>,
        other: Option<Vec<(AdditiveOperator, Expression)>>,
    },
    /// `expr * other[0].1 / other[1].1 ...`
    Multiplicative {
        expr: Box<Expression>,
        other: Option<Vec<(MultiplicativeOperator, Expression)>>,
    },
    /// `!expr`
    Not(Box<Expression>),
    /// `-expr`
    UnaryMinus(Box<Expression>),
    /// `+expr`
    UnaryPlus(Box<Expression>),
    /// `IF(condition, if_true, if_false)`. Only the selected branch is evaluated.
    If(Box<Expression>, Box<Expression>, Box<Expression>),
    /// `COALESCE(args...)`
    Coalesce(Vec<Expression>),
    /// `BOUND(?var)`
    Bound(Variable),
    /// A call to one of the SPARQL builtins.
    Builtin(BuiltinFunction, Vec<Expression>),
    /// `EXISTS { pattern }` or `NOT EXISTS { pattern }`.
    Exists {
        pattern: Box<GraphPattern>,
        negated: bool,
    },
    /// A call to a function from the [FunctionRegistry](crate::FunctionRegistry), including casts.
    FunctionCall(FunctionCall),
}

impl Expression {
    /// Creates `!inner`.
    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    /// Combines `operands` into a single conjunction.
    ///
    /// A single operand is returned unchanged and an empty list yields [Expression::always_true].
    pub fn and_all(operands: impl IntoIterator<Item = Expression>) -> Self {
        let mut operands = operands.into_iter();
        let Some(first) = operands.next() else {
            return Self::always_true();
        };
        let other = operands.collect::<Vec<_>>();
        if other.is_empty() {
            return first;
        }
        Expression::And {
            expr: Box::new(first),
            other: Some(other),
        }
    }

    /// A filter that accepts every solution.
    pub fn always_true() -> Self {
        Expression::Constant(Literal::from(true).into())
    }

    /// Creates a binary comparison.
    pub fn compare(operator: ComparisonOperator, lhs: Expression, rhs: Expression) -> Self {
        Expression::Relational {
            expr: Box::new(lhs),
            other: Some(Comparison::Compare(operator, Box::new(rhs))),
        }
    }

    /// Creates a call to a builtin.
    pub fn builtin(function: BuiltinFunction, args: impl IntoIterator<Item = Expression>) -> Self {
        Expression::Builtin(function, args.into_iter().collect())
    }

    /// Creates a call to a registered function.
    pub fn call(iri: NamedNode, args: impl IntoIterator<Item = Expression>) -> Self {
        Expression::FunctionCall(FunctionCall {
            iri,
            args: args.into_iter().collect(),
        })
    }
}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        Expression::Constant(term)
    }
}

impl From<Literal> for Expression {
    fn from(literal: Literal) -> Self {
        Expression::Constant(literal.into())
    }
}

impl From<NamedNode> for Expression {
    fn from(node: NamedNode) -> Self {
        Expression::Constant(node.into())
    }
}

impl From<Variable> for Expression {
    fn from(variable: Variable) -> Self {
        Expression::Variable(variable)
    }
}

/// The continuation of an [Expression::Relational].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    Compare(ComparisonOperator, Box<Expression>),
    In(Vec<Expression>),
    NotIn(Vec<Expression>),
}

/// An unevaluated call to a function that is resolved through the registry.
///
/// Raw functions receive this call and evaluate the arguments themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub iri: NamedNode,
    pub args: Vec<Expression>,
}

/// The SPARQL builtin functions that are evaluated by calling a function with eagerly evaluated
/// arguments.
///
/// `IF`, `COALESCE`, `BOUND` and `EXISTS` have dedicated [Expression] variants, as they control
/// the evaluation of their arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFunction {
    // Functions on RDF terms
    IsIri,
    IsBlank,
    IsLiteral,
    IsNumeric,
    Str,
    Lang,
    Datatype,
    Iri,
    BNode,
    StrDt,
    StrLang,
    Uuid,
    StrUuid,
    SameTerm,
    // Strings
    StrLen,
    SubStr,
    UCase,
    LCase,
    StrStarts,
    StrEnds,
    Contains,
    StrBefore,
    StrAfter,
    EncodeForUri,
    Concat,
    LangMatches,
    Regex,
    Replace,
    // Numeric
    Abs,
    Round,
    Ceil,
    Floor,
    Rand,
    // Dates & Durations
    Now,
    Year,
    Month,
    Day,
    Hours,
    Minutes,
    Seconds,
    Timezone,
    Tz,
    // Hashing
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl BuiltinFunction {
    pub fn arity(self) -> FunctionArity {
        match self {
            BuiltinFunction::Uuid
            | BuiltinFunction::StrUuid
            | BuiltinFunction::Rand
            | BuiltinFunction::Now => FunctionArity::Nullary,
            BuiltinFunction::BNode => {
                FunctionArity::OneOf(vec![FunctionArity::Nullary, FunctionArity::Fixed(1)])
            }
            BuiltinFunction::StrDt
            | BuiltinFunction::StrLang
            | BuiltinFunction::SameTerm
            | BuiltinFunction::StrStarts
            | BuiltinFunction::StrEnds
            | BuiltinFunction::Contains
            | BuiltinFunction::StrBefore
            | BuiltinFunction::StrAfter
            | BuiltinFunction::LangMatches => FunctionArity::Fixed(2),
            BuiltinFunction::SubStr | BuiltinFunction::Regex => {
                FunctionArity::OneOf(vec![FunctionArity::Fixed(2), FunctionArity::Fixed(3)])
            }
            BuiltinFunction::Replace => {
                FunctionArity::OneOf(vec![FunctionArity::Fixed(3), FunctionArity::Fixed(4)])
            }
            BuiltinFunction::Concat => FunctionArity::Variadic,
            _ => FunctionArity::Fixed(1),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BuiltinFunction::IsIri => "isIRI",
            BuiltinFunction::IsBlank => "isBLANK",
            BuiltinFunction::IsLiteral => "isLITERAL",
            BuiltinFunction::IsNumeric => "isNUMERIC",
            BuiltinFunction::Str => "STR",
            BuiltinFunction::Lang => "LANG",
            BuiltinFunction::Datatype => "DATATYPE",
            BuiltinFunction::Iri => "IRI",
            BuiltinFunction::BNode => "BNODE",
            BuiltinFunction::StrDt => "STRDT",
            BuiltinFunction::StrLang => "STRLANG",
            BuiltinFunction::Uuid => "UUID",
            BuiltinFunction::StrUuid => "STRUUID",
            BuiltinFunction::SameTerm => "sameTerm",
            BuiltinFunction::StrLen => "STRLEN",
            BuiltinFunction::SubStr => "SUBSTR",
            BuiltinFunction::UCase => "UCASE",
            BuiltinFunction::LCase => "LCASE",
            BuiltinFunction::StrStarts => "STRSTARTS",
            BuiltinFunction::StrEnds => "STRENDS",
            BuiltinFunction::Contains => "CONTAINS",
            BuiltinFunction::StrBefore => "STRBEFORE",
            BuiltinFunction::StrAfter => "STRAFTER",
            BuiltinFunction::EncodeForUri => "ENCODE_FOR_URI",
            BuiltinFunction::Concat => "CONCAT",
            BuiltinFunction::LangMatches => "LANGMATCHES",
            BuiltinFunction::Regex => "REGEX",
            BuiltinFunction::Replace => "REPLACE",
            BuiltinFunction::Abs => "ABS",
            BuiltinFunction::Round => "ROUND",
            BuiltinFunction::Ceil => "CEIL",
            BuiltinFunction::Floor => "FLOOR",
            BuiltinFunction::Rand => "RAND",
            BuiltinFunction::Now => "NOW",
            BuiltinFunction::Year => "YEAR",
            BuiltinFunction::Month => "MONTH",
            BuiltinFunction::Day => "DAY",
            BuiltinFunction::Hours => "HOURS",
            BuiltinFunction::Minutes => "MINUTES",
            BuiltinFunction::Seconds => "SECONDS",
            BuiltinFunction::Timezone => "TIMEZONE",
            BuiltinFunction::Tz => "TZ",
            BuiltinFunction::Md5 => "MD5",
            BuiltinFunction::Sha1 => "SHA1",
            BuiltinFunction::Sha256 => "SHA256",
            BuiltinFunction::Sha384 => "SHA384",
            BuiltinFunction::Sha512 => "SHA512",
        }
    }
}

impl Display for BuiltinFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
