use crate::{evaluate, evaluate_with, render, simple, typed};
use insta::assert_snapshot;
use rdf_eval::{BlankNodeCache, BuiltinFunction, ErrorKind, EvalError, Expression, QueryContext};
use rdf_eval_model::vocab::xsd;
use rdf_eval_model::{DateTime, Iri, Literal, NamedNode, Term};
use std::str::FromStr;

fn call(function: BuiltinFunction, args: impl IntoIterator<Item = Expression>) -> Expression {
    Expression::builtin(function, args)
}

fn cast(target: rdf_eval_model::NamedNodeRef<'_>, arg: Expression) -> Expression {
    Expression::call(target.into_owned(), [arg])
}

#[test]
fn round_half_away_from_zero() {
    let round = |value: &str| render(&call(BuiltinFunction::Round, [typed(value, xsd::DECIMAL)]));
    assert_snapshot!(round("2.5"), @r#""3"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);
    assert_snapshot!(round("-2.5"), @r#""-3"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);
    assert_snapshot!(round("2.4"), @r#""2"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);
}

#[test]
fn numeric_functions_keep_datatype() {
    let abs = call(BuiltinFunction::Abs, [typed("-3", xsd::BYTE)]);
    assert_snapshot!(render(&abs), @r#""3"^^<http://www.w3.org/2001/XMLSchema#byte>"#);
    let ceil = call(BuiltinFunction::Ceil, [typed("1.2", xsd::DOUBLE)]);
    assert_snapshot!(render(&ceil), @r#""2"^^<http://www.w3.org/2001/XMLSchema#double>"#);
}

#[test]
fn replace_substitutes_unmatched_groups_with_empty_string() {
    let expression = call(
        BuiltinFunction::Replace,
        [simple("abc"), simple("(x)?(a)"), simple("[$1][$2]")],
    );
    assert_snapshot!(render(&expression), @r#""[][a]bc""#);
}

#[test]
fn regex_with_flags() {
    let expression = call(
        BuiltinFunction::Regex,
        [simple("Alice"), simple("^ali"), simple("i")],
    );
    assert_eq!(evaluate(&expression), Ok(Literal::from(true).into()));
}

#[test]
fn string_functions() {
    let substr = call(
        BuiltinFunction::SubStr,
        [
            Literal::new_language_tagged_literal_unchecked("foobar", "en").into(),
            typed("4", xsd::INTEGER),
        ],
    );
    assert_snapshot!(render(&substr), @r#""bar"@en"#);

    let concat = call(
        BuiltinFunction::Concat,
        [
            Literal::new_language_tagged_literal_unchecked("a", "en").into(),
            Literal::new_language_tagged_literal_unchecked("b", "en").into(),
        ],
    );
    assert_snapshot!(render(&concat), @r#""ab"@en"#);

    let encoded = call(BuiltinFunction::EncodeForUri, [simple("Los Angeles")]);
    assert_snapshot!(render(&encoded), @r#""Los%20Angeles""#);

    let incompatible = call(
        BuiltinFunction::StrStarts,
        [
            Literal::new_language_tagged_literal_unchecked("abc", "en").into(),
            Literal::new_language_tagged_literal_unchecked("a", "fr").into(),
        ],
    );
    assert!(evaluate(&incompatible).is_err());
}

#[test]
fn hash_functions() {
    let md5 = call(BuiltinFunction::Md5, [simple("abc")]);
    assert_snapshot!(render(&md5), @r#""900150983cd24fb0d6963f7d28e17f72""#);
    let sha1 = call(BuiltinFunction::Sha1, [simple("abc")]);
    assert_snapshot!(render(&sha1), @r#""a9993e364706816aba3e25717850c26c9cd0d89d""#);
}

#[test]
fn date_functions() {
    let value = || typed("2011-01-10T14:45:13.815-05:00", xsd::DATE_TIME);
    assert_snapshot!(render(&call(BuiltinFunction::Year, [value()])), @r#""2011"^^<http://www.w3.org/2001/XMLSchema#integer>"#);
    assert_snapshot!(render(&call(BuiltinFunction::Seconds, [value()])), @r#""13.815"^^<http://www.w3.org/2001/XMLSchema#decimal>"#);
    assert_snapshot!(render(&call(BuiltinFunction::Timezone, [value()])), @r#""-PT5H"^^<http://www.w3.org/2001/XMLSchema#dayTimeDuration>"#);
    assert_snapshot!(render(&call(BuiltinFunction::Tz, [value()])), @r#""-05:00""#);

    let without_timezone = typed("2011-01-10T14:45:13", xsd::DATE_TIME);
    assert_eq!(
        evaluate(&call(BuiltinFunction::Timezone, [without_timezone]))
            .map_err(|e| e.kind()),
        Err(ErrorKind::Evaluation)
    );
}

#[test]
fn now_is_fixed_by_context() {
    let now = DateTime::from_str("2020-01-01T00:00:00Z").unwrap();
    let context = QueryContext::new().with_now(now);
    let expression = call(BuiltinFunction::Now, []);
    let expected = Term::from(Literal::new_typed_literal(now.to_string(), xsd::DATE_TIME));
    assert_eq!(evaluate_with(&expression, &context), Ok(expected.clone()));
    assert_eq!(evaluate_with(&expression, &context), Ok(expected));
}

#[test]
fn bnode_with_literal_is_cached() {
    let cache = BlankNodeCache::new();
    let first_row = QueryContext::new().with_blank_node_cache(cache.clone());
    let second_row = QueryContext::new().with_blank_node_cache(cache);
    let expression = call(BuiltinFunction::BNode, [simple("key")]);

    let first = evaluate_with(&expression, &first_row).unwrap();
    assert!(first.is_blank_node());
    assert_eq!(evaluate_with(&expression, &first_row), Ok(first.clone()));
    assert_eq!(evaluate_with(&expression, &second_row), Ok(first.clone()));

    let fresh = evaluate_with(&call(BuiltinFunction::BNode, []), &first_row).unwrap();
    assert_ne!(fresh, first);
}

#[test]
fn iri_resolves_against_base() {
    let context = QueryContext::new()
        .with_base_iri(Iri::parse("http://example.com/base/".to_owned()).unwrap());
    let expression = call(BuiltinFunction::Iri, [simple("relative")]);
    assert_eq!(
        evaluate_with(&expression, &context),
        Ok(NamedNode::new_unchecked("http://example.com/base/relative").into())
    );
}

#[test]
fn builtin_arity_is_checked() {
    let expression = call(BuiltinFunction::StrLen, [simple("a"), simple("b")]);
    assert_eq!(
        evaluate(&expression),
        Err(EvalError::Arity {
            function: "STRLEN".to_owned(),
            expected: "1".to_owned(),
            actual: 2,
        })
    );
}

#[test]
fn casts() {
    assert_snapshot!(render(&cast(xsd::INTEGER, simple("42"))), @r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#);
    assert_snapshot!(render(&cast(xsd::BOOLEAN, simple("TRUE"))), @r#""true"^^<http://www.w3.org/2001/XMLSchema#boolean>"#);
    assert_snapshot!(render(&cast(xsd::STRING, typed("1.50", xsd::DECIMAL))), @r#""1.50""#);
    assert_snapshot!(render(&cast(xsd::DECIMAL, simple("1e3"))), @r#"EvaluationError: evaluation error: cannot cast "1e3" to <http://www.w3.org/2001/XMLSchema#decimal>"#);

    let tagged = Literal::new_language_tagged_literal_unchecked("1", "en").into();
    assert_snapshot!(render(&cast(xsd::INTEGER, tagged)), @r#""1"^^<http://www.w3.org/2001/XMLSchema#integer>"#);

    let two_args = Expression::call(xsd::INTEGER.into_owned(), [simple("1"), simple("2")]);
    assert_eq!(
        evaluate(&two_args).map_err(|e| e.kind()),
        Err(ErrorKind::Evaluation)
    );
}
