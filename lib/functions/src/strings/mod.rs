mod concat;
mod contains;
mod encode_for_uri;
mod lang_matches;
mod lcase;
mod regex;
mod replace;
mod str_after;
mod str_before;
mod str_ends;
mod str_starts;
mod strlen;
mod sub_str;
mod ucase;

pub use concat::ConcatRdfOp;
pub use contains::ContainsRdfOp;
pub use encode_for_uri::EncodeForUriRdfOp;
pub use lang_matches::LangMatchesRdfOp;
pub use lcase::LCaseRdfOp;
pub use self::regex::{RegexRdfOp, DEFAULT_REGEX_SIZE_LIMIT};
pub use replace::ReplaceRdfOp;
pub use str_after::StrAfterRdfOp;
pub use str_before::StrBeforeRdfOp;
pub use str_ends::StrEndsRdfOp;
pub use str_starts::StrStartsRdfOp;
pub use strlen::StrLenRdfOp;
pub use sub_str::SubStrRdfOp;
pub use ucase::UCaseRdfOp;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dispatch_binary, dispatch_unary};
    use rdf_eval_model::vocab::xsd;
    use rdf_eval_model::{EvalError, Literal, Term};

    fn simple(value: &str) -> Term {
        Literal::new_simple_literal(value).into()
    }

    fn tagged(value: &str, language: &str) -> Term {
        Literal::new_language_tagged_literal_unchecked(value, language).into()
    }

    #[test]
    fn str_before_and_after() {
        assert_eq!(
            dispatch_binary(&StrBeforeRdfOp::new(), &tagged("abc", "en"), &simple("b")).unwrap(),
            tagged("a", "en")
        );
        assert_eq!(
            dispatch_binary(&StrAfterRdfOp::new(), &tagged("abc", "en"), &simple("b")).unwrap(),
            tagged("c", "en")
        );
        assert_eq!(
            dispatch_binary(&StrAfterRdfOp::new(), &tagged("abc", "en"), &simple("z")).unwrap(),
            simple("")
        );
    }

    #[test]
    fn incompatible_languages_fail() {
        let result = dispatch_binary(
            &StrStartsRdfOp::new(),
            &tagged("chat", "fr"),
            &tagged("c", "en"),
        );
        assert!(matches!(result, Err(EvalError::Type(_))));
    }

    #[test]
    fn contains_starts_ends() {
        let text = simple("foobar");
        let t = Term::from(Literal::from(true));
        assert_eq!(dispatch_binary(&ContainsRdfOp::new(), &text, &simple("oba")).unwrap(), t);
        assert_eq!(dispatch_binary(&StrStartsRdfOp::new(), &text, &simple("foo")).unwrap(), t);
        assert_eq!(dispatch_binary(&StrEndsRdfOp::new(), &text, &simple("bar")).unwrap(), t);
    }

    #[test]
    fn strlen_counts_characters() {
        assert_eq!(
            dispatch_unary(&StrLenRdfOp::new(), &simple("ch\u{e2}teau")).unwrap(),
            Term::from(Literal::new_typed_literal("7", xsd::INTEGER))
        );
    }

    #[test]
    fn case_mapping_keeps_language() {
        assert_eq!(
            dispatch_unary(&UCaseRdfOp::new(), &tagged("chat", "fr")).unwrap(),
            tagged("CHAT", "fr")
        );
        assert_eq!(
            dispatch_unary(&LCaseRdfOp::new(), &simple("CHAT")).unwrap(),
            simple("chat")
        );
    }

    #[test]
    fn string_functions_reject_numbers() {
        let number = Term::from(Literal::new_typed_literal("1", xsd::INTEGER));
        assert!(dispatch_unary(&UCaseRdfOp::new(), &number).is_err());
    }
}
