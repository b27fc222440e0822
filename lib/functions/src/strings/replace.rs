use crate::strings::regex::{compile_pattern, DEFAULT_REGEX_SIZE_LIMIT};
use crate::{ScalarQuaternaryRdfOp, ScalarTernaryRdfOp};
use rdf_eval_model::{EvalResult, OwnedStringLiteral, SimpleLiteralRef, StringLiteralRef};

/// Implementation of the SPARQL `replace` function.
///
/// The replacement references groups with `$N`. A group that did not participate in the match is
/// substituted with the empty string.
#[derive(Debug)]
pub struct ReplaceRdfOp {
    size_limit: usize,
}

impl Default for ReplaceRdfOp {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplaceRdfOp {
    /// Creates a new [ReplaceRdfOp].
    pub fn new() -> Self {
        Self::with_size_limit(DEFAULT_REGEX_SIZE_LIMIT)
    }

    pub fn with_size_limit(size_limit: usize) -> Self {
        Self { size_limit }
    }

    fn replace(
        &self,
        text: StringLiteralRef<'_>,
        pattern: &str,
        replacement: &str,
        flags: Option<&str>,
    ) -> EvalResult<OwnedStringLiteral> {
        let regex = compile_pattern(pattern, flags, self.size_limit)?;
        let replacement = translate_replacement(replacement);
        let result = regex.replace_all(text.0, replacement.as_str()).into_owned();
        Ok(OwnedStringLiteral::new(
            result,
            text.1.map(ToOwned::to_owned),
        ))
    }
}

impl ScalarTernaryRdfOp for ReplaceRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = SimpleLiteralRef<'data>;
    type Arg2<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(
        &self,
        text: Self::Arg0<'data>,
        pattern: Self::Arg1<'data>,
        replacement: Self::Arg2<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        self.replace(text, pattern.value, replacement.value, None)
    }
}

impl ScalarQuaternaryRdfOp for ReplaceRdfOp {
    type Arg0<'data> = StringLiteralRef<'data>;
    type Arg1<'data> = SimpleLiteralRef<'data>;
    type Arg2<'data> = SimpleLiteralRef<'data>;
    type Arg3<'data> = SimpleLiteralRef<'data>;
    type Result<'data> = OwnedStringLiteral;

    fn evaluate<'data>(
        &self,
        text: Self::Arg0<'data>,
        pattern: Self::Arg1<'data>,
        replacement: Self::Arg2<'data>,
        flags: Self::Arg3<'data>,
    ) -> EvalResult<Self::Result<'data>> {
        self.replace(text, pattern.value, replacement.value, Some(flags.value))
    }
}

/// Rewrites an XPath replacement string into the syntax of [regex::Regex::replace_all].
///
/// `$N` becomes `${N}`, `\$` and `\\` are unescaped, and any other `$` is taken literally.
fn translate_replacement(replacement: &str) -> String {
    let mut result = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next_if(|next| *next == '$' || *next == '\\') {
                Some('$') => result.push_str("$$"),
                Some(escaped) => result.push(escaped),
                None => result.push('\\'),
            },
            '$' => {
                let mut group = String::new();
                while let Some(digit) = chars.next_if(char::is_ascii_digit) {
                    group.push(digit);
                }
                if group.is_empty() {
                    result.push_str("$$");
                } else {
                    result.push_str("${");
                    result.push_str(&group);
                    result.push('}');
                }
            }
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replace(text: &str, pattern: &str, replacement: &str) -> String {
        ScalarTernaryRdfOp::evaluate(
            &ReplaceRdfOp::new(),
            StringLiteralRef(text, None),
            SimpleLiteralRef::new(pattern),
            SimpleLiteralRef::new(replacement),
        )
        .unwrap()
        .0
    }

    #[test]
    fn unmatched_group_is_empty() {
        assert_eq!(replace("abc", "(x)?(a)", "[$1][$2]"), "[][a]bc");
    }

    #[test]
    fn whole_match_and_escapes() {
        assert_eq!(replace("abc", "b", "<$0>"), "a<b>c");
        assert_eq!(replace("abc", "b", "\\$1"), "a$1c");
        assert_eq!(replace("abc", "b", "$"), "a$c");
        assert_eq!(replace("abc", "b", "\\\\"), "a\\c");
    }

    #[test]
    fn group_followed_by_text() {
        assert_eq!(replace("abc", "(b)", "$1x"), "abxc");
    }

    #[test]
    fn replaces_all_occurrences_with_flags() {
        let result = ScalarQuaternaryRdfOp::evaluate(
            &ReplaceRdfOp::new(),
            StringLiteralRef("Banana", Some("en")),
            SimpleLiteralRef::new("a"),
            SimpleLiteralRef::new("o"),
            SimpleLiteralRef::new("i"),
        )
        .unwrap();
        assert_eq!(
            result,
            OwnedStringLiteral::new("Bonono".to_owned(), Some("en".to_owned()))
        );
    }
}
