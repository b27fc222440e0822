use std::cmp::Ordering;

/// A literal with a language tag. The tag is always lowercase.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct LanguageStringRef<'value> {
    pub value: &'value str,
    pub language: &'value str,
}

impl LanguageStringRef<'_> {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl PartialOrd for LanguageStringRef<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.language == other.language {
            self.value.partial_cmp(other.value)
        } else {
            None
        }
    }
}
