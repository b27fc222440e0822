use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;
use oxsdatatypes::Integer;
use std::str::FromStr;

/// Parses the lexical form of an integer-derived datatype.
///
/// Returns `None` if the lexical form is not an integer or if the value lies outside the value
/// space of `datatype` (e.g., `"300"^^xsd:byte`). Values are bounded by the 64-bit range of
/// [Integer].
pub fn parse_integer(value: &str, datatype: NamedNodeRef<'_>) -> Option<Integer> {
    let integer = Integer::from_str(value).ok()?;
    let raw = i64::from(integer);
    let in_range = match datatype {
        xsd::INTEGER | xsd::LONG => true,
        xsd::INT => i32::try_from(raw).is_ok(),
        xsd::SHORT => i16::try_from(raw).is_ok(),
        xsd::BYTE => i8::try_from(raw).is_ok(),
        xsd::UNSIGNED_LONG | xsd::NON_NEGATIVE_INTEGER => raw >= 0,
        xsd::UNSIGNED_INT => u32::try_from(raw).is_ok(),
        xsd::UNSIGNED_SHORT => u16::try_from(raw).is_ok(),
        xsd::UNSIGNED_BYTE => u8::try_from(raw).is_ok(),
        xsd::POSITIVE_INTEGER => raw > 0,
        xsd::NEGATIVE_INTEGER => raw < 0,
        xsd::NON_POSITIVE_INTEGER => raw <= 0,
        _ => false,
    };
    in_range.then_some(integer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_integer() {
        assert_eq!(
            parse_integer("-42", xsd::INTEGER),
            Some(Integer::from(-42))
        );
        assert_eq!(parse_integer("4.2", xsd::INTEGER), None);
    }

    #[test]
    fn parse_respects_derived_bounds() {
        assert_eq!(parse_integer("127", xsd::BYTE), Some(Integer::from(127)));
        assert_eq!(parse_integer("128", xsd::BYTE), None);
        assert_eq!(parse_integer("0", xsd::POSITIVE_INTEGER), None);
        assert_eq!(
            parse_integer("0", xsd::NON_POSITIVE_INTEGER),
            Some(Integer::from(0))
        );
        assert_eq!(parse_integer("-1", xsd::UNSIGNED_INT), None);
    }

    #[test]
    fn parse_rejects_non_integer_datatypes() {
        assert_eq!(parse_integer("1", xsd::DECIMAL), None);
    }
}
