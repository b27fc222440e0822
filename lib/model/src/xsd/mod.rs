mod integer;
mod numeric;

pub use integer::*;
pub use numeric::*;
use oxrdf::vocab::xsd;
use oxrdf::NamedNodeRef;

static INTEGER_DATATYPES: &[NamedNodeRef<'_>; 13] = &[
    xsd::INTEGER,
    xsd::BYTE,
    xsd::SHORT,
    xsd::INT,
    xsd::LONG,
    xsd::UNSIGNED_BYTE,
    xsd::UNSIGNED_SHORT,
    xsd::UNSIGNED_INT,
    xsd::UNSIGNED_LONG,
    xsd::POSITIVE_INTEGER,
    xsd::NEGATIVE_INTEGER,
    xsd::NON_POSITIVE_INTEGER,
    xsd::NON_NEGATIVE_INTEGER,
];

static DATE_TIME_DATATYPES: &[NamedNodeRef<'_>; 3] = &[xsd::DATE_TIME, xsd::DATE, xsd::TIME];

static DURATION_DATATYPES: &[NamedNodeRef<'_>; 3] = &[
    xsd::DURATION,
    xsd::DAY_TIME_DURATION,
    xsd::YEAR_MONTH_DURATION,
];

/// Checks if the datatype is `xsd:integer` or one of the datatypes derived from it.
pub fn is_integer_datatype(datatype: NamedNodeRef<'_>) -> bool {
    INTEGER_DATATYPES.contains(&datatype)
}

/// Checks if the datatype is a numeric datatype.
pub fn is_numeric_datatype(datatype: NamedNodeRef<'_>) -> bool {
    matches!(datatype, xsd::FLOAT | xsd::DOUBLE | xsd::DECIMAL) || is_integer_datatype(datatype)
}

/// Checks if the datatype is `xsd:dateTime`, `xsd:date` or `xsd:time`.
pub fn is_date_time_datatype(datatype: NamedNodeRef<'_>) -> bool {
    DATE_TIME_DATATYPES.contains(&datatype)
}

/// Checks if the datatype is `xsd:duration` or one of its two restrictions.
pub fn is_duration_datatype(datatype: NamedNodeRef<'_>) -> bool {
    DURATION_DATATYPES.contains(&datatype)
}

/// Checks if the datatype belongs to the XSD datatypes the evaluator understands.
///
/// Literals of other datatypes can only be compared with `=` and `!=`.
pub fn is_recognized_datatype(datatype: NamedNodeRef<'_>) -> bool {
    matches!(datatype, xsd::STRING | xsd::BOOLEAN)
        || is_numeric_datatype(datatype)
        || is_date_time_datatype(datatype)
        || is_duration_datatype(datatype)
}
