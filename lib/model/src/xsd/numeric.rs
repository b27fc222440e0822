use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNodeRef};
use oxsdatatypes::{Decimal, Double, Float, Integer};
use std::cmp::Ordering;

/// A numeric value tagged with its category in the promotion lattice
/// `integer < decimal < float < double`.
///
/// All integer-derived datatypes (e.g., `xsd:byte`) map to [Numeric::Integer].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Numeric {
    Integer(Integer),
    Decimal(Decimal),
    Float(Float),
    Double(Double),
}

impl Numeric {
    #[must_use]
    pub fn format_value(&self) -> String {
        match self {
            Numeric::Integer(value) => value.to_string(),
            Numeric::Decimal(value) => value.to_string(),
            Numeric::Float(value) => value.to_string(),
            Numeric::Double(value) => value.to_string(),
        }
    }

    /// The datatype of the category this value belongs to.
    pub fn datatype(&self) -> NamedNodeRef<'static> {
        match self {
            Numeric::Integer(_) => xsd::INTEGER,
            Numeric::Decimal(_) => xsd::DECIMAL,
            Numeric::Float(_) => xsd::FLOAT,
            Numeric::Double(_) => xsd::DOUBLE,
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Numeric::Float(value) => value.is_nan(),
            Numeric::Double(value) => value.is_nan(),
            Numeric::Integer(_) | Numeric::Decimal(_) => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Numeric::Integer(value) => i64::from(*value) == 0,
            Numeric::Decimal(value) => *value == Decimal::from(0),
            Numeric::Float(value) => f32::from(*value) == 0.0,
            Numeric::Double(value) => f64::from(*value) == 0.0,
        }
    }

    /// Builds a literal of this value using the datatype of its category.
    pub fn into_literal(self) -> Literal {
        Literal::new_typed_literal(self.format_value(), self.datatype())
    }

    /// Builds a literal of this value that keeps `datatype`, e.g., the datatype of an operand that
    /// was derived from `xsd:integer`.
    pub fn into_literal_with_datatype(self, datatype: NamedNodeRef<'_>) -> Literal {
        Literal::new_typed_literal(self.format_value(), datatype)
    }
}

impl PartialOrd for Numeric {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match NumericPair::with_casts_from(*self, *other) {
            NumericPair::Integer(lhs, rhs) => Some(lhs.cmp(&rhs)),
            NumericPair::Decimal(lhs, rhs) => Some(lhs.cmp(&rhs)),
            NumericPair::Float(lhs, rhs) => lhs.partial_cmp(&rhs),
            NumericPair::Double(lhs, rhs) => lhs.partial_cmp(&rhs),
        }
    }
}

impl From<Integer> for Numeric {
    fn from(value: Integer) -> Self {
        Numeric::Integer(value)
    }
}

impl From<Decimal> for Numeric {
    fn from(value: Decimal) -> Self {
        Numeric::Decimal(value)
    }
}

impl From<Float> for Numeric {
    fn from(value: Float) -> Self {
        Numeric::Float(value)
    }
}

impl From<Double> for Numeric {
    fn from(value: Double) -> Self {
        Numeric::Double(value)
    }
}

/// Two numeric operands promoted to the wider of their categories.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum NumericPair {
    Integer(Integer, Integer),
    Decimal(Decimal, Decimal),
    Float(Float, Float),
    Double(Double, Double),
}

impl NumericPair {
    pub fn with_casts_from(lhs: Numeric, rhs: Numeric) -> NumericPair {
        match (lhs, rhs) {
            (Numeric::Integer(lhs), Numeric::Integer(rhs)) => NumericPair::Integer(lhs, rhs),
            (Numeric::Integer(lhs), Numeric::Decimal(rhs)) => {
                NumericPair::Decimal(Decimal::from(lhs), rhs)
            }
            (Numeric::Integer(lhs), Numeric::Float(rhs)) => NumericPair::Float(lhs.into(), rhs),
            (Numeric::Integer(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs.into(), rhs),

            (Numeric::Decimal(lhs), Numeric::Integer(rhs)) => NumericPair::Decimal(lhs, rhs.into()),
            (Numeric::Decimal(lhs), Numeric::Decimal(rhs)) => NumericPair::Decimal(lhs, rhs),
            (Numeric::Decimal(lhs), Numeric::Float(rhs)) => NumericPair::Float(lhs.into(), rhs),
            (Numeric::Decimal(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs.into(), rhs),

            (Numeric::Float(lhs), Numeric::Integer(rhs)) => NumericPair::Float(lhs, rhs.into()),
            (Numeric::Float(lhs), Numeric::Decimal(rhs)) => NumericPair::Float(lhs, rhs.into()),
            (Numeric::Float(lhs), Numeric::Float(rhs)) => NumericPair::Float(lhs, rhs),
            (Numeric::Float(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs.into(), rhs),

            (Numeric::Double(lhs), Numeric::Integer(rhs)) => NumericPair::Double(lhs, rhs.into()),
            (Numeric::Double(lhs), Numeric::Decimal(rhs)) => NumericPair::Double(lhs, rhs.into()),
            (Numeric::Double(lhs), Numeric::Float(rhs)) => NumericPair::Double(lhs, rhs.into()),
            (Numeric::Double(lhs), Numeric::Double(rhs)) => NumericPair::Double(lhs, rhs),
        }
    }
}

/// A numeric literal that remembers its original datatype.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NumericLiteralRef<'data> {
    pub value: Numeric,
    pub datatype: NamedNodeRef<'data>,
}

impl NumericLiteralRef<'_> {
    pub fn into_literal(self) -> Literal {
        self.value.into_literal_with_datatype(self.datatype)
    }
}
