//! Value representations produced by the fixture generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A generated fixture value.
///
/// Serializes untagged, so JSON output carries plain scalars and arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixtureValue {
    /// Boolean value
    Boolean(bool),

    /// 64-bit signed integer
    Integer(i64),

    /// 64-bit floating point
    Decimal(f64),

    /// String value
    String(String),

    /// Array of values
    Array(Vec<FixtureValue>),
}

impl FixtureValue {
    /// Name of the value's kind, as used in invalid-value descriptions.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Array(_) => "array",
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as a decimal.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Decimal(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an array.
    pub fn as_array(&self) -> Option<&[FixtureValue]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for FixtureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<bool> for FixtureValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<i64> for FixtureValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for FixtureValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<String> for FixtureValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<FixtureValue>> From<Vec<T>> for FixtureValue {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

/// A value that deliberately violates one rule (or the value's type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidValue {
    /// The offending value
    pub value: FixtureValue,

    /// Why the value is invalid, e.g. `exceeds the maximum length.`
    pub description: String,
}

impl InvalidValue {
    /// Create a new invalid value record.
    pub fn new(value: impl Into<FixtureValue>, description: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            description: description.into(),
        }
    }
}
