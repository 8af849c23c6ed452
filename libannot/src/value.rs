//! Parsed annotation literal values.

use indexmap::IndexMap;
use std::fmt;

/// A single element value inside an annotation array literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// An opaque fragment kept verbatim from the source, quotes included.
    Scalar(String),
    /// A nested `{ ... }` literal.
    Nested(ArrayValue),
}

/// A parsed annotation array literal.
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayValue {
    /// Unkeyed elements in source order.
    List(Vec<Value>),
    /// Keyed elements in source order; a repeated key keeps its first
    /// position and its last value.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Returns `true` if this value is a `Scalar`.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    /// Returns the raw fragment if this is a `Scalar`.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the nested literal if this is a `Nested`.
    pub fn as_nested(&self) -> Option<&ArrayValue> {
        match self {
            Value::Nested(a) => Some(a),
            _ => None,
        }
    }
}

impl ArrayValue {
    /// Returns a reference to the elements if this is a `List`.
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            ArrayValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns a reference to the entries if this is a `Map`.
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            ArrayValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Number of elements or entries.
    pub fn len(&self) -> usize {
        match self {
            ArrayValue::List(items) => items.len(),
            ArrayValue::Map(entries) => entries.len(),
        }
    }

    /// Returns `true` if the literal has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Nested(a) => write!(f, "{}", a),
        }
    }
}

impl fmt::Display for ArrayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        match self {
            ArrayValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
            }
            ArrayValue::Map(entries) => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
            }
        }
        write!(f, "}}")
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<ArrayValue> for Value {
    fn from(a: ArrayValue) -> Self {
        Value::Nested(a)
    }
}

impl From<Vec<Value>> for ArrayValue {
    fn from(items: Vec<Value>) -> Self {
        ArrayValue::List(items)
    }
}

impl From<IndexMap<String, Value>> for ArrayValue {
    fn from(entries: IndexMap<String, Value>) -> Self {
        ArrayValue::Map(entries)
    }
}
