//! Template values and their comparison kinds.
//!
//! Values cross into the template environment as a [`Value`]. Classifying a
//! value is a tag lookup: every variant maps to at most one [`Kind`], and the
//! variants that have no kind (`Nil`, `Map`) are rejected up front.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::CompareError;

/// A complex number, compared component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Creates a complex number from its parts.
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }
}

/// The closed set of kinds two values can be compared under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `true` / `false`.
    Bool,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Floating point of any width.
    Float,
    /// Complex number.
    Complex,
    /// String.
    String,
    /// Ordered list.
    Seq,
}

impl Kind {
    /// Returns whether values of this kind have a total order usable by `lt`.
    #[must_use]
    pub const fn is_orderable(self) -> bool {
        matches!(self, Self::Int | Self::Uint | Self::Float | Self::String)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Complex => "complex",
            Self::String => "string",
            Self::Seq => "slice",
        };
        f.write_str(name)
    }
}

/// A value handed to a template function.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    Uint(u64),
    /// Floating point.
    Float(f64),
    /// Complex number.
    Complex(Complex),
    /// String.
    Str(String),
    /// Ordered list of values.
    Seq(Vec<Value>),
    /// String-keyed mapping. Not comparable.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Classifies the value.
    ///
    /// # Errors
    ///
    /// Returns [`CompareError::InvalidType`] for `Nil` and `Map`.
    pub const fn kind(&self) -> Result<Kind, CompareError> {
        match self {
            Self::Bool(_) => Ok(Kind::Bool),
            Self::Int(_) => Ok(Kind::Int),
            Self::Uint(_) => Ok(Kind::Uint),
            Self::Float(_) => Ok(Kind::Float),
            Self::Complex(_) => Ok(Kind::Complex),
            Self::Str(_) => Ok(Kind::String),
            Self::Seq(_) => Ok(Kind::Seq),
            Self::Nil | Self::Map(_) => Err(CompareError::InvalidType),
        }
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the list payload, if this is a sequence.
    #[must_use]
    pub fn as_seq(&self) -> Option<&[Self]> {
        match self {
            Self::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Self::Uint(u64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self::Uint(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<Complex> for Value {
    fn from(value: Complex) -> Self {
        Self::Complex(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Map(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kinds() {
        assert_eq!(Value::from(true).kind(), Ok(Kind::Bool));
        assert_eq!(Value::from(-3_i8).kind(), Ok(Kind::Int));
        assert_eq!(Value::from(7_i64).kind(), Ok(Kind::Int));
        assert_eq!(Value::from(7_u16).kind(), Ok(Kind::Uint));
        assert_eq!(Value::from(7_usize).kind(), Ok(Kind::Uint));
        assert_eq!(Value::from(1.5_f32).kind(), Ok(Kind::Float));
        assert_eq!(Value::from(Complex::new(1.0, 2.0)).kind(), Ok(Kind::Complex));
        assert_eq!(Value::from("x").kind(), Ok(Kind::String));
        assert_eq!(Value::from(vec!["a", "b"]).kind(), Ok(Kind::Seq));
    }

    #[test]
    fn test_unclassifiable_values() {
        assert_eq!(Value::Nil.kind(), Err(CompareError::InvalidType));
        assert_eq!(
            Value::from(BTreeMap::<String, Value>::new()).kind(),
            Err(CompareError::InvalidType)
        );
        assert_eq!(Value::from(None::<i32>).kind(), Err(CompareError::InvalidType));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(3_i32)), Value::Int(3));
        assert_eq!(Value::from(None::<&str>), Value::Nil);
    }

    #[test]
    fn test_orderable_kinds() {
        assert!(Kind::Int.is_orderable());
        assert!(Kind::String.is_orderable());
        assert!(!Kind::Bool.is_orderable());
        assert!(!Kind::Complex.is_orderable());
        assert!(!Kind::Seq.is_orderable());
    }
}
