//! Dynamic observation values
//!
//! A [`Collection`](crate::Collection) accepts heterogeneous observations
//! under each key. [`Value`] carries them, and [`Value::to_f64`] is the one
//! place where a value is judged numeric or not.

use core::fmt;

#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use thiserror::Error;

/// A single observation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Absence of a value
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    /// Text, never coerced to a number even when it looks like one
    Text(String),
    List(Vec<Value>),
}

/// The variant of a [`Value`], without its payload
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    UInt,
    Float,
    Text,
    List,
}

impl ValueKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::UInt => "uint",
            ValueKind::Float => "float",
            ValueKind::Text => "text",
            ValueKind::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a value has no numeric interpretation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoercionError {
    #[error("text is never coerced to a number")]
    Text,
    #[error("{0} value has no numeric interpretation")]
    Unsupported(ValueKind),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::UInt(_) => ValueKind::UInt,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::List(_) => ValueKind::List,
        }
    }

    /// Coerce to a float
    ///
    /// Text is rejected before any parsing is attempted, so `"2.0"` fails
    /// while `2.0` succeeds. Booleans coerce to `0.0`/`1.0`. Large integers
    /// lose precision the same way an `as f64` cast does.
    pub fn to_f64(&self) -> Result<f64, CoercionError> {
        match self {
            Value::Text(_) => Err(CoercionError::Text),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Int(i) => Ok(*i as f64),
            Value::UInt(u) => Ok(*u as f64),
            Value::Float(x) => Ok(*x),
            Value::Null | Value::List(_) => Err(CoercionError::Unsupported(self.kind())),
        }
    }

    /// Whether [`to_f64`](Self::to_f64) succeeds
    pub fn is_numeric(&self) -> bool {
        self.to_f64().is_ok()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::UInt(u) => write!(f, "{}", u),
            // Debug keeps the trailing `.0` on integral floats
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::List(items) => write_list(f, items),
        }
    }
}

/// Render `[a, b, c]` using each item's `Display`
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(v as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_never_numeric() {
        assert_eq!(Value::from("2.0").to_f64(), Err(CoercionError::Text));
        assert_eq!(Value::from("abc").to_f64(), Err(CoercionError::Text));
        assert_eq!(Value::from(2.0).to_f64(), Ok(2.0));
    }

    #[test]
    fn test_coercion() {
        assert_eq!(Value::from(3).to_f64(), Ok(3.0));
        assert_eq!(Value::from(7u8).to_f64(), Ok(7.0));
        assert_eq!(Value::from(true).to_f64(), Ok(1.0));
        assert_eq!(Value::from(false).to_f64(), Ok(0.0));
        assert_eq!(Value::from(f64::NAN).kind(), ValueKind::Float);
        assert!(Value::from(f64::INFINITY).is_numeric());
        assert_eq!(
            Value::Null.to_f64(),
            Err(CoercionError::Unsupported(ValueKind::Null))
        );
        assert_eq!(
            Value::from(vec![2, 3]).to_f64(),
            Err(CoercionError::Unsupported(ValueKind::List))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from(1).to_string(), "1");
        assert_eq!(Value::from(2.0).to_string(), "2.0");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from("a").to_string(), "\"a\"");
        assert_eq!(Value::from(vec![2, 3]).to_string(), "[2, 3]");
        assert_eq!(Value::from(None::<i32>).to_string(), "null");
        assert_eq!(Value::from(Some(true)).to_string(), "true");
    }
}
