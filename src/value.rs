//! Value representations for query fragments.
//!
//! - [`Value`]: What [`encode`](crate::encode) accepts (null, boolean, array, scalar)
//! - [`Scalar`]: A string or a [`Number`]
//! - [`Decoded`]: What [`decode`](crate::decode) produces (null, boolean, string)
//!
//! ## Text Coercion
//!
//! Scalars and array elements are written as text before percent-encoding.
//! The [`Display`](fmt::Display) impls define that text:
//!
//! ```rust
//! use query_value::Value;
//!
//! assert_eq!(Value::from(2.0).to_string(), "2");
//! assert_eq!(Value::from(0.5).to_string(), "0.5");
//! assert_eq!(Value::from(f64::INFINITY).to_string(), "Infinity");
//! assert_eq!(Value::from(1e21).to_string(), "1e+21");
//! assert_eq!(Value::Null.to_string(), "null");
//!
//! // Arrays join their elements with commas; nulls inside render empty
//! let nested = Value::from(vec![Value::from(1), Value::Null, Value::from("x")]);
//! assert_eq!(nested.to_string(), "1,,x");
//! ```

use serde::de::{self, SeqAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value that can be encoded as a query fragment.
///
/// # Examples
///
/// ```rust
/// use query_value::{Scalar, Value};
///
/// let null = Value::Null;
/// let flag = Value::from(true);
/// let tags = Value::from(vec!["a", "b"]);
/// let page = Value::from(3);
///
/// assert!(null.is_null());
/// assert_eq!(flag.as_bool(), Some(true));
/// assert_eq!(tags.as_array().map(Vec::len), Some(2));
/// assert!(matches!(page, Value::Scalar(Scalar::Number(_))));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Array(Vec<Value>),
    Scalar(Scalar),
}

/// A string or numeric value.
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    String(String),
    Number(Number),
}

/// A numeric value.
///
/// # Examples
///
/// ```rust
/// use query_value::Number;
///
/// assert_eq!(Number::Integer(-4).to_string(), "-4");
/// assert_eq!(Number::Float(-0.0).to_string(), "0");
/// assert_eq!(Number::Float(f64::NAN).to_string(), "NaN");
/// assert_eq!(Number::Float(1.5e-7).to_string(), "1.5e-7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
}

/// The result of decoding a raw query value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    Null,
    Bool(bool),
    String(String),
}

fn fmt_float(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", value);
    }
    // `{:e}` yields `1.5e21` / `1.5e-7`; positive exponents carry an explicit sign.
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&formatted),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Float(fl) => fmt_float(*fl, f),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }
}

impl Decoded {
    /// Returns `true` if the decoded value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Decoded::Null)
    }

    /// If the decoded value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Decoded::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the decoded value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Decoded::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Array(items) => items.serialize(serializer),
            Value::Scalar(Scalar::String(s)) => serializer.serialize_str(s),
            Value::Scalar(Scalar::Number(Number::Integer(i))) => serializer.serialize_i64(*i),
            Value::Scalar(Scalar::Number(Number::Unsigned(u))) => serializer.serialize_u64(*u),
            Value::Scalar(Scalar::Number(Number::Float(f))) => serializer.serialize_f64(*f),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a null, boolean, number, string or array")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::from(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, _map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                Err(de::Error::invalid_type(Unexpected::Map, &self))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Scalar(Scalar::Number(value))
    }
}

impl From<Scalar> for Value {
    fn from(value: Scalar) -> Self {
        Value::Scalar(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::from(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::from(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::from(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::from(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::from(Number::Unsigned(value as u64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::from(Number::Unsigned(value as u64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::from(Number::Unsigned(value as u64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::from(Number::Unsigned(value))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::from(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::from(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Scalar(Scalar::String(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Scalar(Scalar::String(value.to_string()))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for Decoded {
    fn from(value: bool) -> Self {
        Decoded::Bool(value)
    }
}

impl From<String> for Decoded {
    fn from(value: String) -> Self {
        Decoded::String(value)
    }
}
