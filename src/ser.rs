//! Query fragment encoding.
//!
//! [`encode`] turns one named [`Value`] into a fragment. The fragment is
//! `name=value`, a bare `name`, or empty, depending on the value kind and the
//! [`Options`]. Arrays produce one fragment per element joined by `&`.
//!
//! ```rust
//! use query_value::{encode, ArrayFormat, BooleanFormat, NullFormat, Options, Value};
//!
//! let options = Options::new();
//! assert_eq!(encode("q", &Value::from("a b"), &options), "q=a%20b");
//! assert_eq!(encode("q", &Value::Null, &options), "q");
//! assert_eq!(encode("q", &Value::from(vec![1, 2]), &options), "q=1&q=2");
//!
//! let options = Options::new().with_null_format(NullFormat::Hidden);
//! assert_eq!(encode("q", &Value::Null, &options), "");
//! ```

use crate::de::{FALSE_GLYPH, TRUE_GLYPH};
use crate::{encode_component, ArrayFormat, BooleanFormat, NullFormat, Options, Value};

/// Encodes a named value as a query fragment.
///
/// Never fails; every value has a fragment form.
///
/// # Examples
///
/// ```rust
/// use query_value::{encode, ArrayFormat, BooleanFormat, Options, Value};
///
/// let options = Options::new().with_boolean_format(BooleanFormat::Unicode);
/// assert_eq!(encode("ok", &Value::from(true), &options), "ok=%E2%9C%93");
///
/// let options = Options::new().with_array_format(ArrayFormat::Index);
/// assert_eq!(
///     encode("tags", &Value::from(vec![1, 2]), &options),
///     "tags%5B0%5D=1&tags%5B1%5D=2"
/// );
/// ```
#[must_use]
pub fn encode(name: &str, value: &Value, options: &Options) -> String {
    match value {
        Value::Null => encode_null(&encode_component(name), options.null_format),
        Value::Bool(b) => encode_bool(&encode_component(name), *b, options.boolean_format),
        // The formatted element key is escaped as a whole, so the raw name goes in.
        Value::Array(items) => encode_array(name, items, options),
        Value::Scalar(scalar) => format!(
            "{}={}",
            encode_component(name),
            encode_component(&scalar.to_string())
        ),
    }
}

/// Encodes each element of `values` under `name`, joined by `&`.
///
/// The element key follows [`Options::array_format`] and is percent-encoded
/// together with its brackets. An empty slice encodes to an empty string.
///
/// # Examples
///
/// ```rust
/// use query_value::{encode_array, ArrayFormat, Options, Value};
///
/// let values = [Value::from("x"), Value::from("y z")];
/// let options = Options::new().with_array_format(ArrayFormat::Brackets);
/// assert_eq!(encode_array("v", &values, &options), "v%5B%5D=x&v%5B%5D=y%20z");
/// ```
#[must_use]
pub fn encode_array(name: &str, values: &[Value], options: &Options) -> String {
    let mut output = String::with_capacity(values.len() * (name.len() + 8));
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            output.push('&');
        }
        output.push_str(&encode_component(&element_name(
            name,
            index,
            options.array_format,
        )));
        output.push('=');
        output.push_str(&encode_component(&value.to_string()));
    }
    output
}

fn element_name(name: &str, index: usize, format: ArrayFormat) -> String {
    match format {
        ArrayFormat::None => name.to_string(),
        ArrayFormat::Brackets => format!("{}[]", name),
        ArrayFormat::Index => format!("{}[{}]", name, index),
    }
}

fn encode_bool(encoded_name: &str, value: bool, format: BooleanFormat) -> String {
    match (format, value) {
        (BooleanFormat::EmptyTrue, true) => encoded_name.to_string(),
        (BooleanFormat::Unicode, _) => {
            let glyph = if value { TRUE_GLYPH } else { FALSE_GLYPH };
            format!("{}={}", encoded_name, encode_component(glyph))
        }
        _ => format!("{}={}", encoded_name, value),
    }
}

fn encode_null(encoded_name: &str, format: NullFormat) -> String {
    match format {
        NullFormat::Default => encoded_name.to_string(),
        NullFormat::String => format!("{}=null", encoded_name),
        NullFormat::Hidden => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_names() {
        assert_eq!(element_name("a", 3, ArrayFormat::None), "a");
        assert_eq!(element_name("a", 3, ArrayFormat::Brackets), "a[]");
        assert_eq!(element_name("a", 3, ArrayFormat::Index), "a[3]");
    }

    #[test]
    fn test_bool_formats() {
        assert_eq!(encode_bool("b", true, BooleanFormat::None), "b=true");
        assert_eq!(encode_bool("b", false, BooleanFormat::String), "b=false");
        assert_eq!(encode_bool("b", false, BooleanFormat::Unicode), "b=%E2%9C%97");
        assert_eq!(encode_bool("b", true, BooleanFormat::EmptyTrue), "b");
        assert_eq!(encode_bool("b", false, BooleanFormat::EmptyTrue), "b=false");
    }

    #[test]
    fn test_null_formats() {
        assert_eq!(encode_null("n", NullFormat::Default), "n");
        assert_eq!(encode_null("n", NullFormat::String), "n=null");
        assert_eq!(encode_null("n", NullFormat::Hidden), "");
    }

    #[test]
    fn test_name_is_encoded_for_every_kind() {
        let options = Options::new();
        assert_eq!(encode("a b", &Value::Null, &options), "a%20b");
        assert_eq!(encode("a b", &Value::from(false), &options), "a%20b=false");
        assert_eq!(encode("a b", &Value::from(1), &options), "a%20b=1");
        assert_eq!(encode("a b", &Value::from(vec![1]), &options), "a%20b=1");
    }

    #[test]
    fn test_array_name_encoded_once() {
        let options = Options::new().with_array_format(ArrayFormat::Index);
        assert_eq!(
            encode("100%", &Value::from(vec!["x"]), &options),
            "100%25%5B0%5D=x"
        );
    }

    #[test]
    fn test_empty_array() {
        let options = Options::new().with_array_format(ArrayFormat::Brackets);
        assert_eq!(encode("a", &Value::Array(vec![]), &options), "");
    }

    #[test]
    fn test_array_elements_coerced() {
        let options = Options::new();
        let values = Value::from(vec![
            Value::Null,
            Value::from(true),
            Value::from(1.5),
            Value::from(vec![1, 2]),
        ]);
        assert_eq!(
            encode("a", &values, &options),
            "a=null&a=true&a=1.5&a=1%2C2"
        );
    }
}
