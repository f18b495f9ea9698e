//! Percent-encoding of names and values.
//!
//! [`encode_component`] escapes every byte outside the URI component
//! unreserved set `A-Z a-z 0-9 - _ . ! ~ * ' ( )`. [`decode_component`]
//! reverses it and, following the legacy form convention only partially,
//! turns the **first** literal `+` into a space. [`decode_form_component`]
//! turns every `+` into a space.
//!
//! ## Examples
//!
//! ```rust
//! use query_value::{decode_component, decode_form_component, encode_component};
//!
//! assert_eq!(encode_component("a b&c"), "a%20b%26c");
//! assert_eq!(decode_component("a+b+c").unwrap(), "a b+c");
//! assert_eq!(decode_form_component("a+b+c").unwrap(), "a b c");
//! ```

use crate::{Error, Result};

/// Characters left unescaped on top of `urlencoding`'s `A-Z a-z 0-9 - _ . ~`.
const MARKS: [char; 5] = ['!', '\'', '(', ')', '*'];

/// Percent-encodes `raw` for use as a query-string name or value.
///
/// # Examples
///
/// ```rust
/// use query_value::encode_component;
///
/// assert_eq!(encode_component("it's (ok)!*"), "it's%20(ok)!*");
/// ```
#[must_use]
pub fn encode_component(raw: &str) -> String {
    let mut output = String::with_capacity(raw.len());
    for piece in raw.split_inclusive(&MARKS[..]) {
        match piece.strip_suffix(&MARKS[..]) {
            Some(run) => {
                output.push_str(&urlencoding::encode(run));
                // Marks are ASCII, so the stripped suffix is the last byte.
                output.push_str(&piece[run.len()..]);
            }
            None => output.push_str(&urlencoding::encode(piece)),
        }
    }
    output
}

/// Decodes a percent-encoded component, reading the first `+` as a space.
///
/// # Errors
///
/// Returns [`Error::MalformedEscape`] when a `%` is not followed by two hex
/// digits and [`Error::InvalidUtf8`] when the escapes do not form UTF-8.
pub fn decode_component(raw: &str) -> Result<String> {
    unescape(raw, &raw.replacen('+', " ", 1))
}

/// Decodes a percent-encoded component, reading every `+` as a space.
///
/// # Errors
///
/// Same as [`decode_component`].
pub fn decode_form_component(raw: &str) -> Result<String> {
    unescape(raw, &raw.replace('+', " "))
}

// `spaced` has the same byte length as `raw`, so offsets apply to both.
fn unescape(raw: &str, spaced: &str) -> Result<String> {
    if let Some(offset) = find_malformed_escape(spaced.as_bytes()) {
        return Err(Error::malformed_escape(offset, raw));
    }
    match urlencoding::decode(spaced) {
        Ok(decoded) => Ok(decoded.into_owned()),
        Err(_) => Err(Error::invalid_utf8(raw)),
    }
}

fn find_malformed_escape(bytes: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Some(i);
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    None
}
