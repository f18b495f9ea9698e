//! # query_value
//!
//! Encode and decode individual values as URL query-string fragments.
//!
//! ## What does it do?
//!
//! A query string carries everything as text, so booleans, nulls and arrays
//! need a convention. This crate implements the common ones and lets you pick
//! per call:
//!
//! - **Booleans**: `flag=true`, `flag=✓`, or a bare `flag` for `true`
//! - **Nulls**: a bare key, `key=null`, or the field left out entirely
//! - **Arrays**: repeated keys, `key[]`, or indexed `key[0]`
//!
//! Only single values are handled. Splitting a full query string on `&` and
//! `=`, and joining fragments back together, is left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use query_value::{decode, encode, BooleanFormat, Decoded, Options, Value};
//!
//! let options = Options::new().with_boolean_format(BooleanFormat::String);
//!
//! let fragment = encode("active", &Value::from(true), &options);
//! assert_eq!(fragment, "active=true");
//!
//! let (_, raw) = fragment.split_once('=').unwrap();
//! assert_eq!(decode(Some(raw), &options).unwrap(), Decoded::Bool(true));
//! ```
//!
//! ### Arrays
//!
//! ```rust
//! use query_value::{encode, ArrayFormat, Options, Value};
//!
//! let options = Options::new().with_array_format(ArrayFormat::Index);
//! let fragment = encode("tags", &Value::from(vec!["rust", "url"]), &options);
//! assert_eq!(fragment, "tags%5B0%5D=rust&tags%5B1%5D=url");
//! ```
//!
//! ### Options from configuration
//!
//! [`Options`] deserializes from the camelCase field names and format
//! literals used on the wire:
//!
//! ```rust
//! use query_value::{ArrayFormat, Options};
//!
//! let options: Options = serde_json::from_str(r#"{"arrayFormat": "brackets"}"#).unwrap();
//! assert_eq!(options.array_format, ArrayFormat::Brackets);
//! ```
//!
//! ## Pairing formats
//!
//! Decoding is symmetric with encoding only when both sides use the same
//! options. Under `none` booleans, `true` decodes as the string `"true"`. A
//! bare key means `null` under the default null format and `true` under
//! `empty-true` booleans, so do not combine the two on one field.
//!
//! ## Errors
//!
//! Encoding never fails. Decoding returns [`Error`] for malformed percent
//! escapes or escapes that do not form UTF-8.

pub mod component;
pub mod de;
pub mod error;
pub mod options;
pub mod ser;
pub mod value;

pub use component::{decode_component, decode_form_component, encode_component};
pub use de::decode;
pub use error::{Error, Result};
pub use options::{
    resolve_options, ArrayFormat, BooleanFormat, NullFormat, Options, PartialOptions,
};
pub use ser::{encode, encode_array};
pub use value::{Decoded, Number, Scalar, Value};
