//! Error types for query value decoding.
//!
//! Encoding never fails: every [`Value`](crate::Value) has a fragment form.
//! Decoding can fail when the raw text is not valid percent-encoding.
//!
//! ## Error Categories
//!
//! - **Malformed Escapes**: a `%` that is not followed by two hex digits
//! - **Invalid UTF-8**: escapes that decode to bytes which are not UTF-8
//!
//! ## Examples
//!
//! ```rust
//! use query_value::{decode_component, Error};
//!
//! let result = decode_component("100%");
//! assert!(matches!(result, Err(Error::MalformedEscape { offset: 3, .. })));
//! ```

use thiserror::Error;

/// Represents all possible errors raised while decoding query values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A `%` not followed by two hexadecimal digits
    #[error("Malformed percent escape at byte {offset} in {input:?}")]
    MalformedEscape { offset: usize, input: String },

    /// Percent escapes that do not form valid UTF-8
    #[error("Percent escapes in {input:?} do not decode to valid UTF-8")]
    InvalidUtf8 { input: String },
}

impl Error {
    /// Creates a malformed escape error pointing at the offending `%`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use query_value::Error;
    ///
    /// let err = Error::malformed_escape(2, "50%zz");
    /// assert!(err.to_string().contains("byte 2"));
    /// ```
    pub fn malformed_escape(offset: usize, input: &str) -> Self {
        Error::MalformedEscape {
            offset,
            input: input.to_string(),
        }
    }

    /// Creates an invalid UTF-8 error for the given raw input.
    pub fn invalid_utf8(input: &str) -> Self {
        Error::InvalidUtf8 {
            input: input.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
