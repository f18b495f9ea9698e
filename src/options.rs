//! Configuration options for query value encoding and decoding.
//!
//! This module provides the types that select how each kind of value is
//! represented in a query fragment:
//!
//! - [`Options`]: Resolved configuration consumed by every codec call
//! - [`PartialOptions`]: Caller-supplied overrides, resolved with [`resolve_options`]
//! - [`ArrayFormat`], [`BooleanFormat`], [`NullFormat`]: The three format choices
//!
//! Format literals are never rejected. A literal that names no known format
//! falls back to the default variant, which is exactly how an unknown format
//! behaves in every codec path.
//!
//! ## Examples
//!
//! ```rust
//! use query_value::{encode, ArrayFormat, BooleanFormat, Options, Value};
//!
//! let options = Options::new()
//!     .with_array_format(ArrayFormat::Brackets)
//!     .with_boolean_format(BooleanFormat::EmptyTrue);
//!
//! assert_eq!(encode("debug", &Value::from(true), &options), "debug");
//! assert_eq!(
//!     encode("id", &Value::from(vec![1, 2]), &options),
//!     "id%5B%5D=1&id%5B%5D=2"
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Key naming used for the elements of an array.
///
/// # Examples
///
/// ```rust
/// use query_value::ArrayFormat;
///
/// assert_eq!(ArrayFormat::Index.as_str(), "index");
/// assert_eq!(ArrayFormat::from("brackets"), ArrayFormat::Brackets);
/// assert_eq!(ArrayFormat::from("commas"), ArrayFormat::None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ArrayFormat {
    /// `name=a&name=b`
    #[default]
    None,
    /// `name[]=a&name[]=b`
    Brackets,
    /// `name[0]=a&name[1]=b`
    Index,
}

impl ArrayFormat {
    /// Returns the wire literal of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ArrayFormat::None => "none",
            ArrayFormat::Brackets => "brackets",
            ArrayFormat::Index => "index",
        }
    }
}

impl From<&str> for ArrayFormat {
    fn from(literal: &str) -> Self {
        match literal {
            "none" => ArrayFormat::None,
            "brackets" => ArrayFormat::Brackets,
            "index" => ArrayFormat::Index,
            other => {
                log::debug!("unrecognized array format {other:?}, using \"none\"");
                ArrayFormat::None
            }
        }
    }
}

/// Representation of boolean values.
///
/// | format | `true` | `false` |
/// |---|---|---|
/// | `none` | `name=true` | `name=false` |
/// | `string` | `name=true` | `name=false` |
/// | `unicode` | `name=✓` | `name=✗` |
/// | `empty-true` | `name` | `name=false` |
///
/// `none` and `string` encode identically; only `string` reserves the
/// literals as sentinels when decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum BooleanFormat {
    #[default]
    None,
    String,
    Unicode,
    EmptyTrue,
}

impl BooleanFormat {
    /// Returns the wire literal of this format.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use query_value::BooleanFormat;
    ///
    /// assert_eq!(BooleanFormat::EmptyTrue.as_str(), "empty-true");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            BooleanFormat::None => "none",
            BooleanFormat::String => "string",
            BooleanFormat::Unicode => "unicode",
            BooleanFormat::EmptyTrue => "empty-true",
        }
    }
}

impl From<&str> for BooleanFormat {
    fn from(literal: &str) -> Self {
        match literal {
            "none" => BooleanFormat::None,
            "string" => BooleanFormat::String,
            "unicode" => BooleanFormat::Unicode,
            "empty-true" => BooleanFormat::EmptyTrue,
            other => {
                log::debug!("unrecognized boolean format {other:?}, using \"none\"");
                BooleanFormat::None
            }
        }
    }
}

/// Representation of null values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum NullFormat {
    /// Bare key: `name`
    #[default]
    Default,
    /// `name=null`
    String,
    /// Field omitted entirely
    Hidden,
}

impl NullFormat {
    /// Returns the wire literal of this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            NullFormat::Default => "default",
            NullFormat::String => "string",
            NullFormat::Hidden => "hidden",
        }
    }
}

impl From<&str> for NullFormat {
    fn from(literal: &str) -> Self {
        match literal {
            "default" => NullFormat::Default,
            "string" => NullFormat::String,
            "hidden" => NullFormat::Hidden,
            other => {
                log::debug!("unrecognized null format {other:?}, using \"default\"");
                NullFormat::Default
            }
        }
    }
}

impl From<String> for ArrayFormat {
    fn from(literal: String) -> Self {
        ArrayFormat::from(literal.as_str())
    }
}

impl From<String> for BooleanFormat {
    fn from(literal: String) -> Self {
        BooleanFormat::from(literal.as_str())
    }
}

impl From<String> for NullFormat {
    fn from(literal: String) -> Self {
        NullFormat::from(literal.as_str())
    }
}

impl From<ArrayFormat> for &'static str {
    fn from(format: ArrayFormat) -> Self {
        format.as_str()
    }
}

impl From<BooleanFormat> for &'static str {
    fn from(format: BooleanFormat) -> Self {
        format.as_str()
    }
}

impl From<NullFormat> for &'static str {
    fn from(format: NullFormat) -> Self {
        format.as_str()
    }
}

impl fmt::Display for ArrayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for BooleanFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for NullFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Resolved configuration for encoding and decoding.
///
/// Build it once and pass it to every [`encode`](crate::encode) and
/// [`decode`](crate::decode) call. Deserializing it from a config file fills
/// missing fields with their defaults.
///
/// # Examples
///
/// ```rust
/// use query_value::{NullFormat, Options};
///
/// let options: Options = serde_json::from_str(r#"{"nullFormat":"hidden"}"#).unwrap();
/// assert_eq!(options, Options::new().with_null_format(NullFormat::Hidden));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub array_format: ArrayFormat,
    pub boolean_format: BooleanFormat,
    pub null_format: NullFormat,
}

impl Options {
    /// Creates default options (`none` arrays, `none` booleans, `default` nulls).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use query_value::{ArrayFormat, Options};
    ///
    /// let options = Options::new();
    /// assert_eq!(options.array_format, ArrayFormat::None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key naming for array elements.
    #[must_use]
    pub fn with_array_format(mut self, format: ArrayFormat) -> Self {
        self.array_format = format;
        self
    }

    /// Sets the boolean representation.
    #[must_use]
    pub fn with_boolean_format(mut self, format: BooleanFormat) -> Self {
        self.boolean_format = format;
        self
    }

    /// Sets the null representation.
    #[must_use]
    pub fn with_null_format(mut self, format: NullFormat) -> Self {
        self.null_format = format;
        self
    }
}

/// Caller-supplied option overrides; unset fields take their defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub array_format: Option<ArrayFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_format: Option<BooleanFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_format: Option<NullFormat>,
}

impl PartialOptions {
    /// Fills every unset field with its default.
    #[must_use]
    pub fn resolve(self) -> Options {
        Options {
            array_format: self.array_format.unwrap_or_default(),
            boolean_format: self.boolean_format.unwrap_or_default(),
            null_format: self.null_format.unwrap_or_default(),
        }
    }
}

impl From<PartialOptions> for Options {
    fn from(partial: PartialOptions) -> Self {
        partial.resolve()
    }
}

/// Produces fully populated [`Options`] from optional overrides.
///
/// # Examples
///
/// ```rust
/// use query_value::{resolve_options, BooleanFormat, NullFormat, PartialOptions};
///
/// let options = resolve_options(Some(PartialOptions {
///     boolean_format: Some(BooleanFormat::Unicode),
///     ..Default::default()
/// }));
/// assert_eq!(options.boolean_format, BooleanFormat::Unicode);
/// assert_eq!(options.null_format, NullFormat::Default);
///
/// assert_eq!(resolve_options(None), Default::default());
/// ```
#[must_use]
pub fn resolve_options(partial: Option<PartialOptions>) -> Options {
    partial.unwrap_or_default().resolve()
}
