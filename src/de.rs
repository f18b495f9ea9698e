//! Query value decoding.
//!
//! [`decode`] maps one raw value, as it appears after the `=` of a query
//! pair, back to a [`Decoded`] value. `None` stands for a bare key with no
//! `=value` part.
//!
//! Sentinel checks run in a fixed order. The `string` boolean and null
//! sentinels are compared against the raw text, before percent-decoding;
//! they contain nothing that needs escaping. The `unicode` boolean glyphs
//! are always escaped in transit, so they are compared after decoding.

use crate::{decode_component, BooleanFormat, Decoded, NullFormat, Options, Result};

/// Glyph for `true` under [`BooleanFormat::Unicode`].
pub const TRUE_GLYPH: &str = "\u{2713}";
/// Glyph for `false` under [`BooleanFormat::Unicode`].
pub const FALSE_GLYPH: &str = "\u{2717}";

/// Decodes a raw query value.
///
/// # Examples
///
/// ```rust
/// use query_value::{decode, BooleanFormat, Decoded, NullFormat, Options};
///
/// let options = Options::new().with_boolean_format(BooleanFormat::EmptyTrue);
/// assert_eq!(decode(None, &options).unwrap(), Decoded::Bool(true));
/// assert_eq!(decode(None, &Options::new()).unwrap(), Decoded::Null);
///
/// let options = Options::new().with_null_format(NullFormat::String);
/// assert_eq!(decode(Some("null"), &options).unwrap(), Decoded::Null);
/// assert_eq!(
///     decode(Some("a%20b"), &options).unwrap(),
///     Decoded::String("a b".to_string())
/// );
/// ```
///
/// # Errors
///
/// Returns an error when the raw value is not valid percent-encoding; see
/// [`decode_component`].
pub fn decode(raw: Option<&str>, options: &Options) -> Result<Decoded> {
    let Some(raw) = raw else {
        return Ok(match options.boolean_format {
            BooleanFormat::EmptyTrue => Decoded::Bool(true),
            _ => Decoded::Null,
        });
    };

    if options.boolean_format == BooleanFormat::String {
        match raw {
            "true" => return Ok(Decoded::Bool(true)),
            "false" => return Ok(Decoded::Bool(false)),
            _ => {}
        }
    }

    if options.null_format == NullFormat::String && raw == "null" {
        return Ok(Decoded::Null);
    }

    let decoded = decode_component(raw).map_err(|err| {
        log::trace!("rejecting raw query value: {err}");
        err
    })?;

    if options.boolean_format == BooleanFormat::Unicode {
        if decoded == TRUE_GLYPH {
            return Ok(Decoded::Bool(true));
        }
        if decoded == FALSE_GLYPH {
            return Ok(Decoded::Bool(false));
        }
    }

    Ok(Decoded::String(decoded))
}
