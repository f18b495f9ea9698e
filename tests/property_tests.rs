//! Property-based tests for the codec guarantees that must hold for any input.

use proptest::prelude::*;
use query_value::{
    decode, decode_component, encode, encode_array, encode_component, ArrayFormat, BooleanFormat,
    Decoded, NullFormat, Options, Value,
};

fn array_format() -> impl Strategy<Value = ArrayFormat> {
    prop_oneof![
        Just(ArrayFormat::None),
        Just(ArrayFormat::Brackets),
        Just(ArrayFormat::Index),
    ]
}

fn boolean_format() -> impl Strategy<Value = BooleanFormat> {
    prop_oneof![
        Just(BooleanFormat::None),
        Just(BooleanFormat::String),
        Just(BooleanFormat::Unicode),
        Just(BooleanFormat::EmptyTrue),
    ]
}

fn null_format() -> impl Strategy<Value = NullFormat> {
    prop_oneof![
        Just(NullFormat::Default),
        Just(NullFormat::String),
        Just(NullFormat::Hidden),
    ]
}

fn options() -> impl Strategy<Value = Options> {
    (array_format(), boolean_format(), null_format()).prop_map(|(a, b, n)| {
        Options::new()
            .with_array_format(a)
            .with_boolean_format(b)
            .with_null_format(n)
    })
}

proptest! {
    #[test]
    fn prop_component_roundtrip(s in "[^+]*") {
        prop_assert_eq!(decode_component(&encode_component(&s)).unwrap(), s);
    }

    #[test]
    fn prop_encoded_component_is_unreserved(s in any::<String>()) {
        let encoded = encode_component(&s);
        prop_assert!(encoded
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-_.!~*'()%".contains(&b)));
    }

    #[test]
    fn prop_bool_roundtrip(
        b in any::<bool>(),
        format in prop_oneof![Just(BooleanFormat::String), Just(BooleanFormat::Unicode)],
    ) {
        let options = Options::new().with_boolean_format(format);
        let fragment = encode("flag", &Value::from(b), &options);
        let raw = fragment.split('=').nth(1).unwrap();
        prop_assert_eq!(decode(Some(raw), &options).unwrap(), Decoded::Bool(b));
    }

    #[test]
    fn prop_string_roundtrip(s in "[^+]*", options in options()) {
        let fragment = encode("q", &Value::from(s.as_str()), &options);
        let (_, raw) = fragment.split_once('=').unwrap();
        let expected = match (options.boolean_format, options.null_format, s.as_str()) {
            (BooleanFormat::String, _, "true") => Decoded::Bool(true),
            (BooleanFormat::String, _, "false") => Decoded::Bool(false),
            (_, NullFormat::String, "null") => Decoded::Null,
            (BooleanFormat::Unicode, _, "\u{2713}") => Decoded::Bool(true),
            (BooleanFormat::Unicode, _, "\u{2717}") => Decoded::Bool(false),
            _ => Decoded::String(s.clone()),
        };
        prop_assert_eq!(decode(Some(raw), &options).unwrap(), expected);
    }

    #[test]
    fn prop_array_fragment_count(
        values in prop::collection::vec(any::<i64>(), 1..20),
        format in array_format(),
    ) {
        let options = Options::new().with_array_format(format);
        let items: Vec<Value> = values.iter().copied().map(Value::from).collect();
        let fragment = encode_array("k", &items, &options);
        prop_assert_eq!(fragment.split('&').count(), values.len());
    }

    #[test]
    fn prop_array_keys_decode_to_element_names(
        name in any::<String>(),
        values in prop::collection::vec(any::<i64>(), 1..10),
        format in array_format(),
    ) {
        let options = Options::new().with_array_format(format);
        let items: Vec<Value> = values.iter().copied().map(Value::from).collect();
        let fragment = encode(&name, &Value::Array(items), &options);
        for (index, pair) in fragment.split('&').enumerate() {
            let (key, raw) = pair.split_once('=').unwrap();
            let expected = match format {
                ArrayFormat::None => name.clone(),
                ArrayFormat::Brackets => format!("{}[]", name),
                ArrayFormat::Index => format!("{}[{}]", name, index),
            };
            prop_assert_eq!(decode_component(key).unwrap(), expected);
            prop_assert_eq!(decode_component(raw).unwrap(), values[index].to_string());
        }
    }
}
