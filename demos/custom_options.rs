//! Comparing the boolean, null and array formats side by side.
//!
//! Run with: cargo run --example custom_options

use query_value::{encode, ArrayFormat, BooleanFormat, NullFormat, Options, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let flag = Value::from(true);
    let missing = Value::Null;
    let ids = Value::from(vec![3, 5, 8]);

    println!("Boolean formats:");
    for format in [
        BooleanFormat::None,
        BooleanFormat::String,
        BooleanFormat::Unicode,
        BooleanFormat::EmptyTrue,
    ] {
        let options = Options::new().with_boolean_format(format);
        println!("  {:<10} {}", format, encode("debug", &flag, &options));
    }

    println!("\nNull formats:");
    for format in [NullFormat::Default, NullFormat::String, NullFormat::Hidden] {
        let options = Options::new().with_null_format(format);
        println!("  {:<10} {:?}", format, encode("parent", &missing, &options));
    }

    println!("\nArray formats:");
    for format in [ArrayFormat::None, ArrayFormat::Brackets, ArrayFormat::Index] {
        let options = Options::new().with_array_format(format);
        println!("  {:<10} {}", format, encode("id", &ids, &options));
    }

    // Options can also come from a config file
    let options: Options = serde_json::from_str(
        r#"{"arrayFormat": "brackets", "booleanFormat": "unicode"}"#,
    )?;
    println!("\nFrom config: {}", encode("id", &ids, &options));

    Ok(())
}
