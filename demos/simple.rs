//! Encoding a handful of fields into a query string and reading them back.
//!
//! Run with: cargo run --example simple

use query_value::{decode, decode_component, encode, Options, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::new();

    let fields = [
        ("name", Value::from("Alice Johnson")),
        ("age", Value::from(42)),
        ("tags", Value::from(vec!["admin", "ops"])),
        ("manager", Value::Null),
    ];

    // Encode each field and join the fragments
    let query = fields
        .iter()
        .map(|(name, value)| encode(name, value, &options))
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("&");
    println!("Query string:\n{}\n", query);

    // Decode every pair back
    for pair in query.split('&') {
        let (name, raw) = match pair.split_once('=') {
            Some((name, raw)) => (name, Some(raw)),
            None => (pair, None),
        };
        println!("{} => {:?}", decode_component(name)?, decode(raw, &options)?);
    }

    Ok(())
}
