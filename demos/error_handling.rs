//! Error handling example for gazetteer-rs
//!
//! This example demonstrates not-found lookups and build failures.

use gazetteer_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Gazetteer Error Handling Example ===\n");

    // Example 1: Handling load errors
    println!("--- Example 1: Loading a directory without data ---");
    match Gazetteer::load_from_dir("/nonexistent") {
        Ok(_) => println!("✓ unexpectedly loaded"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    let gz = Gazetteer::load()?;

    // Example 2: Single-field lookups return None
    println!("--- Example 2: Unknown names ---");
    for name in ["foo", "杭", "杭洲"] {
        match gz.code_of_city_name(name) {
            Some(code) => println!("  Found: {name} -> {code}"),
            None => println!("  Not found: {name}"),
        }
    }
    println!();

    // Example 3: Composite resolvers return errors
    println!("--- Example 3: Composite failures ---");
    if let Err(e) = gz.parse_address("foo", "bar", "") {
        println!("  {e}");
    }
    if let Err(e) = gz.parse_code("CN999999999") {
        println!("  {e}");
    }
    println!();

    // Example 4: Datasets the index cannot disambiguate
    println!("--- Example 4: Ambiguous datasets ---");
    let duplicate = Gazetteer::from_rows([
        Row::province("CN033000000", "浙江省"),
        Row::city("CN033000000", "CN033001000", "杭州市"),
        Row::city("CN033000000", "CN033009000", "杭州市"),
    ]);
    if let Err(e) = duplicate {
        println!("  {e}");
    }
    let sub_name = Gazetteer::from_rows([
        Row::province("CN022000000", "吉林省"),
        Row::city("CN022000000", "CN022001000", "吉林"),
        Row::city("CN022000000", "CN022002000", "吉林市"),
    ]);
    if let Err(e) = sub_name {
        println!("  {e}");
    }

    Ok(())
}
