//! Basic usage example for gazetteer-rs
//!
//! This example demonstrates how to:
//! - Load the bundled gazetteer
//! - Walk provinces, cities and districts
//! - Resolve abbreviated names to codes and back

use gazetteer_core::prelude::*;

fn main() -> Result<()> {
    println!("=== Gazetteer Basic Usage Example ===\n");

    println!("Loading gazetteer...");
    let gz = Gazetteer::load()?;
    let stats = gz.stats();
    println!(
        "✓ Loaded {} provinces, {} cities, {} districts\n",
        stats.provinces, stats.cities, stats.districts
    );

    // Example 1: Provinces
    println!("--- Example 1: Provinces (mainland only) ---");
    let provinces = gz.provinces(true);
    for (i, name) in provinces.iter().take(5).enumerate() {
        println!("{}. {}", i + 1, name);
    }
    println!("... and {} more\n", provinces.len().saturating_sub(5));

    // Example 2: Cities and districts
    println!("--- Example 2: Cities of 浙江, districts of 杭州 ---");
    println!("Cities: {}", gz.cities("浙江").join(", "));
    println!("Districts: {}\n", gz.districts("杭州").join(", "));

    // Example 3: Names to codes
    println!("--- Example 3: Resolve names ---");
    for (province, city, district) in [("浙江", "", ""), ("", "杭州", ""), ("", "杭州", "西湖")] {
        match gz.resolve_code(province, city, district) {
            Some(code) => println!("{province:?} {city:?} {district:?} -> {code}"),
            None => println!("{province:?} {city:?} {district:?} -> not found"),
        }
    }
    println!();

    // Example 4: Codes to names
    println!("--- Example 4: Parse a code ---");
    let codes = gz.parse_code("CN033001012")?;
    println!("Province: {}", codes.province_code);
    println!("City: {:?}", codes.city_code);
    println!("District: {:?}", codes.district_code);
    let address = gz.parse_address("", "杭州", "西湖")?;
    println!(
        "Address: {} {} {}",
        address.province,
        address.city.as_deref().unwrap_or_default(),
        address.district.as_deref().unwrap_or_default()
    );

    Ok(())
}
