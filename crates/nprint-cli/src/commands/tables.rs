use nprint_core::error::NprintError;
use nprint_core::tables::schema;
use nprint_core::NormalizedTables;

use crate::SnapshotArgs;

pub fn list() -> Result<(), NprintError> {
    let tables: [(&str, &[&str]); 7] = [
        ("production_factors", &schema::PRODUCTION_FACTOR_HEADERS[..]),
        ("food_attributes", &schema::FOOD_ATTRIBUTE_HEADERS[..]),
        ("sewage_removal", &schema::SEWAGE_REMOVAL_HEADERS[..]),
        ("country_food", &schema::COUNTRY_FOOD_HEADERS[..]),
        ("country_income", &schema::COUNTRY_INCOME_HEADERS[..]),
        ("country_energy", &schema::COUNTRY_ENERGY_HEADERS[..]),
        ("serving_sizes", &schema::SERVING_SIZE_HEADERS[..]),
    ];

    for (name, headers) in tables {
        println!("{name} ({} columns)", headers.len());
        println!("  {}", headers.join(" | "));
        println!();
    }

    Ok(())
}

pub fn validate(args: &SnapshotArgs) -> Result<(), NprintError> {
    let snapshot = super::load_snapshot(args)?;
    let tables = NormalizedTables::from_raw(&snapshot)?;

    println!("All headers match.");
    println!("  production_factors: {} rows", tables.production_factors.len());
    println!("  food_attributes:    {} rows", tables.food_attributes.len());
    println!("  sewage_removal:     {} rows", tables.sewage_removal.len());
    println!("  country_food:       {} rows", tables.country_food.len());
    println!("  country_income:     {} rows", tables.country_income.len());
    println!("  country_energy:     {} rows", tables.country_energy.len());
    println!("  serving_sizes:      {} rows", tables.serving_sizes.len());

    Ok(())
}
