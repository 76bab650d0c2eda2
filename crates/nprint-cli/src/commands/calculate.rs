use std::collections::BTreeMap;

use nprint_core::error::NprintError;
use nprint_core::tables::cell::parse_number;
use nprint_core::{calculate, FoodCategory, SpendingTier, Treatment, UserInputs};

use crate::output;
use crate::CalculateArgs;

pub fn run(args: CalculateArgs) -> Result<(), NprintError> {
    let snapshot = super::load_snapshot(&args.snapshot)?;

    let treatment = Treatment::from_key(&args.treatment)
        .ok_or_else(|| NprintError::UnknownTreatmentLevel(args.treatment.clone()))?;
    let spending = SpendingTier::from_key(&args.spending)
        .ok_or_else(|| NprintError::UnknownSpendingLevel(args.spending.clone()))?;

    let inputs = UserInputs {
        servings_per_week: parse_servings(&args.servings)?,
        // Numeric options run through the same tolerant cell parser as the
        // reference tables, so "0,5" style input works.
        electricity_kwh_month: parse_number(args.electricity.as_deref()),
        natural_gas_m3_month: parse_number(args.gas.as_deref()),
        household_size: args.household.unwrap_or(0),
        flying_hours_year: parse_number(args.flights.as_deref()),
        transit_km_week: parse_number(args.transit.as_deref()),
        car_km_week: parse_number(args.car.as_deref()),
        spending,
    };

    let result = calculate(&snapshot, &inputs, &args.country, treatment)?;

    if let Some(path) = &args.out {
        std::fs::write(path, serde_json::to_string_pretty(&result)?)?;
    }

    match args.output.as_str() {
        "json" => output::json::print(&result)?,
        _ => output::table::print(&result, &args.country),
    }

    Ok(())
}

/// Parse repeated '<category>=<count>' specs into a servings map.
fn parse_servings(specs: &[String]) -> Result<BTreeMap<FoodCategory, u32>, NprintError> {
    let mut servings = BTreeMap::new();
    for spec in specs {
        let (category, count) = spec
            .split_once('=')
            .ok_or_else(|| NprintError::InvalidServingSpec(spec.clone()))?;
        let category = FoodCategory::from_key(category)
            .ok_or_else(|| NprintError::UnknownCategory(category.trim().to_string()))?;
        let count: u32 = count
            .trim()
            .parse()
            .map_err(|_| NprintError::InvalidServingSpec(spec.clone()))?;
        servings.insert(category, count);
    }
    Ok(servings)
}
