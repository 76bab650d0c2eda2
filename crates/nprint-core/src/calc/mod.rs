pub mod energy;
pub mod food;
pub mod outcome;

use tracing::warn;

use crate::lookup::{average_removal_rate, country_food_per_capita, LookupIndexes};
use crate::model::{IncomeTier, Treatment, UserInputs};
use crate::tables::NormalizedTables;
use outcome::{CalculationResult, Details, EnergyBreakdown};

/// Round to 2 decimals. Applied at exactly three points: each food pass's
/// final total and the user energy sum; all intermediate values stay at
/// full precision.
pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Run both food passes and both energy figures against one normalized
/// snapshot and combine them. Missing lookups degrade to 0 along the way;
/// this never fails.
pub(crate) fn run(
    tables: &NormalizedTables,
    inputs: &UserInputs,
    country: &str,
    treatment: Treatment,
) -> CalculationResult {
    let lookups = LookupIndexes::build(tables);

    let income_label = lookups.income_label_for(country).map(str::to_string);
    if income_label.is_none() {
        warn!(country, "no income classification; tier-dependent factors default to 0");
    }
    let tier = income_label.as_deref().and_then(IncomeTier::from_label);
    let average_removal = average_removal_rate(&tables.sewage_removal, income_label.as_deref());
    let per_capita = country_food_per_capita(&tables.country_food, country);

    let user_food = food::user_pass(inputs, &lookups, tier, treatment);
    let average_food = food::average_pass(&per_capita, &lookups, tier, average_removal);

    let energy_row = tables.country_energy.iter().find(|r| r.country == country);
    let electric_factor = energy::electric_factor(energy_row);
    let user_energy = energy::user_energy(inputs, energy_row, electric_factor);
    let average_energy = energy::average_aggregate(energy_row, electric_factor);

    CalculationResult {
        total_n: user_food.total + user_energy.total,
        average_n: average_food.total + average_energy,
        food_breakdown: user_food.breakdown,
        average_food_breakdown: average_food.breakdown,
        energy_breakdown: user_energy.breakdown,
        average_energy_breakdown: EnergyBreakdown {
            top_down: user_energy.breakdown.top_down,
            ..Default::default()
        },
        details: Details {
            total_user_food: user_food.total,
            total_user_energy: user_energy.total,
            total_average_food: average_food.total,
            total_average_energy: average_energy,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(7.576), 7.58);
        assert_eq!(round2(8.199999999999999), 8.2);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(2.544), 2.54);
    }
}
