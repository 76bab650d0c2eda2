use crate::calc::outcome::EnergyBreakdown;
use crate::calc::round2;
use crate::model::UserInputs;
use crate::tables::schema::CountryEnergyRow;

/// Terajoules to cubic meters of natural gas.
pub const TJ_TO_M3: f64 = 28_428.0;
/// Terajoules to kilowatt hours.
pub const TJ_TO_KWH: f64 = 277_778.0;

/// kg N per m3 of natural gas.
pub const GAS_FACTOR: f64 = 0.000690972;
/// kg N per km by car.
pub const CAR_FACTOR: f64 = 0.00012297;
/// kg N per flying hour.
pub const FLIGHT_FACTOR: f64 = 0.128411244;
/// kg N per km by public transit.
pub const TRANSIT_FACTOR: f64 = 0.000575729;
/// kg N per kWh for the global average electricity mix.
pub const DEFAULT_ELECTRIC_FACTOR: f64 = 0.000906564;

/// Outcome of the user energy pass: the rounded sum and its seven
/// components at full precision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct UserEnergy {
    pub total: f64,
    pub breakdown: EnergyBreakdown,
}

/// kg N per kWh for this country: its own renewable-mix factor when it is
/// finite and positive, the global default otherwise.
pub fn electric_factor(row: Option<&CountryEnergyRow>) -> f64 {
    match row {
        Some(r) if r.renewables.is_finite() && r.renewables > 0.0 => r.renewables,
        _ => DEFAULT_ELECTRIC_FACTOR,
    }
}

pub fn user_energy(
    inputs: &UserInputs,
    row: Option<&CountryEnergyRow>,
    electric_factor: f64,
) -> UserEnergy {
    let household = f64::from(inputs.household_size.max(1));

    let breakdown = EnergyBreakdown {
        electricity: finite_or_zero(inputs.electricity_kwh_month) * 12.0 * electric_factor
            / household,
        natural_gas: finite_or_zero(inputs.natural_gas_m3_month) * 12.0 * GAS_FACTOR / household,
        flight: finite_or_zero(inputs.flying_hours_year) * FLIGHT_FACTOR,
        car: finite_or_zero(inputs.car_km_week) * 52.0 * CAR_FACTOR,
        public_transit: finite_or_zero(inputs.transit_km_week) * 52.0 * TRANSIT_FACTOR,
        spending: inputs.spending.annual_n(),
        top_down: top_down(row, electric_factor),
    };

    let total = round2(
        breakdown
            .components()
            .iter()
            .map(|c| finite_or_zero(*c))
            .sum(),
    );

    UserEnergy { total, breakdown }
}

/// Per-capita share of the country's non-itemized ("rest") sector energy.
fn top_down(row: Option<&CountryEnergyRow>, electric_factor: f64) -> f64 {
    let Some(row) = row else {
        return 0.0;
    };
    let population = row.population.max(1.0);
    let rest_gas = row.rest_ng.max(0.0);
    let rest_elec = row.rest_elec.max(0.0);
    (rest_elec * TJ_TO_KWH * electric_factor + rest_gas * TJ_TO_M3 * GAS_FACTOR) / population
}

/// Country-average energy total: per-capita share of the five itemized
/// sector pairs, natural gas and electricity. A single aggregate number
/// with no sub-breakdown, unrounded.
pub fn average_aggregate(row: Option<&CountryEnergyRow>, electric_factor: f64) -> f64 {
    let Some(row) = row else {
        return 0.0;
    };
    let population = row.population.max(1.0);
    let sectors = [
        (row.households_ng, row.households_elec),
        (row.road_ng, row.road_elec),
        (row.other_transport_ng, row.other_transport_elec),
        (row.commerce_ng, row.commerce_elec),
        (row.other_consumers_ng, row.other_consumers_elec),
    ];
    sectors
        .iter()
        .map(|(ng, elec)| ng * TJ_TO_M3 * GAS_FACTOR + elec * TJ_TO_KWH * electric_factor)
        .sum::<f64>()
        / population
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}
