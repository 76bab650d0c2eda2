pub mod calc;
pub mod chart;
pub mod error;
pub mod lookup;
pub mod model;
pub mod tables;

pub use calc::outcome::{CalculationResult, Details, EnergyBreakdown, FoodBreakdown};
pub use chart::{chart_series, ChartKind, ChartPoint};
pub use error::NprintError;
pub use model::{FoodBucket, FoodCategory, IncomeTier, SpendingTier, Treatment, UserInputs};
pub use tables::{NormalizedTables, ReferenceTables};

/// Main API entry point: estimate a person's annual nitrogen footprint and
/// the country-average baseline from a reference-table snapshot.
///
/// Preconditions are checked before any computation starts: a country must
/// be selected and the snapshot must be populated. Past that point the
/// pipeline never fails; a missing lookup (unknown country, absent income
/// classification, no energy row) degrades that contribution to 0 and the
/// result is still fully populated.
pub fn calculate(
    reference: &ReferenceTables,
    inputs: &UserInputs,
    selected_country: &str,
    treatment: Treatment,
) -> Result<CalculationResult, NprintError> {
    let country = selected_country.trim();
    if country.is_empty() {
        return Err(NprintError::NoCountrySelected);
    }
    if reference.is_empty() {
        return Err(NprintError::TablesNotLoaded);
    }

    // Indexes are rebuilt from the snapshot on every call; nothing is
    // cached between invocations, so concurrent calls against the same
    // snapshot are safe.
    let tables = NormalizedTables::from_raw(reference)?;
    Ok(calc::run(&tables, inputs, country, treatment))
}
