use nprint_core::error::NprintError;
use nprint_core::lookup::{available_countries, LookupIndexes};
use nprint_core::model::IncomeTier;
use nprint_core::NormalizedTables;

use crate::SnapshotArgs;

pub fn run(args: &SnapshotArgs) -> Result<(), NprintError> {
    let snapshot = super::load_snapshot(args)?;
    let tables = NormalizedTables::from_raw(&snapshot)?;
    let lookups = LookupIndexes::build(&tables);

    for country in available_countries(&tables) {
        match lookups.income_label_for(&country) {
            Some(label) => {
                let tier = IncomeTier::from_label(label);
                let hint = tier
                    .map(|t| format!(" (typical treatment: {:?})", t.typical_treatment()))
                    .unwrap_or_default();
                println!("{country}  [{label}]{hint}");
            }
            None => println!("{country}  [no income classification]"),
        }
    }

    Ok(())
}
