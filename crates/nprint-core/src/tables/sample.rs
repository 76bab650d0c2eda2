use crate::error::NprintError;
use crate::tables::ReferenceTables;

const SAMPLE_SNAPSHOT_JSON: &str = include_str!("../../../../data/sample_snapshot.json");

/// Load the bundled sample reference snapshot: a small but complete set of
/// all seven tables, useful for demos and tests without network access.
pub fn sample_snapshot() -> Result<ReferenceTables, NprintError> {
    let snapshot: ReferenceTables = serde_json::from_str(SAMPLE_SNAPSHOT_JSON)?;
    Ok(snapshot)
}
