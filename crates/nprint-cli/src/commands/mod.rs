pub mod calculate;
pub mod countries;
pub mod tables;

use nprint_core::error::NprintError;
use nprint_core::tables::{sample, workbook};
use nprint_core::ReferenceTables;

use crate::SnapshotArgs;

/// Load a raw reference snapshot: the bundled sample, an xlsx workbook, or
/// a raw JSON file, decided by flag and extension.
pub fn load_snapshot(args: &SnapshotArgs) -> Result<ReferenceTables, NprintError> {
    if args.sample {
        return sample::sample_snapshot();
    }

    let Some(path) = args.snapshot.as_deref() else {
        return Err(NprintError::Workbook(
            "no snapshot given (pass a file or --sample)".into(),
        ));
    };

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let bytes = std::fs::read(path)?;
    if is_json {
        serde_json::from_slice(&bytes).map_err(|e| NprintError::SnapshotLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    } else {
        workbook::read_workbook(&bytes)
    }
}
