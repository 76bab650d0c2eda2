use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum NprintError {
    #[error("no country selected")]
    NoCountrySelected,

    #[error("reference tables are not loaded yet")]
    TablesNotLoaded,

    #[error(
        "table '{table}' header mismatch at column {column}: expected '{expected}', found '{found}'"
    )]
    HeaderMismatch {
        table: &'static str,
        column: usize,
        expected: String,
        found: String,
    },

    #[error("failed to read workbook: {0}")]
    Workbook(String),

    #[error("failed to load snapshot from {path}: {reason}")]
    SnapshotLoad { path: PathBuf, reason: String },

    #[error("unknown food category '{0}'")]
    UnknownCategory(String),

    #[error("invalid serving spec '{0}': expected '<category>=<count>'")]
    InvalidServingSpec(String),

    #[error("unknown spending level '{0}'. Available: none, minimal, moderate, high")]
    UnknownSpendingLevel(String),

    #[error("unknown treatment level '{0}'. Available: unknown, none, primary, secondary, tertiary")]
    UnknownTreatmentLevel(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
