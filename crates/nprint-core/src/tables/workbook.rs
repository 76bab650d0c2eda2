use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::error::NprintError;
use crate::tables::ReferenceTables;

const SHEET_PRODUCTION_FACTORS: &str = "final_VNFs";
const SHEET_FOOD_ATTRIBUTES: &str = "other_attributes";
const SHEET_SEWAGE_REMOVAL: &str = "sewage_ratings";
const SHEET_COUNTRY_FOOD: &str = "food_country_data";
const SHEET_COUNTRY_ENERGY: &str = "country_energy_consumption_data_final";
const SHEET_COUNTRY_INCOME: &str = "GDP";
const SHEET_SERVING_SIZES: &str = "serving_sizes";

/// Read a reference-data workbook into a raw snapshot.
///
/// Expects the seven sheets the upstream spreadsheet carries, by their
/// original names. Every cell is converted to its string form so the
/// snapshot goes through the same normalization and cell parsing as any
/// other source.
pub fn read_workbook(bytes: &[u8]) -> Result<ReferenceTables, NprintError> {
    let cursor = Cursor::new(bytes);
    let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
        .map_err(|e| NprintError::Workbook(format!("failed to open xlsx: {e}")))?;

    Ok(ReferenceTables {
        production_factors: sheet_rows(&mut workbook, SHEET_PRODUCTION_FACTORS)?,
        food_attributes: sheet_rows(&mut workbook, SHEET_FOOD_ATTRIBUTES)?,
        sewage_removal: sheet_rows(&mut workbook, SHEET_SEWAGE_REMOVAL)?,
        country_food: sheet_rows(&mut workbook, SHEET_COUNTRY_FOOD)?,
        country_income: sheet_rows(&mut workbook, SHEET_COUNTRY_INCOME)?,
        country_energy: sheet_rows(&mut workbook, SHEET_COUNTRY_ENERGY)?,
        serving_sizes: sheet_rows(&mut workbook, SHEET_SERVING_SIZES)?,
    })
}

fn sheet_rows(
    workbook: &mut Xlsx<Cursor<&[u8]>>,
    name: &str,
) -> Result<Vec<Vec<String>>, NprintError> {
    let range = workbook
        .worksheet_range(name)
        .map_err(|e| NprintError::Workbook(format!("sheet '{name}' not found: {e}")))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect())
}

fn cell_to_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.trim().to_string(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Bool(b) => b.to_string(),
        calamine::Data::DateTime(dt) => dt.to_string(),
        other => format!("{other}"),
    }
}
