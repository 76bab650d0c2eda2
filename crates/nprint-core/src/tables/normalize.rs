use crate::error::NprintError;

/// Turn raw spreadsheet rows into fixed-width data rows.
///
/// The first row must be the table header and is checked against `schema`
/// column by column (trimmed, case-insensitive) before being discarded.
/// A mismatch fails fast with `HeaderMismatch` instead of silently zipping
/// values against the wrong field names. Extra trailing header columns are
/// tolerated.
///
/// Remaining rows are padded with empty strings up to the schema width (a
/// short row reads as missing fields, which the cell parser turns into 0)
/// and truncated past it.
///
/// Empty input yields an empty list, not an error: an absent table is a
/// degraded snapshot, not a malformed one.
pub fn normalize(
    raw: &[Vec<String>],
    schema: &[&str],
    table: &'static str,
) -> Result<Vec<Vec<String>>, NprintError> {
    let Some(header) = raw.first() else {
        return Ok(Vec::new());
    };

    validate_header(header, schema, table)?;

    Ok(raw[1..]
        .iter()
        .map(|row| {
            (0..schema.len())
                .map(|i| row.get(i).cloned().unwrap_or_default())
                .collect()
        })
        .collect())
}

fn validate_header(
    header: &[String],
    schema: &[&str],
    table: &'static str,
) -> Result<(), NprintError> {
    for (i, expected) in schema.iter().enumerate() {
        let found = header.get(i).map(|s| s.trim()).unwrap_or("");
        if !found.eq_ignore_ascii_case(expected) {
            return Err(NprintError::HeaderMismatch {
                table,
                column: i,
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    const SCHEMA: [&str; 3] = ["name", "Food waste %", "Serving size"];

    #[test]
    fn test_empty_input_yields_empty_list() {
        let out = normalize(&[], &SCHEMA, "food_attributes").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_header_row_discarded() {
        let raw = rows(&[
            &["name", "Food waste %", "Serving size"],
            &["beef", "25", "0.1"],
        ]);
        let out = normalize(&raw, &SCHEMA, "food_attributes").unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0], vec!["beef", "25", "0.1"]);
    }

    #[test]
    fn test_header_match_is_trimmed_and_case_insensitive() {
        let raw = rows(&[
            &["  NAME ", "food waste %", "Serving Size"],
            &["beef", "25", "0.1"],
        ]);
        assert!(normalize(&raw, &SCHEMA, "food_attributes").is_ok());
    }

    #[test]
    fn test_header_mismatch_fails_fast() {
        let raw = rows(&[
            &["name", "Waste", "Serving size"],
            &["beef", "25", "0.1"],
        ]);
        let err = normalize(&raw, &SCHEMA, "food_attributes").unwrap_err();
        match err {
            NprintError::HeaderMismatch { table, column, expected, found } => {
                assert_eq!(table, "food_attributes");
                assert_eq!(column, 1);
                assert_eq!(expected, "Food waste %");
                assert_eq!(found, "Waste");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_short_header_fails_fast() {
        let raw = rows(&[&["name", "Food waste %"], &["beef", "25"]]);
        assert!(matches!(
            normalize(&raw, &SCHEMA, "food_attributes"),
            Err(NprintError::HeaderMismatch { column: 2, .. })
        ));
    }

    #[test]
    fn test_extra_header_columns_tolerated() {
        let raw = rows(&[
            &["name", "Food waste %", "Serving size", "notes"],
            &["beef", "25", "0.1", "ignore me"],
        ]);
        let out = normalize(&raw, &SCHEMA, "food_attributes").unwrap();
        // Data rows are cut to schema width.
        assert_eq!(out[0].len(), 3);
    }

    #[test]
    fn test_short_rows_padded() {
        let raw = rows(&[&["name", "Food waste %", "Serving size"], &["beef"]]);
        let out = normalize(&raw, &SCHEMA, "food_attributes").unwrap();
        assert_eq!(out[0], vec!["beef", "", ""]);
    }
}
