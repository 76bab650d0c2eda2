/// Parse a numeric cell from a reference table into an `f64`.
///
/// Tolerates the formats the source spreadsheets actually contain:
/// - "0,2" -> 0.2 (decimal comma)
/// - " 1\u{00A0}234,5 " -> 1234.5 (non-breaking-space group separator)
/// - missing cell, "", "abc" -> 0
///
/// Never fails: anything that does not parse to a finite float is 0.
pub fn parse_number(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let cleaned = raw.replace('\u{00A0}', "");
    let cleaned = cleaned.trim().replace(',', ".");
    match cleaned.parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => 0.0,
    }
}

/// Parse a cell by position from a normalized row.
pub fn numeric(cells: &[String], idx: usize) -> f64 {
    parse_number(cells.get(idx).map(|s| s.as_str()))
}

/// Read a cell by position as a trimmed string, empty when absent.
pub fn text(cells: &[String], idx: usize) -> String {
    cells.get(idx).map(|s| s.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_number(Some("0,2")), 0.2);
    }

    #[test]
    fn test_nbsp_and_whitespace() {
        assert_eq!(parse_number(Some(" 1\u{00A0}234,5 ")), 1234.5);
    }

    #[test]
    fn test_missing_is_zero() {
        assert_eq!(parse_number(None), 0.0);
        assert_eq!(parse_number(Some("")), 0.0);
        assert_eq!(parse_number(Some("   ")), 0.0);
    }

    #[test]
    fn test_garbage_is_zero() {
        assert_eq!(parse_number(Some("abc")), 0.0);
        assert_eq!(parse_number(Some("12abc")), 0.0);
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(parse_number(Some("inf")), 0.0);
        assert_eq!(parse_number(Some("NaN")), 0.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number(Some("68")), 68.0);
        assert_eq!(parse_number(Some("0.030")), 0.030);
        assert_eq!(parse_number(Some("-1.5")), -1.5);
    }

    #[test]
    fn test_positional_helpers() {
        let row = vec!["beef".to_string(), "0,25".to_string()];
        assert_eq!(text(&row, 0), "beef");
        assert_eq!(numeric(&row, 1), 0.25);
        assert_eq!(numeric(&row, 5), 0.0);
        assert_eq!(text(&row, 5), "");
    }
}
