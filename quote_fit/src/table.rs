//! Parser for comma-separated quote tables with a header row.
//!
//! Typical input is a Finam-style export:
//!
//! ```text
//! <TICKER>,<PER>,<DATE>,<TIME>,<OPEN>,<HIGH>,<LOW>,<CLOSE>,<VOL>
//! USDRUB,D,20020501,000000,31.0800000,31.2300000,31.0800000,31.2300000,0
//! ```
//!
//! Only one column is read. The time index is the row position; date columns are ignored.
use std::io::Read;

use csv::ReaderBuilder;
use log::debug;

use crate::error::FitError;
use crate::quote::Quote;
use crate::result::Result;

/// Column holding the closing price in Finam exports.
pub const CLOSE_COLUMN: &str = "<CLOSE>";

/// Parses quotes from the `column` of a CSV table.
///
/// The Nth data row (zero-based, header excluded) becomes `Quote { index: N, .. }`.
/// The header is checked before any data row is read. Rows may be shorter or
/// longer than the header; a row without the target cell fails as an empty value.
pub fn parse_table<R: Read>(reader: R, column: &str) -> Result<Vec<Quote>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let position = rdr
        .headers()?
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| FitError::MissingColumn { column: column.to_string() })?;
    debug!("column {} found at position {}", column, position);

    let mut quotes = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let raw = record.get(position).unwrap_or_default();
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| FitError::ValueParse { row, raw: raw.to_string() })?;
        quotes.push(Quote::new(row as i64, value));
    }
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FINAM: &str = "\
<TICKER>,<PER>,<DATE>,<TIME>,<OPEN>,<HIGH>,<LOW>,<CLOSE>,<VOL>
USDRUB,D,20020501,000000,31.0800000,31.2300000,31.0800000,31.2300000,0
USDRUB,D,20020502,000000,30.9900000,31.2400000,30.9900000,31.2400000,0
USDRUB,D,19991231,000000,30.0000000,31.0000000,30.0000000,31.1000000,0
";

    #[test]
    fn row_position_is_the_index() {
        let quotes = parse_table(FINAM.as_bytes(), CLOSE_COLUMN).unwrap();
        assert_eq!(
            quotes,
            vec![
                Quote::new(0, 31.23),
                Quote::new(1, 31.24),
                Quote::new(2, 31.1),
            ]
        );
    }

    #[test]
    fn missing_column_fails_before_rows() {
        // The data row is garbage; the header check must fire first.
        let text = "<DATE>,<OPEN>\n20020501,not-a-number\n";
        let err = parse_table(text.as_bytes(), CLOSE_COLUMN).unwrap_err();
        assert!(matches!(err, FitError::MissingColumn { ref column } if column == "<CLOSE>"));
    }

    #[test]
    fn non_numeric_cell_names_row_and_text() {
        let text = "<DATE>,<CLOSE>\n20020501,31.5\n20020502,n/a\n";
        let err = parse_table(text.as_bytes(), CLOSE_COLUMN).unwrap_err();
        match err {
            FitError::ValueParse { row, raw } => {
                assert_eq!(row, 1);
                assert_eq!(raw, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn padded_cells_are_accepted() {
        let text = "<CLOSE>\n 12.5 \n";
        let quotes = parse_table(text.as_bytes(), CLOSE_COLUMN).unwrap();
        assert_eq!(quotes, vec![Quote::new(0, 12.5)]);
    }

    #[test]
    fn header_only_yields_no_quotes() {
        let quotes = parse_table("<CLOSE>\n".as_bytes(), CLOSE_COLUMN).unwrap();
        assert!(quotes.is_empty());
    }

    #[test]
    fn short_row_with_target_cell_is_accepted() {
        let text = "<CLOSE>,<VOL>\n10,1\n11\n12,3,extra\n";
        let quotes = parse_table(text.as_bytes(), CLOSE_COLUMN).unwrap();
        assert_eq!(
            quotes,
            vec![Quote::new(0, 10.0), Quote::new(1, 11.0), Quote::new(2, 12.0)]
        );
    }

    #[test]
    fn short_row_without_target_cell_fails() {
        let text = "<DATE>,<CLOSE>\n20020501,31.5\n20020502\n";
        let err = parse_table(text.as_bytes(), CLOSE_COLUMN).unwrap_err();
        match err {
            FitError::ValueParse { row, raw } => {
                assert_eq!(row, 1);
                assert_eq!(raw, "");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn infinite_cell_parses_but_cannot_be_fitted() {
        let quotes = parse_table("<CLOSE>\n10\ninf\n12\n".as_bytes(), CLOSE_COLUMN).unwrap();
        assert!(quotes[1].value.is_infinite());
        assert!(matches!(
            crate::regression::fit_log_linear(&quotes),
            Err(FitError::NonPositiveValue { position: 1, .. })
        ));
    }
}
