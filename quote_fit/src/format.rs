//! Supported quotes file formats and dispatch to the matching parser.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::info;
use strum_macros::{Display, EnumString};

use crate::error::FitError;
use crate::quik::parse_quik;
use crate::quote::Quote;
use crate::result::Result;
use crate::table::{CLOSE_COLUMN, parse_table};

/// Layout of the quotes file, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum QuotesFormat {
    /// Monthly `<month> <yyyy> <value>` text exported from QUIK.
    #[strum(serialize = "QUIK")]
    Quik,
    /// Comma-separated table with a `<CLOSE>` column.
    #[strum(serialize = "CSV")]
    Csv,
}

impl QuotesFormat {
    /// Parses the exact format name (`QUIK` or `CSV`).
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<QuotesFormat>()
            .map_err(|_| FitError::UnsupportedFormat(name.to_string()))
    }

    /// Reads the whole file at `path` and parses it in this format.
    ///
    /// The file is closed before this returns.
    pub fn parse_file(self, path: &Path) -> Result<Vec<Quote>> {
        info!("Reading {} quotes from {}", self, path.display());
        let file = File::open(path)?;
        let quotes = match self {
            QuotesFormat::Quik => parse_quik(BufReader::new(file))?,
            QuotesFormat::Csv => parse_table(file, CLOSE_COLUMN)?,
        };
        info!("Parsed {} quotes", quotes.len());
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_exact() {
        assert_eq!(QuotesFormat::from_name("QUIK").unwrap(), QuotesFormat::Quik);
        assert_eq!(QuotesFormat::from_name("CSV").unwrap(), QuotesFormat::Csv);
        assert_eq!(QuotesFormat::Quik.to_string(), "QUIK");
    }

    #[test]
    fn other_names_are_unsupported() {
        for name in ["csv", "Quik", "XLS", ""] {
            let err = QuotesFormat::from_name(name).unwrap_err();
            assert!(matches!(err, FitError::UnsupportedFormat(ref n) if n == name));
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = QuotesFormat::Csv
            .parse_file(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, FitError::Io(_)));
    }
}
