//! Error type shared by the parsers, the regression engine and the binary.
//!
//! Every variant is fatal for a run: the pipeline stops at the first error and
//! the binary reports it without drawing anything.
use std::io;

use thiserror::Error;

/// Unified error type for the whole quote approximation pipeline.
#[derive(Error, Debug)]
pub enum FitError {
    /// I/O error while opening or reading the quotes file, or talking to the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The `--type` value names no known quotes file format.
    #[error("unsupported quotes file format: {0:?} (expected QUIK or CSV)")]
    UnsupportedFormat(String),

    /// A QUIK line carries a month name that is missing from the month table.
    #[error("month {month:?} is not found in {known}")]
    UnknownMonth {
        /// Offending month token as it appears in the file.
        month: String,
        /// Rendered reference table of accepted month names.
        known: String,
    },

    /// The CSV header has no column with the expected name.
    #[error("column {column:?} is missing from the CSV header")]
    MissingColumn {
        /// Expected column name.
        column: String,
    },

    /// A value cell could not be parsed as a real number.
    #[error("cannot parse value {raw:?} in data row {row}")]
    ValueParse {
        /// Zero-based data row (header excluded).
        row: usize,
        /// Raw cell content.
        raw: String,
    },

    /// A quote value is zero, negative or not finite, so it cannot be fitted in log space.
    #[error("quote #{position} (index {index}) has non-positive or non-finite value {value}")]
    NonPositiveValue {
        /// Position of the quote in the input sequence.
        position: usize,
        /// Time index of the quote.
        index: i64,
        /// Offending value.
        value: f64,
    },

    /// Not enough distinct points for a well-determined line.
    #[error("need at least 2 quotes with distinct indices, got {quotes} quotes with {distinct} distinct indices")]
    InsufficientData {
        /// Number of quotes supplied.
        quotes: usize,
        /// Number of distinct indices among them.
        distinct: usize,
    },

    /// Structural CSV failure reported by the `csv` reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The least-squares solver could not produce a solution.
    #[error("least-squares solve failed: {0}")]
    Solver(String),

    /// Drawing the chart failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}
