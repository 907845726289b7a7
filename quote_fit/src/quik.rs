//! Parser for monthly quote exports from the QUIK terminal.
//!
//! Each useful line looks like `Март 2005 123.45`: a month name, a four-digit
//! year and a price. Anything else (headers, blank lines, broken rows) is skipped.
use std::io::BufRead;

use log::trace;

use crate::error::FitError;
use crate::month::{Month, year_month_index};
use crate::quote::Quote;
use crate::result::Result;

/// Fields of a line that matched the QUIK row layout.
#[derive(Debug, PartialEq)]
struct QuikRow<'a> {
    month: &'a str,
    year: i64,
    value: f64,
}

/// Parses QUIK quotes from a buffered reader.
///
/// Quotes come back in file order with `index = (year - 2000) * 12 + month`.
/// Fails on the first unknown month name; lines that do not look like a
/// quote row are ignored.
pub fn parse_quik<R: BufRead>(reader: R) -> Result<Vec<Quote>> {
    let mut quotes = Vec::new();

    for (line_no, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(FitError::Io)?;
        let Some(row) = match_row(&line) else {
            trace!("skipping line {}: {:?}", line_no + 1, line);
            continue;
        };

        let month = Month::from_quik_name(row.month)?;
        quotes.push(Quote::new(year_month_index(row.year, month), row.value));
    }
    Ok(quotes)
}

/// Splits a line into `<month> <yyyy> <value>` when it has exactly that shape.
fn match_row(line: &str) -> Option<QuikRow<'_>> {
    let mut tokens = line.split_whitespace();
    let (month, year, value) = (tokens.next()?, tokens.next()?, tokens.next()?);
    if tokens.next().is_some() {
        return None;
    }

    let month_ok = !month.chars().any(char::is_numeric);
    let year_ok = year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit());
    if !(month_ok && year_ok && is_decimal(value)) {
        return None;
    }
    Some(QuikRow {
        month,
        year: year.parse().ok()?,
        value: value.parse().ok()?,
    })
}

/// `123` or `123.45`: digits with at most one fractional part.
fn is_decimal(token: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match token.split_once('.') {
        Some((int, frac)) => all_digits(int) && all_digits(frac),
        None => all_digits(token),
    }
}
