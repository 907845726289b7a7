//! Month names used by QUIK exports and their position in the year.
//!
//! QUIK writes month names in Russian, either in full (`Январь`) or in the
//! abbreviated form with a trailing dot (`Янв.`). Not every month has an
//! abbreviation: short names such as `Май` are always written in full.

use strum_macros::{Display, EnumIter};

use crate::error::FitError;
use crate::result::Result;

/// Year the monthly timeline is anchored at.
pub const BASE_YEAR: i64 = 2000;
/// Months in a year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Calendar month.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Zero-based position in the year (January is 0).
    pub fn ordinal(self) -> i64 {
        self as i64
    }

    /// Looks up a month by the exact name used in QUIK exports.
    pub fn from_quik_name(name: &str) -> Result<Month> {
        MONTH_NAMES
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, month)| *month)
            .ok_or_else(|| FitError::UnknownMonth {
                month: name.to_string(),
                known: month_table(),
            })
    }
}

/// Accepted month names, full and abbreviated.
pub static MONTH_NAMES: &[(&str, Month)] = &[
    ("Январь", Month::January),
    ("Янв.", Month::January),
    ("Февраль", Month::February),
    ("Февр.", Month::February),
    ("Март", Month::March),
    ("Апрель", Month::April),
    ("Апр.", Month::April),
    ("Май", Month::May),
    ("Июнь", Month::June),
    ("Июль", Month::July),
    ("Август", Month::August),
    ("Авг.", Month::August),
    ("Сентябрь", Month::September),
    ("Сент.", Month::September),
    ("Октябрь", Month::October),
    ("Окт.", Month::October),
    ("Ноябрь", Month::November),
    ("Нояб.", Month::November),
    ("Декабрь", Month::December),
    ("Дек.", Month::December),
];

/// Continuous monthly ordinal: January 2000 is 0, December 2000 is 11, January 2001 is 12.
pub fn year_month_index(year: i64, month: Month) -> i64 {
    (year - BASE_YEAR) * MONTHS_PER_YEAR + month.ordinal()
}

/// Renders the name table as `{Январь: 0, Янв.: 0, ...}` for error messages.
fn month_table() -> String {
    let entries: Vec<String> = MONTH_NAMES
        .iter()
        .map(|(name, month)| format!("{}: {}", name, month.ordinal()))
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_month_has_a_full_name() {
        for month in Month::iter() {
            assert!(
                MONTH_NAMES.iter().any(|(_, m)| *m == month),
                "{} has no name",
                month
            );
        }
    }

    #[test]
    fn abbreviations_map_to_the_same_month() {
        assert_eq!(Month::from_quik_name("Январь").unwrap(), Month::January);
        assert_eq!(Month::from_quik_name("Янв.").unwrap(), Month::January);
        assert_eq!(Month::from_quik_name("Нояб.").unwrap().ordinal(), 10);
        assert_eq!(Month::from_quik_name("Дек.").unwrap().ordinal(), 11);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(Month::from_quik_name("январь").is_err());
        assert!(Month::from_quik_name("Янв").is_err());
    }

    #[test]
    fn unknown_month_reports_token_and_table() {
        let err = Month::from_quik_name("Smarch").unwrap_err();
        match &err {
            FitError::UnknownMonth { month, known } => {
                assert_eq!(month, "Smarch");
                assert!(known.contains("Март: 2"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("Smarch"));
    }

    #[test]
    fn index_is_monotonic_across_years() {
        assert_eq!(year_month_index(2000, Month::January), 0);
        assert_eq!(year_month_index(2000, Month::December), 11);
        assert_eq!(year_month_index(2001, Month::January), 12);
        assert_eq!(year_month_index(1999, Month::December), -1);
    }
}
