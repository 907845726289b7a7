//! Quote data model.

/// A single `(index, value)` observation.
///
/// `index` is a synthetic time ordinal: the row position for CSV input, or a
/// year-month ordinal anchored at January 2000 for QUIK input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    /// Time ordinal, the independent variable of the fit.
    pub index: i64,
    /// Price; must be strictly positive to be fitted.
    pub value: f64,
}

impl Quote {
    /// Creates a quote.
    pub fn new(index: i64, value: f64) -> Self {
        Quote { index, value }
    }
}
