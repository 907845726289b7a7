//! Log-linear least-squares fit.
//!
//! Fits `ln(value) = slope * index + intercept`, i.e. an exponential trend
//! `value = exp(intercept) * exp(slope)^index` in the original scale.
use std::collections::HashSet;

use log::debug;
use nalgebra::{DMatrix, DVector};

use crate::error::FitError;
use crate::quote::Quote;
use crate::result::Result;

/// Coefficients of the line fitted in log space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogLinearFit {
    /// Change of `ln(value)` per index unit.
    pub slope: f64,
    /// `ln(value)` at index 0.
    pub intercept: f64,
}

impl LogLinearFit {
    /// Trend value in the original (non-log) scale at `index`.
    pub fn predict(&self, index: i64) -> f64 {
        (self.slope * index as f64 + self.intercept).exp()
    }
}

/// Fits a line to `ln(value)` against `index` by ordinary least squares.
///
/// Every value is checked before anything is fitted. The overdetermined system
/// `[index, 1] * [slope, intercept] = ln(value)` is solved through an SVD of the
/// design matrix.
pub fn fit_log_linear(quotes: &[Quote]) -> Result<LogLinearFit> {
    let bad = quotes
        .iter()
        .enumerate()
        .find(|(_, q)| !q.value.is_finite() || q.value <= 0.0);
    if let Some((position, quote)) = bad {
        return Err(FitError::NonPositiveValue {
            position,
            index: quote.index,
            value: quote.value,
        });
    }

    let distinct = quotes.iter().map(|q| q.index).collect::<HashSet<_>>().len();
    if quotes.len() < 2 || distinct < 2 {
        return Err(FitError::InsufficientData { quotes: quotes.len(), distinct });
    }

    let n = quotes.len();
    let design = DMatrix::from_fn(n, 2, |row, col| match col {
        0 => quotes[row].index as f64,
        _ => 1.0,
    });
    let log_values = DVector::from_iterator(n, quotes.iter().map(|q| q.value.ln()));

    let svd = design.svd(true, true);
    let cutoff = f64::EPSILON * n as f64 * svd.singular_values.max();
    let solution = svd
        .solve(&log_values, cutoff)
        .map_err(|e| FitError::Solver(e.to_string()))?;

    let fit = LogLinearFit { slope: solution[0], intercept: solution[1] };
    debug!("fitted {} quotes: {:?}", n, fit);
    Ok(fit)
}
