//! Discount factors derived from the fitted slope, and the trend curve.
use std::fmt;

use crate::quote::Quote;
use crate::regression::LogLinearFit;

/// Trading periods assumed in one year.
pub const TRADING_DAYS_PER_YEAR: i32 = 250;

/// Per-period and annualized growth factors of the fitted trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountFactors {
    /// `exp(slope)`: multiplicative change per index unit.
    pub per_period: f64,
    /// `per_period` as a deviation from 1 in percent.
    pub per_period_pct: f64,
    /// `exp(250 * slope)`.
    pub annual: f64,
    /// `annual` as a deviation from 1 in percent.
    pub annual_pct: f64,
}

impl DiscountFactors {
    /// Derives the factors from a log-space slope.
    pub fn from_slope(slope: f64) -> Self {
        let per_period = slope.exp();
        let annual = (f64::from(TRADING_DAYS_PER_YEAR) * slope).exp();
        DiscountFactors {
            per_period,
            per_period_pct: to_percents(per_period),
            annual,
            annual_pct: to_percents(annual),
        }
    }
}

impl fmt::Display for DiscountFactors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "1 trading day discount factor = {:.6} ({:.6}%)",
            self.per_period, self.per_period_pct
        )?;
        write!(
            f,
            "{} trading days df (~1 year) = {:.6} ({:.6}%)",
            TRADING_DAYS_PER_YEAR, self.annual, self.annual_pct
        )
    }
}

fn to_percents(factor: f64) -> f64 {
    (factor - 1.0) * 100.0
}

/// Trend values `exp(slope * index + intercept)` at every quote index, in input order.
pub fn fitted_curve(quotes: &[Quote], fit: &LogLinearFit) -> Vec<(f64, f64)> {
    quotes
        .iter()
        .map(|q| (q.index as f64, fit.predict(q.index)))
        .collect()
}

/// Everything the chart needs: raw points, trend and statistics.
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// Raw `(index, value)` points in input order.
    pub points: Vec<(f64, f64)>,
    /// Trend at the same indices.
    pub fitted: Vec<(f64, f64)>,
    /// Fitted coefficients.
    pub fit: LogLinearFit,
    /// Derived discount factors.
    pub factors: DiscountFactors,
}

impl TrendReport {
    /// Bundles quotes with their fit.
    pub fn new(quotes: &[Quote], fit: LogLinearFit) -> Self {
        TrendReport {
            points: quotes.iter().map(|q| (q.index as f64, q.value)).collect(),
            fitted: fitted_curve(quotes, &fit),
            fit,
            factors: DiscountFactors::from_slope(fit.slope),
        }
    }

    /// `[min, max]` of the indices.
    pub fn x_bounds(&self) -> [f64; 2] {
        bounds(self.points.iter().map(|p| p.0))
    }

    /// `[min, max]` over raw and fitted values.
    pub fn y_bounds(&self) -> [f64; 2] {
        bounds(self.points.iter().chain(self.fitted.iter()).map(|p| p.1))
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    values.fold([f64::INFINITY, f64::NEG_INFINITY], |[lo, hi], v| {
        [lo.min(v), hi.max(v)]
    })
}
