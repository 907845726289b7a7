//!
//! Quote parsing and log-linear trend fitting.
//!
//! This crate aggregates:
//! - `error` — unified error type `FitError` used across the workspace.
//! - `result` — handy `Result<T, FitError>` alias.
//! - `quote` — the `(index, value)` observation.
//! - `month` — QUIK month names and the year-month timeline.
//! - `quik` / `table` — parsers for the two supported file layouts.
//! - `format` — format selection and file dispatch.
//! - `regression` — least-squares fit in log space.
//! - `stats` — discount factors and the fitted trend curve.
#![warn(missing_docs)]
pub mod error;
pub mod format;
pub mod month;
pub mod quik;
pub mod quote;
pub mod regression;
pub mod result;
pub mod stats;
pub mod table;

pub use error::FitError;
pub use format::QuotesFormat;
pub use quote::Quote;
pub use regression::{LogLinearFit, fit_log_linear};
pub use result::Result;
pub use stats::{DiscountFactors, TrendReport};
