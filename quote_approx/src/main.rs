//! Quote Approx — fits an exponential trend to a series of price quotes and
//! charts the quotes against it, annotated with the per-period and yearly
//! discount factors of the trend.
//!
//! Usage example (CLI):
//! ```bash
//! quote_approx --quotas-fname ./USDRUB.csv --type CSV
//! quote_approx --quotas-fname ./usd_monthly.txt --type QUIK
//! ```
//!
//! `QUIK` files hold `<month> <yyyy> <value>` lines with Russian month names;
//! `CSV` files are tables with a `<CLOSE>` column. See `quote_fit` for details.
//! Set `RUST_LOG=debug` for more detail on parsing and fitting.
#![warn(missing_docs)]
mod args;
mod chart;

use crate::args::Args;
use clap::Parser;
use log::{error, info};
use quote_fit::{Result, TrendReport, fit_log_linear};
use std::path::PathBuf;

fn main() {
    init_logger();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Parses the file, fits the trend and shows the chart.
fn run(args: &Args) -> Result<()> {
    let path = normalize_path(&args.quotas_fname);
    let quotes = args.format.parse_file(&path)?;

    let fit = fit_log_linear(&quotes)?;
    info!(
        "Fitted ln(value) = {:.8} * index + {:.8}",
        fit.slope, fit.intercept
    );

    let report = TrendReport::new(&quotes, fit);
    for line in report.factors.to_string().lines() {
        info!("{}", line);
    }

    let title = format!("{} ({})", path.display(), args.format);
    chart::show(&report, &title)
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}
