//! Command-line arguments.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_fit::QuotesFormat;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the quotes file.
    #[clap(long = "quotas-fname")]
    pub quotas_fname: String,

    /// Quotes file format: QUIK (monthly text export) or CSV (table with a <CLOSE> column).
    #[clap(long = "type", value_parser = QuotesFormat::from_name)]
    pub format: QuotesFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_flags_are_required() {
        assert!(Args::try_parse_from(["quote_approx", "--type", "CSV"]).is_err());
        assert!(Args::try_parse_from(["quote_approx", "--quotas-fname", "a.csv"]).is_err());
    }

    #[test]
    fn parses_format() {
        let args =
            Args::try_parse_from(["quote_approx", "--quotas-fname", "usd.txt", "--type", "QUIK"])
                .unwrap();
        assert_eq!(args.quotas_fname, "usd.txt");
        assert_eq!(args.format, QuotesFormat::Quik);
    }

    #[test]
    fn unsupported_format_is_reported() {
        let err = Args::try_parse_from(["quote_approx", "--quotas-fname", "a", "--type", "XLS"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("unsupported quotes file format"));
    }
}
