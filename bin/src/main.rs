//! Kaidoki CLI binary.
//!
//! Checks tickers for buy signals and prints the T, Q, V and QVT tabs.

mod cmd;
mod render;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use cmd::check::{CheckArgs, OutputFormat};
use render::Tab;
use std::{path::PathBuf, process};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kaidoki")]
#[command(about = "Buy-signal checker scoring timing, quality and valuation", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', action = ArgAction::Count, global = true)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check tickers and print their score tabs
    Check {
        /// Ticker symbols (comma or space separated; numeric codes get ".T")
        #[arg(required = true, num_args = 1..)]
        tickers: Vec<String>,

        /// Tabs to print (all, t, q, v, qvt)
        #[arg(long, value_delimiter = ',', default_value = "all")]
        tab: Vec<Tab>,

        /// Sector average ROE in percent
        #[arg(long)]
        sector_roe: Option<f64>,

        /// Sector average ROA in percent
        #[arg(long)]
        sector_roa: Option<f64>,

        /// Output format (text or json)
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Yahoo chart range, e.g. 180d or 1y
        #[arg(long)]
        range: Option<String>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the scores kaidoki reports
    Scores {
        /// Filter by category (t, q, v, qvt)
        #[arg(short, long)]
        category: Option<String>,

        /// Show detailed information
        #[arg(long)]
        verbose: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Returns `Ok(false)` when some ticker could not be checked.
async fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check {
            tickers,
            tab,
            sector_roe,
            sector_roa,
            format,
            range,
            config,
        } => {
            let args = CheckArgs {
                tickers,
                tabs: tab,
                sector_roe,
                sector_roa,
                format,
                range,
                config,
            };
            cmd::check::run_check(&args).await
        }
        Commands::Scores { category, verbose } => {
            cmd::scores::list_scores(category.as_deref(), verbose)?;
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check() {
        let cli = Cli::parse_from([
            "kaidoki",
            "-vv",
            "check",
            "7203,6758",
            "AAPL",
            "--tab",
            "t,qvt",
            "--sector-roe",
            "8.5",
            "--format",
            "json",
        ]);
        assert_eq!(cli.verbosity, 2);
        let Commands::Check {
            tickers,
            tab,
            sector_roe,
            sector_roa,
            format,
            range,
            config,
        } = cli.command
        else {
            panic!("expected check");
        };
        assert_eq!(tickers, vec!["7203,6758", "AAPL"]);
        assert_eq!(tab, vec![Tab::T, Tab::Qvt]);
        assert_eq!(sector_roe, Some(8.5));
        assert_eq!(sector_roa, None);
        assert_eq!(format, OutputFormat::Json);
        assert!(range.is_none());
        assert!(config.is_none());
    }

    #[test]
    fn test_parse_check_defaults() {
        let cli = Cli::parse_from(["kaidoki", "check", "7203"]);
        assert_eq!(cli.verbosity, 0);
        let Commands::Check { tab, format, .. } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(tab, vec![Tab::All]);
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_parse_rejects_bad_tab() {
        assert!(Cli::try_parse_from(["kaidoki", "check", "7203", "--tab", "x"]).is_err());
        assert!(Cli::try_parse_from(["kaidoki", "check"]).is_err());
    }

    #[test]
    fn test_parse_scores() {
        let cli = Cli::parse_from(["kaidoki", "scores", "--category", "q", "--verbose", "-v"]);
        assert_eq!(cli.verbosity, 1);
        let Commands::Scores { category, verbose } = cli.command else {
            panic!("expected scores");
        };
        assert_eq!(category.as_deref(), Some("q"));
        assert!(verbose);
    }
}
