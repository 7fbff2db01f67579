//! Check command implementation.

use crate::render::{Report, Tab};
use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use kaidoki::fetch::{DataFetcher, parse_ticker_list};
use kaidoki::{Analysis, KaidokiConfig, SectorInputs, Symbol, analyze};
use std::path::PathBuf;
use tracing::{debug, info};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Tabbed text.
    Text,
    /// One JSON array of analyses.
    Json,
}

/// Arguments of `kaidoki check`.
#[derive(Debug, Clone)]
pub(crate) struct CheckArgs {
    pub(crate) tickers: Vec<String>,
    pub(crate) tabs: Vec<Tab>,
    pub(crate) sector_roe: Option<f64>,
    pub(crate) sector_roa: Option<f64>,
    pub(crate) format: OutputFormat,
    pub(crate) range: Option<String>,
    pub(crate) config: Option<PathBuf>,
}

impl CheckArgs {
    /// Configuration from `--config` / `KAIDOKI_CONFIG`, with `--range` applied.
    fn load_config(&self) -> Result<KaidokiConfig> {
        let mut config = KaidokiConfig::load(self.config.as_deref())?;
        if let Some(range) = &self.range {
            config.fetch.range.clone_from(range);
        }
        config.validate()?;
        Ok(config)
    }

    fn sector(&self) -> Result<Option<SectorInputs>> {
        for (flag, value) in [("--sector-roe", self.sector_roe), ("--sector-roa", self.sector_roa)] {
            if value.is_some_and(|v| !v.is_finite()) {
                bail!("{flag} must be a finite number");
            }
        }
        Ok(SectorInputs::from_options(self.sector_roe, self.sector_roa))
    }
}

/// Check every ticker and print the result.
///
/// A failing ticker is reported on stderr and the rest are still checked.
/// Returns `Ok(false)` if any ticker failed.
pub(crate) async fn run_check(args: &CheckArgs) -> Result<bool> {
    let config = args.load_config()?;
    let sector = args.sector()?;

    let symbols = parse_ticker_list(&args.tickers);
    if symbols.is_empty() {
        bail!("no valid ticker symbols in {:?}", args.tickers);
    }

    let fetcher = DataFetcher::new(config.fetch.clone())?;
    if args.format == OutputFormat::Text {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                    Kaidoki Buy-Signal Check                  ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Symbols:  {}", symbols.join(", "));
        println!("Range:    {}", config.fetch.range);
        if !fetcher.has_fundamentals() {
            println!("Note:     FMP_API_KEY not set, fundamentals unavailable");
        }
        println!();
    }

    let mut analyses = Vec::with_capacity(symbols.len());
    let mut failed = 0usize;

    for symbol in &symbols {
        match check_symbol(&fetcher, &config, symbol, sector).await {
            Ok(analysis) => {
                if args.format == OutputFormat::Text {
                    println!("{}", Report::new(&analysis, &args.tabs));
                }
                analyses.push(analysis);
            }
            Err(e) => {
                debug!(%symbol, error = ?e, "check failed");
                eprintln!("{}", failure_line(symbol, &e));
                failed += 1;
            }
        }
    }

    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&analyses)?);
    }

    info!(checked = analyses.len(), failed, "done");
    Ok(failed == 0)
}

/// The single stderr line printed for a ticker that could not be checked.
fn failure_line(symbol: &str, err: &anyhow::Error) -> String {
    format!("Error: {symbol}: {err:#}")
}

async fn check_symbol(
    fetcher: &DataFetcher,
    config: &KaidokiConfig,
    symbol: &Symbol,
    sector: Option<SectorInputs>,
) -> Result<Analysis> {
    let snapshot = fetcher
        .snapshot(symbol)
        .await
        .with_context(|| format!("failed to fetch market data for {symbol}"))?;
    let analysis = analyze(&snapshot, config, sector)?;
    Ok(analysis)
}
