//! Portfolio Processor CLI
//!
//! Prices every deal of a deal catalog and writes a run log.
//!
//! # Usage
//!
//! ```text
//! portfolio_processor DerivativeCatalog.xml
//! portfolio_processor deals.xml --config processor.toml --format json
//! portfolio_processor deals.xml --exact-backend closed-form --parallel -v
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use infra_config::CliOverrides;
use service_cli::report::RunReport;
use service_cli::{OutputFormat, PortfolioProcessor, RunOutcome};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Portfolio Processor - price a catalog of derivative payoffs
#[derive(Parser, Debug)]
#[command(name = "portfolio_processor")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deal catalog (XML)
    #[arg(value_name = "CATALOG", default_value = "DerivativeCatalog.xml")]
    catalog: PathBuf,

    /// Processor settings file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Run log path
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Pricing configuration path (JSON)
    #[arg(long, value_name = "FILE")]
    pricing_config: Option<PathBuf>,

    /// Exact backend (unavailable, closed-form)
    #[arg(long)]
    exact_backend: Option<String>,

    /// Price deals in parallel
    #[arg(long)]
    parallel: bool,

    /// Summary format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Args> for CliOverrides {
    fn from(args: &Args) -> Self {
        CliOverrides {
            config_file: args.config.clone(),
            pricing_configuration: args.pricing_config.clone(),
            log_file: args.log_file.clone(),
            exact_backend: args.exact_backend.clone(),
            parallel: args.parallel,
            log_level: args.verbose.then(|| "debug".to_string()),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let processor = PortfolioProcessor::from_overrides(&CliOverrides::from(&args))
        .context("invalid settings")?;
    let settings = processor.settings();

    init_tracing(settings.log_level.as_filter_str());
    info!(
        log_file = %settings.log_file.display(),
        pricing_configuration = %settings.pricing_configuration.display(),
        exact_backend = ?settings.exact_backend,
        parallel = settings.parallel,
        grid = %settings.grid,
        "Processor settings loaded"
    );

    let outcome = processor
        .run(&args.catalog)
        .with_context(|| format!("failed to write run log {}", processor.settings().log_file.display()))?;

    match outcome {
        RunOutcome::Completed(summary) => {
            let report = RunReport::from_summary(&summary);
            print!("{}", report.render(args.format)?);
            Ok(())
        }
        RunOutcome::Aborted(err) => Err(anyhow::Error::new(err)
            .context(format!("processing of {} aborted", args.catalog.display()))),
    }
}
