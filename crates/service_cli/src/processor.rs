//! Portfolio processing run.
//!
//! One run: header and default settings, pricing configuration, catalog
//! ingestion, pricing, and the matching run-log entries. Element and deal
//! failures are logged and skipped; only a structural catalog error ends
//! the run early.

use std::io::Write;
use std::path::Path;

use adapter_catalog::{CatalogError, ElementFailure, IngestionEvent, PortfolioIngestor};
use chrono::Local;
use infra_config::{build_settings, CliOverrides, ConfigError, PricingConfiguration, ProcessorSettings};
use pricer_core::math::GridSettings;
use pricer_models::portfolio::Portfolio;
use pricer_pricing::{DealOutcome, PriceDispatcher};
use tracing::{info, warn};

use crate::error::Result;
use crate::run_log::RunLog;

const SEPARATOR: &str = "-------------------------------------------------------------------";

/// Everything a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Deals in catalog order, priced where pricing succeeded
    pub portfolio: Portfolio,
    /// Grid settings used for pricing
    pub settings: GridSettings,
    /// Catalog elements that were skipped
    pub ingestion_failures: Vec<ElementFailure>,
    /// One outcome per deal, in portfolio order
    pub pricing: Vec<DealOutcome>,
}

impl RunSummary {
    /// Number of deals that failed to price.
    pub fn pricing_failures(&self) -> usize {
        self.pricing.iter().filter(|o| o.result.is_err()).count()
    }
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Ingestion and pricing ran over the whole catalog.
    Completed(RunSummary),
    /// The catalog could not be read; nothing was priced.
    Aborted(CatalogError),
}

/// Portfolio processor.
#[derive(Debug, Clone)]
pub struct PortfolioProcessor {
    settings: ProcessorSettings,
}

impl PortfolioProcessor {
    /// Creates a processor.
    pub fn new(settings: ProcessorSettings) -> Self {
        Self { settings }
    }

    /// Creates a processor from the settings file and command-line overrides.
    ///
    /// # Errors
    /// `CliError::Config` when the settings file is malformed or a value is
    /// invalid.
    pub fn from_overrides(overrides: &CliOverrides) -> Result<Self> {
        Ok(Self::new(build_settings(overrides)?))
    }

    /// Processor settings.
    pub fn settings(&self) -> &ProcessorSettings {
        &self.settings
    }

    /// Processes `catalog`, writing the run log to the configured file.
    ///
    /// # Errors
    /// Only run-log I/O failures; catalog problems yield
    /// [`RunOutcome::Aborted`].
    pub fn run(&self, catalog: &Path) -> Result<RunOutcome> {
        let mut log = RunLog::create(&self.settings.log_file)?;
        let outcome = self.run_with_log(catalog, &mut log)?;
        log.flush()?;
        Ok(outcome)
    }

    /// Processes `catalog`, writing the run log to `log`.
    pub fn run_with_log<W: Write>(&self, catalog: &Path, log: &mut RunLog<W>) -> Result<RunOutcome> {
        let catalog_name = catalog.display().to_string();
        info!(catalog = %catalog_name, "Starting portfolio processing");

        log.header(&catalog_name, Local::now().naive_local())?;
        log.blank()?;
        log.line(&format!("Default Settings: {}", self.settings.grid))?;

        let configuration = self.load_configuration(log)?;

        let ingestor = PortfolioIngestor::new(&configuration);
        let report = match ingestor.ingest_file(catalog, self.settings.grid) {
            Ok(report) => report,
            Err(err) => {
                warn!(catalog = %catalog_name, error = %err, "Catalog unreadable, aborting run");
                log.line(&format!(
                    "A problem occurred while parsing file: {}",
                    catalog_name
                ))?;
                log.line(&format!("Details: {}", err))?;
                log.line(" Exiting Portfolio Processor")?;
                return Ok(RunOutcome::Aborted(err));
            }
        };

        log.line("Loading deals in portfolio: ")?;
        let mut ingestion_failures = Vec::new();
        for event in &report.events {
            match event {
                IngestionEvent::DealLoaded(summary) => {
                    log.line(SEPARATOR)?;
                    log.line(&format!(
                        "Payoff {} loaded successfully. Import summary: ",
                        summary.raw_type
                    ))?;
                    log.line(&format!("  Deal ID: {}", summary.deal_id))?;
                    log.line(&summary.to_string())?;
                    log.line(SEPARATOR)?;
                }
                IngestionEvent::Failure(failure) => {
                    log.line(&format!(
                        "A problem occurred while reading {}",
                        failure
                    ))?;
                    if failure.tag == "PricingSettings" {
                        log.line("Applying previous settings")?;
                    }
                    ingestion_failures.push(failure.clone());
                }
                IngestionEvent::SettingsOverride(settings) => {
                    log.line(&format!(
                        "Overwriting default settings: \n x_min: {} \n x_step: {} \n x_max: {}",
                        settings.x_min, settings.x_step, settings.x_max
                    ))?;
                }
                IngestionEvent::Unrecognized { tag, .. } => {
                    log.line(&format!("  ... unrecognized child element found ... ({})", tag))?;
                }
            }
        }

        let mut portfolio = report.portfolio;
        let settings = report.settings;
        log.blank()?;
        log.line("Loading operation completed...")?;
        log.line(&format!(
            "   ...{} deals loaded are ready to be priced.",
            portfolio.len()
        ))?;
        log.flush()?;
        info!(
            deals = portfolio.len(),
            skipped = ingestion_failures.len(),
            "Catalog ingested"
        );

        let backend = self.settings.exact_backend.backend();
        let dispatcher = PriceDispatcher::new(&configuration, backend.as_ref());
        let pricing = dispatcher.price_all(&mut portfolio, &settings, self.settings.parallel);

        log.blank()?;
        log.line("Beginning pricing operations: ")?;
        for outcome in &pricing {
            log.blank()?;
            if let Some(deal) = portfolio.get(outcome.index) {
                log.line(&format!("Deal: [{}] {}", deal.id(), deal.payoff()))?;
            }
            match &outcome.result {
                Ok(quote) => {
                    log.line(&format!("Pricing Method: {} ", quote))?;
                    log.line(&format!("Deal priced successfully. Price = {:.6} ", quote.price))?;
                }
                Err(err) => {
                    log.line(&format!(
                        "A problem occurred while pricing deal {}: {}",
                        outcome.deal_id, err
                    ))?;
                }
            }
        }

        let summary = RunSummary {
            portfolio,
            settings,
            ingestion_failures,
            pricing,
        };
        info!(
            priced = summary.portfolio.priced_count(),
            failed = summary.pricing_failures(),
            "Pricing complete"
        );
        Ok(RunOutcome::Completed(summary))
    }

    fn load_configuration<W: Write>(&self, log: &mut RunLog<W>) -> Result<PricingConfiguration> {
        let path = &self.settings.pricing_configuration;
        log.blank()?;
        log.blank()?;
        log.line(&format!(
            "Loading Pricing Configuration file: {}",
            path.display()
        ))?;
        let configuration = match PricingConfiguration::load(path) {
            Ok(configuration) => {
                log.line("Pricing Configuration loaded successfully: ")?;
                log.line(&configuration.to_string())?;
                configuration
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Using default pricing configuration");
                match &err {
                    ConfigError::JsonError(_) => log.line(&format!(
                        "Pricing Configuration file is malformed: {}",
                        err
                    ))?,
                    _ => log.line(&format!(
                        "A problem occurred while reading Pricing Configuration file: {} ({})",
                        path.display(),
                        err
                    ))?,
                }
                log.line("Applying default settings")?;
                PricingConfiguration::default()
            }
        };
        log.blank()?;
        Ok(configuration)
    }
}
