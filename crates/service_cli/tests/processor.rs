//! Full processing runs over catalog files.

use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use infra_config::{CliOverrides, ExactBackendKind, ProcessorSettings};
use service_cli::{CliError, PortfolioProcessor, RunOutcome, RunSummary};
use tempfile::{tempdir, TempDir};

const REFERENCE_CATALOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Portfolio>
  <PricingSettings><x0>1.0</x0><xStep>0.5</xStep><xMAX>100.0</xMAX></PricingSettings>
  <Payoff type="PlainVanillaCall">
    <strike>10</strike>
    <dealID>PV-CALL</dealID>
    <model distribution="Uniform"><location>10</location><scale>3</scale></model>
  </Payoff>
  <Payoff type="PlainVanillaPut">
    <strike>15</strike>
    <dealID>PV-PUT</dealID>
    <model distribution="Gamma"><location>9</location><scale>3</scale></model>
  </Payoff>
  <Payoff type="DigitalCall">
    <strike>7</strike>
    <dealID>DG-CALL</dealID>
    <model distribution="LogNormal"><location>10</location><scale>3</scale></model>
  </Payoff>
  <Payoff type="BarrierCall">
    <strike>15</strike>
    <barrier>20</barrier>
    <dealID>BR-CALL</dealID>
    <model distribution="LogNormal"><location>15</location><scale>3</scale></model>
  </Payoff>
  <Payoff type="PlainVanillaCall">
    <strike>-5</strike>
    <dealID>BAD-STRIKE</dealID>
    <model distribution="Uniform"><location>10</location><scale>3</scale></model>
  </Payoff>
  <Payoff type="PlainVanillaStrangle"><strike>5</strike></Payoff>
  <Commentary>ignored</Commentary>
</Portfolio>"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn settings(&self) -> ProcessorSettings {
        ProcessorSettings {
            pricing_configuration: self.dir.path().join("pricing_configuration.json"),
            log_file: self.dir.path().join("log.txt"),
            ..Default::default()
        }
    }

    fn log(&self) -> String {
        std::fs::read_to_string(self.dir.path().join("log.txt")).unwrap()
    }
}

fn completed(outcome: RunOutcome) -> RunSummary {
    match outcome {
        RunOutcome::Completed(summary) => summary,
        RunOutcome::Aborted(err) => panic!("Run aborted: {}", err),
    }
}

fn price_of(summary: &RunSummary, id: &str) -> Option<f64> {
    summary
        .portfolio
        .iter()
        .find(|d| d.id() == id)
        .and_then(|d| d.price())
}

fn run(settings: ProcessorSettings, catalog: &Path) -> RunOutcome {
    PortfolioProcessor::new(settings).run(catalog).unwrap()
}

#[test]
fn test_reference_catalog() {
    let ws = Workspace::new();
    let catalog = ws.write("catalog.xml", REFERENCE_CATALOG);
    let summary = completed(run(ws.settings(), &catalog));

    assert_eq!(summary.portfolio.len(), 4);
    assert_eq!(summary.ingestion_failures.len(), 2);
    assert_eq!(summary.pricing_failures(), 0);
    assert_eq!(summary.settings.x_min, 1.0);

    assert_relative_eq!(price_of(&summary, "PV-CALL").unwrap(), 0.875, epsilon = 1e-4);
    assert_relative_eq!(price_of(&summary, "PV-PUT").unwrap(), 0.1616, epsilon = 1e-4);
    assert_relative_eq!(price_of(&summary, "DG-CALL").unwrap(), 0.0326, epsilon = 1e-4);
    assert_relative_eq!(price_of(&summary, "BR-CALL").unwrap(), 2.41e-5, epsilon = 1e-6);

    let log = ws.log();
    assert!(log.starts_with("PORTFOLIOPROCESSOR LOG: "));
    assert!(log.contains("A problem occurred while reading Pricing Configuration file"));
    assert!(log.contains("Overwriting default settings"));
    assert!(log.contains("unrecognized child element found ... (Commentary)"));
    assert!(log.contains("...4 deals loaded are ready to be priced."));
    assert!(log.contains("Pricing Method: exact_eval (grid fallback)"));
    assert!(log.contains("Deal priced successfully. Price = 0.875000"));
}

#[test]
fn test_parallel_matches_sequential() {
    let ws = Workspace::new();
    let catalog = ws.write("catalog.xml", REFERENCE_CATALOG);

    let sequential = completed(run(ws.settings(), &catalog));
    let parallel_settings = ProcessorSettings {
        parallel: true,
        ..ws.settings()
    };
    let parallel = completed(run(parallel_settings, &catalog));

    assert_eq!(sequential.portfolio, parallel.portfolio);
}

#[test]
fn test_closed_form_backend_prices_digital_exactly() {
    let ws = Workspace::new();
    let catalog = ws.write("catalog.xml", REFERENCE_CATALOG);
    let settings = ProcessorSettings {
        exact_backend: ExactBackendKind::ClosedForm,
        ..ws.settings()
    };
    let summary = completed(run(settings, &catalog));

    // 1 - Φ((ln 7 - 10) / 3): the whole distribution, not just the grid window.
    let price = price_of(&summary, "DG-CALL").unwrap();
    assert!(price > 0.99);
    assert!(ws.log().contains("Pricing Method: exact_eval \n"));
}

#[test]
fn test_custom_pricing_configuration() {
    let ws = Workspace::new();
    let catalog = ws.write("catalog.xml", REFERENCE_CATALOG);
    ws.write(
        "pricing_configuration.json",
        r#"{
            "PlainVanilla": {
                "strike": "",
                "model": { "Uniform": "grid_eval", "Gamma": "monte_carlo" }
            }
        }"#,
    );
    let summary = completed(run(ws.settings(), &catalog));

    // Digital and Barrier are no longer priceable; the Gamma put has an unknown method.
    assert_eq!(summary.portfolio.len(), 2);
    assert!(price_of(&summary, "PV-CALL").is_some());
    assert_eq!(price_of(&summary, "PV-PUT"), None);
    assert_eq!(summary.pricing_failures(), 1);

    let log = ws.log();
    assert!(log.contains("Pricing Configuration loaded successfully"));
    assert!(log.contains("Digital cannot be priced"));
    assert!(log.contains("Unknown pricing method: monte_carlo"));
}

#[test]
fn test_malformed_pricing_configuration_uses_default() {
    let ws = Workspace::new();
    let catalog = ws.write("catalog.xml", REFERENCE_CATALOG);
    ws.write("pricing_configuration.json", "{ \"PlainVanilla\": ");
    let summary = completed(run(ws.settings(), &catalog));

    assert_eq!(summary.portfolio.len(), 4);
    let log = ws.log();
    assert!(log.contains("Pricing Configuration file is malformed"));
    assert!(log.contains("Applying default settings"));
}

#[test]
fn test_missing_catalog_aborts() {
    let ws = Workspace::new();
    let outcome = run(ws.settings(), &ws.dir.path().join("absent.xml"));
    assert!(matches!(outcome, RunOutcome::Aborted(_)));
    let log = ws.log();
    assert!(log.contains("Exiting Portfolio Processor"));
    assert!(!log.contains("Beginning pricing operations"));
}

#[test]
fn test_malformed_catalog_aborts() {
    let ws = Workspace::new();
    let catalog = ws.write("catalog.xml", "<Portfolio><Payoff type=\"DigitalCall\">");
    let outcome = run(ws.settings(), &catalog);
    assert!(matches!(outcome, RunOutcome::Aborted(_)));
}

#[test]
fn test_fine_grid_override_prices_every_deal() {
    let ws = Workspace::new();
    let catalog = ws.write(
        "fine.xml",
        r#"<Portfolio>
  <PricingSettings><x0>0.0</x0><xStep>1e-5</xStep><xMAX>20.0</xMAX></PricingSettings>
  <Payoff type="PlainVanillaCall">
    <strike>10</strike>
    <dealID>FINE-1</dealID>
    <model distribution="Uniform"><location>10</location><scale>3</scale></model>
  </Payoff>
  <Payoff type="DigitalCall">
    <strike>10</strike>
    <dealID>FINE-2</dealID>
    <model distribution="Uniform"><location>10</location><scale>3</scale></model>
  </Payoff>
</Portfolio>"#,
    );

    let summary = completed(run(ws.settings(), &catalog));
    assert_eq!(summary.settings.x_step, 1e-5);
    assert_eq!(summary.pricing_failures(), 0);
    assert_relative_eq!(price_of(&summary, "FINE-1").unwrap(), 0.75, epsilon = 1e-4);
    assert_relative_eq!(price_of(&summary, "FINE-2").unwrap(), 0.5, epsilon = 1e-4);
    assert!(ws.log().contains("...2 deals loaded are ready to be priced."));
}

#[test]
fn test_malformed_settings_file_is_config_error() {
    let ws = Workspace::new();
    let config = ws.write("processor.toml", "parallel = \"sometimes\"\n");
    let overrides = CliOverrides {
        config_file: Some(config),
        ..Default::default()
    };
    assert!(matches!(
        PortfolioProcessor::from_overrides(&overrides),
        Err(CliError::Config(_))
    ));
}

#[test]
fn test_processor_from_overrides() {
    let ws = Workspace::new();
    let overrides = CliOverrides {
        log_file: Some(ws.dir.path().join("run.txt")),
        exact_backend: Some("closed-form".to_string()),
        parallel: true,
        ..Default::default()
    };
    let processor = PortfolioProcessor::from_overrides(&overrides).unwrap();
    assert_eq!(processor.settings().exact_backend, ExactBackendKind::ClosedForm);
    assert!(processor.settings().parallel);
    assert_eq!(processor.settings().log_file, ws.dir.path().join("run.txt"));
}
