//! Portfolio ingestion.
//!
//! Walks the children of the catalog root:
//!
//! - `Payoff` elements become [`Deal`]s
//! - `PricingSettings` elements replace the grid settings for the rest of
//!   the run
//! - anything else is recorded as unrecognized and skipped
//!
//! A failing element is recorded with its context and skipped; it never
//! stops ingestion of the remaining elements.

use std::fmt;
use std::path::Path;

use infra_config::PricingConfiguration;
use pricer_core::math::GridSettings;
use pricer_models::factory::{ModelFactory, PayoffArgs, PayoffFactory};
use pricer_models::portfolio::{Deal, Portfolio};
use tracing::{debug, warn};

use crate::document::{read_catalog, Element};
use crate::error::{CatalogError, IngestionError};

const PAYOFF_TAG: &str = "Payoff";
const SETTINGS_TAG: &str = "PricingSettings";

/// What was read for a successfully loaded deal.
#[derive(Debug, Clone, PartialEq)]
pub struct DealSummary {
    /// Deal identifier
    pub deal_id: String,
    /// Raw `type` attribute, e.g. `DigitalPut`
    pub raw_type: String,
    /// Payoff type name, e.g. `Digital`
    pub payoff_type: String,
    /// Call/put flag
    pub call_put_flag: i32,
    /// Payoff parameters in configuration order
    pub parameters: Vec<(String, f64)>,
    /// Distribution name
    pub model_name: String,
    /// Model location
    pub location: f64,
    /// Model scale
    pub scale: f64,
}

impl fmt::Display for DealSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parameters: Vec<String> = self
            .parameters
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        writeln!(f, "  Payoff type: {}", self.payoff_type)?;
        writeln!(f, "  Call Put Flag: {}", self.call_put_flag)?;
        writeln!(f, "  Payoff parameters: [{}]", parameters.join(", "))?;
        writeln!(f, "  Payoff model name: {}", self.model_name)?;
        writeln!(f, "     Model location: {}", self.location)?;
        write!(f, "     Model scale: {}", self.scale)
    }
}

/// A catalog element that could not be converted.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFailure {
    /// Zero-based position among the root's children
    pub position: usize,
    /// Element tag
    pub tag: String,
    /// Element attributes
    pub attributes: Vec<(String, String)>,
    /// Cause
    pub error: IngestionError,
}

impl fmt::Display for ElementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let attributes: Vec<String> = self
            .attributes
            .iter()
            .map(|(k, v)| format!("{}={:?}", k, v))
            .collect();
        write!(
            f,
            "element #{} <{}> {{{}}}: {}",
            self.position,
            self.tag,
            attributes.join(", "),
            self.error
        )
    }
}

/// Ingestion event, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestionEvent {
    /// A deal was appended to the portfolio.
    DealLoaded(DealSummary),
    /// An element was skipped.
    Failure(ElementFailure),
    /// The grid settings were replaced.
    SettingsOverride(GridSettings),
    /// An element with an unknown tag was skipped.
    Unrecognized {
        /// Zero-based position among the root's children
        position: usize,
        /// Element tag
        tag: String,
    },
}

/// Outcome of ingesting a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestionReport {
    /// Deals in document order
    pub portfolio: Portfolio,
    /// Grid settings in force after the last valid override
    pub settings: GridSettings,
    /// Everything that happened, in document order
    pub events: Vec<IngestionEvent>,
}

impl IngestionReport {
    /// Skipped elements.
    pub fn failures(&self) -> impl Iterator<Item = &ElementFailure> {
        self.events.iter().filter_map(|e| match e {
            IngestionEvent::Failure(failure) => Some(failure),
            _ => None,
        })
    }

    /// Tags of unrecognized elements.
    pub fn unrecognized(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(|e| match e {
            IngestionEvent::Unrecognized { tag, .. } => Some(tag.as_str()),
            _ => None,
        })
    }

    /// Whether a valid override block was seen.
    pub fn settings_overridden(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, IngestionEvent::SettingsOverride(_)))
    }
}

/// Converts catalog elements into deals.
#[derive(Debug)]
pub struct PortfolioIngestor<'a> {
    configuration: &'a PricingConfiguration,
    models: ModelFactory,
    payoffs: PayoffFactory,
}

impl<'a> PortfolioIngestor<'a> {
    /// Creates an ingestor with the built-in factories.
    pub fn new(configuration: &'a PricingConfiguration) -> Self {
        Self::with_factories(configuration, ModelFactory::default(), PayoffFactory::default())
    }

    /// Creates an ingestor with custom factories.
    pub fn with_factories(
        configuration: &'a PricingConfiguration,
        models: ModelFactory,
        payoffs: PayoffFactory,
    ) -> Self {
        Self {
            configuration,
            models,
            payoffs,
        }
    }

    /// Reads the catalog at `path` and ingests it.
    ///
    /// # Errors
    /// Structural problems only; element failures are in the report.
    pub fn ingest_file(
        &self,
        path: &Path,
        settings: GridSettings,
    ) -> Result<IngestionReport, CatalogError> {
        let root = read_catalog(path)?;
        Ok(self.ingest(&root, settings))
    }

    /// Ingests the children of `root`, starting from `settings`.
    pub fn ingest(&self, root: &Element, settings: GridSettings) -> IngestionReport {
        let mut report = IngestionReport {
            portfolio: Portfolio::new(),
            settings,
            events: Vec::new(),
        };

        for (position, element) in root.children.iter().enumerate() {
            debug!(position, element = %element, "Scanning element");
            match element.name.as_str() {
                PAYOFF_TAG => match self.read_deal(element) {
                    Ok((deal, summary)) => {
                        report.portfolio.push(deal);
                        report.events.push(IngestionEvent::DealLoaded(summary));
                    }
                    Err(error) => report.events.push(failure(position, element, error)),
                },
                SETTINGS_TAG => match read_settings(element) {
                    Ok(new_settings) => {
                        debug!(settings = %new_settings, "Overriding grid settings");
                        report.settings = new_settings;
                        report
                            .events
                            .push(IngestionEvent::SettingsOverride(new_settings));
                    }
                    Err(error) => report.events.push(failure(position, element, error)),
                },
                _ => report.events.push(IngestionEvent::Unrecognized {
                    position,
                    tag: element.name.clone(),
                }),
            }
        }

        report
    }

    fn read_deal(&self, element: &Element) -> Result<(Deal, DealSummary), IngestionError> {
        let raw_type = element
            .attribute("type")
            .ok_or(IngestionError::MissingAttribute { attribute: "type" })?;
        let (payoff_type, call_put_flag) = split_direction(raw_type)?;

        let required = self
            .configuration
            .required_parameters(payoff_type)
            .ok_or_else(|| IngestionError::UnpricedType {
                payoff_type: payoff_type.to_string(),
            })?;
        let parameters = required
            .into_iter()
            .map(|name| Ok((name.to_string(), number(element, name)?)))
            .collect::<Result<Vec<_>, IngestionError>>()?;

        let deal_id = element
            .child_text("dealID")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| missing("dealID"))?;

        let model_element = element.child("model").ok_or_else(|| missing("model"))?;
        let model_name = model_element
            .attribute("distribution")
            .ok_or(IngestionError::MissingAttribute {
                attribute: "distribution",
            })?;
        let location = number(model_element, "location")?;
        let scale = number(model_element, "scale")?;

        let model = self.models.create(model_name, location, scale)?;
        let args = parameters
            .iter()
            .fold(PayoffArgs::new(call_put_flag, model), |args, (name, value)| {
                args.with(name.clone(), *value)
            });
        let payoff = self.payoffs.create(payoff_type, args)?;

        let summary = DealSummary {
            deal_id: deal_id.to_string(),
            raw_type: raw_type.to_string(),
            payoff_type: payoff_type.to_string(),
            call_put_flag,
            parameters,
            model_name: model_name.to_string(),
            location,
            scale,
        };
        Ok((Deal::new(deal_id, payoff_type, payoff), summary))
    }
}

fn read_settings(element: &Element) -> Result<GridSettings, IngestionError> {
    let x_min = number(element, "x0")?;
    let x_step = number(element, "xStep")?;
    let x_max = number(element, "xMAX")?;
    GridSettings::new(x_min, x_step, x_max)
        .map_err(|e| IngestionError::InvalidSettings(e.to_string()))
}

fn split_direction(raw_type: &str) -> Result<(&str, i32), IngestionError> {
    if let Some(payoff_type) = raw_type.strip_suffix("Call") {
        Ok((payoff_type, 1))
    } else if let Some(payoff_type) = raw_type.strip_suffix("Put") {
        Ok((payoff_type, -1))
    } else {
        Err(IngestionError::InvalidDirection {
            type_attribute: raw_type.to_string(),
        })
    }
}

fn number(element: &Element, name: &str) -> Result<f64, IngestionError> {
    let text = element.child_text(name).ok_or_else(|| missing(name))?;
    text.parse().map_err(|_| IngestionError::InvalidNumber {
        element: name.to_string(),
        value: text.to_string(),
    })
}

fn missing(name: &str) -> IngestionError {
    IngestionError::MissingElement {
        element: name.to_string(),
    }
}

fn failure(position: usize, element: &Element, error: IngestionError) -> IngestionEvent {
    warn!(position, element = %element, error = %error, "Skipping catalog element");
    IngestionEvent::Failure(ElementFailure {
        position,
        tag: element.name.clone(),
        attributes: element.attributes.clone(),
        error,
    })
}
