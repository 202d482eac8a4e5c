//! Pricing configuration.
//!
//! JSON shape, one entry per payoff type:
//!
//! ```json
//! {
//!   "Barrier": {
//!     "strike": "",
//!     "barrier": "",
//!     "model": { "Gamma": "grid_eval", "LogNormal": "grid_eval", "Uniform": "grid_eval" }
//!   }
//! }
//! ```
//!
//! Every key other than `model` names a required payoff parameter; its value
//! is ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use pricer_pricing::MethodResolver;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration entry for one payoff type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffEntry {
    /// Distribution name → pricing-method name
    pub model: BTreeMap<String, String>,
    /// Required parameter names (values unused)
    #[serde(flatten)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

impl PayoffEntry {
    fn new(parameters: &[&str], methods: &[(&str, &str)]) -> Self {
        Self {
            model: methods
                .iter()
                .map(|(m, method)| (m.to_string(), method.to_string()))
                .collect(),
            parameters: parameters
                .iter()
                .map(|p| (p.to_string(), serde_json::Value::String(String::new())))
                .collect(),
        }
    }
}

/// Payoff type → parameters and pricing methods.
///
/// Read-only for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PricingConfiguration {
    entries: BTreeMap<String, PayoffEntry>,
}

impl Default for PricingConfiguration {
    /// Grid evaluation everywhere except digital payoffs under Gamma and
    /// LogNormal, which request exact evaluation.
    fn default() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "PlainVanilla".to_string(),
            PayoffEntry::new(
                &["strike"],
                &[
                    ("Gamma", "grid_eval"),
                    ("LogNormal", "grid_eval"),
                    ("Uniform", "grid_eval"),
                ],
            ),
        );
        entries.insert(
            "Digital".to_string(),
            PayoffEntry::new(
                &["strike"],
                &[
                    ("Gamma", "exact_eval"),
                    ("LogNormal", "exact_eval"),
                    ("Uniform", "grid_eval"),
                ],
            ),
        );
        entries.insert(
            "Barrier".to_string(),
            PayoffEntry::new(
                &["strike", "barrier"],
                &[
                    ("Gamma", "grid_eval"),
                    ("LogNormal", "grid_eval"),
                    ("Uniform", "grid_eval"),
                ],
            ),
        );
        Self { entries }
    }
}

impl PricingConfiguration {
    /// Parses a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::JsonError(e.to_string()))
    }

    /// Loads the configuration from a JSON file.
    ///
    /// # Errors
    /// - `ConfigError::FileError` if the file cannot be read
    /// - `ConfigError::JsonError` if the content is malformed
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    /// Whether `payoff_type` can be priced.
    pub fn contains(&self, payoff_type: &str) -> bool {
        self.entries.contains_key(payoff_type)
    }

    /// Configured payoff types in sorted order.
    pub fn payoff_types(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entry for `payoff_type`.
    pub fn entry(&self, payoff_type: &str) -> Option<&PayoffEntry> {
        self.entries.get(payoff_type)
    }

    /// Required parameter names for `payoff_type`, sorted.
    pub fn required_parameters(&self, payoff_type: &str) -> Option<Vec<&str>> {
        self.entries
            .get(payoff_type)
            .map(|e| e.parameters.keys().map(String::as_str).collect())
    }

    /// Pricing-method name for `payoff_type` under `model`.
    pub fn method_for(&self, payoff_type: &str, model: &str) -> Option<&str> {
        self.entries
            .get(payoff_type)
            .and_then(|e| e.model.get(model))
            .map(String::as_str)
    }
}

impl MethodResolver for PricingConfiguration {
    fn method_name(&self, payoff_type: &str, model: &str) -> Option<&str> {
        self.method_for(payoff_type, model)
    }
}

impl fmt::Display for PricingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}
