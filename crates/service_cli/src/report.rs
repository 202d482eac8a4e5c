//! Stdout summaries of a completed run.

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::processor::RunSummary;

/// Output format for the run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Box-drawn table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// One row of the summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DealRow {
    /// Deal identifier
    pub deal_id: String,
    /// Payoff name, e.g. `Digital Call Payoff`
    pub payoff: String,
    /// Distribution model, e.g. `Gamma(location=9, scale=3)`
    pub model: String,
    /// Pricing method used, if pricing got that far
    pub method: Option<String>,
    /// Price, if pricing succeeded
    pub price: Option<f64>,
    /// Pricing failure, if any
    pub error: Option<String>,
}

/// Serialisable run summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// Priced and failed deals in portfolio order
    pub deals: Vec<DealRow>,
    /// Skipped catalog elements
    pub skipped_elements: Vec<String>,
}

impl RunReport {
    /// Builds the report from a run summary.
    pub fn from_summary(summary: &RunSummary) -> Self {
        let deals = summary
            .pricing
            .iter()
            .filter_map(|outcome| {
                let deal = summary.portfolio.get(outcome.index)?;
                let (method, price, error) = match &outcome.result {
                    Ok(quote) => (Some(quote.to_string()), Some(quote.price), None),
                    Err(err) => (None, None, Some(err.to_string())),
                };
                Some(DealRow {
                    deal_id: deal.id().to_string(),
                    payoff: deal.payoff().name().to_string(),
                    model: deal.payoff().model().to_string(),
                    method,
                    price,
                    error,
                })
            })
            .collect();
        let skipped_elements = summary
            .ingestion_failures
            .iter()
            .map(|f| f.to_string())
            .collect();
        Self {
            deals,
            skipped_elements,
        }
    }

    /// Renders the report in `format`.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn render_table(&self) -> String {
        let mut out = String::new();
        out.push_str("┌──────────────┬──────────────────────┬──────────────────┬────────────────┐\n");
        out.push_str("│ Deal ID      │ Payoff               │ Method           │ Price          │\n");
        out.push_str("├──────────────┼──────────────────────┼──────────────────┼────────────────┤\n");
        if self.deals.is_empty() {
            out.push_str("│ (no deals)   │                      │                  │                │\n");
        }
        for row in &self.deals {
            let method = row.method.as_deref().unwrap_or("-");
            let price = match (row.price, &row.error) {
                (Some(price), _) => format!("{:.6}", price),
                (None, Some(_)) => "FAILED".to_string(),
                (None, None) => "-".to_string(),
            };
            out.push_str(&format!(
                "│ {:<12} │ {:<20} │ {:<16} │ {:>14} │\n",
                truncate(&row.deal_id, 12),
                truncate(&row.payoff, 20),
                truncate(method, 16),
                price
            ));
        }
        out.push_str("└──────────────┴──────────────────────┴──────────────────┴────────────────┘\n");
        if !self.skipped_elements.is_empty() {
            out.push_str(&format!(
                "{} catalog element(s) skipped, see the run log\n",
                self.skipped_elements.len()
            ));
        }
        out
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(width - 1).collect();
        cut.push('…');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> RunReport {
        RunReport {
            deals: vec![
                DealRow {
                    deal_id: "PV-1".to_string(),
                    payoff: "Call Payoff".to_string(),
                    model: "Uniform(location=10, scale=3)".to_string(),
                    method: Some("grid_eval".to_string()),
                    price: Some(0.875),
                    error: None,
                },
                DealRow {
                    deal_id: "DG-1".to_string(),
                    payoff: "Digital Put Payoff".to_string(),
                    model: "Gamma(location=9, scale=3)".to_string(),
                    method: None,
                    price: None,
                    error: Some("Unknown pricing method: monte_carlo".to_string()),
                },
            ],
            skipped_elements: vec!["element #3 <Payoff> {}: Missing attribute 'type'".to_string()],
        }
    }

    #[test]
    fn test_table_rows() {
        let table = report().render(OutputFormat::Table).unwrap();
        assert!(table.contains("│ PV-1         │ Call Payoff          │ grid_eval        │       0.875000 │"));
        assert!(table.contains("FAILED"));
        assert!(table.contains("1 catalog element(s) skipped"));
    }

    #[test]
    fn test_json_shape() {
        let json = report().render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["deals"][0]["price"], 0.875);
        assert!(value["deals"][1]["price"].is_null());
        assert_eq!(value["skipped_elements"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 12), "short");
        assert_eq!(truncate("Barrier Call Payoff!!", 10), "Barrier C…");
    }
}
