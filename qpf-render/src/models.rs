//! View model structs for one render cycle.
//!
//! All structs derive `Serialize` so chart data can be passed to D3.js as
//! JSON from the Dioxus WASM frontend.

use serde::Serialize;
use serde_json::json;

/// Fixed dataset colors for the grouped OHLC bar chart.
pub const OPEN_COLOR: &str = "#2196F3";
pub const HIGH_COLOR: &str = "#4CAF50";
pub const LOW_COLOR: &str = "#F44336";
pub const CLOSE_COLOR: &str = "#FF9800";

/// One result card, fully resolved to display strings.
///
/// Missing fields have already been substituted: sentinel markers for rank,
/// date, volume and score, `0.00` defaults for the price metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub rank: String,
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub score_label: String,
    pub score_value: String,
}

/// Parallel label/price sequences for the grouped bar chart.
///
/// Built only from result entries whose raw `Open` field was present;
/// volatility-only rows are excluded here but still rendered as cards.
/// Constructed fresh per render cycle and discarded on the next clear.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
}

impl ChartSeries {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Append one bar group, keeping the four value sequences parallel.
    pub fn push(&mut self, label: String, open: f64, high: f64, low: f64, close: f64) {
        self.labels.push(label);
        self.open.push(open);
        self.high.push(high);
        self.low.push(low);
        self.close.push(close);
    }

    /// Serialize into the `{labels, datasets}` shape the D3 bridge consumes.
    pub fn datasets_json(&self) -> serde_json::Value {
        json!({
            "labels": self.labels,
            "datasets": [
                { "label": "Open",  "color": OPEN_COLOR,  "values": self.open },
                { "label": "High",  "color": HIGH_COLOR,  "values": self.high },
                { "label": "Low",   "color": LOW_COLOR,   "values": self.low },
                { "label": "Close", "color": CLOSE_COLOR, "values": self.close },
            ],
        })
    }
}

/// The outcome of planning one render cycle.
///
/// The variants are mutually exclusive: a cycle shows the error element, the
/// no-results placeholder, or the card list, never a mixture. `chart` is
/// `None` exactly when no entry carried price data (the pure-volatility
/// case), which keeps the chart area hidden.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPlan {
    Error(String),
    Empty,
    Results {
        cards: Vec<CardView>,
        chart: Option<ChartSeries>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_sequences_parallel() {
        let mut series = ChartSeries::default();
        series.push("Rank 1 (2023-05-02)".to_string(), 1.0, 2.0, 0.5, 1.5);
        series.push("Rank 2 (2021-11-15)".to_string(), 3.0, 4.0, 2.5, 3.5);
        assert_eq!(series.len(), 2);
        assert_eq!(series.open.len(), 2);
        assert_eq!(series.close.len(), 2);
        assert!(!series.is_empty());
    }

    #[test]
    fn datasets_json_has_four_fixed_color_datasets() {
        let mut series = ChartSeries::default();
        series.push("Rank 1 (2023-05-02)".to_string(), 1.0, 2.0, 0.5, 1.5);
        let value = series.datasets_json();

        let datasets = value["datasets"].as_array().expect("datasets array");
        assert_eq!(datasets.len(), 4);
        assert_eq!(datasets[0]["label"], "Open");
        assert_eq!(datasets[0]["color"], OPEN_COLOR);
        assert_eq!(datasets[3]["label"], "Close");
        assert_eq!(value["labels"][0], "Rank 1 (2023-05-02)");
        assert_eq!(datasets[1]["values"][0], 2.0);
    }
}
