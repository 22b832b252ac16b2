use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deviation from the requested selection a refresh had to make.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefreshWarning {
    /// The selection named no metric or an unknown one and the engine
    /// substituted its default metric.
    MetricFallback {
        requested: Option<String>,
        substituted: String,
    },
}

/// Regional baseline facts recorded when the overlay series is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineSummary {
    pub variant: String,
    /// Published regional average, in metric tons of carbon per acre.
    pub per_acre: Decimal,
    /// Average scaled to the property, in metric tons of carbon.
    pub total: f64,
    pub label: String,
}

/// Outcome of one chart refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshReport {
    /// Metric the refresh actually charted, after any fallback.
    pub metric_key: String,
    pub caption: String,
    /// Series derived from selected scenarios, one per scenario.
    pub scenario_series: usize,
    /// All series handed to the renderer, baseline overlay included.
    pub series_total: usize,
    pub baseline: Option<BaselineSummary>,
    pub warnings: Vec<RefreshWarning>,
    /// False when the selection produced nothing to draw.
    pub rendered: bool,
}

impl RefreshReport {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    #[must_use]
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }
}
