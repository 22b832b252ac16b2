use serde::{Deserialize, Serialize};

use crate::core::metric::DEFAULT_METRIC_KEY;
use crate::core::types::ContainerMetrics;
use crate::error::{ChartError, ChartResult};
use crate::render::ChartOptions;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioChartConfig {
    pub container: ContainerMetrics,
    /// Metric charted when a selection names no metric or an unknown one.
    #[serde(default = "default_metric")]
    pub default_metric: String,
    /// Pinned first axis year. Unset, each refresh anchors to the current
    /// calendar year.
    #[serde(default)]
    pub reference_year: Option<i32>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ScenarioChartConfig {
    /// Creates a config with the built-in defaults for `container`.
    #[must_use]
    pub fn new(container: ContainerMetrics) -> Self {
        Self {
            container,
            default_metric: default_metric(),
            reference_year: None,
            options: ChartOptions::default(),
        }
    }

    /// Sets the fallback metric.
    #[must_use]
    pub fn with_default_metric(mut self, default_metric: &str) -> Self {
        self.default_metric = default_metric.to_owned();
        self
    }

    /// Pins the first axis year, making refresh output date-independent.
    #[must_use]
    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = Some(reference_year);
        self
    }

    /// Sets presentation defaults.
    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_metric() -> String {
    DEFAULT_METRIC_KEY.to_owned()
}
