use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{RefreshReport, ScenarioChartEngine};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub viewport: Viewport,
    pub default_metric: String,
    pub caption: String,
    /// Labels of the live figure's series, in draw order. Empty when nothing
    /// is rendered.
    pub live_series_labels: Vec<String>,
    /// Year span of the live figure's time axis.
    pub axis_year_range: Option<(i32, i32)>,
    /// Chartable metric keys mapped to their display titles.
    pub metric_metadata: IndexMap<String, String>,
    pub last_refresh: Option<RefreshReport>,
}

impl ChartSnapshot {
    #[must_use]
    pub fn capture<R: Renderer>(engine: &ScenarioChartEngine<R>) -> Self {
        let live_series_labels = engine
            .live_figure()
            .map(|figure| figure.series_labels().map(str::to_owned).collect())
            .unwrap_or_default();
        let axis_year_range = engine
            .live_figure()
            .map(|figure| (figure.axes.time.year_min, figure.axes.time.year_max));
        let metric_metadata = engine
            .catalog()
            .chart_metrics()
            .map(|descriptor| {
                (
                    descriptor.variable_name.clone(),
                    descriptor.title.clone(),
                )
            })
            .collect();

        Self {
            viewport: engine.viewport(),
            default_metric: engine.default_metric().to_owned(),
            caption: engine.caption().to_owned(),
            live_series_labels,
            axis_year_range,
            metric_metadata,
            last_refresh: engine.last_report().cloned(),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart snapshot: {e}"))
        })
    }

    pub fn from_json_str(raw: &str) -> ChartResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart snapshot: {e}")))
    }
}
