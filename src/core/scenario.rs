use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Scope key for whole-property aggregates in scenario output tables.
pub const PROPERTY_SCOPE: &str = "__all__";

/// Scope keyed, then variable keyed, table of scenario output series.
pub type MetricOutputTable = IndexMap<String, IndexMap<String, Vec<SeriesPoint>>>;

/// One row of a scenario output series.
///
/// Rows travel as `[stamp, value]` JSON arrays. A row with neither stamp nor
/// value is the placeholder a series with no data collapses to, and travels
/// as the one-element array `[null]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSeriesPoint", into = "RawSeriesPoint")]
pub struct SeriesPoint {
    pub stamp: Option<String>,
    pub value: Option<f64>,
}

impl SeriesPoint {
    #[must_use]
    pub fn new(stamp: &str, value: f64) -> Self {
        Self {
            stamp: Some(stamp.to_owned()),
            value: Some(value),
        }
    }

    /// Placeholder row standing in for a series with no data.
    #[must_use]
    pub fn null_point() -> Self {
        Self {
            stamp: None,
            value: None,
        }
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.stamp.is_none() && self.value.is_none()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSeriesPoint {
    Stamped(Option<String>, Option<f64>),
    Bare([Option<f64>; 1]),
}

impl From<RawSeriesPoint> for SeriesPoint {
    fn from(raw: RawSeriesPoint) -> Self {
        match raw {
            RawSeriesPoint::Stamped(stamp, value) => Self { stamp, value },
            RawSeriesPoint::Bare([value]) => Self { stamp: None, value },
        }
    }
}

impl From<SeriesPoint> for RawSeriesPoint {
    fn from(point: SeriesPoint) -> Self {
        if point.stamp.is_none() && point.value.is_none() {
            Self::Bare([None])
        } else {
            Self::Stamped(point.stamp, point.value)
        }
    }
}

/// One selected scenario run and its processed output series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioFeature {
    pub name: String,
    /// Absent or partial tables mean the scenario run has not produced
    /// outputs for a metric yet.
    #[serde(default)]
    pub output_property_metrics: MetricOutputTable,
}

impl ScenarioFeature {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            output_property_metrics: MetricOutputTable::default(),
        }
    }

    #[must_use]
    pub fn with_property_series(mut self, variable_name: &str, points: Vec<SeriesPoint>) -> Self {
        self.output_property_metrics
            .entry(PROPERTY_SCOPE.to_owned())
            .or_default()
            .insert(variable_name.to_owned(), points);
        self
    }

    /// Whole-property series for `variable_name`.
    ///
    /// Empty when the scenario has no processed outputs, no whole-property
    /// scope, or no series for this variable.
    #[must_use]
    pub fn property_series(&self, variable_name: &str) -> &[SeriesPoint] {
        self.output_property_metrics
            .get(PROPERTY_SCOPE)
            .and_then(|scope| scope.get(variable_name))
            .map_or(&[], Vec::as_slice)
    }
}

/// Property facts the baseline overlay is computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub acres: f64,
    /// Forest vegetation simulator variant the property falls in.
    pub variant: String,
}

impl PropertySummary {
    #[must_use]
    pub fn new(acres: f64, variant: &str) -> Self {
        Self {
            acres,
            variant: variant.to_owned(),
        }
    }
}

/// Complete input of one chart refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSelection {
    /// Metric the user picked, absent when nothing is selected yet.
    #[serde(default)]
    pub metric_key: Option<String>,
    #[serde(default)]
    pub features: Vec<ScenarioFeature>,
    pub property: PropertySummary,
}

impl ScenarioSelection {
    #[must_use]
    pub fn new(property: PropertySummary) -> Self {
        Self {
            metric_key: None,
            features: Vec::new(),
            property,
        }
    }

    #[must_use]
    pub fn with_metric_key(mut self, metric_key: &str) -> Self {
        self.metric_key = Some(metric_key.to_owned());
        self
    }

    #[must_use]
    pub fn with_feature(mut self, feature: ScenarioFeature) -> Self {
        self.features.push(feature);
        self
    }

    /// Checks the numeric payload before it reaches extent math.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.property.acres.is_finite() || self.property.acres < 0.0 {
            return Err(ChartError::InvalidData(
                "property acres must be finite and >= 0".to_owned(),
            ));
        }
        for feature in &self.features {
            for scope in feature.output_property_metrics.values() {
                for points in scope.values() {
                    for point in points {
                        if let Some(value) = point.value {
                            if !value.is_finite() {
                                return Err(ChartError::InvalidData(format!(
                                    "scenario '{}' contains a non-finite output value",
                                    feature.name
                                )));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Serializes the selection to pretty JSON for debug/fixture files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize selection: {e}")))
    }

    /// Deserializes a selection from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse selection: {e}")))
    }
}
