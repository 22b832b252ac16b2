use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::scenario::{ScenarioFeature, SeriesPoint};

/// One plotted line: a legend label and its data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    #[must_use]
    pub fn new(label: &str, points: Vec<SeriesPoint>) -> Self {
        Self {
            label: label.to_owned(),
            points,
        }
    }

    /// True when the series carries only the placeholder row.
    #[must_use]
    pub fn is_placeholder_only(&self) -> bool {
        self.points.len() == 1 && self.points[0].is_placeholder()
    }

    /// Finite values present in this series, placeholder rows skipped.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points
            .iter()
            .filter_map(|point| point.value)
            .filter(|value| value.is_finite())
    }
}

/// Builds one series per selected scenario, in selection order.
///
/// A scenario with no whole-property outputs for `variable_name` still
/// occupies its slot: its series holds the single placeholder row, keeping
/// legend entries and palette assignment aligned with the selection.
#[must_use]
pub fn scenario_series(features: &[ScenarioFeature], variable_name: &str) -> Vec<ChartSeries> {
    features
        .iter()
        .map(|feature| {
            let rows = feature.property_series(variable_name);
            let points = if rows.is_empty() {
                vec![SeriesPoint::null_point()]
            } else {
                rows.to_vec()
            };
            ChartSeries::new(&feature.name, points)
        })
        .collect()
}

/// Smallest and largest finite values across `series`, placeholder rows
/// skipped.
#[must_use]
pub fn value_extent(series: &[ChartSeries]) -> Option<(f64, f64)> {
    let min = series
        .iter()
        .flat_map(ChartSeries::present_values)
        .min_by_key(|value| OrderedFloat(*value))?;
    let max = series
        .iter()
        .flat_map(ChartSeries::present_values)
        .max_by_key(|value| OrderedFloat(*value))?;
    Some((min, max))
}
