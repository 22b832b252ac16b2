use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Metric applied when a selection names no metric or an unknown one.
pub const DEFAULT_METRIC_KEY: &str = "agl_carbon";

/// Metric whose chart carries the regional per-acre carbon baseline.
pub const AGL_CARBON_KEY: &str = "agl_carbon";

/// Axis format for thousands-grouped integer ticks.
pub const GROUPED_INTEGER_FORMAT: &str = "%'d";

/// Presentation record for one plannable forest metric.
///
/// `variable_name` doubles as the lookup key into scenario output tables.
/// `chart_text` is the caption shown under the chart, `map_text` the longer
/// per-stand explanation used by map legends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDescriptor {
    pub variable_name: String,
    pub title: String,
    pub axis_label: String,
    pub map_label: String,
    pub map_text: String,
    pub chart_text: String,
    pub display_chart: bool,
    pub display_map: bool,
    pub axis_format: String,
}

impl MetricDescriptor {
    /// Descriptor shown on both chart and map, with the map label mirroring
    /// the axis label until overridden.
    #[must_use]
    pub fn new(variable_name: &str, title: &str, axis_label: &str) -> Self {
        Self {
            variable_name: variable_name.to_owned(),
            title: title.to_owned(),
            axis_label: axis_label.to_owned(),
            map_label: axis_label.to_owned(),
            map_text: String::new(),
            chart_text: String::new(),
            display_chart: true,
            display_map: true,
            axis_format: GROUPED_INTEGER_FORMAT.to_owned(),
        }
    }

    #[must_use]
    pub fn with_map_label(mut self, map_label: &str) -> Self {
        self.map_label = map_label.to_owned();
        self
    }

    #[must_use]
    pub fn with_map_text(mut self, map_text: &str) -> Self {
        self.map_text = map_text.to_owned();
        self
    }

    #[must_use]
    pub fn with_chart_text(mut self, chart_text: &str) -> Self {
        self.chart_text = chart_text.to_owned();
        self
    }

    #[must_use]
    pub fn map_only(mut self) -> Self {
        self.display_chart = false;
        self
    }
}

/// Result of resolving a requested metric key against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricResolution {
    pub descriptor: MetricDescriptor,
    /// True when the requested key was missing or unknown and the fallback
    /// metric was substituted.
    pub fallback_applied: bool,
}

/// Ordered catalog of the metrics a property can chart or map.
///
/// Iteration order matches the order metrics are offered in selection UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCatalog {
    metrics: IndexMap<String, MetricDescriptor>,
}

impl Default for MetricCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MetricCatalog {
    /// Catalog of the eleven built-in forestry metrics.
    #[must_use]
    pub fn builtin() -> Self {
        let mut metrics = IndexMap::with_capacity(11);
        for descriptor in builtin_metrics() {
            metrics.insert(descriptor.variable_name.clone(), descriptor);
        }
        Self { metrics }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.metrics.contains_key(key)
    }

    #[must_use]
    pub fn descriptor(&self, key: &str) -> Option<&MetricDescriptor> {
        self.metrics.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// Metrics offered by chart selection UIs, in catalog order.
    pub fn chart_metrics(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.metrics
            .values()
            .filter(|descriptor| descriptor.display_chart)
    }

    /// Metrics offered by map legends, in catalog order.
    pub fn map_metrics(&self) -> impl Iterator<Item = &MetricDescriptor> {
        self.metrics
            .values()
            .filter(|descriptor| descriptor.display_map)
    }

    /// Resolves `requested` to a descriptor, substituting `fallback` when the
    /// request is absent or unknown.
    ///
    /// Fails only when `fallback` itself is not in the catalog. Callers that
    /// validated their fallback up front can rely on every request resolving.
    pub fn resolve(&self, requested: Option<&str>, fallback: &str) -> ChartResult<MetricResolution> {
        if let Some(key) = requested {
            if let Some(descriptor) = self.metrics.get(key) {
                return Ok(MetricResolution {
                    descriptor: descriptor.clone(),
                    fallback_applied: false,
                });
            }
        }

        let descriptor = self.metrics.get(fallback).ok_or_else(|| ChartError::UnknownMetric {
            key: fallback.to_owned(),
        })?;
        Ok(MetricResolution {
            descriptor: descriptor.clone(),
            fallback_applied: true,
        })
    }
}

fn builtin_metrics() -> [MetricDescriptor; 11] {
    [
        MetricDescriptor::new("standing_timber", "Boardfoot Volume", "Standing Boardfeet (MBF)")
            .with_map_text("Standing merchantable boardfoot volume in each stand (MBF/acre)")
            .with_chart_text("Standing merchantable boardfoot volume across property (MBF Total)"),
        MetricDescriptor::new("standing_vol", "Cubic Volume", "Standing volume (ft3)")
            .with_map_text("Standing merchantable cubic volume in each stand (ft3/acre)")
            .with_chart_text("Standing merchantable cubic volume across property (ft3 total)"),
        MetricDescriptor::new("age", "Age", "Age (years)")
            .with_map_text("Stand Age (years)")
            .with_chart_text("Age (years)")
            .map_only(),
        MetricDescriptor::new("ba", "Basal Area", "Basal Area (ft2/acre)")
            .with_map_label("Basal Area (ft2)")
            .with_map_text("Total basal area in each stand (ft2/acre)")
            .with_chart_text("Basal Area (ft2/acre)")
            .map_only(),
        MetricDescriptor::new("agl_carbon", "Carbon (Live Tree)", "Carbon (metric tons C)")
            .with_map_text(
                "Carbon storage in above-ground live tree biomass in each stand (metric tons C/acre)",
            )
            .with_chart_text(
                "Total carbon storage in above-ground live tree biomass across property (metric tons C)",
            ),
        MetricDescriptor::new("total_carbon", "Carbon (Stand Total)", "Carbon (metric tons C)")
            .with_map_text(
                "Carbon storage in trees, snags, and downed wood in each stand (metric tons C/acre)",
            )
            .with_chart_text(
                "Carbon storage in trees, snags, and downed wood across property (metric tons C)",
            ),
        MetricDescriptor::new("harvested_timber", "Boardfoot Yield (each period)", "Timber yield (MBF)")
            .with_map_text("Timber yield from each stand over past five years (MBF/ac)")
            .with_chart_text("Timber yield across property over past five years (MBF)"),
        MetricDescriptor::new("cum_harvest", "Boardfoot Yield (cumulative)", "Cumulative Timber yield (MBF)")
            .with_map_text("Cumulative boardfoot yield for each stand (MBF/ac)")
            .with_chart_text("Cumulative boardfoot yield across property (MBF)"),
        MetricDescriptor::new("fire", "Fire Hazard", "High Fire Hazard (acres)")
            .with_map_label("Fire Hazard rating")
            .with_map_text("Fire hazard rating (1=low, 2=medium, 3=medium-high, 4=high)")
            .with_chart_text("Acres of high fire hazard rating across property"),
        MetricDescriptor::new("es_btl", "Spruce Beetle Hazard", "High Spruce Beetle Hazard (acres)")
            .with_map_label("Spruce Beetle Hazard rating")
            .with_map_text("Spruce beetle hazard rating (4-5=low...7-9=moderate...11-12=high)")
            .with_chart_text("Acres of high spruce beetle hazard rating"),
        MetricDescriptor::new("pine_btl", "Pine Beetle Hazard", "High Pine Beetle Hazard (acres)")
            .with_map_label("Pine Beetle Hazard rating")
            .with_map_text(
                "Pine Beetle Hazard rating (Ponderosa 3-4=low, 5-8=moderate, 9-11=high; Lodgepole 2-7=low, 8-13=moderate, 14=high)",
            )
            .with_chart_text("Acres at high risk to pine beetle for Ponderosa or Lodgepole pine"),
    ]
}
