use tracing::{debug, warn};

use crate::core::baseline::baseline_overlay;
use crate::core::metric::{AGL_CARBON_KEY, MetricCatalog};
use crate::core::scenario::ScenarioSelection;
use crate::core::series::scenario_series;
use crate::core::timeline::{self, relabel_lead_series};
use crate::core::types::{ContainerMetrics, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxesOptions, ChartFigure, ChartOptions, Renderer};

use super::{
    BaselineSummary, ChartSnapshot, RefreshReport, RefreshWarning, ScenarioChartConfig,
};

/// Chart engine for the scenario outputs of one property.
///
/// The engine owns a rendering backend and at most one live figure. Each
/// refresh resolves the selected metric and tears down the previous figure
/// before assembling and rendering the next one from scratch.
pub struct ScenarioChartEngine<R: Renderer> {
    renderer: R,
    catalog: MetricCatalog,
    options: ChartOptions,
    viewport: Viewport,
    default_metric: String,
    reference_year: Option<i32>,
    caption: String,
    live_figure: Option<ChartFigure>,
    last_report: Option<RefreshReport>,
}

impl<R: Renderer> ScenarioChartEngine<R> {
    pub fn new(renderer: R, config: ScenarioChartConfig) -> ChartResult<Self> {
        config.options.validate()?;

        let catalog = MetricCatalog::builtin();
        if !catalog.contains_key(&config.default_metric) {
            return Err(ChartError::UnknownMetric {
                key: config.default_metric,
            });
        }

        Ok(Self {
            renderer,
            catalog,
            options: config.options,
            viewport: config.container.plot_viewport(),
            default_metric: config.default_metric,
            reference_year: config.reference_year,
            caption: String::new(),
            live_figure: None,
            last_report: None,
        })
    }

    /// Rebuilds the chart from `selection`.
    ///
    /// The previous figure is always destroyed and the caption always takes
    /// the resolved metric's chart text, even when the selection produces
    /// nothing to draw.
    pub fn refresh(&mut self, selection: &ScenarioSelection) -> ChartResult<RefreshReport> {
        selection.validate()?;

        let resolution = self
            .catalog
            .resolve(selection.metric_key.as_deref(), &self.default_metric)?;
        let descriptor = resolution.descriptor;

        let mut warnings = Vec::new();
        if resolution.fallback_applied {
            warn!(
                requested = ?selection.metric_key,
                substituted = %descriptor.variable_name,
                "selection names no known metric, using default"
            );
            warnings.push(RefreshWarning::MetricFallback {
                requested: selection.metric_key.clone(),
                substituted: descriptor.variable_name.clone(),
            });
        }

        if self.live_figure.take().is_some() {
            self.renderer.destroy()?;
        }

        let mut series = scenario_series(&selection.features, &descriptor.variable_name);
        let scenario_count = series.len();

        self.caption = descriptor.chart_text.clone();

        let mut baseline = None;
        if descriptor.variable_name == AGL_CARBON_KEY {
            if let Some(overlay) = baseline_overlay(&selection.property)? {
                baseline = Some(BaselineSummary {
                    variant: selection.property.variant.clone(),
                    per_acre: overlay.per_acre,
                    total: overlay.total,
                    label: overlay.series.label.clone(),
                });
                series.push(overlay.series);
            }
        }

        let rendered = if series.is_empty() {
            false
        } else {
            let reference_year = self.reference_year.unwrap_or_else(timeline::current_year);
            relabel_lead_series(&mut series, reference_year);

            let axes = AxesOptions::for_refresh(reference_year, &descriptor);
            let mut figure =
                ChartFigure::new(self.viewport, &self.caption, self.options.clone(), axes);
            for entry in series {
                figure.push_series(entry);
            }
            self.renderer.render(&figure)?;
            self.live_figure = Some(figure);
            true
        };

        let report = RefreshReport {
            metric_key: descriptor.variable_name.clone(),
            caption: self.caption.clone(),
            scenario_series: scenario_count,
            series_total: scenario_count + usize::from(baseline.is_some()),
            baseline,
            warnings,
            rendered,
        };
        debug!(
            metric = %report.metric_key,
            series_total = report.series_total,
            rendered = report.rendered,
            "chart refreshed"
        );
        self.last_report = Some(report.clone());
        Ok(report)
    }

    /// Adopts new host measurements. Takes effect on the next refresh.
    pub fn set_container(&mut self, container: ContainerMetrics) {
        self.viewport = container.plot_viewport();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Caption of the most recent refresh, empty before the first one.
    #[must_use]
    pub fn caption(&self) -> &str {
        &self.caption
    }

    #[must_use]
    pub fn catalog(&self) -> &MetricCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn default_metric(&self) -> &str {
        &self.default_metric
    }

    #[must_use]
    pub fn reference_year(&self) -> Option<i32> {
        self.reference_year
    }

    #[must_use]
    pub fn live_figure(&self) -> Option<&ChartFigure> {
        self.live_figure.as_ref()
    }

    #[must_use]
    pub fn has_live_figure(&self) -> bool {
        self.live_figure.is_some()
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&RefreshReport> {
        self.last_report.as_ref()
    }

    /// Serializable state snapshot for regression tests and debugging.
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot::capture(self)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
