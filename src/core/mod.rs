pub mod baseline;
pub mod metric;
pub mod scenario;
pub mod series;
pub mod timeline;
pub mod types;

pub use baseline::{BaselineOverlay, baseline_overlay, regional_average_per_acre};
pub use metric::{MetricCatalog, MetricDescriptor, MetricResolution};
pub use scenario::{PropertySummary, ScenarioFeature, ScenarioSelection, SeriesPoint};
pub use series::{ChartSeries, scenario_series, value_extent};
pub use timeline::{axis_date_bounds, axis_year_span, relabel_lead_series};
pub use types::{ContainerMetrics, Viewport};
