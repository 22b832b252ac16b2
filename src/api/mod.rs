mod engine;
mod engine_config;
mod refresh;
mod snapshot;

pub use engine::ScenarioChartEngine;
pub use engine_config::ScenarioChartConfig;
pub use refresh::{BaselineSummary, RefreshReport, RefreshWarning};
pub use snapshot::ChartSnapshot;
