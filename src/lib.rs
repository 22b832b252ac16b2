//! scenario-chart: forestry scenario charting engine.
//!
//! This crate turns per-scenario forestry planning outputs into time-series
//! charts. A built-in metric catalog resolves what to plot, with unknown
//! keys falling back to a default. Each refresh assembles one series per
//! selected scenario plus the regional carbon baseline where one is
//! published, then rebuilds the figure from scratch through a pluggable
//! renderer backend.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ScenarioChartConfig, ScenarioChartEngine};
pub use error::{ChartError, ChartResult};
