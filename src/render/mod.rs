mod color;
mod figure;
mod null_renderer;
mod options;

pub use color::Color;
pub use figure::ChartFigure;
pub use null_renderer::NullRenderer;
pub use options::{
    AxesOptions, ChartOptions, GridOptions, HighlighterOptions, LegendLocation, LegendOptions,
    LegendPlacement, MarkerStyle, SeriesDefaults, SeriesToggle, TimeAxisOptions, ValueAxisOptions,
    format_axis_value,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `ChartFigure` so
/// drawing code remains isolated from selection handling and refresh
/// sequencing. A backend shows at most one figure at a time: `render`
/// replaces the visible figure and `destroy` releases it, and the engine
/// always destroys the previous figure before rendering the next.
pub trait Renderer {
    fn render(&mut self, figure: &ChartFigure) -> ChartResult<()>;

    fn destroy(&mut self) -> ChartResult<()>;
}

#[cfg(feature = "svg-backend")]
mod svg_backend;
#[cfg(feature = "svg-backend")]
pub use svg_backend::{SvgRenderStats, SvgRenderer};
