use plotters::chart::{ChartBuilder, LabelAreaPosition, SeriesLabelPosition};
use plotters::drawing::IntoDrawingArea;
use plotters::element::{Circle, Cross, EmptyElement, PathElement, Rectangle};
use plotters::series::LineSeries;
use plotters::style::{BLACK, Color as _, FontFamily, RGBColor, ShapeStyle, WHITE};
use plotters_svg::SVGBackend;
use std::fmt::Display;

use crate::core::series::{ChartSeries, value_extent};
use crate::core::timeline::stamp_year;
use crate::error::{ChartError, ChartResult};
use crate::render::options::{LegendLocation, MarkerStyle, format_axis_value};
use crate::render::{ChartFigure, Color, Renderer};

/// Pixel half-size of data point markers.
const MARKER_SIZE: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SvgRenderStats {
    pub series_drawn: usize,
    pub points_drawn: usize,
    pub markers_drawn: usize,
}

/// Plotters SVG renderer backend.
///
/// Renders each figure into an in-memory SVG document. Hosts embed or save
/// the document themselves; the renderer never touches the filesystem.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    svg: Option<String>,
    last_stats: SvgRenderStats,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "plotters+svg"
    }

    /// SVG document of the last rendered figure, until the next destroy.
    #[must_use]
    pub fn last_svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    #[must_use]
    pub fn last_stats(&self) -> SvgRenderStats {
        self.last_stats
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, figure: &ChartFigure) -> ChartResult<()> {
        figure.validate()?;

        let mut buffer = String::new();
        let stats = draw_figure(&mut buffer, figure)?;
        self.svg = Some(buffer);
        self.last_stats = stats;
        Ok(())
    }

    fn destroy(&mut self) -> ChartResult<()> {
        self.svg = None;
        self.last_stats = SvgRenderStats::default();
        Ok(())
    }
}

fn draw_figure(buffer: &mut String, figure: &ChartFigure) -> ChartResult<SvgRenderStats> {
    let size = (figure.viewport.width, figure.viewport.height);
    let root = SVGBackend::with_string(buffer, size).into_drawing_area();

    root.fill(&rgb(figure.options.grid.background))
        .map_err(|err| map_backend_error("failed to fill background", err))?;

    let year_min = figure.axes.time.year_min;
    let year_max = figure.axes.time.year_max;
    let x_range = f64::from(year_min)..f64::from(year_max);
    // Totals in this domain are non-negative, so the value axis is anchored
    // at zero and headroom added above the largest value.
    let y_max = match value_extent(&figure.series) {
        Some((_, high)) if high > 0.0 => high * 1.05,
        _ => 1.0,
    };

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .caption(&figure.caption, (FontFamily::SansSerif, 14))
        .set_label_area_size(LabelAreaPosition::Left, 70)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(x_range, 0.0..y_max)
        .map_err(|err| map_backend_error("failed to build plot area", err))?;

    // Hosts can hand the backend arbitrarily wide spans and extents, so tick
    // counts are computed and clamped in f64 before the cast.
    let year_span = f64::from(year_max) - f64::from(year_min);
    let year_ticks = (year_span / f64::from(figure.axes.time.tick_interval_years) + 1.0)
        .clamp(2.0, 102.0) as usize;
    let value_ticks =
        ((y_max / figure.axes.value.tick_interval).ceil() + 1.0).clamp(2.0, 12.0) as usize;
    let value_format = figure.axes.value.tick_format.clone();
    chart
        .configure_mesh()
        .x_desc(&figure.axes.time.label)
        .y_desc(&figure.axes.value.label)
        .x_labels(year_ticks)
        .y_labels(value_ticks)
        .x_label_formatter(&|year| (year.round() as i64).to_string())
        .y_label_formatter(&|value| format_axis_value(*value, &value_format))
        .label_style((FontFamily::SansSerif, 12))
        .axis_desc_style((FontFamily::SansSerif, 13))
        .draw()
        .map_err(|err| map_backend_error("failed to draw axes", err))?;

    let legend_visible = figure.options.legend.show && figure.options.legend.show_labels;
    let stroke_width = figure.options.series_defaults.line_width.round().max(1.0) as u32;
    let mut stats = SvgRenderStats::default();

    for (index, series) in figure.series.iter().enumerate() {
        let color = rgb(figure.options.series_color(index));
        let style = ShapeStyle {
            color: color.to_rgba(),
            filled: false,
            stroke_width,
        };
        let points = series_points(series);

        let anno = chart
            .draw_series(LineSeries::new(points.iter().copied(), style))
            .map_err(|err| map_backend_error("failed to draw series", err))?;
        if legend_visible {
            anno.label(&series.label).legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + 16, y)],
                    ShapeStyle {
                        color: color.to_rgba(),
                        filled: false,
                        stroke_width: 2,
                    },
                )
            });
        }

        let fill = color.to_rgba().filled();
        match figure.options.series_defaults.marker_style {
            MarkerStyle::Circle => {
                chart
                    .draw_series(points.iter().map(|&(x, y)| {
                        EmptyElement::at((x, y)) + Circle::new((0, 0), MARKER_SIZE, fill)
                    }))
                    .map_err(|err| map_backend_error("failed to draw markers", err))?;
            }
            MarkerStyle::Square | MarkerStyle::Diamond => {
                chart
                    .draw_series(points.iter().map(|&(x, y)| {
                        EmptyElement::at((x, y))
                            + Rectangle::new(
                                [(-MARKER_SIZE, -MARKER_SIZE), (MARKER_SIZE, MARKER_SIZE)],
                                fill,
                            )
                    }))
                    .map_err(|err| map_backend_error("failed to draw markers", err))?;
            }
            MarkerStyle::Cross => {
                chart
                    .draw_series(points.iter().map(|&(x, y)| {
                        EmptyElement::at((x, y)) + Cross::new((0, 0), MARKER_SIZE, fill)
                    }))
                    .map_err(|err| map_backend_error("failed to draw markers", err))?;
            }
        }

        stats.series_drawn += 1;
        stats.points_drawn += points.len();
        stats.markers_drawn += points.len();
    }

    if legend_visible {
        chart
            .configure_series_labels()
            .position(legend_position(figure.options.legend.location))
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK.mix(0.4))
            .label_font((
                FontFamily::SansSerif,
                figure.options.legend.font_size_px.round().max(1.0) as i32,
            ))
            .draw()
            .map_err(|err| map_backend_error("failed to draw legend", err))?;
    }

    root.present()
        .map_err(|err| map_backend_error("failed to finalize document", err))?;
    Ok(stats)
}

fn series_points(series: &ChartSeries) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .filter_map(|point| {
            let year = stamp_year(point.stamp.as_deref()?)?;
            Some((f64::from(year), point.value?))
        })
        .collect()
}

fn rgb(color: Color) -> RGBColor {
    let (red, green, blue) = color.to_rgb8();
    RGBColor(red, green, blue)
}

fn legend_position(location: LegendLocation) -> SeriesLabelPosition {
    match location {
        LegendLocation::North => SeriesLabelPosition::UpperMiddle,
        LegendLocation::NorthEast => SeriesLabelPosition::UpperRight,
        LegendLocation::East => SeriesLabelPosition::MiddleRight,
        LegendLocation::SouthEast => SeriesLabelPosition::LowerRight,
        LegendLocation::South => SeriesLabelPosition::LowerMiddle,
        LegendLocation::SouthWest => SeriesLabelPosition::LowerLeft,
        LegendLocation::West => SeriesLabelPosition::MiddleLeft,
        LegendLocation::NorthWest => SeriesLabelPosition::UpperLeft,
    }
}

fn map_backend_error<E: Display>(prefix: &str, err: E) -> ChartError {
    ChartError::Render(format!("{prefix}: {err}"))
}
