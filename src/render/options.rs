use serde::{Deserialize, Serialize};

use crate::core::metric::{GROUPED_INTEGER_FORMAT, MetricDescriptor};
use crate::core::timeline;
use crate::error::{ChartError, ChartResult};
use crate::render::color::Color;

/// Label of the time axis.
pub const TIME_AXIS_LABEL: &str = "Year";

/// Tick format of the time axis, year only.
pub const TIME_TICK_FORMAT: &str = "%Y";

/// Years between consecutive time-axis ticks.
pub const TIME_TICK_INTERVAL_YEARS: i32 = 10;

/// Value-axis tick spacing shared by all metrics.
pub const VALUE_TICK_INTERVAL: f64 = 10_000.0;

/// Marker drawn on each data point of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerStyle {
    Circle,
    Square,
    Diamond,
    Cross,
}

/// Compass corner or edge the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendLocation {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Whether the legend sits over the plot area or beside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendPlacement {
    Inside,
    Outside,
}

/// Animation speed when clicking a legend entry toggles its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesToggle {
    Off,
    Slow,
    Normal,
    Fast,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    pub background: Color,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            background: Color::rgb(1.0, 1.0, 1.0),
        }
    }
}

/// Stroke and marker defaults applied to every series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesDefaults {
    pub line_width: f64,
    pub marker_style: MarkerStyle,
    /// Connect points with straight segments when false.
    pub smooth: bool,
}

impl Default for SeriesDefaults {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            marker_style: MarkerStyle::Square,
            smooth: false,
        }
    }
}

/// Hover highlight accenting the data point under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlighterOptions {
    pub show: bool,
    /// Pixels added to the marker size while highlighted.
    pub size_adjust: f64,
}

impl Default for HighlighterOptions {
    fn default() -> Self {
        Self {
            show: true,
            size_adjust: 7.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub show: bool,
    pub show_labels: bool,
    pub location: LegendLocation,
    pub placement: LegendPlacement,
    pub font_size_px: f64,
    pub font_family: Vec<String>,
    pub series_toggle: SeriesToggle,
    pub number_rows: u32,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            show: true,
            show_labels: true,
            location: LegendLocation::North,
            placement: LegendPlacement::Inside,
            font_size_px: 11.0,
            font_family: default_font_family(),
            series_toggle: SeriesToggle::Normal,
            number_rows: 1,
        }
    }
}

/// Presentation defaults shared by every refresh.
///
/// A refresh never mutates these; per-refresh settings are merged into a
/// fresh copy when the figure is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default = "default_series_colors")]
    pub series_colors: Vec<Color>,
    #[serde(default)]
    pub grid: GridOptions,
    #[serde(default)]
    pub series_defaults: SeriesDefaults,
    #[serde(default)]
    pub highlighter: HighlighterOptions,
    #[serde(default)]
    pub legend: LegendOptions,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            series_colors: default_series_colors(),
            grid: GridOptions::default(),
            series_defaults: SeriesDefaults::default(),
            highlighter: HighlighterOptions::default(),
            legend: LegendOptions::default(),
        }
    }
}

impl ChartOptions {
    #[must_use]
    pub fn with_series_colors(mut self, series_colors: Vec<Color>) -> Self {
        self.series_colors = series_colors;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    #[must_use]
    pub fn with_series_defaults(mut self, series_defaults: SeriesDefaults) -> Self {
        self.series_defaults = series_defaults;
        self
    }

    #[must_use]
    pub fn with_highlighter(mut self, highlighter: HighlighterOptions) -> Self {
        self.highlighter = highlighter;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendOptions) -> Self {
        self.legend = legend;
        self
    }

    /// Palette color for the series at `index`, cycling past the end.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series_colors.is_empty() {
            return Color::rgb(0.0, 0.0, 0.0);
        }
        self.series_colors[index % self.series_colors.len()]
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.series_colors.is_empty() {
            return Err(ChartError::InvalidData(
                "series palette must not be empty".to_owned(),
            ));
        }
        for color in &self.series_colors {
            color.validate()?;
        }
        self.grid.background.validate()?;
        if !self.series_defaults.line_width.is_finite() || self.series_defaults.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "series line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.highlighter.size_adjust.is_finite() {
            return Err(ChartError::InvalidData(
                "highlighter size adjust must be finite".to_owned(),
            ));
        }
        if !self.legend.font_size_px.is_finite() || self.legend.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "legend font size must be finite and > 0".to_owned(),
            ));
        }
        if self.legend.number_rows == 0 {
            return Err(ChartError::InvalidData(
                "legend must have at least one row".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Time-axis settings assembled fresh for a refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeAxisOptions {
    pub label: String,
    /// Numeric year range, the source `min_stamp` and `max_stamp` render.
    pub year_min: i32,
    pub year_max: i32,
    pub min_stamp: String,
    pub max_stamp: String,
    pub tick_interval_years: i32,
    pub tick_format: String,
    pub pad: f64,
}

impl TimeAxisOptions {
    /// Axis covering the century of planning periods after `reference_year`.
    #[must_use]
    pub fn for_year_span(reference_year: i32) -> Self {
        let (year_min, year_max) = timeline::axis_year_span(reference_year);
        let (min_stamp, max_stamp) = timeline::axis_date_bounds(reference_year);
        Self {
            label: TIME_AXIS_LABEL.to_owned(),
            year_min,
            year_max,
            min_stamp,
            max_stamp,
            tick_interval_years: TIME_TICK_INTERVAL_YEARS,
            tick_format: TIME_TICK_FORMAT.to_owned(),
            pad: 0.0,
        }
    }
}

/// Value-axis settings assembled fresh for a refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisOptions {
    pub label: String,
    pub tick_interval: f64,
    pub tick_format: String,
}

impl ValueAxisOptions {
    #[must_use]
    pub fn for_metric(descriptor: &MetricDescriptor) -> Self {
        Self {
            label: descriptor.axis_label.clone(),
            tick_interval: VALUE_TICK_INTERVAL,
            tick_format: descriptor.axis_format.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxesOptions {
    pub time: TimeAxisOptions,
    pub value: ValueAxisOptions,
}

impl AxesOptions {
    #[must_use]
    pub fn for_refresh(reference_year: i32, descriptor: &MetricDescriptor) -> Self {
        Self {
            time: TimeAxisOptions::for_year_span(reference_year),
            value: ValueAxisOptions::for_metric(descriptor),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.time.min_stamp.is_empty() || self.time.max_stamp.is_empty() {
            return Err(ChartError::InvalidData(
                "time axis bounds must not be empty".to_owned(),
            ));
        }
        if self.time.year_max <= self.time.year_min {
            return Err(ChartError::InvalidData(
                "time axis year range must not be empty".to_owned(),
            ));
        }
        if self.time.tick_interval_years <= 0 {
            return Err(ChartError::InvalidData(
                "time axis tick interval must be > 0 years".to_owned(),
            ));
        }
        if !self.time.pad.is_finite() || self.time.pad < 0.0 {
            return Err(ChartError::InvalidData(
                "time axis pad must be finite and >= 0".to_owned(),
            ));
        }
        if !self.value.tick_interval.is_finite() || self.value.tick_interval <= 0.0 {
            return Err(ChartError::InvalidData(
                "value axis tick interval must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Renders one tick value in the axis format notation.
///
/// `%'d` is a thousands-grouped integer and `%d` a plain integer. Other
/// formats fall back to the shortest decimal rendering.
#[must_use]
pub fn format_axis_value(value: f64, format: &str) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }
    match format {
        GROUPED_INTEGER_FORMAT => group_thousands(round_to_i64(value)),
        "%d" => round_to_i64(value).to_string(),
        _ => format!("{value}"),
    }
}

fn round_to_i64(value: f64) -> i64 {
    let rounded = value.round();
    if rounded > (i64::MAX as f64) {
        i64::MAX
    } else if rounded < (i64::MIN as f64) {
        i64::MIN
    } else {
        rounded as i64
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn default_font_family() -> Vec<String> {
    [
        "Lucida Grande",
        "Lucida Sans Unicode",
        "Arial",
        "Verdana",
        "sans-serif",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

fn default_series_colors() -> Vec<Color> {
    // One slot per scenario a selection can hold before colors repeat.
    [
        "#4bb2c5", "#c5b47f", "#EAA228", "#579575", "#839557", "#958c12", "#953579", "#4b5de4",
        "#d8b83f", "#ff5800", "#0085cc",
    ]
    .into_iter()
    .filter_map(|hex| Color::from_hex(hex).ok())
    .collect()
}
