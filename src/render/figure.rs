use smallvec::SmallVec;

use crate::core::series::ChartSeries;
use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::options::{AxesOptions, ChartOptions};

/// Series slots a figure holds without spilling to the heap. One per palette
/// color plus the baseline overlay.
const INLINE_SERIES: usize = 12;

/// Fully assembled scene for one chart draw pass.
///
/// Backends receive the figure as-is, so drawing code stays isolated from
/// selection handling and refresh sequencing.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub viewport: Viewport,
    /// Caption shown under the chart, taken from the metric descriptor.
    pub caption: String,
    pub series: SmallVec<[ChartSeries; INLINE_SERIES]>,
    pub options: ChartOptions,
    pub axes: AxesOptions,
}

impl ChartFigure {
    #[must_use]
    pub fn new(viewport: Viewport, caption: &str, options: ChartOptions, axes: AxesOptions) -> Self {
        Self {
            viewport,
            caption: caption.to_owned(),
            series: SmallVec::new(),
            options,
            axes,
        }
    }

    pub fn push_series(&mut self, series: ChartSeries) {
        self.series.push(series);
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn series_labels(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|series| series.label.as_str())
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(
                "figure must contain at least one series".to_owned(),
            ));
        }
        for series in &self.series {
            if series.points.is_empty() {
                return Err(ChartError::InvalidData(format!(
                    "series '{}' must contain at least one row",
                    series.label
                )));
            }
            for point in &series.points {
                if let Some(value) = point.value {
                    if !value.is_finite() {
                        return Err(ChartError::InvalidData(format!(
                            "series '{}' contains a non-finite value",
                            series.label
                        )));
                    }
                }
            }
        }
        self.options.validate()?;
        self.axes.validate()
    }
}
