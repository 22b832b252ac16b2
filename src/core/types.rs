use serde::{Deserialize, Serialize};

/// Side padding the hosting page reserves around the chart panel, in pixels.
pub const PANEL_SIDE_INSET: u32 = 30;

/// Vertical chrome (header, toolbars, footer) above and below the chart, in pixels.
pub const WINDOW_CHROME_INSET: u32 = 300;

/// Smallest plot width the engine will accept after insets are applied.
pub const MIN_PLOT_WIDTH: u32 = 200;

/// Smallest plot height the engine will accept after insets are applied.
pub const MIN_PLOT_HEIGHT: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Host window measurements the plot surface is derived from.
///
/// The hosting layout reserves fixed side padding around the chart panel and
/// fixed vertical chrome for navigation and summaries. Tiny windows clamp to
/// a floor instead of collapsing the viewport to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMetrics {
    pub panel_width: u32,
    pub window_height: u32,
}

impl ContainerMetrics {
    #[must_use]
    pub fn new(panel_width: u32, window_height: u32) -> Self {
        Self {
            panel_width,
            window_height,
        }
    }

    #[must_use]
    pub fn plot_viewport(self) -> Viewport {
        let width = self
            .panel_width
            .saturating_sub(PANEL_SIDE_INSET)
            .max(MIN_PLOT_WIDTH);
        let height = self
            .window_height
            .saturating_sub(WINDOW_CHROME_INSET)
            .max(MIN_PLOT_HEIGHT);
        Viewport::new(width, height)
    }
}
