use crate::error::ChartResult;
use crate::render::{ChartFigure, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates figure content so tests can catch invalid data before
/// a real backend is introduced, and it counts lifecycle calls so tests can
/// check the destroy-before-render contract.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub destroy_count: usize,
    pub last_series_count: usize,
    pub last_caption: String,
    pub live: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, figure: &ChartFigure) -> ChartResult<()> {
        figure.validate()?;
        self.render_count += 1;
        self.last_series_count = figure.series_count();
        self.last_caption = figure.caption.clone();
        self.live = true;
        Ok(())
    }

    fn destroy(&mut self) -> ChartResult<()> {
        self.destroy_count += 1;
        self.live = false;
        Ok(())
    }
}
