use super::super::state::App;
use portfolio_core::{ScrollProgress, ViewportMetrics};
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_scrolled(&mut self, metrics: ViewportMetrics) {
        let metrics = metrics.sanitized();
        self.page.progress = ScrollProgress::from_metrics(metrics);
        self.page.nav_solid = metrics.scroll_offset > self.config.nav_solid_after_px;
        trace!(
            offset = metrics.scroll_offset,
            progress = self.page.progress.value(),
            "Page scrolled"
        );

        let page = &mut self.page;
        if self.config.sample_per_frame {
            page.tracker.sample(metrics, &page.layout, &mut page.sampler);
        } else {
            page.tracker.handle_scroll(metrics, &page.layout);
        }
    }

    pub(super) fn handle_frame(&mut self) {
        let page = &mut self.page;
        page.tracker.apply_sampled(&mut page.sampler);
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        if width == self.page.viewport_width && height == self.page.viewport_height {
            return;
        }
        debug!(width, height, "Window resized; rebuilding page layout");
        self.config.window_width = width;
        self.config.window_height = height;
        self.page.viewport_width = width;
        self.page.relayout(height);
        if let Some(rain) = self.rain.as_mut() {
            rain.resize(width, height);
        }
    }
}
