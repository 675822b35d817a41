use crate::tracker::ViewportMetrics;

/// Fraction of the page scrolled so far, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f32);

impl ScrollProgress {
    pub const START: ScrollProgress = ScrollProgress(0.0);
    pub const END: ScrollProgress = ScrollProgress(1.0);

    pub fn from_metrics(metrics: ViewportMetrics) -> Self {
        let scrollable = metrics.scrollable_height();
        if scrollable <= f32::EPSILON {
            return Self::START;
        }
        let offset = metrics.sanitized().scroll_offset;
        Self((offset / scrollable).clamp(0.0, 1.0))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f32) -> ScrollProgress {
        ScrollProgress::from_metrics(ViewportMetrics::new(offset, 800.0, 4800.0))
    }

    #[test]
    fn spans_top_to_bottom() {
        assert_eq!(at(0.0), ScrollProgress::START);
        assert_eq!(at(4000.0), ScrollProgress::END);
        assert_eq!(at(2000.0).percent(), 50);
    }

    #[test]
    fn non_decreasing_while_scrolling_down() {
        let mut previous = ScrollProgress::START;
        for step in 0..=100 {
            let current = at(step as f32 * 45.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn clamps_overscroll() {
        assert_eq!(at(4600.0), ScrollProgress::END);
        assert_eq!(at(-120.0), ScrollProgress::START);
    }

    #[test]
    fn zero_scrollable_height_is_zero() {
        let fits = ViewportMetrics::new(30.0, 900.0, 600.0);
        assert_eq!(ScrollProgress::from_metrics(fits).value(), 0.0);
        let empty = ViewportMetrics::new(0.0, 0.0, 0.0);
        assert_eq!(ScrollProgress::from_metrics(empty).value(), 0.0);
    }
}
