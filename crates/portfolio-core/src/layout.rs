//! Stacked section geometry.
//!
//! Sections are laid out top to bottom with no gaps, so each top is the sum
//! of the heights declared before it. The front end renders every section in
//! a fixed-height container built from the same numbers, which keeps the
//! geometry here in sync with what is on screen.

use crate::tracker::{Extent, SectionGeometry};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackedLayout {
    entries: Vec<(String, Extent)>,
    trailing: f32,
}

impl StackedLayout {
    pub fn new<I, S>(heights: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        let mut top = 0.0f32;
        let entries = heights
            .into_iter()
            .map(|(id, height)| {
                let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
                let extent = Extent::new(top, height);
                top += height;
                (id.into(), extent)
            })
            .collect();
        Self {
            entries,
            trailing: 0.0,
        }
    }

    /// Non-section content after the last section (a footer).
    pub fn with_trailing(mut self, height: f32) -> Self {
        self.trailing = if height.is_finite() { height.max(0.0) } else { 0.0 };
        self
    }

    pub fn top_of(&self, id: &str) -> Option<f32> {
        self.extent(id).map(|extent| extent.top)
    }

    pub fn height_of(&self, id: &str) -> Option<f32> {
        self.extent(id).map(|extent| extent.height)
    }

    pub fn sections_height(&self) -> f32 {
        self.entries
            .last()
            .map(|(_, extent)| extent.bottom())
            .unwrap_or(0.0)
    }

    pub fn total_height(&self) -> f32 {
        self.sections_height() + self.trailing
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SectionGeometry for StackedLayout {
    fn extent(&self, id: &str) -> Option<Extent> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, extent)| *extent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tops_are_cumulative() {
        let layout = StackedLayout::new([("hero", 900.0), ("about", 1200.0), ("projects", 1400.0)])
            .with_trailing(160.0);
        assert_eq!(layout.top_of("hero"), Some(0.0));
        assert_eq!(layout.top_of("about"), Some(900.0));
        assert_eq!(layout.top_of("projects"), Some(2100.0));
        assert_eq!(layout.sections_height(), 3500.0);
        assert_eq!(layout.total_height(), 3660.0);
        assert_eq!(layout.top_of("blog"), None);
    }

    #[test]
    fn invalid_heights_collapse_to_zero() {
        let layout = StackedLayout::new([("a", f32::NAN), ("b", -40.0), ("c", 100.0)]);
        assert_eq!(layout.height_of("a"), Some(0.0));
        assert_eq!(layout.height_of("b"), Some(0.0));
        assert_eq!(layout.top_of("c"), Some(0.0));
    }
}
