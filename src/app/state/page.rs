use super::constants::{FOOTER_HEIGHT_PX, section_height};
use crate::config::AppConfig;
use anyhow::{Context, Result};
use portfolio_core::content::PageSection;
use portfolio_core::{FrameSampler, ScrollProgress, SectionTracker, StackedLayout};

/// Scroll-driven page model: geometry, active section and progress.
pub struct PageState {
    pub(in crate::app) tracker: SectionTracker,
    pub(in crate::app) layout: StackedLayout,
    pub(in crate::app) progress: ScrollProgress,
    pub(in crate::app) sampler: FrameSampler,
    pub(in crate::app) nav_solid: bool,
    pub(in crate::app) viewport_width: f32,
    pub(in crate::app) viewport_height: f32,
}

impl PageState {
    pub(in crate::app) fn new(config: &AppConfig) -> Result<Self> {
        let tracker = SectionTracker::new(PageSection::tracker_sections())
            .context("Failed to build the section tracker")?
            .with_probe_fraction(config.probe_fraction)
            .with_past_end(config.past_end);
        let viewport_height = config.window_height;
        Ok(PageState {
            tracker,
            layout: build_layout(viewport_height),
            progress: ScrollProgress::START,
            sampler: FrameSampler::new(),
            nav_solid: false,
            viewport_width: config.window_width,
            viewport_height,
        })
    }

    pub(in crate::app) fn active_section(&self) -> PageSection {
        PageSection::from_id(self.tracker.active_id()).unwrap_or(PageSection::Hero)
    }

    pub(in crate::app) fn relayout(&mut self, viewport_height: f32) {
        self.viewport_height = viewport_height;
        self.layout = build_layout(viewport_height);
    }

    pub(in crate::app) fn section_top(&self, section: PageSection) -> f32 {
        self.layout.top_of(section.id()).unwrap_or(0.0)
    }

    pub(in crate::app) fn section_height(&self, section: PageSection) -> f32 {
        self.layout
            .height_of(section.id())
            .unwrap_or_else(|| section_height(section, self.viewport_height))
    }
}

fn build_layout(viewport_height: f32) -> StackedLayout {
    StackedLayout::new(
        PageSection::ALL
            .iter()
            .map(|section| (section.id(), section_height(*section, viewport_height))),
    )
    .with_trailing(FOOTER_HEIGHT_PX)
}
