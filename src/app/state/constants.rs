use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use portfolio_core::content::PageSection;
use std::time::Duration;

pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
pub(crate) static ARTICLE_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("article-scroll"));

pub(crate) const NAV_HEIGHT_PX: f32 = 64.0;
pub(crate) const MIN_HERO_HEIGHT_PX: f32 = 640.0;
pub(crate) const FOOTER_HEIGHT_PX: f32 = 140.0;
pub(crate) const CONTENT_MAX_WIDTH_PX: f32 = 1100.0;
pub(crate) const TICK_INTERVAL: Duration = Duration::from_millis(100);
pub(crate) const MIN_WINDOW_WIDTH: f32 = 320.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Fixed render height of a section. The hero always fills the viewport.
pub(crate) fn section_height(section: PageSection, viewport_height: f32) -> f32 {
    match section {
        PageSection::Hero => viewport_height.max(MIN_HERO_HEIGHT_PX),
        PageSection::About => 860.0,
        PageSection::Projects => 1080.0,
        PageSection::Skills => 940.0,
        PageSection::Research => 1060.0,
        PageSection::Ctf => 1040.0,
        PageSection::Blog => 1000.0,
        PageSection::Contact => 980.0,
    }
}
