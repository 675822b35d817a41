use super::super::state::App;
use super::Effect;
use portfolio_core::content::PageSection;
use tracing::debug;

impl App {
    pub(super) fn handle_navigate_to(&mut self, section: PageSection, effects: &mut Vec<Effect>) {
        if self.in_splash() {
            return;
        }
        let top = self.page.section_top(section);
        debug!(section = %section.id(), top, "Scrolling to section");
        effects.push(Effect::ScrollTo(top));
    }

    pub(super) fn handle_next_section(&mut self, effects: &mut Vec<Effect>) {
        if let Some(next) = self.page.active_section().next() {
            self.handle_navigate_to(next, effects);
        }
    }

    pub(super) fn handle_previous_section(&mut self, effects: &mut Vec<Effect>) {
        if let Some(previous) = self.page.active_section().previous() {
            self.handle_navigate_to(previous, effects);
        }
    }
}
