use super::super::state::App;
use super::Effect;
use portfolio_core::content::ctf::CtfCategory;
use portfolio_core::content::skills::SkillCategory;
use portfolio_core::content::{blog, projects};
use tracing::{debug, warn};

impl App {
    pub(super) fn handle_select_skill_category(&mut self, category: SkillCategory) {
        debug!(category = category.meta().title, "Skill tab selected");
        self.panels.skill_category = category;
    }

    pub(super) fn handle_select_ctf_category(&mut self, category: CtfCategory) {
        debug!(category = category.meta().title, "CTF tab selected");
        self.panels.ctf_category = category;
    }

    pub(super) fn handle_select_project(&mut self, idx: usize) {
        if idx < projects::FEATURED.len() {
            self.panels.selected_project = idx;
        }
    }

    pub(super) fn handle_open_article(&mut self, id: u32, effects: &mut Vec<Effect>) {
        match blog::find(id) {
            Some(article) => {
                debug!(id, title = article.title, "Opening article");
                self.panels.open_article = Some(id);
                effects.push(Effect::ResetArticleScroll);
            }
            None => warn!(id, "Requested unknown article"),
        }
    }

    pub(super) fn handle_close_article(&mut self, effects: &mut Vec<Effect>) {
        if self.panels.open_article.take().is_some() {
            let top = self.page.section_top(portfolio_core::content::PageSection::Blog);
            effects.push(Effect::ScrollTo(top));
        }
    }
}
