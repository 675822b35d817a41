use portfolio_core::content::ctf::CtfCategory;
use portfolio_core::content::skills::SkillCategory;

/// Tab and selection state of the content panels.
#[derive(Debug, Default)]
pub struct PanelState {
    pub(in crate::app) skill_category: SkillCategory,
    pub(in crate::app) ctf_category: CtfCategory,
    pub(in crate::app) selected_project: usize,
    pub(in crate::app) open_article: Option<u32>,
}
