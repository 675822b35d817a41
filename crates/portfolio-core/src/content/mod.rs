//! Static page content.
//!
//! Every list the page renders lives here as `const` data. Category-style
//! lookups are closed enums so a missing entry is a compile error rather than
//! a blank panel.

pub mod about;
pub mod blog;
pub mod contact;
pub mod ctf;
pub mod hero;
pub mod projects;
pub mod research;
pub mod skills;

use crate::tracker::Section;

/// Highlight colour family used by a category or section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Neon,
    Cyan,
    Purple,
    Pink,
}

/// Display metadata shared by the tabbed category panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// The navigable sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSection {
    Hero,
    About,
    Projects,
    Skills,
    Research,
    Ctf,
    Blog,
    Contact,
}

impl PageSection {
    pub const ALL: [PageSection; 8] = [
        PageSection::Hero,
        PageSection::About,
        PageSection::Projects,
        PageSection::Skills,
        PageSection::Research,
        PageSection::Ctf,
        PageSection::Blog,
        PageSection::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PageSection::Hero => "hero",
            PageSection::About => "about",
            PageSection::Projects => "projects",
            PageSection::Skills => "skills",
            PageSection::Research => "research",
            PageSection::Ctf => "ctf",
            PageSection::Blog => "blog",
            PageSection::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageSection::Hero => "Home",
            PageSection::About => "About",
            PageSection::Projects => "Projects",
            PageSection::Skills => "Skills",
            PageSection::Research => "Research",
            PageSection::Ctf => "CTF",
            PageSection::Blog => "Blog",
            PageSection::Contact => "Contact",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            PageSection::Hero | PageSection::About => Accent::Neon,
            PageSection::Projects | PageSection::Blog => Accent::Cyan,
            PageSection::Skills | PageSection::Contact => Accent::Purple,
            PageSection::Research | PageSection::Ctf => Accent::Pink,
        }
    }

    pub fn from_id(id: &str) -> Option<PageSection> {
        PageSection::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn index(self) -> usize {
        PageSection::ALL
            .iter()
            .position(|section| *section == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Option<PageSection> {
        PageSection::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<PageSection> {
        self.index()
            .checked_sub(1)
            .and_then(|idx| PageSection::ALL.get(idx).copied())
    }

    /// Tracker input for the whole page.
    pub fn tracker_sections() -> Vec<Section> {
        PageSection::ALL
            .iter()
            .map(|section| Section::new(section.id(), section.label()))
            .collect()
    }
}

impl std::fmt::Display for PageSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_are_unique() {
        for section in PageSection::ALL {
            assert_eq!(PageSection::from_id(section.id()), Some(section));
        }
        assert_eq!(PageSection::from_id("footer"), None);
        assert!(crate::tracker::SectionTracker::new(PageSection::tracker_sections()).is_ok());
    }

    #[test]
    fn next_and_previous_follow_page_order() {
        assert_eq!(PageSection::Hero.previous(), None);
        assert_eq!(PageSection::Hero.next(), Some(PageSection::About));
        assert_eq!(PageSection::Ctf.previous(), Some(PageSection::Research));
        assert_eq!(PageSection::Contact.next(), None);
    }
}
