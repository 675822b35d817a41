use portfolio_core::ViewportMetrics;
use portfolio_core::content::PageSection;
use portfolio_core::content::contact::InquiryType;
use portfolio_core::content::ctf::CtfCategory;
use portfolio_core::content::skills::SkillCategory;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    Tick(Instant),
    RainTick,
    /// Fires while the egg runs so the window title picks up the new hash.
    RefreshTitle,
    Frame(Instant),
    Scrolled(ViewportMetrics),
    WindowResized {
        width: f32,
        height: f32,
    },
    NavigateTo(PageSection),
    NextSection,
    PreviousSection,
    SelectSkillCategory(SkillCategory),
    SelectCtfCategory(CtfCategory),
    SelectProject(usize),
    OpenArticle(u32),
    CloseArticle,
    CopyContact(usize),
    ContactFieldChanged(ContactField, String),
    InquirySelected(InquiryType),
    SubmitContact,
    ToggleTheme,
    ToggleEgg,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    SafeQuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}
