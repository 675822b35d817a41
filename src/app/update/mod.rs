mod appearance;
mod contact;
mod core;
mod navigation;
mod panels;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    ScrollTo(f32),
    ResetArticleScroll,
    CopyToClipboard(String),
    StartEgg,
    StopEgg,
    QuitSafely,
}
