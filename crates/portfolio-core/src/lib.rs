//! GUI-independent pieces of the portfolio viewer.
//!
//! The `iced` front end owns the window and feeds scroll metrics into the
//! types here; everything in this crate is testable without a renderer.

pub mod cancellation;
pub mod content;
pub mod egg;
pub mod layout;
pub mod progress;
pub mod rain;
pub mod tracker;

pub use layout::StackedLayout;
pub use progress::ScrollProgress;
pub use tracker::{
    Extent, FrameSampler, PastEndBehavior, Section, SectionChange, SectionGeometry,
    SectionTracker, ViewportMetrics,
};
