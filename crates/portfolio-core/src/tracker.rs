//! Scroll-driven active section tracking.
//!
//! The tracker owns the ordered list of navigable sections and resolves which
//! of them is "in view" from the current viewport metrics. Resolution probes a
//! single vertical coordinate a third of the way down the viewport, so a
//! section activates once it occupies the upper-middle of the screen rather
//! than only when it is fully visible.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Default fraction of the viewport height added to the scroll offset.
pub const DEFAULT_PROBE_FRACTION: f32 = 1.0 / 3.0;

/// A navigable region of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Vertical extent of a section, half-open: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Locates section anchors at query time.
///
/// Returning `None` means the anchor does not exist; such a section is never
/// selectable.
pub trait SectionGeometry {
    fn extent(&self, id: &str) -> Option<Extent>;
}

impl<F> SectionGeometry for F
where
    F: Fn(&str) -> Option<Extent>,
{
    fn extent(&self, id: &str) -> Option<Extent> {
        self(id)
    }
}

/// Scroll state sampled from the host on each scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_offset: f32,
    pub viewport_height: f32,
    pub content_height: f32,
}

impl ViewportMetrics {
    pub fn new(scroll_offset: f32, viewport_height: f32, content_height: f32) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            content_height,
        }
    }

    /// Replace non-finite or negative values with zero.
    pub fn sanitized(self) -> Self {
        let clean = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        Self {
            scroll_offset: clean(self.scroll_offset),
            viewport_height: clean(self.viewport_height),
            content_height: clean(self.content_height),
        }
    }

    pub fn probe_point(&self, probe_fraction: f32) -> f32 {
        let m = self.sanitized();
        m.scroll_offset + m.viewport_height * probe_fraction
    }

    /// Total distance the page can scroll; zero when content fits.
    pub fn scrollable_height(&self) -> f32 {
        let m = self.sanitized();
        (m.content_height - m.viewport_height).max(0.0)
    }
}

/// What to do when the probe falls below every section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PastEndBehavior {
    /// Keep whatever section was last resolved.
    #[default]
    Retain,
    /// Activate the last declared section that can be located.
    SnapToLast,
}

impl std::fmt::Display for PastEndBehavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PastEndBehavior::Retain => "retain",
            PastEndBehavior::SnapToLast => "snap-to-last",
        };
        write!(f, "{}", label)
    }
}

/// Emitted when the active section changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: usize,
    pub to: usize,
}

pub struct SectionTracker {
    sections: Vec<Section>,
    active: usize,
    probe_fraction: f32,
    past_end: PastEndBehavior,
    attached: bool,
    reported_missing: HashSet<String>,
}

impl SectionTracker {
    /// Build a tracker over `sections` in declaration order.
    ///
    /// The first section is active until the first measurement. The tracker
    /// starts detached.
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        if sections.is_empty() {
            return Err(anyhow!("section tracker needs at least one section"));
        }
        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id.as_str()) {
                return Err(anyhow!("duplicate section id `{}`", section.id));
            }
        }
        Ok(Self {
            sections,
            active: 0,
            probe_fraction: DEFAULT_PROBE_FRACTION,
            past_end: PastEndBehavior::default(),
            attached: false,
            reported_missing: HashSet::new(),
        })
    }

    pub fn with_probe_fraction(mut self, fraction: f32) -> Self {
        self.probe_fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            DEFAULT_PROBE_FRACTION
        };
        self
    }

    pub fn with_past_end(mut self, behavior: PastEndBehavior) -> Self {
        self.past_end = behavior;
        self
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_section(&self) -> &Section {
        &self.sections[self.active]
    }

    pub fn active_id(&self) -> &str {
        &self.active_section().id
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Start reacting to scroll events.
    pub fn attach(&mut self) {
        if !self.attached {
            debug!(sections = self.sections.len(), "Section tracker attached");
        }
        self.attached = true;
    }

    /// Stop reacting to scroll events. Later events are ignored.
    pub fn detach(&mut self) {
        if self.attached {
            debug!("Section tracker detached");
        }
        self.attached = false;
    }

    /// Pure resolution: which section index the metrics select, if any.
    ///
    /// `None` means the probe is outside every locatable section and the
    /// previous value should be kept.
    pub fn resolve(
        &self,
        metrics: ViewportMetrics,
        geometry: &impl SectionGeometry,
    ) -> Option<usize> {
        let probe = metrics.probe_point(self.probe_fraction);

        let mut last_located: Option<usize> = None;
        let mut lowest_bottom = f32::NEG_INFINITY;
        for (idx, section) in self.sections.iter().enumerate() {
            let Some(extent) = geometry.extent(&section.id) else {
                continue;
            };
            if extent.contains(probe) {
                return Some(idx);
            }
            lowest_bottom = lowest_bottom.max(extent.bottom());
            last_located = Some(idx);
        }

        match (self.past_end, last_located) {
            (PastEndBehavior::SnapToLast, Some(idx)) if probe >= lowest_bottom => Some(idx),
            _ => None,
        }
    }

    /// Handle one scroll event. Returns the change when the active section
    /// moved; `None` when detached or unchanged.
    pub fn handle_scroll(
        &mut self,
        metrics: ViewportMetrics,
        geometry: &impl SectionGeometry,
    ) -> Option<SectionChange> {
        if !self.attached {
            return None;
        }
        self.report_missing(geometry);
        let resolved = self.resolve(metrics, geometry)?;
        self.activate(resolved)
    }

    /// Resolve one scroll event into `sampler` without touching the active
    /// section. Pair with [`SectionTracker::apply_sampled`] once per frame.
    pub fn sample(
        &mut self,
        metrics: ViewportMetrics,
        geometry: &impl SectionGeometry,
        sampler: &mut FrameSampler,
    ) {
        if !self.attached {
            return;
        }
        self.report_missing(geometry);
        sampler.record(self.resolve(metrics, geometry));
    }

    /// Apply what `sampler` gathered since the last frame.
    pub fn apply_sampled(&mut self, sampler: &mut FrameSampler) -> Option<SectionChange> {
        let resolved = sampler.take()?;
        if !self.attached {
            return None;
        }
        self.activate(resolved)
    }

    fn activate(&mut self, resolved: usize) -> Option<SectionChange> {
        if resolved == self.active {
            return None;
        }
        let change = SectionChange {
            from: self.active,
            to: resolved,
        };
        self.active = resolved;
        info!(
            from = %self.sections[change.from].id,
            to = %self.sections[change.to].id,
            "Active section changed"
        );
        Some(change)
    }

    fn report_missing(&mut self, geometry: &impl SectionGeometry) {
        for section in &self.sections {
            if geometry.extent(&section.id).is_none()
                && self.reported_missing.insert(section.id.clone())
            {
                warn!(section = %section.id, "Section anchor not found; it will never activate");
            }
        }
    }
}

/// Coalesces scroll events so the active section changes at most once per
/// frame.
///
/// Each event is resolved as it arrives and the last index that hit a section
/// is kept. Events that land outside every section leave it alone, the same
/// way they leave a per-event tracker alone.
#[derive(Debug, Default)]
pub struct FrameSampler {
    pending: bool,
    resolved: Option<usize>,
}

impl FrameSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, resolved: Option<usize>) {
        self.pending = true;
        if resolved.is_some() {
            self.resolved = resolved;
        }
    }

    /// Whether events arrived since the last [`FrameSampler::take`].
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn take(&mut self) -> Option<usize> {
        self.pending = false;
        self.resolved.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::StackedLayout;
    use std::collections::HashMap;

    fn sections(ids: &[&str]) -> Vec<Section> {
        ids.iter().map(|id| Section::new(*id, id.to_uppercase())).collect()
    }

    fn attached(ids: &[&str]) -> SectionTracker {
        let mut tracker = SectionTracker::new(sections(ids)).expect("valid sections");
        tracker.attach();
        tracker
    }

    fn map_geometry(entries: &[(&str, f32, f32)]) -> HashMap<String, Extent> {
        entries
            .iter()
            .map(|(id, top, height)| (id.to_string(), Extent::new(*top, *height)))
            .collect()
    }

    fn lookup(map: &HashMap<String, Extent>) -> impl Fn(&str) -> Option<Extent> + '_ {
        move |id: &str| map.get(id).copied()
    }

    #[test]
    fn rejects_empty_and_duplicate_sections() {
        assert!(SectionTracker::new(Vec::new()).is_err());
        assert!(SectionTracker::new(sections(&["hero", "hero"])).is_err());
    }

    #[test]
    fn defaults_to_first_section_before_measurement() {
        let tracker = SectionTracker::new(sections(&["hero", "about"])).unwrap();
        assert_eq!(tracker.active_id(), "hero");
        assert!(!tracker.is_attached());
    }

    #[test]
    fn hero_about_scenario() {
        let layout = StackedLayout::new([("hero", 800.0), ("about", 600.0)]);
        let mut tracker = attached(&["hero", "about"]);

        tracker.handle_scroll(ViewportMetrics::new(0.0, 900.0, 2000.0), &layout);
        assert_eq!(tracker.active_id(), "hero");

        // probe = 500 + 300 = 800, boundary belongs to the section starting there
        tracker.handle_scroll(ViewportMetrics::new(500.0, 900.0, 2000.0), &layout);
        assert_eq!(tracker.active_id(), "about");

        let change = tracker.handle_scroll(ViewportMetrics::new(1600.0, 900.0, 2000.0), &layout);
        assert_eq!(change, None);
        assert_eq!(tracker.active_id(), "about");
    }

    #[test]
    fn probe_inside_single_extent_selects_it() {
        let layout = StackedLayout::new([("a", 300.0), ("b", 300.0), ("c", 300.0)]);
        let tracker = attached(&["a", "b", "c"]);
        for offset in [0.0f32, 150.0, 420.0, 610.0] {
            let metrics = ViewportMetrics::new(offset, 300.0, 2000.0);
            let probe = metrics.probe_point(DEFAULT_PROBE_FRACTION);
            let expected = ["a", "b", "c"]
                .iter()
                .position(|id| layout.extent(id).unwrap().contains(probe));
            assert_eq!(tracker.resolve(metrics, &layout), expected);
        }
    }

    #[test]
    fn overlapping_extents_prefer_declaration_order() {
        let map = map_geometry(&[("a", 0.0, 500.0), ("b", 100.0, 500.0)]);
        let tracker = attached(&["a", "b"]);
        let resolved = tracker.resolve(ViewportMetrics::new(0.0, 600.0, 1000.0), &lookup(&map));
        assert_eq!(resolved, Some(0));
    }

    #[test]
    fn zero_height_sections_never_match() {
        let map = map_geometry(&[("a", 0.0, 0.0), ("b", 0.0, 400.0)]);
        let tracker = attached(&["a", "b"]);
        let resolved = tracker.resolve(ViewportMetrics::new(0.0, 0.0, 1000.0), &lookup(&map));
        assert_eq!(resolved, Some(1));
    }

    #[test]
    fn downward_scroll_visits_sections_in_order() {
        let ids = ["hero", "about", "projects", "skills", "research"];
        let layout = StackedLayout::new(ids.iter().map(|id| (*id, 700.0)));
        let mut tracker = attached(&ids);
        let mut visited = vec![tracker.active_index()];

        let mut offset = 0.0;
        while offset < 4000.0 {
            if let Some(change) =
                tracker.handle_scroll(ViewportMetrics::new(offset, 900.0, 4400.0), &layout)
            {
                assert_eq!(change.to, change.from + 1, "no skipped sections");
                visited.push(change.to);
            }
            offset += 25.0;
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn missing_anchor_is_never_selected() {
        let map = map_geometry(&[("a", 0.0, 300.0), ("c", 600.0, 300.0)]);
        let mut tracker = attached(&["a", "b", "c"]);
        for offset in (0..900).step_by(50) {
            let metrics = ViewportMetrics::new(offset as f32, 300.0, 900.0);
            tracker.handle_scroll(metrics, &lookup(&map));
            assert_ne!(tracker.active_id(), "b");
        }
        assert_eq!(tracker.active_id(), "c");
    }

    #[test]
    fn snap_to_last_activates_final_section_past_end() {
        let layout = StackedLayout::new([("hero", 800.0), ("about", 600.0), ("contact", 400.0)]);
        let mut tracker =
            attached(&["hero", "about", "contact"]).with_past_end(PastEndBehavior::SnapToLast);
        tracker.handle_scroll(ViewportMetrics::new(0.0, 900.0, 2200.0), &layout);
        assert_eq!(tracker.active_id(), "hero");
        tracker.handle_scroll(ViewportMetrics::new(3000.0, 900.0, 2200.0), &layout);
        assert_eq!(tracker.active_id(), "contact");
    }

    #[test]
    fn snap_to_last_keeps_value_above_first_section() {
        let map = map_geometry(&[("a", 500.0, 300.0), ("b", 800.0, 300.0)]);
        let mut tracker = attached(&["a", "b"]).with_past_end(PastEndBehavior::SnapToLast);
        tracker.handle_scroll(ViewportMetrics::new(700.0, 300.0, 1200.0), &lookup(&map));
        assert_eq!(tracker.active_id(), "b");
        tracker.handle_scroll(ViewportMetrics::new(0.0, 300.0, 1200.0), &lookup(&map));
        assert_eq!(tracker.active_id(), "b");
    }

    #[test]
    fn detached_tracker_ignores_scroll() {
        let layout = StackedLayout::new([("hero", 800.0), ("about", 600.0)]);
        let mut tracker = attached(&["hero", "about"]);
        tracker.detach();
        for offset in [500.0, 900.0, 1200.0] {
            assert_eq!(
                tracker.handle_scroll(ViewportMetrics::new(offset, 900.0, 2000.0), &layout),
                None
            );
        }
        assert_eq!(tracker.active_id(), "hero");
    }

    #[test]
    fn degenerate_metrics_do_not_panic() {
        let layout = StackedLayout::new([("hero", 800.0)]);
        let mut tracker = attached(&["hero"]);
        let metrics = ViewportMetrics::new(f32::NAN, f32::INFINITY, -10.0);
        assert_eq!(tracker.handle_scroll(metrics, &layout), None);
        assert_eq!(metrics.scrollable_height(), 0.0);
    }

    #[test]
    fn frame_sampling_matches_per_event_resolution() {
        let ids = ["hero", "about", "projects"];
        let layout = StackedLayout::new([("hero", 900.0), ("about", 700.0), ("projects", 700.0)]);
        let mut eager = attached(&ids);
        let mut sampled = attached(&ids);
        let mut sampler = FrameSampler::new();

        let bursts: [&[f32]; 3] = [&[10.0, 200.0, 640.0], &[900.0, 1200.0], &[1300.0, 50.0]];
        for burst in bursts {
            for offset in burst {
                let metrics = ViewportMetrics::new(*offset, 900.0, 2600.0);
                eager.handle_scroll(metrics, &layout);
                sampled.sample(metrics, &layout, &mut sampler);
            }
            assert!(sampler.has_pending());
            sampled.apply_sampled(&mut sampler);
            assert!(!sampler.has_pending());
            assert_eq!(eager.active_id(), sampled.active_id());
        }
    }

    #[test]
    fn frame_sampling_keeps_last_hit_when_burst_ends_past_sections() {
        let ids = ["hero", "about"];
        let layout = StackedLayout::new([("hero", 800.0), ("about", 600.0)]).with_trailing(300.0);
        let mut eager = attached(&ids);
        let mut sampled = attached(&ids);
        let mut sampler = FrameSampler::new();

        for offset in [600.0, 1500.0] {
            let metrics = ViewportMetrics::new(offset, 900.0, 1700.0);
            eager.handle_scroll(metrics, &layout);
            sampled.sample(metrics, &layout, &mut sampler);
        }
        let change = sampled.apply_sampled(&mut sampler);

        assert_eq!(eager.active_id(), "about");
        assert_eq!(sampled.active_id(), "about");
        assert_eq!(change, Some(SectionChange { from: 0, to: 1 }));

        // A later burst that only lands in the footer keeps the value.
        sampled.sample(ViewportMetrics::new(1500.0, 900.0, 1700.0), &layout, &mut sampler);
        assert_eq!(sampled.apply_sampled(&mut sampler), None);
        assert_eq!(sampled.active_id(), "about");
        assert!(!sampler.has_pending());
    }

    #[test]
    fn detached_tracker_does_not_sample() {
        let layout = StackedLayout::new([("hero", 800.0), ("about", 600.0)]);
        let mut tracker = SectionTracker::new(sections(&["hero", "about"])).expect("tracker");
        let mut sampler = FrameSampler::new();
        tracker.sample(ViewportMetrics::new(900.0, 900.0, 1400.0), &layout, &mut sampler);
        assert!(!sampler.has_pending());
        assert_eq!(tracker.apply_sampled(&mut sampler), None);
        assert_eq!(tracker.active_id(), "hero");
    }
}
