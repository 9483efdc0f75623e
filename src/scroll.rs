//! Reveal-on-scroll and scroll-spy.
//!
//! Both concerns are driven by `ViewportObserver`s: something that watches
//! targets against a root rectangle and reports threshold crossings. The
//! coordinator owns one observer per concern and decides when they are armed.

use std::collections::HashSet;

use tracing::debug;

use crate::page::{ElementId, HEADER_OFFSET, PageLayout, SectionId, UNITS_PER_ROW};

/// Visible window onto the document, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub top: u32,
    pub height: u32,
    /// Destination of an in-progress smooth scroll.
    pub target: Option<u32>,
}

impl Viewport {
    pub fn new(height: u32) -> Self {
        Self {
            top: 0,
            height,
            target: None,
        }
    }

    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    pub fn jump_to(&mut self, top: u32, max: u32) {
        self.top = top.min(max);
        self.target = None;
    }

    pub fn animate_to(&mut self, top: u32, max: u32) {
        let top = top.min(max);
        self.target = if top == self.top { None } else { Some(top) };
    }

    /// Manual scrolling cancels any animation.
    pub fn scroll_by(&mut self, delta: i64, max: u32) {
        let next = (self.top as i64 + delta).clamp(0, max as i64);
        self.top = next as u32;
        self.target = None;
    }

    /// Advances a smooth scroll by one tick. Returns whether the viewport moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.top);
        let stride = (distance / 3).max(UNITS_PER_ROW).min(distance);
        if target > self.top {
            self.top += stride;
        } else {
            self.top -= stride;
        }
        if self.top == target {
            self.target = None;
        }
        true
    }

    pub fn clamp(&mut self, max: u32) {
        self.top = self.top.min(max);
        self.target = self.target.map(|t| t.min(max));
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }
}

/// Root shape and threshold for an observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserveConfig {
    pub threshold: f32,
    pub root_margin_top: u32,
    /// Fraction of the viewport height cut off the bottom of the root.
    pub root_margin_bottom: f32,
}

impl ObserveConfig {
    pub const REVEAL: ObserveConfig = ObserveConfig {
        threshold: 0.1,
        root_margin_top: 0,
        root_margin_bottom: 0.0,
    };

    pub const SCROLL_SPY: ObserveConfig = ObserveConfig {
        threshold: 0.4,
        root_margin_top: HEADER_OFFSET,
        root_margin_bottom: 0.5,
    };

    /// Root band `[top, bottom)` for a viewport.
    pub fn root(&self, viewport: &Viewport) -> (u32, u32) {
        let cut = (viewport.height as f32 * self.root_margin_bottom) as u32;
        let top = viewport.top + self.root_margin_top;
        let bottom = viewport.bottom().saturating_sub(cut).max(top);
        (top, bottom)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Element(ElementId),
    Section(SectionId),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityEntry {
    pub target: Target,
    pub ratio: f32,
    pub meets_threshold: bool,
}

/// Watches targets against the viewport and reports threshold crossings.
pub trait ViewportObserver {
    fn observe(&mut self, target: Target);

    fn disconnect(&mut self);

    fn is_observing(&self) -> bool;

    /// Entries for targets whose threshold state changed since the last call.
    /// A freshly observed target always produces one entry.
    fn take_records(&mut self, layout: &PageLayout, viewport: &Viewport) -> Vec<VisibilityEntry>;
}

/// Observer that intersects layout extents with the root band.
pub struct GeometryObserver {
    config: ObserveConfig,
    targets: Vec<(Target, Option<bool>)>,
}

impl GeometryObserver {
    pub fn new(config: ObserveConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    fn extent(layout: &PageLayout, target: Target) -> Option<(u32, u32)> {
        match target {
            Target::Element(id) => layout.element(id).map(|el| (el.top, el.height)),
            Target::Section(id) => layout.section(id).map(|span| (span.top, span.height)),
        }
    }

    /// Share of the target inside the root, measured against the smaller of the two.
    fn ratio(&self, layout: &PageLayout, viewport: &Viewport, target: Target) -> f32 {
        let Some((top, height)) = Self::extent(layout, target) else {
            return 0.0;
        };
        let (root_top, root_bottom) = self.config.root(viewport);
        let overlap = (top + height).min(root_bottom).saturating_sub(top.max(root_top));
        let base = height.min(root_bottom - root_top);
        if base == 0 {
            return 0.0;
        }
        overlap as f32 / base as f32
    }
}

impl ViewportObserver for GeometryObserver {
    fn observe(&mut self, target: Target) {
        if !self.targets.iter().any(|(t, _)| *t == target) {
            self.targets.push((target, None));
        }
    }

    fn disconnect(&mut self) {
        self.targets.clear();
    }

    fn is_observing(&self) -> bool {
        !self.targets.is_empty()
    }

    fn take_records(&mut self, layout: &PageLayout, viewport: &Viewport) -> Vec<VisibilityEntry> {
        let ratios: Vec<f32> = self
            .targets
            .iter()
            .map(|(target, _)| self.ratio(layout, viewport, *target))
            .collect();
        let threshold = self.config.threshold;
        let mut records = Vec::new();
        for ((target, last), ratio) in self.targets.iter_mut().zip(ratios) {
            let meets = ratio > 0.0 && ratio >= threshold;
            if *last != Some(meets) {
                *last = Some(meets);
                records.push(VisibilityEntry {
                    target: *target,
                    ratio,
                    meets_threshold: meets,
                });
            }
        }
        records
    }
}

/// Owns the reveal and scroll-spy observers for the landing page.
pub struct ScrollCoordinator<O: ViewportObserver = GeometryObserver> {
    reveal: O,
    spy: O,
    revealed: HashSet<ElementId>,
    armed: Option<Vec<ElementId>>,
    active: Option<SectionId>,
}

impl ScrollCoordinator<GeometryObserver> {
    pub fn new() -> Self {
        Self::with_observers(
            GeometryObserver::new(ObserveConfig::REVEAL),
            GeometryObserver::new(ObserveConfig::SCROLL_SPY),
        )
    }
}

impl Default for ScrollCoordinator<GeometryObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: ViewportObserver> ScrollCoordinator<O> {
    pub fn with_observers(reveal: O, spy: O) -> Self {
        Self {
            reveal,
            spy,
            revealed: HashSet::new(),
            armed: None,
            active: Some(SectionId::Home),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active
    }

    pub fn set_active(&mut self, section: SectionId) {
        self.active = Some(section);
    }

    pub fn is_revealed(&self, id: ElementId) -> bool {
        self.revealed.contains(&id)
    }

    /// Tears down and re-establishes both observers for `layout`.
    /// Blocks that are still present keep their reveal state; removed ones forget it.
    pub fn arm(&mut self, layout: &PageLayout) {
        self.reveal.disconnect();
        self.spy.disconnect();

        let signature = layout.reveal_signature();
        self.revealed.retain(|id| signature.contains(id));
        for id in &signature {
            self.reveal.observe(Target::Element(*id));
        }
        for span in layout.sections() {
            self.spy.observe(Target::Section(span.id));
        }
        debug!(elements = signature.len(), sections = layout.sections().len(), "observers armed");
        self.armed = Some(signature);
    }

    /// Stops observing. The landing blocks are gone, so reveal state goes with them.
    pub fn suspend(&mut self) {
        if self.armed.take().is_some() {
            debug!("observers suspended");
        }
        self.reveal.disconnect();
        self.spy.disconnect();
        self.revealed.clear();
    }

    /// Re-arms when the observed element set changed, then applies pending records.
    pub fn observe_frame(&mut self, layout: &PageLayout, viewport: &Viewport) {
        let stale = match &self.armed {
            Some(signature) => *signature != layout.reveal_signature(),
            None => true,
        };
        if stale {
            self.arm(layout);
        }
        self.evaluate(layout, viewport);
    }

    fn evaluate(&mut self, layout: &PageLayout, viewport: &Viewport) {
        for entry in self.reveal.take_records(layout, viewport) {
            if let (true, Target::Element(id)) = (entry.meets_threshold, entry.target) {
                self.revealed.insert(id);
            }
        }
        for entry in self.spy.take_records(layout, viewport) {
            if let (true, Target::Section(id)) = (entry.meets_threshold, entry.target) {
                if self.active != Some(id) {
                    debug!(section = id.anchor(), ratio = entry.ratio, "scroll-spy");
                }
                self.active = Some(id);
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.reveal.disconnect();
        self.spy.disconnect();
        self.armed = None;
    }
}
