use crate::pagination::{NavControls, RenderSurface};

/// What a surface displays after a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection<I> {
    pub shown: Vec<I>,
    pub container: Option<String>,
    pub controls: Option<NavControls>,
}

/// A render surface that remembers what it was told.
#[derive(Debug, Clone)]
pub struct RecordingSurface<I> {
    shown: Vec<I>,
    container: Option<String>,
    last_controls: Option<Option<NavControls>>,
    hide_count: usize,
    draw_count: usize,
    scroll_count: usize,
}

impl<I> Default for RecordingSurface<I> {
    fn default() -> Self {
        Self {
            shown: Vec::new(),
            container: None,
            last_controls: None,
            hide_count: 0,
            draw_count: 0,
            scroll_count: 0,
        }
    }
}

impl<I: Clone + PartialEq> RecordingSurface<I> {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items currently shown, in the order they were shown.
    pub fn shown(&self) -> &[I] {
        &self.shown
    }

    /// Container the controls were last drawn into.
    pub fn container(&self) -> Option<&str> {
        self.container.as_deref()
    }

    /// Controls from the last draw: `None` before any draw, `Some(None)`
    /// when the last draw suppressed them.
    pub fn last_controls(&self) -> Option<Option<&NavControls>> {
        self.last_controls.as_ref().map(Option::as_ref)
    }

    /// Number of `set_visible(_, false)` calls so far.
    pub fn hide_count(&self) -> usize {
        self.hide_count
    }

    /// Number of control draws (including suppressions) so far.
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    /// Number of scroll-to-top requests so far.
    pub fn scroll_count(&self) -> usize {
        self.scroll_count
    }

    /// Snapshot of everything visible on the surface.
    pub fn projection(&self) -> Projection<I> {
        Projection {
            shown: self.shown.clone(),
            container: self.container.clone(),
            controls: self.last_controls.clone().flatten(),
        }
    }
}

impl<I: Clone + PartialEq> RenderSurface<I> for RecordingSurface<I> {
    fn set_visible(&mut self, item: &I, visible: bool) {
        if visible {
            if !self.shown.contains(item) {
                self.shown.push(item.clone());
            }
        } else {
            self.hide_count += 1;
            self.shown.retain(|shown| shown != item);
        }
    }

    fn draw_controls(&mut self, container: &str, controls: Option<&NavControls>) {
        self.draw_count += 1;
        self.container = Some(container.to_owned());
        self.last_controls = Some(controls.cloned());
    }

    fn scroll_to_top(&mut self) {
        self.scroll_count += 1;
    }
}
