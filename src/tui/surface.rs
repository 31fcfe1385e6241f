//! Render surface backing the explorer.
//!
//! The paginator projects onto this; the view layer then draws whatever it
//! recorded. Besides the shown rows and the controls it keeps a line scroll
//! offset, since a page can be taller than the terminal.

use crate::pagination::{NavControls, RenderSurface};
use crate::rows::Row;

#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    shown: Vec<Row>,
    container: String,
    controls: Option<NavControls>,
    scroll_offset: usize,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows on the current page, in order.
    pub fn shown(&self) -> &[Row] {
        &self.shown
    }

    /// Controls to draw; `None` while suppressed.
    pub fn controls(&self) -> Option<&NavControls> {
        self.controls.as_ref()
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    /// First shown row drawn at the top of the viewport.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset.min(self.shown.len().saturating_sub(1))
    }

    /// Scroll by `delta` lines within the current page.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.shown.len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset().saturating_add_signed(delta).min(max);
    }
}

impl RenderSurface<Row> for TerminalSurface {
    fn set_visible(&mut self, item: &Row, visible: bool) {
        if visible {
            self.shown.push(item.clone());
        } else {
            self.shown.retain(|row| row.number != item.number);
        }
    }

    fn draw_controls(&mut self, container: &str, controls: Option<&NavControls>) {
        if self.container != container {
            self.container = container.to_owned();
        }
        self.controls = controls.cloned();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }
}
