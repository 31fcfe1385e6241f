//! Seams to the paginator's external collaborators.
//!
//! The paginator owns no rendering technology and no filter. It talks to:
//! - an [`ItemSource`] once, at construction, to fetch the full item set;
//! - a [`RenderSurface`] on every projection, to show/hide items and draw
//!   or suppress the navigation controls;
//! - optionally a [`VisibilityQuery`], when `refresh` is called without an
//!   explicit visible set.

use super::controls::NavControls;

/// Resolves a row-collection identifier to its items.
pub trait ItemSource<I> {
    /// Items behind `id`, in display order, or `None` if `id` names nothing.
    fn resolve(&self, id: &str) -> Option<Vec<I>>;
}

/// Whatever draws item visibility and navigation controls.
pub trait RenderSurface<I> {
    /// Mark `item` as shown or hidden.
    fn set_visible(&mut self, item: &I, visible: bool);

    /// Draw the navigation controls into `container`.
    ///
    /// `None` means the controls are suppressed (single page).
    fn draw_controls(&mut self, container: &str, controls: Option<&NavControls>);

    /// Bring the start of the collection into view after a page change.
    fn scroll_to_top(&mut self) {}
}

/// Answers whether an item is currently eligible under an external filter.
pub trait VisibilityQuery<I> {
    fn is_visible(&self, item: &I) -> bool;
}

impl<I, F> VisibilityQuery<I> for F
where
    F: Fn(&I) -> bool,
{
    fn is_visible(&self, item: &I) -> bool {
        self(item)
    }
}

/// Where keyboard focus currently sits.
///
/// Navigation keys are only honoured while focus is outside editable controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the page body or a non-editable control.
    #[default]
    Body,
    /// A single-line text input.
    TextInput,
    /// A multi-line text area.
    TextArea,
    /// A selection list (e.g. the page-size selector while open).
    Select,
}

impl Focus {
    /// Whether focus is inside a control that consumes arrow keys itself.
    pub fn is_editable(&self) -> bool {
        matches!(self, Focus::TextInput | Focus::TextArea | Focus::Select)
    }
}
