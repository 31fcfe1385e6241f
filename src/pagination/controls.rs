//! Navigation-control view model.
//!
//! `build_controls` turns pagination state into a description of what the
//! navigation bar shows. Every interactive element carries the
//! [`ControlAction`] it triggers, so a surface never has to look its owning
//! paginator up anywhere: it hands the action back to whoever owns the
//! paginator, which dispatches it with `Paginator::activate`.

use serde::Serialize;

use super::arithmetic::{compact_page_labels, item_summary, ItemSummary, PageLabel};
use super::state::PaginationState;

/// What activating a control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "action", content = "value")]
pub enum ControlAction {
    /// Navigate to a page.
    GoToPage(usize),
    /// Switch the page size.
    SetPageSize(usize),
}

/// The four boundary buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavButtonKind {
    First,
    Previous,
    Next,
    Last,
}

impl NavButtonKind {
    /// Glyph drawn for the button.
    pub fn glyph(&self) -> &'static str {
        match self {
            NavButtonKind::First => "««",
            NavButtonKind::Previous => "‹",
            NavButtonKind::Next => "›",
            NavButtonKind::Last => "»»",
        }
    }
}

/// A first/previous/next/last button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavButton {
    pub kind: NavButtonKind,
    pub action: ControlAction,
    /// Disabled at the respective boundary.
    pub enabled: bool,
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControl {
    pub label: PageLabel,
    /// `None` for the active page and for ellipses.
    pub action: Option<ControlAction>,
}

impl PageControl {
    /// Whether this entry is the current page.
    pub fn is_active(&self) -> bool {
        matches!(self.label, PageLabel::Page(_)) && self.action.is_none()
    }
}

/// One option in the page-size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSizeOption {
    pub size: usize,
    pub selected: bool,
    pub action: ControlAction,
}

/// Everything the navigation bar displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavControls {
    pub summary: ItemSummary,
    pub current_page: usize,
    pub total_pages: usize,
    pub first: NavButton,
    pub previous: NavButton,
    pub next: NavButton,
    pub last: NavButton,
    pub pages: Vec<PageControl>,
    pub page_sizes: Vec<PageSizeOption>,
}

impl NavControls {
    /// Buttons and page strip in display order.
    pub fn buttons(&self) -> [NavButton; 4] {
        [self.first, self.previous, self.next, self.last]
    }

    /// Render the page strip as text, bracketing the active page.
    pub fn page_strip(&self) -> String {
        self.pages
            .iter()
            .map(|control| {
                if control.is_active() {
                    format!("[{}]", control.label)
                } else {
                    control.label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Build the navigation controls for the current state.
///
/// Pure: the result depends only on the arguments.
pub fn build_controls(
    state: &PaginationState,
    visible_count: usize,
    page_sizes: &[usize],
    delta: usize,
) -> NavControls {
    let current = state.current_page();
    let total = state.total_pages(visible_count);
    let has_previous = state.has_previous();
    let has_next = state.has_next(visible_count);

    let button = |kind, target: usize, enabled| NavButton {
        kind,
        action: ControlAction::GoToPage(target),
        enabled,
    };

    let pages = compact_page_labels(current, total, delta)
        .into_iter()
        .map(|label| PageControl {
            label,
            action: match label {
                PageLabel::Page(page) if page != current => Some(ControlAction::GoToPage(page)),
                _ => None,
            },
        })
        .collect();

    let page_sizes = page_sizes
        .iter()
        .map(|&size| PageSizeOption {
            size,
            selected: size == state.page_size(),
            action: ControlAction::SetPageSize(size),
        })
        .collect();

    NavControls {
        summary: item_summary(visible_count, current, state.page_size()),
        current_page: current,
        total_pages: total,
        first: button(NavButtonKind::First, 1, has_previous),
        previous: button(NavButtonKind::Previous, current.saturating_sub(1).max(1), has_previous),
        next: button(NavButtonKind::Next, (current + 1).min(total), has_next),
        last: button(NavButtonKind::Last, total, has_next),
        pages,
        page_sizes,
    }
}
