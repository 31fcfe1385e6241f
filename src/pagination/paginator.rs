//! The paginator state machine and its projection onto a render surface.
//!
//! Transitions (`go_to_page`, `set_page_size`, `refresh`) are the only
//! mutators. Each one finishes by projecting the new state: hide every item,
//! show the current page window, draw or suppress the navigation controls,
//! then notify the page-change callback. Projection always clamps the
//! current page first, so a shrunken visible set can never strand it.

use crossterm::event::KeyEvent;

use super::arithmetic::page_slice;
use super::controls::{build_controls, ControlAction, NavControls};
use super::keyboard::{determine_nav_action, NavAction, NavKeyContext};
use super::state::PaginationState;
use super::surface::{Focus, ItemSource, RenderSurface, VisibilityQuery};
use crate::config::PaginatorConfig;
use crate::errors::{PaginatorError, Result};

/// Callback invoked with the current page after every projection.
pub type PageChangeCallback = Box<dyn FnMut(usize)>;

/// Construction options for [`Paginator::attach`].
pub struct PaginatorOptions<I> {
    item_source: String,
    container_target: Option<String>,
    page_size: Option<usize>,
    on_page_change: Option<PageChangeCallback>,
    visibility_query: Option<Box<dyn VisibilityQuery<I>>>,
}

impl<I> PaginatorOptions<I> {
    /// Options for paginating the collection named `item_source`.
    pub fn new(item_source: impl Into<String>) -> Self {
        Self {
            item_source: item_source.into(),
            container_target: None,
            page_size: None,
            on_page_change: None,
            visibility_query: None,
        }
    }

    /// Where the navigation controls are drawn.
    ///
    /// Defaults to `"{item_source}-pagination"`.
    pub fn container_target(mut self, target: impl Into<String>) -> Self {
        self.container_target = Some(target.into());
        self
    }

    /// Initial page size; defaults to the configured page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Called with the current page after every projection.
    pub fn on_page_change(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_page_change = Some(Box::new(callback));
        self
    }

    /// Filter consulted by `refresh(None)`.
    pub fn visibility_query(mut self, query: impl VisibilityQuery<I> + 'static) -> Self {
        self.visibility_query = Some(Box::new(query));
        self
    }

    /// The item source identifier.
    pub fn item_source(&self) -> &str {
        &self.item_source
    }
}

/// Client-side paginator over an owned item set.
pub struct Paginator<I, S> {
    all_items: Vec<I>,
    visible: Vec<I>,
    state: PaginationState,
    config: PaginatorConfig,
    container: String,
    surface: S,
    controls: Option<NavControls>,
    on_page_change: Option<PageChangeCallback>,
    visibility_query: Option<Box<dyn VisibilityQuery<I>>>,
}

impl<I, S> Paginator<I, S>
where
    I: Clone + PartialEq,
    S: RenderSurface<I>,
{
    /// Resolve the item source, build the paginator and project page one.
    ///
    /// Fails without creating anything if the configuration is invalid, the
    /// item source does not resolve, or the page size is not allowed.
    pub fn attach(
        source: &impl ItemSource<I>,
        options: PaginatorOptions<I>,
        config: PaginatorConfig,
        surface: S,
    ) -> Result<Self> {
        config.validate()?;

        let PaginatorOptions {
            item_source,
            container_target,
            page_size,
            on_page_change,
            visibility_query,
        } = options;

        let all_items = source
            .resolve(&item_source)
            .ok_or_else(|| PaginatorError::unresolved(item_source.as_str()))?;

        let page_size = page_size.unwrap_or(config.page_size);
        if !config.allows(page_size) {
            return Err(PaginatorError::InvalidPageSize {
                size: page_size,
                allowed: config.page_sizes.clone(),
            });
        }

        let container = container_target.unwrap_or_else(|| format!("{item_source}-pagination"));
        log::debug!(
            "Attached paginator to `{}` with {} items, page size {}",
            item_source,
            all_items.len(),
            page_size
        );

        let mut paginator = Self {
            visible: all_items.clone(),
            all_items,
            state: PaginationState::new(page_size),
            config,
            container,
            surface,
            controls: None,
            on_page_change,
            visibility_query,
        };
        paginator.project();
        Ok(paginator)
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Navigate to `page`; out-of-range pages are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        if !self.state.go_to(page, self.visible.len()) {
            log::debug!(
                "Ignoring page {} outside 1..={}",
                page,
                self.total_pages()
            );
            return;
        }
        log::debug!("Moved to page {}", page);
        self.surface.scroll_to_top();
        self.project();
    }

    /// Switch page size and return to page one.
    ///
    /// Sizes that are not configured are ignored.
    pub fn set_page_size(&mut self, page_size: usize) {
        if !self.config.allows(page_size) {
            log::debug!(
                "Ignoring page size {} not in {:?}",
                page_size,
                self.config.page_sizes
            );
            return;
        }
        log::debug!("Page size set to {}", page_size);
        self.state.resize(page_size);
        self.project();
    }

    /// Replace the visible set and return to page one.
    ///
    /// Items in an explicit set that are not part of the full set are
    /// dropped.
    ///
    /// With `None`, visibility is pulled from the configured
    /// [`VisibilityQuery`]; without one, every item becomes visible again.
    pub fn refresh(&mut self, visible: Option<Vec<I>>) {
        self.visible = match visible {
            Some(visible) => self.retain_known(visible),
            None => match &self.visibility_query {
                Some(query) => self
                    .all_items
                    .iter()
                    .filter(|item| query.is_visible(item))
                    .cloned()
                    .collect(),
                None => self.all_items.clone(),
            },
        };
        log::debug!(
            "Refreshed visible set: {} of {} items",
            self.visible.len(),
            self.all_items.len()
        );
        self.state.reset();
        self.project();
    }

    /// Keep only items from the full set, in the given order.
    fn retain_known(&self, requested: Vec<I>) -> Vec<I> {
        let requested_len = requested.len();
        let kept: Vec<I> = requested
            .into_iter()
            .filter(|item| self.all_items.contains(item))
            .collect();
        if kept.len() < requested_len {
            log::debug!(
                "Dropped {} visible items missing from the full set",
                requested_len - kept.len()
            );
        }
        kept
    }

    /// Go to page one.
    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    /// Go back one page; no-op on page one.
    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page().saturating_sub(1));
    }

    /// Go forward one page; no-op on the last page.
    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page() + 1);
    }

    /// Go to the last page.
    pub fn last_page(&mut self) {
        self.go_to_page(self.total_pages());
    }

    /// Dispatch the action captured by a navigation control.
    pub fn activate(&mut self, action: ControlAction) {
        match action {
            ControlAction::GoToPage(page) => self.go_to_page(page),
            ControlAction::SetPageSize(size) => self.set_page_size(size),
        }
    }

    /// Apply a navigation key; returns whether it moved the page.
    pub fn handle_key(&mut self, key: KeyEvent, focus: Focus) -> bool {
        let ctx = NavKeyContext {
            focus,
            has_previous: self.state.has_previous(),
            has_next: self.state.has_next(self.visible.len()),
        };

        match determine_nav_action(key, ctx) {
            Some(NavAction::PreviousPage) => {
                self.previous_page();
                true
            }
            Some(NavAction::NextPage) => {
                self.next_page();
                true
            }
            None => false,
        }
    }

    // ------------------------------------------------------------------
    // Projection
    // ------------------------------------------------------------------

    fn clamp_current_page(&mut self) {
        self.state.clamp(self.visible.len());
    }

    fn project(&mut self) {
        self.clamp_current_page();

        for item in &self.all_items {
            self.surface.set_visible(item, false);
        }
        let window = page_slice(
            &self.visible,
            self.state.current_page(),
            self.state.page_size(),
        );
        for item in window {
            self.surface.set_visible(item, true);
        }

        let total = self.total_pages();
        self.controls = (total > 1).then(|| {
            build_controls(
                &self.state,
                self.visible.len(),
                &self.config.page_sizes,
                self.config.window_delta,
            )
        });
        self.surface
            .draw_controls(&self.container, self.controls.as_ref());

        log::trace!(
            "Projected page {}/{} ({} items shown)",
            self.state.current_page(),
            total,
            window.len()
        );

        if let Some(callback) = self.on_page_change.as_mut() {
            callback(self.state.current_page());
        }
    }
}

impl<I, S> Paginator<I, S> {
    /// Current page (1-based).
    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    /// Current page size.
    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    /// Number of pages for the visible set; at least one.
    pub fn total_pages(&self) -> usize {
        self.state.total_pages(self.visible.len())
    }

    /// Number of items eligible under the current filter.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Number of items in the full set.
    pub fn item_count(&self) -> usize {
        self.all_items.len()
    }

    /// The full item set.
    pub fn all_items(&self) -> &[I] {
        &self.all_items
    }

    /// The visible set, across all pages.
    pub fn visible_items(&self) -> &[I] {
        &self.visible
    }

    /// Items on the current page.
    pub fn current_items(&self) -> &[I] {
        page_slice(
            &self.visible,
            self.state.current_page(),
            self.state.page_size(),
        )
    }

    /// The controls drawn by the last projection; `None` when suppressed.
    pub fn controls(&self) -> Option<&NavControls> {
        self.controls.as_ref()
    }

    /// Where the controls are drawn.
    pub fn container_target(&self) -> &str {
        &self.container
    }

    /// Active configuration.
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// The render surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the render surface, e.g. to resize a viewport.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
