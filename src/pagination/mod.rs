//! Client-side pagination.
//!
//! - [`arithmetic`]: pure page math and compact page labels
//! - [`state`]: current page and page size
//! - [`controls`]: the navigation-bar view model
//! - [`keyboard`]: arrow-key classification
//! - [`surface`]: traits for the row source, render surface and filter
//! - [`paginator`]: the state machine tying them together

pub mod arithmetic;
pub mod controls;
pub mod keyboard;
pub mod paginator;
pub mod state;
pub mod surface;

pub use arithmetic::{
    clamp_page, compact_page_labels, item_summary, page_range, page_slice, total_pages,
    ItemSummary, PageLabel, DEFAULT_WINDOW_DELTA,
};
pub use controls::{
    build_controls, ControlAction, NavButton, NavButtonKind, NavControls, PageControl,
    PageSizeOption,
};
pub use keyboard::{determine_nav_action, NavAction, NavKeyContext};
pub use paginator::{PageChangeCallback, Paginator, PaginatorOptions};
pub use state::{PaginationState, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZES};
pub use surface::{Focus, ItemSource, RenderSurface, VisibilityQuery};
