//! Application state for the explorer.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use super::actions::{determine_app_action, AppAction, AppActionContext};
use super::surface::TerminalSurface;
use super::view;
use crate::pagination::{Focus, Paginator};
use crate::rows::Row;
use crate::search::{filter_rows, SearchState};

/// Explorer state: the paginator plus the search box that filters it.
pub struct PagerApp {
    title: String,
    pager: Paginator<Row, TerminalSurface>,
    search: SearchState,
    focus: Focus,
}

impl PagerApp {
    pub fn new(title: impl Into<String>, pager: Paginator<Row, TerminalSurface>) -> Self {
        Self {
            title: title.into(),
            pager,
            search: SearchState::new(),
            focus: Focus::Body,
        }
    }

    /// Handle keyboard input; returns true if the explorer should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.pager.handle_key(key, self.focus) {
            return false;
        }

        let ctx = AppActionContext { focus: self.focus };
        match determine_app_action(key, ctx) {
            Some(action) => self.execute(action),
            None => false,
        }
    }

    /// Execute an action (imperative shell).
    fn execute(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Quit => return true,

            AppAction::FirstPage => self.pager.first_page(),
            AppAction::LastPage => self.pager.last_page(),
            AppAction::PreviousPage => self.pager.previous_page(),
            AppAction::NextPage => self.pager.next_page(),

            AppAction::GrowPageSize => {
                let size = self.pager.config().next_page_size(self.pager.page_size());
                self.pager.set_page_size(size);
            }
            AppAction::ShrinkPageSize => {
                let size = self
                    .pager
                    .config()
                    .previous_page_size(self.pager.page_size());
                self.pager.set_page_size(size);
            }

            AppAction::Scroll(delta) => self.pager.surface_mut().scroll_by(delta),

            AppAction::EnterSearch => self.focus = Focus::TextInput,
            AppAction::ExitSearch => self.focus = Focus::Body,

            AppAction::SearchInput(c) => {
                self.search.push_char(c);
                self.apply_search();
            }
            AppAction::SearchBackspace => {
                if self.search.pop_char() {
                    self.apply_search();
                }
            }
            AppAction::ClearSearch => {
                if self.search.clear() {
                    self.apply_search();
                }
            }
        }

        false
    }

    /// Hand the filtered rows to the paginator.
    fn apply_search(&mut self) {
        let filtered = filter_rows(self.pager.all_items(), self.search.query());
        self.pager.refresh(Some(filtered));
    }

    /// Render the current view
    pub fn render(&self, frame: &mut Frame) {
        view::render(frame, self);
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pager(&self) -> &Paginator<Row, TerminalSurface> {
        &self.pager
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_searching(&self) -> bool {
        self.focus.is_editable()
    }
}
