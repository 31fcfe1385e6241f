//! Pure action determination for explorer keyboard handling.
//!
//! Arrow-key page moves are classified by the paginator itself
//! (`pagination::keyboard`); this module covers every other key. The pure
//! core maps key + context to an [`AppAction`]; `PagerApp` executes it.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::pagination::Focus;

/// Actions that can be triggered from the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the explorer.
    Quit,

    /// Go to the first page.
    FirstPage,

    /// Go to the last page.
    LastPage,

    /// Go back one page (`PageUp`).
    PreviousPage,

    /// Go forward one page (`PageDown`).
    NextPage,

    /// Cycle to the next configured page size.
    GrowPageSize,

    /// Cycle to the previous configured page size.
    ShrinkPageSize,

    /// Scroll the current page by the given number of lines.
    Scroll(isize),

    /// Move focus into the search box.
    EnterSearch,

    /// Move focus out of the search box, keeping the query.
    ExitSearch,

    /// Append a character to the query.
    SearchInput(char),

    /// Delete the last query character.
    SearchBackspace,

    /// Clear the query.
    ClearSearch,
}

/// Context needed to determine an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppActionContext {
    pub focus: Focus,
}

/// Pure function: determine which action a key triggers.
///
/// Returns `None` for keys with no binding in the current focus.
pub fn determine_app_action(key: KeyEvent, ctx: AppActionContext) -> Option<AppAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if ctx.focus.is_editable() {
        return determine_search_action(key);
    }

    match key.code {
        KeyCode::Char('q') => Some(AppAction::Quit),

        KeyCode::Home | KeyCode::Char('g') => Some(AppAction::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(AppAction::LastPage),
        KeyCode::PageUp => Some(AppAction::PreviousPage),
        KeyCode::PageDown => Some(AppAction::NextPage),

        KeyCode::Char('+') | KeyCode::Char('=') => Some(AppAction::GrowPageSize),
        KeyCode::Char('-') => Some(AppAction::ShrinkPageSize),

        KeyCode::Up | KeyCode::Char('k') => Some(AppAction::Scroll(-1)),
        KeyCode::Down | KeyCode::Char('j') => Some(AppAction::Scroll(1)),

        KeyCode::Char('/') => Some(AppAction::EnterSearch),

        _ => None,
    }
}

fn determine_search_action(key: KeyEvent) -> Option<AppAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('u') => Some(AppAction::ClearSearch),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(AppAction::ExitSearch),
        KeyCode::Backspace => Some(AppAction::SearchBackspace),
        KeyCode::Char(c) => Some(AppAction::SearchInput(c)),
        _ => None,
    }
}
