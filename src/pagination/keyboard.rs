//! Pure key classification for page navigation.
//!
//! `determine_nav_action` maps a key event plus a small context to the page
//! move it requests; `Paginator::handle_key` is the thin shell that applies
//! it. Arrow keys are left alone while an editable control has focus so
//! normal text editing keeps working.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::surface::Focus;

/// Page moves reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Go back one page (`ArrowLeft`).
    PreviousPage,
    /// Go forward one page (`ArrowRight`).
    NextPage,
}

/// Context needed to decide whether a navigation key applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavKeyContext {
    pub focus: Focus,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Determine which page move a key triggers, if any.
///
/// Returns `None` for unrelated keys, for key releases, when an editable
/// control has focus, and at the respective boundary.
pub fn determine_nav_action(key: KeyEvent, ctx: NavKeyContext) -> Option<NavAction> {
    if key.kind == KeyEventKind::Release || ctx.focus.is_editable() {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Left if ctx.has_previous => Some(NavAction::PreviousPage),
        KeyCode::Right if ctx.has_next => Some(NavAction::NextPage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn middle_page() -> NavKeyContext {
        NavKeyContext {
            focus: Focus::Body,
            has_previous: true,
            has_next: true,
        }
    }

    #[test]
    fn left_goes_back() {
        assert_eq!(
            determine_nav_action(key(KeyCode::Left), middle_page()),
            Some(NavAction::PreviousPage)
        );
    }

    #[test]
    fn right_goes_forward() {
        assert_eq!(
            determine_nav_action(key(KeyCode::Right), middle_page()),
            Some(NavAction::NextPage)
        );
    }

    #[test]
    fn suppressed_while_editing() {
        for focus in [Focus::TextInput, Focus::TextArea, Focus::Select] {
            let ctx = NavKeyContext {
                focus,
                ..middle_page()
            };
            assert_eq!(determine_nav_action(key(KeyCode::Left), ctx), None);
            assert_eq!(determine_nav_action(key(KeyCode::Right), ctx), None);
        }
    }

    #[test]
    fn no_op_at_boundaries() {
        let first = NavKeyContext {
            has_previous: false,
            ..middle_page()
        };
        let last = NavKeyContext {
            has_next: false,
            ..middle_page()
        };
        assert_eq!(determine_nav_action(key(KeyCode::Left), first), None);
        assert_eq!(determine_nav_action(key(KeyCode::Right), last), None);
    }

    #[test]
    fn ignores_modified_arrows() {
        let ctrl_left = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(determine_nav_action(ctrl_left, middle_page()), None);
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(determine_nav_action(key(KeyCode::Up), middle_page()), None);
        assert_eq!(
            determine_nav_action(key(KeyCode::Char('l')), middle_page()),
            None
        );
    }
}
