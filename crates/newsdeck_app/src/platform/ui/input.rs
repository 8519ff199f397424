//! Keyboard handling: maps terminal key events onto state-machine messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newsdeck_core::{Msg, View};

/// Whether keystrokes navigate or edit the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Search,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Dispatch(Msg),
    EnterSearch,
    LeaveSearch,
    Quit,
}

pub fn handle_key(mode: InputMode, key: KeyEvent, search: &str) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }
    match mode {
        InputMode::Browse => browse_key(key),
        InputMode::Search => search_key(key, search),
    }
}

fn browse_key(key: KeyEvent) -> Option<InputAction> {
    match key.code {
        KeyCode::Char('q') => Some(InputAction::Quit),
        KeyCode::Char('/') => Some(InputAction::EnterSearch),
        KeyCode::Char('j') | KeyCode::Down => Some(InputAction::Dispatch(Msg::SelectNext)),
        KeyCode::Char('k') | KeyCode::Up => Some(InputAction::Dispatch(Msg::SelectPrev)),
        KeyCode::Enter | KeyCode::Char(' ') => {
            Some(InputAction::Dispatch(Msg::ToggleSelectedFavorite))
        }
        KeyCode::Char('1') | KeyCode::Char('h') => {
            Some(InputAction::Dispatch(Msg::ViewSelected(View::Home)))
        }
        KeyCode::Char('2') | KeyCode::Char('t') => {
            Some(InputAction::Dispatch(Msg::ViewSelected(View::Trending)))
        }
        KeyCode::Char('3') | KeyCode::Char('f') => {
            Some(InputAction::Dispatch(Msg::ViewSelected(View::Favorites)))
        }
        _ => None,
    }
}

fn search_key(key: KeyEvent, search: &str) -> Option<InputAction> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => Some(InputAction::LeaveSearch),
        KeyCode::Backspace => {
            let mut text = search.to_string();
            text.pop();
            Some(InputAction::Dispatch(Msg::SearchChanged(text)))
        }
        KeyCode::Char(c) => Some(InputAction::Dispatch(Msg::SearchChanged(format!(
            "{search}{c}"
        )))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn browse_keys_navigate_views() {
        assert_eq!(
            handle_key(InputMode::Browse, key(KeyCode::Char('t')), ""),
            Some(InputAction::Dispatch(Msg::ViewSelected(View::Trending)))
        );
        assert_eq!(
            handle_key(InputMode::Browse, key(KeyCode::Char('3')), ""),
            Some(InputAction::Dispatch(Msg::ViewSelected(View::Favorites)))
        );
    }

    #[test]
    fn search_mode_edits_text() {
        assert_eq!(
            handle_key(InputMode::Search, key(KeyCode::Char('a')), "re"),
            Some(InputAction::Dispatch(Msg::SearchChanged("rea".to_string())))
        );
        assert_eq!(
            handle_key(InputMode::Search, key(KeyCode::Backspace), "re"),
            Some(InputAction::Dispatch(Msg::SearchChanged("r".to_string())))
        );
        assert_eq!(
            handle_key(InputMode::Search, key(KeyCode::Esc), "re"),
            Some(InputAction::LeaveSearch)
        );
    }

    #[test]
    fn search_mode_captures_view_shortcut_letters() {
        // 't' must type into the search box, not switch views.
        assert_eq!(
            handle_key(InputMode::Search, key(KeyCode::Char('t')), ""),
            Some(InputAction::Dispatch(Msg::SearchChanged("t".to_string())))
        );
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let key = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(handle_key(InputMode::Browse, key, ""), Some(InputAction::Quit));
        assert_eq!(handle_key(InputMode::Search, key, ""), Some(InputAction::Quit));
    }
}
