//! Input handling and keybindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{AppState, PopupState};

/// Result of handling a key event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// No action, continue.
    None,
    /// Quit the application.
    Quit,
    /// Re-run the record fetch (refresh or error retry).
    Refresh,
}

/// Handles key input and updates state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match state.popup {
        PopupState::QuitConfirm => handle_quit_confirm(state, key),
        PopupState::Help { .. } => handle_help(state, key),
        PopupState::None => handle_normal(state, key),
    }
}

fn handle_quit_confirm(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('y') => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.popup = PopupState::None;
            KeyAction::Quit
        }
        KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
            state.popup = PopupState::None;
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}

fn handle_help(state: &mut AppState, key: KeyEvent) -> KeyAction {
    let PopupState::Help { scroll } = &mut state.popup else {
        return KeyAction::None;
    };
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
        KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
        KeyCode::PageDown => *scroll = scroll.saturating_add(10),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => {
            state.popup = PopupState::None;
        }
        _ => {}
    }
    KeyAction::None
}

/// Handles keys in normal mode.
fn handle_normal(state: &mut AppState, key: KeyEvent) -> KeyAction {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            state.popup = PopupState::QuitConfirm;
            KeyAction::None
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Help popup
        KeyCode::Char('?') => {
            state.popup = PopupState::Help { scroll: 0 };
            KeyAction::None
        }

        // Column cursor and sort
        KeyCode::Left => {
            state.cursor_left();
            KeyAction::None
        }
        KeyCode::Right => {
            state.cursor_right();
            KeyAction::None
        }
        KeyCode::Char('s') | KeyCode::Enter => {
            state.toggle_sort_at_cursor();
            KeyAction::None
        }

        // Filters
        KeyCode::Char('u') => {
            state.cycle_business_unit();
            KeyAction::None
        }
        KeyCode::Char('d') => {
            state.cycle_department();
            KeyAction::None
        }
        KeyCode::Char('v') => {
            state.cycle_vendor();
            KeyAction::None
        }
        KeyCode::Char('m') => {
            state.cycle_month();
            KeyAction::None
        }
        KeyCode::Char('c') => {
            state.clear_filters();
            KeyAction::None
        }

        // Pagination
        KeyCode::Char('n') | KeyCode::PageDown => {
            state.next_page();
            KeyAction::None
        }
        KeyCode::Char('p') | KeyCode::PageUp => {
            state.prev_page();
            KeyAction::None
        }

        // Row selection
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_up();
            KeyAction::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_down();
            KeyAction::None
        }

        // Refresh / retry
        KeyCode::Char('r') => {
            if state.store.loading {
                state.status_message = Some("Fetch already in progress".to_string());
                KeyAction::None
            } else {
                KeyAction::Refresh
            }
        }

        // Sidebar
        KeyCode::Char('b') => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            KeyAction::None
        }

        KeyCode::Esc => {
            state.status_message = None;
            KeyAction::None
        }

        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_records;
    use crate::view::SortField;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new("SAMPLE");
        state.store.fetch_succeeded(sample_records());
        state
    }

    #[test]
    fn quit_requires_confirmation_and_quits_on_qq() {
        let mut state = loaded_state();

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::QuitConfirm);

        let action = handle_key(&mut state, key(KeyCode::Char('q')));
        assert_eq!(action, KeyAction::Quit);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn quit_confirmation_cancels_on_esc() {
        let mut state = loaded_state();

        let _ = handle_key(&mut state, key(KeyCode::Char('q')));
        let action = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(action, KeyAction::None);
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn sort_key_cycles_cursor_column() {
        let mut state = loaded_state();
        let _ = handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(state.cursor_field(), SortField::Product);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.view.sort.field, Some(SortField::Product));
        assert!(state.view.sort.ascending);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert!(!state.view.sort.ascending);

        let _ = handle_key(&mut state, key(KeyCode::Char('s')));
        assert_eq!(state.view.sort.field, None);
    }

    #[test]
    fn filter_keys_cycle_and_clear() {
        let mut state = loaded_state();

        let _ = handle_key(&mut state, key(KeyCode::Char('u')));
        assert_eq!(state.view.filter.business_unit, "Unit A");

        let _ = handle_key(&mut state, key(KeyCode::Char('d')));
        assert_eq!(state.view.filter.department, "Sales");

        let _ = handle_key(&mut state, key(KeyCode::Char('c')));
        assert!(state.view.filter.is_empty());
    }

    #[test]
    fn page_keys_clamp_to_valid_range() {
        let mut state = loaded_state();
        state.view.page.page_size = 2; // 5 records -> 3 pages

        let _ = handle_key(&mut state, key(KeyCode::Char('p')));
        assert_eq!(state.view.page.page, 1);

        for _ in 0..5 {
            let _ = handle_key(&mut state, key(KeyCode::Char('n')));
        }
        assert_eq!(state.view.page.page, 3);
    }

    #[test]
    fn refresh_is_blocked_while_loading() {
        let mut state = loaded_state();

        let action = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(action, KeyAction::Refresh);

        state.store.fetch_started();
        let action = handle_key(&mut state, key(KeyCode::Char('r')));
        assert_eq!(action, KeyAction::None);
        assert!(state.status_message.is_some());
    }

    #[test]
    fn help_popup_opens_scrolls_and_closes() {
        let mut state = loaded_state();

        let _ = handle_key(&mut state, key(KeyCode::Char('?')));
        assert_eq!(state.popup, PopupState::Help { scroll: 0 });

        let _ = handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.popup, PopupState::Help { scroll: 1 });

        let _ = handle_key(&mut state, key(KeyCode::Esc));
        assert_eq!(state.popup, PopupState::None);
    }

    #[test]
    fn sidebar_toggles_with_b() {
        let mut state = loaded_state();
        assert!(!state.sidebar_collapsed);

        let _ = handle_key(&mut state, key(KeyCode::Char('b')));
        assert!(state.sidebar_collapsed);

        let _ = handle_key(&mut state, key(KeyCode::Char('b')));
        assert!(!state.sidebar_collapsed);
    }
}
