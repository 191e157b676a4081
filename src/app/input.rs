use crate::app::{action::Action, state::AppMode, state::AppState};
use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

/// Rows occupied by the search bar in the top-level layout (header row 0,
/// bar rows 1..=3); a click there opens the panel.
const SEARCH_BAR_ROWS: std::ops::RangeInclusive<u16> = 1..=3;

pub fn map_event_to_action(event: Event, app_state: &AppState<'_>) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match app_state.mode {
        AppMode::Search => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::CloseSearch),
                KeyCode::Enter => Some(Action::CommitQuery),
                KeyCode::Tab => Some(Action::ToggleMode),
                _ => Some(Action::SearchInput(key)),
            },
            Event::Mouse(mouse) => match mouse.kind {
                // Clicking outside the bar closes the panel, like the
                // original's close button.
                MouseEventKind::Down(MouseButton::Left)
                    if !SEARCH_BAR_ROWS.contains(&mouse.row) =>
                {
                    Some(Action::CloseSearch)
                }
                _ => None,
            },
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        },
        AppMode::Help => match event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
                _ => None,
            },
            _ => None,
        },
        AppMode::Browse => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => app_state.keymap.get_action(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left)
                    if SEARCH_BAR_ROWS.contains(&mouse.row) =>
                {
                    Some(Action::OpenSearch)
                }
                _ => None,
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn click(row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 10,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    #[test]
    fn browse_mode_uses_the_keymap() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Char('/')), &state),
            Some(Action::OpenSearch)
        );
    }

    #[test]
    fn search_mode_routes_plain_keys_into_the_input() {
        let mut state = AppState::default();
        state.mode = AppMode::Search;

        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state),
            Some(Action::CloseSearch)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state),
            Some(Action::CommitQuery)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Tab), &state),
            Some(Action::ToggleMode)
        );
        assert!(matches!(
            map_event_to_action(key(KeyCode::Char('d')), &state),
            Some(Action::SearchInput(_))
        ));
    }

    #[test]
    fn clicking_the_bar_opens_and_clicking_away_closes() {
        let mut state = AppState::default();
        assert_eq!(map_event_to_action(click(2), &state), Some(Action::OpenSearch));
        assert_eq!(map_event_to_action(click(10), &state), None);

        state.mode = AppMode::Search;
        assert_eq!(map_event_to_action(click(10), &state), Some(Action::CloseSearch));
        assert_eq!(map_event_to_action(click(2), &state), None);
    }
}
