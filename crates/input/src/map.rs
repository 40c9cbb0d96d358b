//! Key mapping from terminal events to game and menu actions.

use crate::types::{Direction, GameAction, MenuAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Step applied by PageUp/PageDown and `<`/`>` on the size items.
pub const LARGE_STEP: i8 = 5;

fn is_press(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if !is_press(&key) {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Cursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Cursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Cursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Cursor(Direction::Down))
        }

        // Rotation
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => {
            Some(GameAction::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateCcw),

        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Esc => Some(GameAction::Menu),

        _ => None,
    }
}

/// Map keyboard input on the menu and leaderboard screens.
pub fn handle_menu_key(key: KeyEvent) -> Option<MenuAction> {
    if !is_press(&key) {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::BackTab => Some(MenuAction::Prev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Tab => Some(MenuAction::Next),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuAction::Select),

        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('-') => {
            Some(MenuAction::Adjust(-1))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('+') => {
            Some(MenuAction::Adjust(1))
        }
        KeyCode::PageDown | KeyCode::Char('<') => Some(MenuAction::Adjust(-LARGE_STEP)),
        KeyCode::PageUp | KeyCode::Char('>') => Some(MenuAction::Adjust(LARGE_STEP)),

        KeyCode::Esc | KeyCode::Backspace => Some(MenuAction::Back),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Cursor(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(GameAction::Cursor(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Cursor(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(GameAction::Cursor(Direction::Down))
        );
    }

    #[test]
    fn test_rotation_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Enter, KeyCode::Char('x')] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), Some(GameAction::RotateCw));
        }
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Z'))),
            Some(GameAction::RotateCcw)
        );
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Esc)), Some(GameAction::Menu));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
        assert_eq!(handle_menu_key(release), None);
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Up)), Some(MenuAction::Prev));
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Tab)), Some(MenuAction::Next));
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Enter)), Some(MenuAction::Select));
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Left)), Some(MenuAction::Adjust(-1)));
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Right)), Some(MenuAction::Adjust(1)));
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::PageUp)),
            Some(MenuAction::Adjust(LARGE_STEP))
        );
        assert_eq!(
            handle_menu_key(KeyEvent::from(KeyCode::Char('<'))),
            Some(MenuAction::Adjust(-LARGE_STEP))
        );
        assert_eq!(handle_menu_key(KeyEvent::from(KeyCode::Esc)), Some(MenuAction::Back));
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
