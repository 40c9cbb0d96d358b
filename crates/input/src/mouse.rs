//! Mouse clicks as rotation requests.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A rotation request at a terminal position.
///
/// The view translates `(column, row)` into a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub column: u16,
    pub row: u16,
    pub clockwise: bool,
}

/// Left button rotates clockwise, right button counter-clockwise.
///
/// Only button presses count; drags, releases and scrolls are ignored.
pub fn handle_mouse_event(event: MouseEvent) -> Option<Click> {
    let clockwise = match event.kind {
        MouseEventKind::Down(MouseButton::Left) => true,
        MouseEventKind::Down(MouseButton::Right) => false,
        _ => return None,
    };
    Some(Click {
        column: event.column,
        row: event.row,
        clockwise,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn event(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_click_rotates_clockwise() {
        assert_eq!(
            handle_mouse_event(event(MouseEventKind::Down(MouseButton::Left))),
            Some(Click { column: 12, row: 4, clockwise: true })
        );
    }

    #[test]
    fn right_click_rotates_counter_clockwise() {
        let click = handle_mouse_event(event(MouseEventKind::Down(MouseButton::Right))).unwrap();
        assert!(!click.clockwise);
    }

    #[test]
    fn other_events_ignored() {
        assert_eq!(handle_mouse_event(event(MouseEventKind::Up(MouseButton::Left))), None);
        assert_eq!(handle_mouse_event(event(MouseEventKind::Down(MouseButton::Middle))), None);
        assert_eq!(handle_mouse_event(event(MouseEventKind::Moved)), None);
        assert_eq!(handle_mouse_event(event(MouseEventKind::ScrollUp)), None);
    }
}
