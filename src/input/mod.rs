use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::application::{Direction, KeyAction, SessionEvent};

/// Translate a terminal event into a session event.
/// Returns `None` for events the session has no use for.
pub fn translate(event: &Event) -> Option<SessionEvent> {
    match event {
        Event::Resize(width, height) => Some(SessionEvent::Resize { width: *width, height: *height }),
        Event::Key(key) => translate_key(key).map(SessionEvent::Key),
        Event::Mouse(mouse) => Some(translate_mouse(mouse)),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<KeyAction> {
    // release/repeat events arrive on some terminals; only presses act
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyAction::Quit);
    }
    match key.code {
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('c') => Some(KeyAction::Clear),
        KeyCode::Char('r') => Some(KeyAction::Randomize),
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyAction::ToggleRun),
        KeyCode::Char('+' | '=') => Some(KeyAction::SpeedUp),
        KeyCode::Char('-' | '_') => Some(KeyAction::SpeedDown),
        KeyCode::Tab => Some(KeyAction::ToggleSelected),
        KeyCode::Left | KeyCode::Char('h') => Some(KeyAction::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(KeyAction::Move(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(KeyAction::Move(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(KeyAction::Move(Direction::Down)),
        KeyCode::Char('n' | 's') => Some(KeyAction::Step),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> SessionEvent {
    SessionEvent::Mouse {
        column: i32::from(mouse.column),
        row: i32::from(mouse.row),
        press: matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(translate(&press(code)), Some(SessionEvent::Key(KeyAction::Quit)));
        }
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(translate(&ctrl_c), Some(SessionEvent::Key(KeyAction::Quit)));
    }

    #[test]
    fn test_run_and_edit_keys() {
        assert_eq!(
            translate(&press(KeyCode::Char(' '))),
            Some(SessionEvent::Key(KeyAction::ToggleRun))
        );
        assert_eq!(translate(&press(KeyCode::Enter)), Some(SessionEvent::Key(KeyAction::ToggleRun)));
        assert_eq!(translate(&press(KeyCode::Char('c'))), Some(SessionEvent::Key(KeyAction::Clear)));
        assert_eq!(
            translate(&press(KeyCode::Char('r'))),
            Some(SessionEvent::Key(KeyAction::Randomize))
        );
        assert_eq!(
            translate(&press(KeyCode::Tab)),
            Some(SessionEvent::Key(KeyAction::ToggleSelected))
        );
        assert_eq!(translate(&press(KeyCode::Char('n'))), Some(SessionEvent::Key(KeyAction::Step)));
        assert_eq!(translate(&press(KeyCode::Char('s'))), Some(SessionEvent::Key(KeyAction::Step)));
    }

    #[test]
    fn test_vim_style_movement() {
        assert_eq!(
            translate(&press(KeyCode::Char('h'))),
            Some(SessionEvent::Key(KeyAction::Move(Direction::Left)))
        );
        assert_eq!(
            translate(&press(KeyCode::Char('j'))),
            Some(SessionEvent::Key(KeyAction::Move(Direction::Down)))
        );
        assert_eq!(
            translate(&press(KeyCode::Up)),
            Some(SessionEvent::Key(KeyAction::Move(Direction::Up)))
        );
    }

    #[test]
    fn test_unmapped_key_is_dropped() {
        assert_eq!(translate(&press(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_mouse_press_and_motion() {
        let down = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(&down),
            Some(SessionEvent::Mouse { column: 12, row: 7, press: true })
        );

        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            translate(&moved),
            Some(SessionEvent::Mouse { column: 3, row: 4, press: false })
        );
    }

    #[test]
    fn test_resize_passthrough() {
        assert_eq!(
            translate(&Event::Resize(100, 30)),
            Some(SessionEvent::Resize { width: 100, height: 30 })
        );
    }
}
