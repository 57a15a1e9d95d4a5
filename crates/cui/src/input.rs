use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    MoveUp,
    MoveDown,
    ToggleSelect,
    Activate,
    StartSession,
    Advance,
    Retreat,
    ToggleReveal,
    OpenSetup,
    AddPlayer,
    RemovePlayer,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Up => InputAction::MoveUp,
        KeyCode::Down => InputAction::MoveDown,
        KeyCode::Char('k') => InputAction::MoveUp,
        KeyCode::Char('j') => InputAction::MoveDown,
        KeyCode::Char(' ') => InputAction::ToggleSelect,
        KeyCode::Enter => InputAction::Activate,
        KeyCode::Char('s') => InputAction::StartSession,
        KeyCode::Right | KeyCode::Char('n') => InputAction::Advance,
        KeyCode::Left | KeyCode::Char('b') => InputAction::Retreat,
        KeyCode::Char('f') => InputAction::ToggleReveal,
        KeyCode::Char('o') => InputAction::OpenSetup,
        KeyCode::Char('a') => InputAction::AddPlayer,
        KeyCode::Char('d') => InputAction::RemovePlayer,
        _ => InputAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)),
            InputAction::Advance
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)),
            InputAction::Retreat
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE)),
            InputAction::ToggleReveal
        );
    }

    #[test]
    fn maps_session_keys() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE)),
            InputAction::StartSession
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)),
            InputAction::Quit
        );
    }
}
