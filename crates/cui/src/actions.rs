use crate::app::{App, Screen};
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::MoveUp => app.move_cursor(false),
        InputAction::MoveDown => app.move_cursor(true),
        InputAction::ToggleSelect | InputAction::Activate => match app.screen {
            Screen::Setup => app.toggle_selected_set(),
            Screen::Game => app.toggle_reveal(),
        },
        InputAction::StartSession => app.start_session(),
        InputAction::Advance => app.advance(),
        InputAction::Retreat => app.retreat(),
        InputAction::ToggleReveal => app.toggle_reveal(),
        InputAction::OpenSetup => app.open_setup(),
        InputAction::AddPlayer => app.open_name_prompt(),
        InputAction::RemovePlayer => app.remove_last_player(),
    }
}
