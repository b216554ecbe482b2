//! Maps terminal events to game inputs.
//!
//! What an input means depends on the game status. Jump keys do nothing once
//! the run is over, Enter only ever restarts, and a left click restarts only
//! when it lands on the restart control.

use crate::game::{FlappyInput, GameStatus};
use crate::ui::game_common::contains_cell;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

/// Translate a key press. Releases and repeats are ignored.
pub fn map_key(key: KeyEvent, status: GameStatus) -> FlappyInput {
    if key.kind != KeyEventKind::Press {
        return FlappyInput::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return FlappyInput::Quit;
    }

    match (key.code, status) {
        (KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'), _) => FlappyInput::Quit,
        (KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('k'), GameStatus::Active) => {
            FlappyInput::Jump
        }
        (KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter, GameStatus::Over) => {
            FlappyInput::Restart
        }
        _ => FlappyInput::Other,
    }
}

/// Translate a mouse event.
///
/// A left click anywhere jumps while playing. Once the run is over it
/// restarts only inside `restart_button`, the cells of the drawn restart
/// control (`None` when the control is not on screen).
pub fn map_mouse(
    mouse: MouseEvent,
    status: GameStatus,
    restart_button: Option<Rect>,
) -> FlappyInput {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return FlappyInput::Other;
    }
    match status {
        GameStatus::Active => FlappyInput::Jump,
        GameStatus::Over => match restart_button {
            Some(button) if contains_cell(button, mouse.column, mouse.row) => FlappyInput::Restart,
            _ => FlappyInput::Other,
        },
    }
}

/// Translate any terminal event that carries player intent.
///
/// Resize events are not inputs; callers handle them separately.
pub fn map_event(
    event: &Event,
    status: GameStatus,
    restart_button: Option<Rect>,
) -> Option<FlappyInput> {
    match event {
        Event::Key(key) => Some(map_key(*key, status)),
        Event::Mouse(mouse) => Some(map_mouse(*mouse, status, restart_button)),
        _ => None,
    }
}
