pub mod flappy_scene;
pub mod game_common;
pub mod responsive;

use crate::game::FlappyGame;
use ratatui::{layout::Rect, Frame};

/// Draw one frame: the game scene, or a resize prompt if it cannot fit.
pub fn draw_ui(frame: &mut Frame, game: &FlappyGame) {
    let area = frame.size();
    if responsive::is_too_small(area) {
        responsive::render_too_small(frame, area);
        return;
    }
    flappy_scene::render_flappy(frame, area, game);
}

/// Screen cells of the game-over restart control on a terminal of `area`, or
/// `None` when the game is not drawn.
pub fn restart_button_area(area: Rect) -> Option<Rect> {
    if responsive::is_too_small(area) {
        return None;
    }
    let content = game_common::game_layout(area).content;
    Some(game_common::restart_button_rect(content))
}
