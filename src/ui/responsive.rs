//! Terminal-size handling.
//!
//! Converts the play area's cells into a pixel viewport for play-field
//! fitting and decides when the terminal is too small to draw anything useful.

use crate::core::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::game::{PlayField, Viewport};
use crate::ui::game_common::game_layout;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub const MIN_COLS: u16 = 30;
pub const MIN_ROWS: u16 = 12;

/// Pixel viewport covered by `area`.
pub fn viewport_for_area(area: Rect) -> Viewport {
    Viewport {
        width: area.width as f64 * CELL_WIDTH_PX,
        height: area.height as f64 * CELL_HEIGHT_PX,
    }
}

/// Viewport of the play area on a `cols` × `rows` terminal, or `None` while
/// the terminal is too small to show the game.
pub fn play_area_viewport(cols: u16, rows: u16) -> Option<Viewport> {
    let screen = Rect::new(0, 0, cols, rows);
    if is_too_small(screen) {
        return None;
    }
    Some(viewport_for_area(game_layout(screen).content))
}

/// Cells the field is drawn into: its own size at one cell per
/// `CELL_WIDTH_PX` × `CELL_HEIGHT_PX`, centred in `content` and clipped to it.
///
/// The space left around the field is the viewport padding.
pub fn field_rect(content: Rect, field: &PlayField) -> Rect {
    let cols = ((field.width / CELL_WIDTH_PX).round() as u16).min(content.width);
    let rows = ((field.height / CELL_HEIGHT_PX).round() as u16).min(content.height);
    Rect::new(
        content.x + (content.width - cols) / 2,
        content.y + (content.height - rows) / 2,
        cols,
        rows,
    )
}

pub fn is_too_small(area: Rect) -> bool {
    area.width < MIN_COLS || area.height < MIN_ROWS
}

/// Render a "terminal too small" message in place of the game.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Terminal too small",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!(
                "Need: {}x{}   Have: {}x{}",
                MIN_COLS, MIN_ROWS, area.width, area.height
            ),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Please resize your terminal.",
            Style::default().fg(Color::White),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, area);
}
