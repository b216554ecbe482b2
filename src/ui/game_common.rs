//! Shared layout pieces: outer frame, status bar, info panel, game-over overlay.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the side info panel when it fits.
pub const INFO_PANEL_WIDTH: u16 = 22;

/// The info panel is dropped below this many columns.
const INFO_PANEL_MIN_COLS: u16 = 60;

/// Label of the on-screen restart control.
pub const RESTART_HINT: &str = " [R] Play again ";

const MODAL_WIDTH: u16 = 36;
const MODAL_HEIGHT: u16 = 7;
/// Row of the restart control inside the modal border.
const RESTART_ROW: u16 = 4;

/// Layout areas returned by [`game_layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Play area, inside the outer border.
    pub content: Rect,
    /// Two lines below the play area.
    pub status_bar: Rect,
    /// Right-hand panel, absent on narrow terminals.
    pub info_panel: Option<Rect>,
}

/// Draw the outer border and split the inside into play area, status bar,
/// and (when wide enough) an info panel.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │   [content area]                │  [info]     │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    game_layout(area)
}

/// Areas [`create_game_layout`] hands out for `area`, without drawing.
///
/// Input handling and field sizing use this so they agree with what is drawn.
pub fn game_layout(area: Rect) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let (left, info_panel) = if area.width >= INFO_PANEL_MIN_COLS {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
            .split(inner);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (inner, None)
    };

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(2)])
        .split(left);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel,
    }
}

/// Render a status bar: a centred message line and a centred controls line.
///
/// `controls` is a slice of (key, action) pairs, e.g. `[("[Space]", "Jump")]`.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// Render the info panel border and return the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Centred modal drawn over the play area once the run is over.
///
/// The play area stays visible around the modal so the crash site can be seen.
pub fn render_game_over_overlay(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let modal_area = game_over_modal_rect(area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            RESTART_HINT,
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

/// Modal box of the game-over overlay, centred in `area`.
pub fn game_over_modal_rect(area: Rect) -> Rect {
    let width = MODAL_WIDTH.min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

/// Cells covered by the restart control when the overlay is drawn in `area`.
///
/// Empty when the modal is too short to show the control.
pub fn restart_button_rect(area: Rect) -> Rect {
    let inner = Block::default()
        .borders(Borders::ALL)
        .inner(game_over_modal_rect(area));
    if inner.height <= RESTART_ROW {
        return Rect::new(inner.x, inner.y, 0, 0);
    }
    let width = (RESTART_HINT.chars().count() as u16).min(inner.width);
    // Same offset Paragraph uses for centred lines.
    Rect::new(
        inner.x + (inner.width / 2).saturating_sub(width / 2),
        inner.y + RESTART_ROW,
        width,
        1,
    )
}

/// Whether the terminal cell at (`column`, `row`) lies inside `rect`.
pub fn contains_cell(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
