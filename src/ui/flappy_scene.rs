//! Projects the game state onto the terminal.

use crate::game::{FlappyGame, GameStatus};
use crate::ui::game_common::{
    create_game_layout, render_game_over_overlay, render_info_panel_frame, render_status_bar,
};
use crate::ui::responsive::field_rect;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What occupies one terminal cell of the play area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    /// Edge of a gap, drawn lighter so the opening reads clearly.
    PipeLip,
    Bird,
    /// The leading cell of the bird, drawn with a heading glyph.
    BirdHead,
}

/// Heading glyph chosen from the bird's tilt.
pub fn bird_glyph(rotation: f64) -> &'static str {
    if rotation < 0.0 {
        "▲"
    } else if rotation >= 20.0 {
        "▼"
    } else {
        "►"
    }
}

/// Sample the field at each cell centre of a `cols` × `rows` grid.
pub fn project_cells(game: &FlappyGame, cols: u16, rows: u16) -> Vec<Vec<Cell>> {
    let cols = cols as usize;
    let rows = rows as usize;
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let px_per_col = game.field.width / cols as f64;
    let px_per_row = game.field.height / rows as f64;
    let bird = game.bird_rect();
    let pipe_width = game.config.obstacle_width;

    // Head sits in the rightmost column and top row the bird covers.
    let head_col = ((bird.x + bird.width) / px_per_col - 0.5).floor().max(0.0) as usize;
    let head_row = (bird.y / px_per_row).floor().max(0.0) as usize;

    let mut grid = vec![vec![Cell::Sky; cols]; rows];
    for (row, line) in grid.iter_mut().enumerate() {
        let y = (row as f64 + 0.5) * px_per_row;
        for (col, cell) in line.iter_mut().enumerate() {
            let x = (col as f64 + 0.5) * px_per_col;

            if x >= bird.x && x < bird.x + bird.width && y >= bird.y && y < bird.y + bird.height {
                *cell = if col == head_col && row == head_row {
                    Cell::BirdHead
                } else {
                    Cell::Bird
                };
                continue;
            }

            if let Some(obstacle) = game
                .obstacles
                .iter()
                .find(|o| x >= o.x && x < o.x + pipe_width)
            {
                let (gap_top, gap_bottom) = obstacle.gap_bounds(game.field.height);
                if y < gap_top || y >= gap_bottom {
                    let near_gap = if y < gap_top {
                        y >= gap_top - px_per_row
                    } else {
                        y < gap_bottom + px_per_row
                    };
                    *cell = if near_gap { Cell::PipeLip } else { Cell::Pipe };
                }
            }
        }
    }
    grid
}

/// Render the whole game screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let layout = create_game_layout(
        frame,
        area,
        &format!(" Flapper  Score: {} ", game.score),
        Color::Cyan,
    );

    render_play_area(frame, field_rect(layout.content, &game.field), game);
    render_status_bar_content(frame, layout.status_bar, game);
    if let Some(info) = layout.info_panel {
        render_info_panel(frame, info, game);
    }

    if game.status == GameStatus::Over {
        render_game_over_overlay(
            frame,
            layout.content,
            "CRASH!",
            &format!("You passed {} obstacles.", game.score),
        );
    }
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let grid = project_cells(game, area.width, area.height);
    let glyph = bird_glyph(game.bird.rotation);

    let lines: Vec<Line> = grid
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|cell| match cell {
                        Cell::Sky => Span::raw(" "),
                        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::PipeLip => {
                            Span::styled("▓", Style::default().fg(Color::LightGreen))
                        }
                        Cell::Bird => Span::styled("█", Style::default().fg(Color::Yellow)),
                        Cell::BirdHead => Span::styled(
                            glyph,
                            Style::default()
                                .fg(Color::Black)
                                .bg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        ),
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    match game.status {
        GameStatus::Active => render_status_bar(
            frame,
            area,
            &format!("Score: {}", game.score),
            Color::Green,
            &[("[Space/Up/Click]", "Jump"), ("[Q]", "Quit")],
        ),
        GameStatus::Over => render_status_bar(
            frame,
            area,
            "Game over",
            Color::Red,
            &[("[R/Enter]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Field: ", label),
            Span::styled(
                format!("{:.0}x{:.0}", game.field.width, game.field.height),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(
                format!("{:.0}", game.config.obstacle_gap),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:.1}", game.bird.velocity),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Ticks: ", label),
            Span::styled(game.tick_count.to_string(), Style::default().fg(Color::White)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
