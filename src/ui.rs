//! Terminal UI rendering with ratatui
//!
//! Pure view layer: reads the game state every frame, never mutates it.
//! Piece-id colors live here, not in the core.

use crate::board::{Cell, Matrix};
use crate::game::Game;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Board cells are drawn two columns wide, the preview one column wide
const BOARD_CELL: u16 = 2;
const PREVIEW_CELL: u16 = 1;

/// Width of the side panel (next preview + counters)
const PANEL_WIDTH: u16 = 14;

/// Render one frame of the game
pub fn render(frame: &mut Frame, game: &Game) {
    let board_width = game.board.width() as u16 * BOARD_CELL + 2;
    let board_height = game.board.height() as u16 + 2;
    let area = center_rect(
        frame.area(),
        board_width + PANEL_WIDTH,
        board_height,
    );

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(board_width), Constraint::Length(PANEL_WIDTH)])
        .split(area);

    render_board(frame, game, layout[0]);
    render_panel(frame, game, layout[1]);
}

/// The playfield with the falling piece overlaid
fn render_board(frame: &mut Frame, game: &Game, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" GRIDFALL ")
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(game.board.height());
    for y in 0..game.board.height() {
        let mut spans = Vec::with_capacity(game.board.width());
        for x in 0..game.board.width() {
            spans.push(cell_span(cell_at(game, x as i32, y as i32), BOARD_CELL));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Next-piece preview and the score/level/lines counters
fn render_panel(frame: &mut Frame, game: &Game, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);

    let next_block = Block::default()
        .borders(Borders::ALL)
        .title(" NEXT ")
        .border_style(Style::default().fg(Color::Gray));
    let next_inner = next_block.inner(layout[0]);
    frame.render_widget(next_block, layout[0]);
    frame.render_widget(
        Paragraph::new(matrix_lines(&game.next, PREVIEW_CELL)),
        next_inner,
    );

    let stats = vec![
        Line::raw(""),
        Line::styled("SCORE", Style::default().fg(Color::DarkGray)),
        Line::styled(game.score.points.to_string(), Style::default().bold()),
        Line::raw(""),
        Line::styled("LEVEL", Style::default().fg(Color::DarkGray)),
        Line::styled(game.score.level.to_string(), Style::default().bold()),
        Line::raw(""),
        Line::styled("LINES", Style::default().fg(Color::DarkGray)),
        Line::styled(game.score.lines.to_string(), Style::default().bold()),
        Line::raw(""),
        Line::styled("r restart", Style::default().fg(Color::DarkGray)),
        Line::styled("q quit", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(stats).alignment(Alignment::Center),
        layout[1],
    );
}

/// Lines for a bare matrix at the given cell width (used for the preview,
/// which is drawn at half the board's cell size)
fn matrix_lines(matrix: &Matrix, cell_width: u16) -> Vec<Line<'static>> {
    matrix
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&cell| cell_span(cell, cell_width))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

/// The board cell visible at (x, y): the falling piece wins over the grid
fn cell_at(game: &Game, x: i32, y: i32) -> Cell {
    let px = x - game.piece.x;
    let py = y - game.piece.y;
    if py >= 0 && (py as usize) < game.piece.matrix.len() {
        let row = &game.piece.matrix[py as usize];
        if px >= 0 && (px as usize) < row.len() && row[px as usize] != 0 {
            return row[px as usize];
        }
    }
    game.board.cell(x, y).unwrap_or(0)
}

fn cell_span(cell: Cell, cell_width: u16) -> Span<'static> {
    let text = if cell == 0 { " " } else { "█" }.repeat(cell_width as usize);
    Span::styled(text, Style::default().fg(color_for(cell)))
}

/// Display color for a piece id
fn color_for(cell: Cell) -> Color {
    match cell {
        1 => Color::Cyan,
        2 => Color::Yellow,
        3 => Color::Magenta,
        4 => Color::Green,
        5 => Color::Red,
        6 => Color::Rgb(255, 165, 0), // orange
        7 => Color::Blue,
        _ => Color::Reset,
    }
}

/// Center a fixed-size rect within an area, clamped to fit
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::piece::Piece;
    use crate::tetromino::TetrominoType;

    #[test]
    fn test_piece_overlays_the_grid() {
        let mut game = Game::with_seed(2);
        game.piece = Piece::spawn(TetrominoType::O.shape(), 10);
        game.board.set(0, 19, 5);
        // piece cells win
        assert_eq!(cell_at(&game, 4, 0), 2);
        assert_eq!(cell_at(&game, 5, 1), 2);
        // grid shows through everywhere else
        assert_eq!(cell_at(&game, 0, 19), 5);
        assert_eq!(cell_at(&game, 9, 10), 0);
    }

    #[test]
    fn test_center_rect_clamps() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = center_rect(area, 100, 100);
        assert_eq!(rect, area);
        let rect = center_rect(area, 10, 4);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}
