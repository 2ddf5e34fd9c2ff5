//! Board drawing: bordered block, apple and snake cells, length readout.

use crate::game::{Board, Cell, GameState};
use crate::theme::Theme;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Widget};

/// Each grid cell is drawn two terminal columns wide so it reads roughly square.
const CELL_WIDTH: u16 = 2;

/// Board size in terminal cells, border included.
fn board_pixel_size(board: Board) -> (u16, u16) {
    (board.width as u16 * CELL_WIDTH + 2, board.height as u16 + 2)
}

/// Draw one frame: board cleared to the background colour, then the apple,
/// then the snake, then the vacated tail cell repainted as background.
pub fn draw<R>(frame: &mut Frame, state: &GameState<R>, theme: &Theme, area: Rect) {
    let (bw, bh) = board_pixel_size(state.board);

    // Center the board in the terminal
    let horiz = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(bw),
            Constraint::Fill(1),
        ])
        .split(area);
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(bh),
            Constraint::Fill(1),
        ])
        .split(horiz[1]);
    let board_area = vert[1];

    let title = format!(" snaketui  | Length: {} ", state.snake.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border).bg(theme.bg))
        .title(Span::styled(title, Style::default().fg(theme.title)));
    let inner = block.inner(board_area);
    block.render(board_area, frame.buffer_mut());

    let buf = frame.buffer_mut();
    buf.set_style(inner, Style::default().bg(theme.bg));

    paint_cell(buf, inner, state.apple.pos(), theme.apple);
    for cell in state.snake.cells() {
        paint_cell(buf, inner, cell, theme.snake);
    }
    if let Some(tail) = state.snake.vacated() {
        paint_cell(buf, inner, tail, theme.bg);
    }
}

/// Fill one grid cell with a colour, clipped to the board's inner rect.
fn paint_cell(buf: &mut Buffer, inner: Rect, cell: Cell, color: Color) {
    let x0 = inner.x + cell.x as u16 * CELL_WIDTH;
    let y = inner.y + cell.y as u16;
    if y >= inner.bottom() {
        return;
    }
    for x in x0..(x0 + CELL_WIDTH).min(inner.right()) {
        buf[(x, y)].set_symbol(" ").set_style(Style::default().bg(color));
    }
}
