//! Board pane rendering

use crate::engine::grid::Grid;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    Frame,
};

/// Glyph used for a live cell; dead cells stay blank.
const LIVE_CELL: char = '█';

/// Render the cell grid into `area`.
///
/// Cells beyond the area are clipped, and individual draws that fall outside
/// the current buffer (the terminal shrank since the frame started) are
/// skipped rather than failing the frame.
pub fn render_board(frame: &mut Frame, area: Rect, grid: &Grid) {
    let style = Style::default().fg(DEFAULT_THEME.live_cell);
    let buf = frame.buffer_mut();

    let rows = grid.rows().min(area.height as usize);
    let cols = grid.cols().min(area.width as usize);

    for r in 0..rows {
        for c in 0..cols {
            if !grid.is_alive(r, c) {
                continue;
            }
            let pos = Position::new(area.x + c as u16, area.y + r as u16);
            // cell_mut returns None once the buffer has shrunk under us
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(LIVE_CELL);
                cell.set_style(style);
            }
        }
    }
}
