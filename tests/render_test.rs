// Rendering tests against ratatui's in-memory test backend

use lifetty::engine::grid::Grid;
use lifetty::ui::panes::{render_board, render_status_bar};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.cell((x, y)).unwrap().symbol())
        .collect()
}

#[test]
fn test_board_renders_live_cells_as_blocks() {
    let backend = TestBackend::new(4, 3);
    let mut terminal = Terminal::new(backend).unwrap();
    let grid = Grid::from_rows(&["#..#", ".#.."]);

    terminal
        .draw(|frame| render_board(frame, Rect::new(0, 0, 4, 2), &grid))
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(row_text(buffer, 0), "█  █");
    assert_eq!(row_text(buffer, 1), " █  ");
    assert_eq!(row_text(buffer, 2), "    ");
}

#[test]
fn test_board_is_clipped_to_its_area() {
    let backend = TestBackend::new(4, 4);
    let mut terminal = Terminal::new(backend).unwrap();
    let grid = Grid::from_rows(&["####", "####", "####"]);

    terminal
        .draw(|frame| render_board(frame, Rect::new(0, 0, 2, 1), &grid))
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(row_text(buffer, 0), "██  ");
    assert_eq!(row_text(buffer, 1), "    ");
}

#[test]
fn test_draws_outside_the_buffer_are_skipped() {
    let backend = TestBackend::new(3, 2);
    let mut terminal = Terminal::new(backend).unwrap();
    let grid = Grid::from_rows(&["#####", "#####", "#####", "#####"]);

    // Area reported larger than the real buffer, as after a shrink: the
    // out-of-bounds draws are dropped and the frame still completes.
    terminal
        .draw(|frame| render_board(frame, Rect::new(0, 0, 5, 4), &grid))
        .unwrap();

    let buffer = terminal.backend().buffer();
    assert_eq!(row_text(buffer, 0), "███");
    assert_eq!(row_text(buffer, 1), "███");
    assert!(buffer.cell((4, 3)).is_none());
}

#[test]
fn test_status_bar_shows_playing_state_and_key_legend() {
    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| render_status_bar(frame, Rect::new(0, 0, 60, 1), false))
        .unwrap();

    let line = row_text(terminal.backend().buffer(), 0);
    assert_eq!(
        line,
        format!("{:<60}", " PLAYING |  (Space) to Pause/Play | (q) to Quit ")
    );
}

#[test]
fn test_status_bar_shows_paused_state() {
    let backend = TestBackend::new(60, 1);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|frame| render_status_bar(frame, Rect::new(0, 0, 60, 1), true))
        .unwrap();

    let line = row_text(terminal.backend().buffer(), 0);
    assert!(line.starts_with(" PAUSED |  (Space) to Pause/Play | (q) to Quit "));
}
