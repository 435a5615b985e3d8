//! Main TUI application state and loop

use crate::engine::grid::Grid;
use crate::engine::step::next_generation;
use crate::ui::panes;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Size},
};
use std::io;
use std::time::{Duration, Instant};

/// Interval between generation steps; also bounds each input poll.
const TICK_RATE: Duration = Duration::from_millis(100);

/// The main application state
pub struct App {
    /// The current generation
    pub grid: Grid,

    /// Whether the simulation is paused
    pub paused: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Last time the grid advanced a generation
    last_tick: Instant,
}

impl App {
    /// Create a new app sized to the terminal, with a freshly randomized grid.
    ///
    /// One row is reserved for the status bar; a terminal too small to hold
    /// both yields an empty playable area rather than failing.
    pub fn new(size: Size) -> Self {
        let rows = size.height.saturating_sub(1) as usize;
        let cols = size.width as usize;
        App {
            grid: Grid::random(rows, cols),
            paused: false,
            should_quit: false,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            // Bound the poll so the simulation keeps ticking without input
            let timeout = TICK_RATE.saturating_sub(self.last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }

            if self.should_quit {
                return Ok(());
            }

            // Advance at most one generation per rendered frame
            if self.last_tick.elapsed() >= TICK_RATE {
                if !self.paused {
                    self.grid = next_generation(&self.grid);
                }
                self.last_tick = Instant::now();
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        // Board above, one-line status bar at the bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        panes::render_board(frame, chunks[0], &self.grid);
        panes::render_status_bar(frame, chunks[1], self.paused);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.paused = !self.paused;
            }
            _ => {}
        }
    }
}
