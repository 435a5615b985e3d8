//! TUI pane rendering modules
//!
//! This module provides the rendering logic for the two visible panes:
//!
//! - [`board`]: The cell grid, drawn as block glyphs
//! - [`status`]: Status bar with the pause state and key legend
//!
//! Each pane module exports a stateless `render_*` function that takes the
//! frame, the target area, and the data to draw. Pane functions never retain
//! references across calls.

pub mod board;
pub mod status;

// Re-export render functions for convenience
pub use board::render_board;
pub use status::render_status_bar;
