//! # Introduction
//!
//! lifetty renders Conway's Game of Life in the terminal.  The grid is
//! seeded randomly from the terminal size, advanced one generation per tick,
//! and drawn through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) until the user quits.
//!
//! ## Update pipeline
//!
//! ```text
//! Terminal size → Grid → next_generation → Grid → board + status panes
//! ```
//!
//! 1. [`engine::grid`] — the cell matrix: fixed dimensions, random 50/50
//!    seeding, pattern parsing for fixtures.
//! 2. [`engine::step`] — the generation rule: eight shifted-sum neighbor
//!    accumulations under zero-padded boundaries, then birth/survival per
//!    cell.
//! 3. [`ui`] — ratatui-based TUI; owns the loop, the pause flag, and the
//!    draw/poll cycle.
//!
//! ## Controls
//!
//! Space pauses and resumes the simulation; `q` quits.

pub mod engine;
pub mod ui;
