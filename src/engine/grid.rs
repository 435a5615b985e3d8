#![allow(dead_code)] // Complete API module, not all methods currently used
//! Cell grid storage and seeding
//!
//! This module provides [`Grid`], the rectangular matrix of boolean cell
//! states that the rest of the crate operates on:
//! - random 50/50 seeding from process entropy for the initial generation
//! - `'#'`/`'.'` pattern parsing for tests and fixtures
//! - population and live-cell queries
//!
//! # Invariants
//!
//! Dimensions are fixed at construction and `cells.len() == rows * cols`
//! always holds. Degenerate grids (zero rows and/or zero columns) are valid
//! and behave like any other grid.

use rand::Rng;
use std::fmt;

/// Rectangular matrix of boolean cell states, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    pub fn dead(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a grid with each cell independently alive with probability 1/2.
    pub fn random(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        let cells = (0..rows * cols).map(|_| rng.gen_bool(0.5)).collect();
        Grid { rows, cols, cells }
    }

    /// Parse a grid from pattern rows, using `'#'` for alive and `'.'` for dead.
    /// Every row must have the same width.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut grid = Grid::dead(height, width);
        for (r, row) in rows.iter().enumerate() {
            assert!(
                row.len() == width,
                "pattern rows must all have the same width"
            );
            for (c, byte) in row.bytes().enumerate() {
                match byte {
                    b'#' => grid.set(r, c, true),
                    b'.' => {}
                    _ => panic!("pattern rows may only contain '.' or '#'"),
                }
            }
        }
        grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at `(row, col)` is alive.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Set the cell at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        self.cells[row * self.cols + col] = alive;
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of all live cells, in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, &alive)| alive.then(|| (i / self.cols, i % self.cols)))
    }

    /// Row-major cell storage, used by the step function.
    pub(crate) fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Assemble a grid from already-computed cell storage.
    pub(crate) fn from_parts(rows: usize, cols: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Grid { rows, cols, cells }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // cols is never 0 here: with no columns there are no chunks to print
        for row in self.cells.chunks(self.cols.max(1)) {
            for &alive in row {
                write!(f, "{}", if alive { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
