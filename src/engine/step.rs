//! Generation stepping under the standard birth/survival rule

use super::grid::Grid;

/// Offsets of the 8 neighbors relative to a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Compute the next generation of `grid`.
///
/// A live cell with exactly 2 or 3 live neighbors survives; a dead cell with
/// exactly 3 live neighbors is born; every other cell is dead in the next
/// generation. Cells outside the grid count as dead (zero padding, no
/// wrapping). Total over any rectangular grid, including empty ones.
pub fn next_generation(grid: &Grid) -> Grid {
    let counts = neighbor_counts(grid);
    let cells = grid
        .cells()
        .iter()
        .zip(&counts)
        .map(|(&alive, &count)| count == 3 || (alive && count == 2))
        .collect();
    Grid::from_parts(grid.rows(), grid.cols(), cells)
}

/// Per-cell live-neighbor counts, accumulated as eight shifted sums.
///
/// For each neighbor offset the whole grid is added, shifted by that offset,
/// onto the count array. Only the overlap between the grid and its shifted
/// copy is touched, so out-of-bounds neighbors never contribute. The inner
/// loop runs over contiguous row slices.
fn neighbor_counts(grid: &Grid) -> Vec<u8> {
    let (rows, cols) = (grid.rows(), grid.cols());
    let cells = grid.cells();
    let mut counts = vec![0u8; rows * cols];

    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (dst_r, src_r, height) = overlap(rows, dr);
        let (dst_c, src_c, width) = overlap(cols, dc);
        if height == 0 || width == 0 {
            continue;
        }
        for i in 0..height {
            let dst = (dst_r + i) * cols + dst_c;
            let src = (src_r + i) * cols + src_c;
            let dst_row = &mut counts[dst..dst + width];
            let src_row = &cells[src..src + width];
            for (count, &alive) in dst_row.iter_mut().zip(src_row) {
                *count += alive as u8;
            }
        }
    }

    counts
}

/// Overlap between an axis of length `len` and the same axis shifted by
/// `delta`. Returns `(dst_start, src_start, overlap_len)`.
fn overlap(len: usize, delta: isize) -> (usize, usize, usize) {
    let dst = delta.min(0).unsigned_abs();
    let src = delta.max(0) as usize;
    (dst, src, len.saturating_sub(delta.unsigned_abs()))
}
