// Integration tests for the generation engine

use lifetty::engine::grid::Grid;
use lifetty::engine::step::next_generation;
use rustc_hash::FxHashSet;

#[test]
fn test_glider_translates_diagonally_every_four_generations() {
    let glider = [(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)];
    let mut grid = Grid::dead(10, 10);
    for &(r, c) in &glider {
        grid.set(r, c, true);
    }

    for _ in 0..4 {
        grid = next_generation(&grid);
    }

    let expected: FxHashSet<(usize, usize)> =
        glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    let actual: FxHashSet<(usize, usize)> = grid.live_cells().collect();

    assert_eq!(actual, expected, "after 4 generations:\n{}", grid);
}

#[test]
fn test_blinker_oscillates_with_period_two() {
    let vertical = Grid::from_rows(&[
        ".....", //
        "..#..",
        "..#..",
        "..#..",
        ".....",
    ]);
    let horizontal = Grid::from_rows(&[
        ".....", //
        ".....",
        ".###.",
        ".....",
        ".....",
    ]);

    assert_eq!(next_generation(&vertical), horizontal);
    assert_eq!(next_generation(&horizontal), vertical);
}

#[test]
fn test_block_survives_many_generations() {
    let block = Grid::from_rows(&[
        "....", //
        ".##.",
        ".##.",
        "....",
    ]);

    let mut grid = block.clone();
    for _ in 0..10 {
        grid = next_generation(&grid);
    }

    assert_eq!(grid, block);
}

#[test]
fn test_edge_pattern_does_not_wrap_around() {
    // A blinker pushed against the left edge: zero padding keeps the
    // rotation local, it never sees cells from the right edge.
    let grid = Grid::from_rows(&[
        "#....", //
        "#....",
        "#....",
    ]);

    let next = next_generation(&grid);

    assert_eq!(
        next,
        Grid::from_rows(&[
            ".....", //
            "##...",
            ".....",
        ])
    );
}
