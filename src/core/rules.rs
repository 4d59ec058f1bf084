//! # Life Rule Engine
//!
//! Computes the next generation from a snapshot of the current one. The
//! result is always a fresh grid, so no cell is ever evaluated against a
//! neighbor that was already updated in the same step.
//!
//! Edge behavior is deliberately truncated rather than wrapped:
//!
//! - Any cell whose neighborhood would leave the grid (row 0, the bottom row,
//!   column 0, the last column) counts zero neighbors. Border cells are
//!   therefore never born, and a live border cell dies on the next step.
//! - The bottom row is not evaluated at all and is carried over unchanged.

use super::grid::{Cell, Grid};

/// Offsets of the 8 Moore neighbors as `(d_row, d_col)`.
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

/// Counts live Moore neighbors, or 0 for cells on the edge of the grid.
pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    if row == 0 || row + 1 >= rows || col == 0 || col + 1 >= cols {
        return 0;
    }

    let mut count = 0;
    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (r, c) = (row.wrapping_add_signed(dr), col.wrapping_add_signed(dc));
        if grid.is_alive(r, c) {
            count += 1;
        }
    }
    count
}

/// Conway's B3/S23 rule for a single cell.
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    match (cell, neighbors) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}

/// Advances the grid by one generation.
pub fn step(grid: &Grid) -> Grid {
    let bottom = grid.rows().saturating_sub(1);
    grid.map_cells(|row, col, cell| {
        if row == bottom {
            cell
        } else {
            next_state(cell, live_neighbors(grid, row, col))
        }
    })
}
