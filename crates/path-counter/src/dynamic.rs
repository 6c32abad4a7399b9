//! Dynamic-programming path counter.
//!
//! `ways[i][j]` holds the number of monotone paths from (0, 0) to (i, j).
//! A blocked cell has no paths; any other cell sums the counts of its upper
//! and left neighbours, taking each only when that neighbour is passable.

use log::debug;

use crate::error::SolveError;
use crate::grid::Grid;
use crate::validator::validate_field;
use crate::PathCount;

/// The filled `ways` table for one grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaysTable {
    rows: usize,
    columns: usize,
    ways: Vec<PathCount>,
}

impl WaysTable {
    /// Number of paths from the top-left corner to (row, column).
    pub fn get(&self, row: usize, column: usize) -> Option<PathCount> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.ways[row * self.columns + column])
    }

    /// Paths to the bottom-right corner.
    pub fn total(&self) -> PathCount {
        self.ways[self.ways.len() - 1]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// Count paths in a raw field by dynamic programming.
pub fn count_paths_dynamic<S: AsRef<str>>(field: &[S]) -> Result<PathCount, SolveError> {
    let grid = validate_field(field)?;
    Ok(dynamic_paths(&grid))
}

/// Count paths in an already-validated grid. Never fails; large counts wrap
/// modulo 2^64.
pub fn dynamic_paths(grid: &Grid) -> PathCount {
    let paths = ways_table(grid).total();
    debug!(
        "dynamic: {}x{} grid, paths={}",
        grid.rows(),
        grid.columns(),
        paths
    );
    paths
}

/// Fill the full table in row-major order.
pub fn ways_table(grid: &Grid) -> WaysTable {
    let rows = grid.rows();
    let columns = grid.columns();
    let mut ways: Vec<PathCount> = vec![0; rows * columns];

    for i in 0..rows {
        for j in 0..columns {
            if !grid.is_passable(i, j) {
                continue;
            }
            if i == 0 && j == 0 {
                ways[0] = 1;
                continue;
            }
            let above = if i > 0 && grid.is_passable(i - 1, j) {
                ways[(i - 1) * columns + j]
            } else {
                0
            };
            let from_left = if j > 0 && grid.is_passable(i, j - 1) {
                ways[i * columns + j - 1]
            } else {
                0
            };
            ways[i * columns + j] = above.wrapping_add(from_left);
        }
    }

    WaysTable {
        rows,
        columns,
        ways,
    }
}
