//! Random field synthesis for timing runs.

use rand::Rng;

use crate::grid::{Cell, Grid};

/// Smallest `n` the harness generates fields for.
pub const MIN_N: usize = 4;

/// Default odds of a blocked cell, one in this many.
pub const DEFAULT_BLOCKED_ONE_IN: u32 = 5;

/// Split `n = r + c - 2` into `(r, c)`, keeping the field close to square
/// with slightly more columns than rows.
///
/// `n` must be at least [`MIN_N`], which keeps `r` at one or more.
pub fn dimensions_for(n: usize) -> (usize, usize) {
    debug_assert!(n >= MIN_N);
    let rows = (n - 2) / 2;
    let columns = n - rows + 2;
    (rows, columns)
}

/// Build a `rows` x `columns` field where every cell is independently
/// blocked with probability `1 / blocked_one_in`. The two corners are always
/// passable so the instance is not trivially zero.
///
/// Panics if `rows` or `columns` is zero, or `blocked_one_in` is zero.
pub fn random_field<R: Rng + ?Sized>(
    rows: usize,
    columns: usize,
    blocked_one_in: u32,
    rng: &mut R,
) -> Grid {
    assert!(rows > 0 && columns > 0, "field dimensions must be positive");
    assert!(blocked_one_in > 0, "blocked_one_in must be positive");

    let mut grid = Grid::from_parts(rows, columns, vec![Cell::Passable; rows * columns]);
    for row in 0..rows {
        for column in 0..columns {
            if rng.gen_ratio(1, blocked_one_in) {
                grid.set(row, column, Cell::Blocked);
            }
        }
    }
    grid.set(0, 0, Cell::Passable);
    grid.set(rows - 1, columns - 1, Cell::Passable);
    grid
}
