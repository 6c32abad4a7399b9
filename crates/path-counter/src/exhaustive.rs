//! Exhaustive path counter.
//!
//! Every sequence of `n = r + c - 2` moves is encoded as the low `n` bits of
//! a counter: bit `j` set means the `j`-th move goes right, clear means it
//! goes down. Each candidate is walked from the top-left corner and dropped
//! as soon as it leaves the grid or steps on a blocked cell.

use log::debug;

use crate::error::SolveError;
use crate::grid::Grid;
use crate::validator::validate_field;
use crate::PathCount;

/// Largest `n` the bit-pattern enumeration supports.
pub const MAX_EXHAUSTIVE_MOVES: usize = 31;

/// Outcome of an exhaustive search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Number of candidates that reached the bottom-right corner
    pub paths: PathCount,
    /// Size of the candidate space, `2^n`
    pub candidates_total: u64,
    /// Candidates with the right number of right-moves that were walked
    pub candidates_walked: u64,
    /// Walked candidates dropped on a blocked cell or off the grid
    pub candidates_rejected: u64,
}

/// Count paths in a raw field by exhaustive search.
pub fn count_paths_exhaustive<S: AsRef<str>>(field: &[S]) -> Result<PathCount, SolveError> {
    let grid = validate_field(field)?;
    exhaustive_paths(&grid)
}

/// Count paths in an already-validated grid by exhaustive search.
pub fn exhaustive_paths(grid: &Grid) -> Result<PathCount, SolveError> {
    exhaustive_search(grid).map(|report| report.paths)
}

/// Run the search and report how the candidate space was consumed.
pub fn exhaustive_search(grid: &Grid) -> Result<SearchReport, SolveError> {
    let moves = grid.moves();
    if moves > MAX_EXHAUSTIVE_MOVES {
        return Err(SolveError::CandidateSpaceTooLarge {
            moves,
            max: MAX_EXHAUSTIVE_MOVES,
        });
    }

    let candidates_total = 1u64 << moves;
    let mut report = SearchReport {
        candidates_total,
        ..Default::default()
    };

    // The walk only checks cells after a move, so the start is checked here.
    if !grid.is_passable(0, 0) {
        debug!("exhaustive: start cell blocked, skipping enumeration");
        return Ok(report);
    }

    // A candidate ends on the last column only if it moves right exactly
    // `columns - 1` times.
    let right_moves = (grid.columns() - 1) as u32;
    let last_row = grid.rows() - 1;
    let last_column = grid.columns() - 1;

    for candidate in 0..candidates_total {
        if candidate.count_ones() != right_moves {
            continue;
        }
        report.candidates_walked += 1;

        match walk(grid, candidate, moves) {
            Some((row, column)) if row == last_row && column == last_column => {
                report.paths = report.paths.wrapping_add(1);
            }
            Some(_) => {}
            None => report.candidates_rejected += 1,
        }
    }

    debug!(
        "exhaustive: n={} total={} walked={} rejected={} paths={}",
        moves,
        report.candidates_total,
        report.candidates_walked,
        report.candidates_rejected,
        report.paths
    );
    Ok(report)
}

/// Follow one candidate from (0, 0). Returns the final position, or `None`
/// if the walk left the grid or touched a blocked cell.
fn walk(grid: &Grid, candidate: u64, moves: usize) -> Option<(usize, usize)> {
    let mut row = 0;
    let mut column = 0;
    for bit in 0..moves {
        if (candidate >> bit) & 1 == 1 {
            column += 1;
        } else {
            row += 1;
        }
        if !grid.is_passable(row, column) {
            return None;
        }
    }
    Some((row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_n(n: usize) -> Grid {
        Grid::open(1, n + 1).unwrap()
    }

    #[test]
    fn test_trivial_instances() {
        assert_eq!(count_paths_exhaustive(&["."]), Ok(1));
        assert_eq!(count_paths_exhaustive(&["X"]), Ok(0));
        assert_eq!(count_paths_exhaustive(&["..", ".."]), Ok(2));
        assert_eq!(count_paths_exhaustive(&["...", "...", "..."]), Ok(6));
        assert_eq!(count_paths_exhaustive(&["XX", "XX"]), Ok(0));
        assert_eq!(count_paths_exhaustive(&["XXX", "XXX", "XXX"]), Ok(0));
        assert_eq!(count_paths_exhaustive(&["..."]), Ok(1));
        assert_eq!(count_paths_exhaustive(&[".", ".", "."]), Ok(1));
    }

    #[test]
    fn test_blocked_corners() {
        assert_eq!(count_paths_exhaustive(&["X.", ".."]), Ok(0));
        assert_eq!(count_paths_exhaustive(&["..", ".X"]), Ok(0));
    }

    #[test]
    fn test_walk_rejects_obstacles() {
        let grid = Grid::parse(&["..", "X."]).unwrap();
        // right, down
        assert_eq!(walk(&grid, 0b01, 2), Some((1, 1)));
        // down onto the blocked cell
        assert_eq!(walk(&grid, 0b10, 2), None);
    }

    #[test]
    fn test_report_counts() {
        let grid = Grid::parse(&["...", "XX.", "XX."]).unwrap();
        let report = exhaustive_search(&grid).unwrap();
        assert_eq!(report.paths, 1);
        assert_eq!(report.candidates_total, 16);
        // C(4, 2) candidates have exactly two right-moves.
        assert_eq!(report.candidates_walked, 6);
        assert_eq!(report.candidates_rejected, 5);
    }

    #[test]
    fn test_accepts_small_n() {
        for n in 0..=16 {
            assert_eq!(exhaustive_paths(&field_n(n)), Ok(1), "n = {}", n);
        }
    }

    #[test]
    fn test_rejects_n_above_limit() {
        for n in [32usize, 33, 34, 35, 1000, 1_000_000] {
            assert_eq!(
                exhaustive_paths(&field_n(n)),
                Err(SolveError::CandidateSpaceTooLarge {
                    moves: n,
                    max: MAX_EXHAUSTIVE_MOVES
                })
            );
        }
    }

    #[test]
    fn test_accepts_n_at_limit() {
        // Blocked start keeps this fast while still passing the size check.
        let mut grid = field_n(MAX_EXHAUSTIVE_MOVES);
        grid.set(0, 0, crate::grid::Cell::Blocked);
        assert_eq!(exhaustive_paths(&grid), Ok(0));
    }

    #[test]
    #[ignore = "enumerates 2^31 candidates; run with --release --ignored"]
    fn test_full_enumeration_at_limit() {
        assert_eq!(exhaustive_paths(&field_n(MAX_EXHAUSTIVE_MOVES)), Ok(1));
    }

    #[test]
    fn test_invalid_input_is_reported() {
        assert_eq!(
            count_paths_exhaustive(&["..", "."]),
            Err(SolveError::InvalidInput(
                crate::error::GridError::RowLengthMismatch {
                    row: 1,
                    expected: 2,
                    found: 1
                }
            ))
        );
    }
}
