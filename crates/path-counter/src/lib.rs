//! Monotone path counting on obstructed grids.
//!
//! Counts the right/down paths from the top-left to the bottom-right corner
//! of a field of passable (`.`) and blocked (`X`) cells. Two independent
//! counters are provided: an exhaustive search over bit-encoded move
//! sequences, limited to `r + c - 2 <= 31`, and a quadratic dynamic program
//! with no size limit. Both validate input the same way and return the same
//! count on every field the exhaustive search accepts.
//!
//! Counts are `u64` and wrap on overflow in both solvers.

pub mod dynamic;
pub mod error;
pub mod exhaustive;
pub mod generate;
pub mod grid;
pub mod solver;
pub mod timer;
pub mod validator;

/// Number of valid paths. Wraps modulo 2^64 on very large open grids.
pub type PathCount = u64;

// Re-export main types
pub use dynamic::{count_paths_dynamic, dynamic_paths, ways_table, WaysTable};
pub use error::{GridError, SolveError};
pub use exhaustive::{
    count_paths_exhaustive, exhaustive_paths, exhaustive_search, SearchReport,
    MAX_EXHAUSTIVE_MOVES,
};
pub use generate::{dimensions_for, random_field, DEFAULT_BLOCKED_ONE_IN, MIN_N};
pub use grid::{Cell, Grid};
pub use solver::{count_paths, Algorithm};
pub use timer::Timer;
pub use validator::validate_field;
