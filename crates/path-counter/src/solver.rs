//! Algorithm selection for callers that pick a solver at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dynamic::dynamic_paths;
use crate::error::SolveError;
use crate::exhaustive::{exhaustive_paths, MAX_EXHAUSTIVE_MOVES};
use crate::grid::Grid;
use crate::PathCount;

/// Which path counter to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    #[serde(rename = "dyn")]
    Dynamic,
    #[serde(rename = "exh")]
    Exhaustive,
}

impl Algorithm {
    /// Short name used on the command line
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dynamic => "dyn",
            Algorithm::Exhaustive => "exh",
        }
    }

    /// Largest `n` the algorithm accepts, if it has a limit
    pub fn max_moves(self) -> Option<usize> {
        match self {
            Algorithm::Dynamic => None,
            Algorithm::Exhaustive => Some(MAX_EXHAUSTIVE_MOVES),
        }
    }

    /// Whether a grid needing `moves` moves is within this algorithm's range
    pub fn accepts_moves(self, moves: usize) -> bool {
        self.max_moves().map_or(true, |max| moves <= max)
    }

    pub fn other(self) -> Algorithm {
        match self {
            Algorithm::Dynamic => Algorithm::Exhaustive,
            Algorithm::Exhaustive => Algorithm::Dynamic,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dyn" => Ok(Algorithm::Dynamic),
            "exh" => Ok(Algorithm::Exhaustive),
            other => Err(format!("unknown <ALGO> \"{}\"", other)),
        }
    }
}

/// Count paths in `grid` with the chosen algorithm.
pub fn count_paths(algorithm: Algorithm, grid: &Grid) -> Result<PathCount, SolveError> {
    match algorithm {
        Algorithm::Dynamic => Ok(dynamic_paths(grid)),
        Algorithm::Exhaustive => exhaustive_paths(grid),
    }
}
