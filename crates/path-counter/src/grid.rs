//! Field representation shared by both solvers.
//!
//! A `Grid` can only be built through the validator, so any value of this
//! type is non-empty, rectangular and contains only recognised cells.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::validator::validate_field;

/// Symbol for a passable cell.
pub const PASSABLE: char = '.';
/// Symbol for a blocked cell.
pub const BLOCKED: char = 'X';

/// A single cell of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Passable,
    Blocked,
}

impl Cell {
    /// Map a field character to a cell, `None` for anything unrecognised.
    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            PASSABLE => Some(Cell::Passable),
            BLOCKED => Some(Cell::Blocked),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Passable => PASSABLE,
            Cell::Blocked => BLOCKED,
        }
    }

    pub fn is_passable(self) -> bool {
        self == Cell::Passable
    }
}

/// An immutable rectangular field of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Assemble a grid from already-checked parts. Only the validator and
    /// the uniform constructors call this.
    pub(crate) fn from_parts(rows: usize, columns: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(rows * columns, cells.len());
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Validate a sequence of row strings into a grid.
    pub fn parse<S: AsRef<str>>(field: &[S]) -> Result<Self, GridError> {
        validate_field(field)
    }

    /// A grid where every cell is `cell`.
    pub fn filled(rows: usize, columns: usize, cell: Cell) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self::from_parts(rows, columns, vec![cell; rows * columns]))
    }

    /// A grid with no blocked cells.
    pub fn open(rows: usize, columns: usize) -> Result<Self, GridError> {
        Self::filled(rows, columns, Cell::Passable)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of moves any monotone corner-to-corner path makes (`r + c - 2`).
    pub fn moves(&self) -> usize {
        self.rows + self.columns - 2
    }

    /// Get the cell at a position (bounds-checked)
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        Some(self.cells[row * self.columns + column])
    }

    /// True if the position is inside the grid and passable.
    pub fn is_passable(&self, row: usize, column: usize) -> bool {
        self.cell(row, column).is_some_and(Cell::is_passable)
    }

    /// Mark a cell; used by the field generator before the grid is handed out.
    pub(crate) fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column] = cell;
        }
    }

    pub fn blocked_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_passable()).count()
    }

    /// Iterate over rows as cell slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// Render back to the `.`/`X` row strings the grid was parsed from.
    pub fn to_rows(&self) -> Vec<String> {
        self.row_slices()
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(field: Vec<String>) -> Result<Self, Self::Error> {
        validate_field(&field)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

/// Parses one row per line. Surrounding whitespace on each line is trimmed
/// and blank lines are skipped.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        validate_field(&rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol('.'), Some(Cell::Passable));
        assert_eq!(Cell::from_symbol('X'), Some(Cell::Blocked));
        assert_eq!(Cell::from_symbol('x'), None);
        assert_eq!(Cell::from_symbol(' '), None);
        assert_eq!(Cell::Passable.symbol(), '.');
        assert_eq!(Cell::Blocked.symbol(), 'X');
    }

    #[test]
    fn test_cell_lookup() {
        let grid = Grid::parse(&["...X", ".X..", "...."]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.moves(), 5);
        assert_eq!(grid.cell(0, 3), Some(Cell::Blocked));
        assert_eq!(grid.cell(1, 1), Some(Cell::Blocked));
        assert_eq!(grid.cell(2, 3), Some(Cell::Passable));
        assert_eq!(grid.cell(3, 0), None);
        assert_eq!(grid.cell(0, 4), None);
        assert!(!grid.is_passable(0, 3));
        assert!(!grid.is_passable(5, 5));
        assert_eq!(grid.blocked_count(), 2);
    }

    #[test]
    fn test_display_and_rows() {
        let rows = ["..X", "X.."];
        let grid = Grid::parse(&rows).unwrap();
        assert_eq!(grid.to_string(), "..X\nX..");
        assert_eq!(grid.to_rows(), vec!["..X".to_string(), "X..".to_string()]);
    }

    #[test]
    fn test_from_str_skips_blank_lines() {
        let grid: Grid = "\n ... \n.X.\n\n".parse().unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.columns(), 3);
        assert_eq!("".parse::<Grid>(), Err(GridError::Empty));
    }

    #[test]
    fn test_uniform_constructors() {
        let open = Grid::open(2, 3).unwrap();
        assert_eq!(open.blocked_count(), 0);
        let full = Grid::filled(2, 3, Cell::Blocked).unwrap();
        assert_eq!(full.blocked_count(), 6);
        assert_eq!(Grid::open(0, 3), Err(GridError::Empty));
        assert_eq!(Grid::open(3, 0), Err(GridError::Empty));
    }

    #[test]
    fn test_serde_as_row_strings() {
        let grid: Grid = serde_json::from_str(r#"["..", "X."]"#).unwrap();
        assert_eq!(grid.cell(1, 0), Some(Cell::Blocked));
        assert_eq!(serde_json::to_string(&grid).unwrap(), r#"["..","X."]"#);

        let ragged: Result<Grid, _> = serde_json::from_str(r#"["..", "X"]"#);
        assert!(ragged.is_err());
    }
}
