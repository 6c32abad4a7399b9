//! Field validation shared by both solvers.
//!
//! Both solvers go through [`validate_field`] before doing any work, so they
//! always agree on which fields are acceptable.

use log::trace;

use crate::error::GridError;
use crate::grid::{Cell, Grid};

/// Check a raw field and convert it into a [`Grid`].
///
/// Rows are scanned top to bottom; within a row the length is checked before
/// the symbols, and the first defect found is returned.
pub fn validate_field<S: AsRef<str>>(field: &[S]) -> Result<Grid, GridError> {
    let columns = match field.first() {
        Some(first) => first.as_ref().chars().count(),
        None => 0,
    };
    if columns == 0 {
        return Err(GridError::Empty);
    }

    let rows = field.len();
    let mut cells = Vec::with_capacity(rows * columns);

    for (row, line) in field.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != columns {
            return Err(GridError::RowLengthMismatch {
                row,
                expected: columns,
                found,
            });
        }
        for (column, symbol) in line.chars().enumerate() {
            match Cell::from_symbol(symbol) {
                Some(cell) => cells.push(cell),
                None => {
                    return Err(GridError::InvalidCharacter {
                        row,
                        column,
                        found: symbol,
                    })
                }
            }
        }
    }

    trace!("validated {}x{} field", rows, columns);
    Ok(Grid::from_parts(rows, columns, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_field() -> Vec<String> {
        vec!["...X".to_string(), ".X..".to_string(), "....".to_string()]
    }

    #[test]
    fn test_accepts_valid_field() {
        let grid = validate_field(&valid_field()).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
    }

    #[test]
    fn test_rejects_empty() {
        let none: [&str; 0] = [];
        assert_eq!(validate_field(&none), Err(GridError::Empty));
        assert_eq!(validate_field(&["", "", ""]), Err(GridError::Empty));
    }

    #[test]
    fn test_rejects_short_and_long_rows() {
        for i in 0..3 {
            let mut short = valid_field();
            short[i].pop();
            assert!(matches!(
                validate_field(&short),
                Err(GridError::RowLengthMismatch { .. })
            ));

            let mut long = valid_field();
            long[i].push('.');
            assert!(matches!(
                validate_field(&long),
                Err(GridError::RowLengthMismatch { .. })
            ));
        }
    }

    #[test]
    fn test_mismatch_reports_position() {
        assert_eq!(
            validate_field(&["...", "..", "..."]),
            Err(GridError::RowLengthMismatch {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        // A later empty row is ragged, not empty.
        assert_eq!(
            validate_field(&["..", ""]),
            Err(GridError::RowLengthMismatch {
                row: 1,
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_rejects_every_other_ascii_character() {
        let base = valid_field();
        for row in 0..3 {
            for column in 0..4 {
                for ch in (1u8..128).map(char::from) {
                    if ch == '.' || ch == 'X' {
                        continue;
                    }
                    let mut field = base.clone();
                    let mut chars: Vec<char> = field[row].chars().collect();
                    chars[column] = ch;
                    field[row] = chars.into_iter().collect();
                    assert_eq!(
                        validate_field(&field),
                        Err(GridError::InvalidCharacter {
                            row,
                            column,
                            found: ch
                        })
                    );
                }
            }
        }
    }

    #[test]
    fn test_non_ascii_counts_as_one_cell() {
        assert_eq!(
            validate_field(&[".é.", "..."]),
            Err(GridError::InvalidCharacter {
                row: 0,
                column: 1,
                found: 'é'
            })
        );
    }
}
