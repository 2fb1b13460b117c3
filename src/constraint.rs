//! This module defines the standard Sudoku rules, that is, no number may
//! appear twice within any row, column, or box.
//!
//! The rules are exposed at two granularities. [is_safe] asks whether a
//! single number could occupy a single cell without clashing with a number
//! that is already placed, which is the question a solver asks before every
//! placement. [check] asks whether an entire grid is free of duplicates,
//! which is the question a caller asks about a finished or handed-in grid.
//! The two views agree: a grid passes [check] exactly if every placed number
//! is safe in its own cell.
//!
//! ```
//! use sudoku_heuristics::SudokuGrid;
//! use sudoku_heuristics::constraint;
//!
//! let grid = SudokuGrid::parse("4;1, ,2, , ,3, , , , , ,1, , ,3, ").unwrap();
//!
//! // 2 is already present in the top row.
//! assert!(!constraint::is_safe(&grid, 1, 0, 2).unwrap());
//!
//! // 4 clashes with nothing.
//! assert!(constraint::is_safe(&grid, 1, 0, 4).unwrap());
//!
//! assert!(constraint::check(&grid));
//! ```

use crate::SudokuGrid;
use crate::error::{SudokuError, SudokuResult};
use crate::util;

fn row_safe(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    let size = grid.size();

    for other_column in 0..size {
        if other_column == column {
            continue;
        }

        if grid.has_number(other_column, row, number).unwrap() {
            return false;
        }
    }

    true
}

fn column_safe(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    let size = grid.size();

    for other_row in 0..size {
        if other_row == row {
            continue;
        }

        if grid.has_number(column, other_row, number).unwrap() {
            return false;
        }
    }

    true
}

fn box_safe(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    let box_size = grid.box_size();
    let box_column = column - column % box_size;
    let box_row = row - row % box_size;

    for other_row in box_row..(box_row + box_size) {
        for other_column in box_column..(box_column + box_size) {
            if other_column == column && other_row == row {
                continue;
            }

            if grid.has_number(other_column, other_row, number).unwrap() {
                return false;
            }
        }
    }

    true
}

/// Indicates whether the given number could occupy the cell at the specified
/// position without being duplicated in that cell's row, column, or box. The
/// content of the specified cell itself is ignored, so a placed number is
/// always safe in its own cell on a valid grid.
///
/// Note that this is a purely local statement. A safe placement may still
/// make the grid unsolvable.
///
/// # Arguments
///
/// * `column`: The column (x-coordinate) of the checked cell. Must be in the
/// range `[0, size[`.
/// * `row`: The row (y-coordinate) of the checked cell. Must be in the range
/// `[0, size[`.
/// * `number`: The number whose placement is checked. Must be in the range
/// `[1, size]`.
///
/// # Errors
///
/// * `SudokuError::OutOfBounds` If either `column` or `row` are not in the
/// specified range.
/// * `SudokuError::InvalidNumber` If `number` is not in the specified range.
pub fn is_safe(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> SudokuResult<bool> {
    let size = grid.size();

    if column >= size || row >= size {
        return Err(SudokuError::OutOfBounds);
    }

    if number == 0 || number > size {
        return Err(SudokuError::InvalidNumber);
    }

    Ok(row_safe(grid, column, row, number) &&
        column_safe(grid, column, row, number) &&
        box_safe(grid, column, row, number))
}

/// Indicates whether the entire grid obeys the rules, that is, no row,
/// column, or box contains a duplicate number. Empty cells are permitted and
/// never count as duplicates, so in particular every empty grid passes.
pub fn check(grid: &SudokuGrid) -> bool {
    let size = grid.size();
    let box_size = grid.box_size();

    for row in 0..size {
        let numbers = (0..size)
            .filter_map(|column| grid.get_cell(column, row).unwrap());

        if util::contains_duplicate(numbers) {
            return false;
        }
    }

    for column in 0..size {
        let numbers = (0..size)
            .filter_map(|row| grid.get_cell(column, row).unwrap());

        if util::contains_duplicate(numbers) {
            return false;
        }
    }

    for box_row in (0..size).step_by(box_size) {
        for box_column in (0..size).step_by(box_size) {
            let mut numbers = Vec::new();

            for row in box_row..(box_row + box_size) {
                for column in box_column..(box_column + box_size) {
                    if let Some(number) = grid.get_cell(column, row).unwrap() {
                        numbers.push(number);
                    }
                }
            }

            if util::contains_duplicate(numbers.into_iter()) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    fn all_placed_numbers_safe(grid: &SudokuGrid) -> bool {
        let size = grid.size();

        for row in 0..size {
            for column in 0..size {
                if let Some(number) = grid.get_cell(column, row).unwrap() {
                    if !is_safe(grid, column, row, number).unwrap() {
                        return false;
                    }
                }
            }
        }

        true
    }

    #[test]
    fn everything_safe_on_empty_grid() {
        let grid = SudokuGrid::new(2).unwrap();

        for row in 0..4 {
            for column in 0..4 {
                for number in 1..=4 {
                    assert!(is_safe(&grid, column, row, number).unwrap());
                }
            }
        }
    }

    #[test]
    fn row_conflict_detected() {
        let code = "4;\
            1, ,2, ,\
             , , , ,\
             , , , ,\
             , , , ";
        let grid = SudokuGrid::parse(code).unwrap();

        assert!(!is_safe(&grid, 1, 0, 2).unwrap());
        assert!(!is_safe(&grid, 3, 0, 1).unwrap());
        assert!(is_safe(&grid, 1, 0, 4).unwrap());
    }

    #[test]
    fn column_conflict_detected() {
        let code = "4;\
            1, , , ,\
             , , , ,\
             , , , ,\
             , ,2, ";
        let grid = SudokuGrid::parse(code).unwrap();

        assert!(!is_safe(&grid, 0, 2, 1).unwrap());
        assert!(!is_safe(&grid, 2, 1, 2).unwrap());
        assert!(is_safe(&grid, 0, 2, 3).unwrap());
    }

    #[test]
    fn box_conflict_detected() {
        let code = "4;\
            1, , , ,\
             , , , ,\
             , , , ,\
             , , , ";
        let grid = SudokuGrid::parse(code).unwrap();

        // (1, 1) shares neither row nor column with (0, 0), only the box.
        assert!(!is_safe(&grid, 1, 1, 1).unwrap());
        assert!(is_safe(&grid, 1, 1, 2).unwrap());
        assert!(is_safe(&grid, 2, 2, 1).unwrap());
    }

    #[test]
    fn box_bounds_on_ordinary_grid() {
        let mut grid = SudokuGrid::new(3).unwrap();
        grid.set_cell(3, 5, 7).unwrap();

        // (4, 4) lies in the center box together with (3, 5).
        assert!(!is_safe(&grid, 4, 4, 7).unwrap());

        // Neighboring boxes are unaffected.
        assert!(is_safe(&grid, 6, 4, 7).unwrap());
        assert!(is_safe(&grid, 4, 6, 7).unwrap());
        assert!(is_safe(&grid, 2, 4, 7).unwrap());
    }

    #[test]
    fn placed_number_safe_in_own_cell() {
        let code = "4;\
             , , , ,\
             ,3, , ,\
             , , , ,\
             , , , ";
        let grid = SudokuGrid::parse(code).unwrap();

        assert!(is_safe(&grid, 1, 1, 3).unwrap());
    }

    #[test]
    fn is_safe_rejects_out_of_bounds() {
        let grid = SudokuGrid::new(2).unwrap();

        assert_eq!(Err(SudokuError::OutOfBounds),
            is_safe(&grid, 4, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds),
            is_safe(&grid, 0, 4, 1));
    }

    #[test]
    fn is_safe_rejects_invalid_number() {
        let grid = SudokuGrid::new(2).unwrap();

        assert_eq!(Err(SudokuError::InvalidNumber),
            is_safe(&grid, 0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber),
            is_safe(&grid, 0, 0, 5));
    }

    #[test]
    fn check_accepts_empty_grid() {
        assert!(check(&SudokuGrid::new(2).unwrap()));
        assert!(check(&SudokuGrid::new(3).unwrap()));
    }

    #[test]
    fn check_accepts_valid_grids() {
        let partial = SudokuGrid::parse("4;\
            1, ,2, ,\
             ,3, , ,\
             , , ,1,\
             , ,3, ").unwrap();
        let full = SudokuGrid::parse("4;\
            2,3,4,1,\
            1,4,3,2,\
            3,1,2,4,\
            4,2,1,3").unwrap();

        assert!(check(&partial));
        assert!(check(&full));
    }

    #[test]
    fn check_detects_row_duplicate() {
        let grid = SudokuGrid::parse("4;\
            1, , ,1,\
             , , , ,\
             , , , ,\
             , , , ").unwrap();

        assert!(!check(&grid));
    }

    #[test]
    fn check_detects_column_duplicate() {
        let grid = SudokuGrid::parse("4;\
            1, , , ,\
             , , , ,\
             , , , ,\
            1, , , ").unwrap();

        assert!(!check(&grid));
    }

    #[test]
    fn check_detects_box_duplicate() {
        let grid = SudokuGrid::parse("4;\
            1, , , ,\
             ,1, , ,\
             , , , ,\
             , , , ").unwrap();

        assert!(!check(&grid));
    }

    #[test]
    fn check_agrees_with_cell_level_safety() {
        let valid = SudokuGrid::parse("4;\
            1, ,2, ,\
             ,3, , ,\
             , , ,1,\
             , ,3, ").unwrap();
        let invalid = SudokuGrid::parse("4;\
            1, , , ,\
             ,1, , ,\
             , , , ,\
             , , , ").unwrap();

        assert!(check(&valid));
        assert!(all_placed_numbers_safe(&valid));
        assert!(!check(&invalid));
        assert!(!all_placed_numbers_safe(&invalid));
    }
}
