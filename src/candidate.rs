//! This module computes candidate numbers for cells, that is, the numbers
//! that could be placed in a cell without breaking the rules defined in the
//! [constraint](crate::constraint) module. It also locates the empty cells of
//! a grid, which is the raw material for the cell-ordering heuristics of the
//! solver.
//!
//! ```
//! use sudoku_heuristics::SudokuGrid;
//! use sudoku_heuristics::candidate;
//!
//! let grid = SudokuGrid::parse("4;1, ,2, , ,3, , , , , ,1, , ,3, ").unwrap();
//! let candidates = candidate::candidates(&grid, 1, 0).unwrap();
//!
//! // 1 and 2 are in the same row, 3 in the same column, leaving 4.
//! assert_eq!(vec![4], candidates.iter().collect::<Vec<usize>>());
//! ```

use crate::SudokuGrid;
use crate::error::{SudokuError, SudokuResult};
use crate::util::NumberSet;

/// The position of an empty cell, as yielded by [empty_cells].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmptyCell {

    /// The column (x-coordinate) of the cell.
    pub column: usize,

    /// The row (y-coordinate) of the cell.
    pub row: usize
}

/// Computes the set of numbers that could be placed in the cell at the
/// specified position without being duplicated in that cell's row, column, or
/// box. The content of the cell itself is ignored, consistent with
/// [is_safe](crate::constraint::is_safe). The returned set iterates in
/// ascending order.
///
/// Each of the three groups is scanned once, so this reads at most `3 * size`
/// cells.
///
/// # Errors
///
/// If either `column` or `row` are not in the range `[0, size[`. In that
/// case, `SudokuError::OutOfBounds` is returned.
pub fn candidates(grid: &SudokuGrid, column: usize, row: usize)
        -> SudokuResult<NumberSet> {
    let size = grid.size();

    if column >= size || row >= size {
        return Err(SudokuError::OutOfBounds);
    }

    let mut result = NumberSet::range(1, size).unwrap();

    for other_column in 0..size {
        if other_column == column {
            continue;
        }

        if let Some(number) = grid.get_cell(other_column, row).unwrap() {
            result.remove(number).unwrap();
        }
    }

    for other_row in 0..size {
        if other_row == row {
            continue;
        }

        if let Some(number) = grid.get_cell(column, other_row).unwrap() {
            result.remove(number).unwrap();
        }
    }

    let box_size = grid.box_size();
    let box_column = column - column % box_size;
    let box_row = row - row % box_size;

    for other_row in box_row..(box_row + box_size) {
        for other_column in box_column..(box_column + box_size) {
            if other_column == column && other_row == row {
                continue;
            }

            if let Some(number) =
                    grid.get_cell(other_column, other_row).unwrap() {
                result.remove(number).unwrap();
            }
        }
    }

    Ok(result)
}

/// Collects the positions of all empty cells of the grid in scan order, that
/// is, row by row from top to bottom and within each row from left to right.
pub fn empty_cells(grid: &SudokuGrid) -> Vec<EmptyCell> {
    let size = grid.size();
    let mut result = Vec::new();

    for row in 0..size {
        for column in 0..size {
            if grid.get_cell(column, row).unwrap().is_none() {
                result.push(EmptyCell {
                    column,
                    row
                });
            }
        }
    }

    result
}
