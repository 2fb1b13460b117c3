//! This module contains the cell-ordering heuristics of the solver. A
//! heuristic decides in which order the
//! [BacktrackingSolver](crate::solver::BacktrackingSolver) branches on the
//! empty cells of a grid. It never excludes a cell, so the choice of
//! heuristic influences only the running time of the search, not its outcome.
//!
//! The available heuristics are the variants of [Mode]. An ordering is a
//! pure function of the grid it is computed from and is deterministic: cells
//! that a heuristic considers equally attractive stay in scan order. The
//! solver reorders the remaining empty cells before every branch, so the
//! heuristics adapt to the placements made further up the search.
//!
//! ```
//! use sudoku_heuristics::{Mode, SudokuGrid};
//!
//! let grid = SudokuGrid::parse("4; , , , , , , , ,1,2,3, , , , , ").unwrap();
//!
//! let naive = Mode::Naive.order(&grid);
//! let mrv = Mode::Mrv.order(&grid);
//!
//! // The naive heuristic starts at the top-left corner, while MRV starts
//! // with the third row, whose last cell has only one candidate left.
//! assert_eq!((0, 0), (naive[0].column, naive[0].row));
//! assert_eq!((3, 2), (mrv[0].column, mrv[0].row));
//! ```

use crate::SudokuGrid;
use crate::candidate::{self, EmptyCell};

use serde::{Deserialize, Serialize};

use std::cmp::Reverse;
use std::fmt::{self, Display, Formatter};

/// An enumeration of the cell-ordering heuristics a
/// [BacktrackingSolver](crate::solver::BacktrackingSolver) can use. Modes
/// serialize to and deserialize from their lowercase names, which are also
/// available via [Mode::name] and [Mode::from_name].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {

    /// Branch on empty cells in scan order, that is, row by row from top to
    /// bottom and within each row from left to right.
    Naive,

    /// Minimum remaining values. Branch on cells with fewer candidates
    /// first, which fails hopeless branches early. Ties keep scan order.
    Mrv,

    /// Branch on cells with more empty neighbors first, where the neighbors
    /// of a cell are the other cells in its row, column, and box. Ties keep
    /// scan order.
    Degree
}

fn candidate_count(grid: &SudokuGrid, cell: EmptyCell) -> usize {
    candidate::candidates(grid, cell.column, cell.row).unwrap().len()
}

fn empty_neighbors(grid: &SudokuGrid, column: usize, row: usize) -> usize {
    let size = grid.size();
    let mut neighbors = 0;

    for other_column in 0..size {
        if other_column != column &&
                grid.get_cell(other_column, row).unwrap().is_none() {
            neighbors += 1;
        }
    }

    for other_row in 0..size {
        if other_row != row &&
                grid.get_cell(column, other_row).unwrap().is_none() {
            neighbors += 1;
        }
    }

    let box_size = grid.box_size();
    let box_column = column - column % box_size;
    let box_row = row - row % box_size;

    for other_row in box_row..(box_row + box_size) {
        for other_column in box_column..(box_column + box_size) {
            if (other_column != column || other_row != row) &&
                    grid.get_cell(other_column, other_row).unwrap()
                        .is_none() {
                neighbors += 1;
            }
        }
    }

    neighbors
}

fn sorted_cells<F>(grid: &SudokuGrid, weight: F, descending: bool)
        -> Vec<EmptyCell>
where
    F: Fn(&SudokuGrid, EmptyCell) -> usize
{
    let mut cells: Vec<(EmptyCell, usize)> = candidate::empty_cells(grid)
        .into_iter()
        .map(|cell| (cell, weight(grid, cell)))
        .collect();

    if descending {
        cells.sort_by_key(|&(_, weight)| Reverse(weight));
    }
    else {
        cells.sort_by_key(|&(_, weight)| weight);
    }

    cells.into_iter()
        .map(|(cell, _)| cell)
        .collect()
}

impl Mode {

    /// The lowercase name of this mode, as used in serialized form:
    /// `"naive"`, `"mrv"`, or `"degree"`.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Naive => "naive",
            Mode::Mrv => "mrv",
            Mode::Degree => "degree"
        }
    }

    /// Looks up a mode by its lowercase name. Returns `None` for anything
    /// that is not one of the values of [Mode::name].
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "naive" => Some(Mode::Naive),
            "mrv" => Some(Mode::Mrv),
            "degree" => Some(Mode::Degree),
            _ => None
        }
    }

    /// Computes the order in which the empty cells of the given grid should
    /// be branched on. Every empty cell appears exactly once; filled cells do
    /// not appear at all. The weights that govern the order are computed from
    /// the grid exactly as it is handed in; callers that want the order to
    /// follow their placements call this again on the updated grid.
    pub fn order(self, grid: &SudokuGrid) -> Vec<EmptyCell> {
        match self {
            Mode::Naive => candidate::empty_cells(grid),
            Mode::Mrv => sorted_cells(grid, candidate_count, false),
            Mode::Degree => sorted_cells(grid,
                |grid, cell| empty_neighbors(grid, cell.column, cell.row),
                true)
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
