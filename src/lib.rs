// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand Sudoku engine that solves
//! classic puzzles of any perfect-square size by exhaustive backtracking. It
//! supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids and solutions according to standard rules
//! * Solving Sudoku using a perfect backtracking algorithm with a choice of
//! three cell-ordering heuristics
//! * A report layer that converts solver outcomes into the JSON-friendly
//! shape expected by external callers
//!
//! Note in this introduction we will mostly be using 4x4 Sudoku due to their
//! simpler nature. These are divided in 4 2x2 boxes, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_heuristics::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("4;2, ,3, , ,1, , ,1, , ,4, ,2, ,3").unwrap();
//! println!("{}", grid);
//! ```
//!
//! Grids that come from an external caller as nested rows of numbers, where 0
//! denotes an empty cell, are validated and converted by
//! [SudokuGrid::from_rows]. The same conversion backs the
//! [serde](https://serde.rs/) support, so a deserialized grid is always
//! structurally sound.
//!
//! # Checking validity
//!
//! A grid can be checked against the standard rules, that is, no duplicate
//! numbers within any row, column, or box.
//!
//! ```
//! use sudoku_heuristics::SudokuGrid;
//!
//! // Some grid for which it is totally unclear whether it is valid.
//! let grid = SudokuGrid::parse("4;1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1").unwrap();
//! assert!(!grid.is_valid());
//! ```
//!
//! For finer checks, [constraint::is_safe] decides whether a single number
//! could be placed in a single cell without breaking the rules.
//!
//! # Solving
//!
//! [BacktrackingSolver](solver::BacktrackingSolver) performs an exhaustive
//! recursive search. It is parameterized with a [Mode] that decides in which
//! order empty cells are branched on: [Mode::Naive] takes them in scan order,
//! [Mode::Mrv] prefers cells with the fewest remaining candidates, and
//! [Mode::Degree] prefers cells with the most empty neighbors. All modes find
//! a solution exactly if one exists; they only differ in how fast they get
//! there.
//!
//! ```
//! use sudoku_heuristics::{Mode, SudokuGrid};
//! use sudoku_heuristics::solver::{BacktrackingSolver, Solution};
//!
//! // ╔═══╤═══╦═══╤═══╗
//! // ║ 1 │ 2 ║   │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║ 3 │ 4 ║ 1 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 1 ║ 4 │ 3 ║
//! // ╟───┼───╫───┼───╢
//! // ║ 4 │   ║ 2 │ 1 ║
//! // ╚═══╧═══╩═══╧═══╝
//! let puzzle = SudokuGrid::parse("4;1,2,,4,3,4,1,,,1,4,3,4,,2,1").unwrap();
//! let solver = BacktrackingSolver::new(Mode::Mrv);
//!
//! let expected =
//!     SudokuGrid::parse("4;1,2,3,4,3,4,1,2,2,1,4,3,4,3,2,1").unwrap();
//!
//! assert_eq!(Solution::Solved(expected), solver.solve(&puzzle));
//! ```
//!
//! # The report layer
//!
//! External callers that hand in boards as nested rows and expect a
//! status/message/data answer use [solve] (or [solve_with], which invokes a
//! callback on the finished report).
//!
//! ```
//! use sudoku_heuristics::{solve, Mode};
//!
//! let rows = vec![
//!     vec![1, 2, 0, 4],
//!     vec![3, 4, 1, 0],
//!     vec![0, 1, 4, 3],
//!     vec![4, 0, 2, 1]
//! ];
//! let report = solve(&rows, Mode::Naive).unwrap();
//!
//! assert!(report.is_success());
//! assert_eq!("Sudoku Solved !", report.message());
//! ```
//!
//! # Note regarding performance
//!
//! Backtracking on 9x9 boards is fast, but exhaustive search is exponential
//! in the worst case. It is recommended to use at least `opt-level = 2` in
//! tests that solve many boards.

pub mod candidate;
pub mod constraint;
pub mod error;
pub mod report;
pub mod solver;
pub mod util;


pub use crate::report::SolveReport;
pub use crate::solver::strategy::Mode;

use crate::error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use crate::solver::BacktrackingSolver;

use log::debug;

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Error, Formatter};

/// A Sudoku grid is composed of cells that are organized into square boxes in
/// a way that makes the entire grid a square. Consequently, the number of
/// boxes in a row is equal to the width of one box and vice versa. Each cell
/// may or may not be occupied by a number.
///
/// In ordinary Sudoku, the box size is 3, yielding a 9x9 grid. Any other box
/// size is allowed as long as it is at least 1, so the total size is always a
/// perfect square. A 4x4 grid with 2x2 boxes looks like this:
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// `SudokuGrid` implements `Display`, but only grids with a size of less than
/// or equal to 9 can be displayed with digits 1 to 9. Grids of all other
/// sizes will raise an error.
///
/// Serialization and deserialization go through nested rows of numbers, where
/// 0 stands for an empty cell, mirroring [SudokuGrid::from_rows] and
/// [SudokuGrid::to_rows]. Deserializing a malformed board therefore fails
/// with the same validation errors as `from_rows`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<usize>>", try_from = "Vec<Vec<usize>>")]
pub struct SudokuGrid {
    box_size: usize,
    size: usize,
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(grid: &SudokuGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.box_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &SudokuGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &SudokuGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line(grid, '║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();

        if size > 9 {
            return Err(Error::default());
        }

        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.box_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn box_size_of(size: usize) -> Option<usize> {
    let mut box_size = 0;

    while box_size * box_size < size {
        box_size += 1;
    }

    if box_size * box_size == size {
        Some(box_size)
    }
    else {
        None
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid with the given box size. The total
    /// width and height of the grid will be equal to the square of
    /// `box_size`, so `box_size` 3 yields the ordinary 9x9 grid.
    ///
    /// # Errors
    ///
    /// If `box_size` is invalid (zero). In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(box_size: usize) -> SudokuResult<SudokuGrid> {
        if box_size == 0 {
            return Err(SudokuError::InvalidDimensions);
        }

        let size = box_size * box_size;
        let cells = vec![None; size * size];

        Ok(SudokuGrid {
            box_size,
            size,
            cells
        })
    }

    /// Parses a code encoding a Sudoku grid. The code has to be of the format
    /// `<size>;<cells>` where `<size>` is the total width of the grid and
    /// `<cells>` is a comma-separated list of entries, which are either empty
    /// or a number. The entries are assigned left-to-right, top-to-bottom,
    /// where each row is completed before the next one is started. Whitespace
    /// in the entries is ignored to allow for more intuitive formatting. The
    /// size must be a perfect square and the number of entries must be equal
    /// to its square.
    ///
    /// As an example, the code `4;1, ,2, , ,3, ,4, , , ,3, ,1, ,2` will parse
    /// to the following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║   │ 3 ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 1 ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let parts: Vec<&str> = code.split(';').collect();

        if parts.len() != 2 {
            return Err(SudokuParseError::WrongNumberOfParts);
        }

        let size: usize = parts[0].trim().parse()?;
        let box_size = match box_size_of(size) {
            Some(box_size) => box_size,
            None => return Err(SudokuParseError::InvalidDimensions)
        };

        if let Ok(mut grid) = SudokuGrid::new(box_size) {
            let numbers: Vec<&str> = parts[1].split(',').collect();

            if numbers.len() != size * size {
                return Err(SudokuParseError::WrongNumberOfCells);
            }

            for (i, number_str) in numbers.iter().enumerate() {
                let number_str = number_str.trim();

                if number_str.is_empty() {
                    continue;
                }

                let number = number_str.parse::<usize>()?;

                if number == 0 || number > size {
                    return Err(SudokuParseError::InvalidNumber);
                }

                grid.cells[i] = Some(number);
            }

            Ok(grid)
        }
        else {
            Err(SudokuParseError::InvalidDimensions)
        }
    }

    /// Builds a grid from nested rows of numbers as they are handed in by
    /// external callers, where 0 denotes an empty cell. The input is fully
    /// validated before a grid is constructed.
    ///
    /// ```
    /// use sudoku_heuristics::SudokuGrid;
    ///
    /// let rows = vec![
    ///     vec![1, 0, 0, 4],
    ///     vec![0, 0, 1, 0],
    ///     vec![0, 3, 0, 0],
    ///     vec![2, 0, 0, 0]
    /// ];
    /// let grid = SudokuGrid::from_rows(&rows).unwrap();
    ///
    /// assert_eq!(4, grid.size());
    /// assert_eq!(2, grid.box_size());
    /// assert_eq!(Some(4), grid.get_cell(3, 0).unwrap());
    /// assert_eq!(None, grid.get_cell(1, 0).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// * `SudokuError::WrongShape` If some row has a length different from
    /// the number of rows.
    /// * `SudokuError::InvalidDimensions` If the number of rows is 0 or not a
    /// perfect square.
    /// * `SudokuError::InvalidNumber` If some cell contains a number greater
    /// than the size of the grid.
    pub fn from_rows(rows: &[Vec<usize>]) -> SudokuResult<SudokuGrid> {
        let size = rows.len();

        for row in rows {
            if row.len() != size {
                return Err(SudokuError::WrongShape);
            }
        }

        let box_size = match box_size_of(size) {
            Some(box_size) => box_size,
            None => return Err(SudokuError::InvalidDimensions)
        };

        let mut grid = SudokuGrid::new(box_size)?;

        for (row, numbers) in rows.iter().enumerate() {
            for (column, &number) in numbers.iter().enumerate() {
                if number > 0 {
                    grid.set_cell(column, row, number)?;
                }
            }
        }

        Ok(grid)
    }

    /// Converts this grid into nested rows of numbers, where 0 denotes an
    /// empty cell. This is the inverse of [SudokuGrid::from_rows].
    pub fn to_rows(&self) -> Vec<Vec<usize>> {
        let size = self.size();
        let mut rows = Vec::with_capacity(size);

        for row in 0..size {
            let mut numbers = Vec::with_capacity(size);

            for column in 0..size {
                numbers.push(self.get_cell(column, row).unwrap().unwrap_or(0));
            }

            rows.push(numbers);
        }

        rows
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_heuristics::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new(2).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 3).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        let mut s = format!("{};", self.size);
        let cells = self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",");
        s.push_str(cells.as_str());
        s
    }

    /// Gets the width (and height) of one box of the grid. To ensure a square
    /// grid, this is also the number of boxes that compose the grid along one
    /// axis.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). This is always the square of [SudokuGrid::box_size].
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            let index = index(column, row, size);
            Ok(self.cells[index])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, size]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, size[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        let index = index(column, row, size);
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        let index = index(column, row, size);
        self.cells[index] = None;
        Ok(())
    }

    fn verify_dimensions(&self, other: &SudokuGrid) -> SudokuResult<()> {
        if self.box_size != other.box_size {
            Err(SudokuError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        let size = self.size();
        let mut clues = 0usize;

        for row in 0..size {
            for column in 0..size {
                if let Some(_) = self.get_cell(column, row).unwrap() {
                    clues += 1;
                }
            }
        }

        clues
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns the square of
    /// [SudokuGrid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some number must be filled
    /// in `other` with the same number. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| {
                match self_cell {
                    Some(self_number) =>
                        match other_cell {
                            Some(other_number) => self_number == other_number,
                            None => false
                        },
                    None => true
                }
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some number
    /// must be filled in this one with the same number. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the dimensions of this and the `other` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        other.is_subset(self)
    }

    /// Indicates whether the entire grid is filled according to the rules,
    /// that is, no row, column, or box contains a number twice. Empty cells
    /// are permitted, only the present numbers are checked.
    pub fn is_valid(&self) -> bool {
        constraint::check(self)
    }

    /// Indicates whether the given grid is a valid solution to this puzzle.
    /// That is the case if all numbers from this grid can be found in the
    /// `solution`, the solution is valid according to the rules, and it is
    /// full.
    ///
    /// # Errors
    ///
    /// If the dimensions of this grid and the `solution` grid are not the
    /// same. In that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_valid_solution(&self, solution: &SudokuGrid)
            -> SudokuResult<bool> {
        Ok(self.is_subset(solution)? &&
            constraint::check(solution) &&
            solution.is_full())
    }
}

impl From<SudokuGrid> for Vec<Vec<usize>> {
    fn from(grid: SudokuGrid) -> Vec<Vec<usize>> {
        grid.to_rows()
    }
}

impl TryFrom<Vec<Vec<usize>>> for SudokuGrid {
    type Error = SudokuError;

    fn try_from(rows: Vec<Vec<usize>>) -> SudokuResult<SudokuGrid> {
        SudokuGrid::from_rows(&rows)
    }
}

/// Solves a Sudoku board handed in as nested rows of numbers, where 0 denotes
/// an empty cell, and converts the outcome into a [SolveReport]. The board is
/// validated before any search happens; the search itself is an exhaustive
/// backtracking run whose cell order is decided by `mode`.
///
/// An unsolvable board is a regular outcome and yields a failed report, not
/// an error.
///
/// # Errors
///
/// Any error raised by [SudokuGrid::from_rows] if the board is malformed.
pub fn solve(rows: &[Vec<usize>], mode: Mode) -> SudokuResult<SolveReport> {
    let grid = SudokuGrid::from_rows(rows)?;

    debug!("solving a {0}x{0} board with {1} clues using the {2} heuristic",
        grid.size(), grid.count_clues(), mode);

    let solver = BacktrackingSolver::new(mode);
    let report = SolveReport::from(solver.solve(&grid));

    debug!("search finished: {}", report.message());

    Ok(report)
}

/// Behaves like [solve], but additionally invokes `observer` exactly once
/// with the finished report before returning it. This is the hook for callers
/// that want to print or otherwise record outcomes without the solver itself
/// doing any output.
///
/// ```
/// use sudoku_heuristics::{solve_with, Mode};
///
/// let rows = vec![
///     vec![1, 2, 0, 4],
///     vec![3, 4, 1, 0],
///     vec![0, 1, 4, 3],
///     vec![4, 0, 2, 1]
/// ];
/// let mut messages = Vec::new();
/// solve_with(&rows, Mode::Mrv, |report| {
///     messages.push(report.message().to_string());
/// }).unwrap();
///
/// assert_eq!(vec!["Sudoku Solved !".to_string()], messages);
/// ```
///
/// # Errors
///
/// Any error raised by [SudokuGrid::from_rows] if the board is malformed. In
/// that case, `observer` is not invoked.
pub fn solve_with<F>(rows: &[Vec<usize>], mode: Mode, observer: F)
        -> SudokuResult<SolveReport>
where
    F: FnOnce(&SolveReport)
{
    let report = solve(rows, mode)?;
    observer(&report);
    Ok(report)
}
