//! This module contains the logic for solving Sudoku.
//!
//! [BacktrackingSolver] recursively tries every candidate number for every
//! empty cell, so it finds a solution exactly if one exists. The order in
//! which empty cells are branched on is decided by the
//! [Mode](strategy::Mode) the solver is created with; see the [strategy]
//! module for the available heuristics. The remaining empty cells are
//! ordered anew at every level of the recursion, so the heuristics react to
//! the numbers placed further up the search.
//!
//! ```
//! use sudoku_heuristics::{Mode, SudokuGrid};
//! use sudoku_heuristics::solver::{BacktrackingSolver, Solution};
//!
//! let puzzle = SudokuGrid::parse("4;1,2,,4,3,4,1,,,1,4,3,4,,2,1").unwrap();
//! let solver = BacktrackingSolver::new(Mode::Degree);
//!
//! match solver.solve(&puzzle) {
//!     Solution::Solved(grid) => assert!(grid.is_full()),
//!     Solution::Impossible => panic!("riddle is solvable")
//! }
//! ```

pub mod strategy;

use crate::SudokuGrid;
use crate::candidate;
use crate::solver::strategy::Mode;

/// An enumeration of the ways a search can end. Backtracking is exhaustive,
/// so this is a statement about the Sudoku itself, not about the solver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the Sudoku is solvable. The completed grid is wrapped
    /// in this instance. Note that a Sudoku with multiple solutions yields
    /// the first one the search encounters.
    Solved(SudokuGrid),

    /// Indicates that the Sudoku is not solvable at all.
    Impossible
}

impl Solution {

    /// Returns the solved grid if this solution is [Solution::Solved], and
    /// `None` otherwise.
    pub fn grid(&self) -> Option<&SudokuGrid> {
        match self {
            Solution::Solved(grid) => Some(grid),
            Solution::Impossible => None
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
enum Search {
    Solved,
    Exhausted,
    Aborted
}

fn consume_step(steps: &mut Option<u64>) -> bool {
    match steps {
        Some(0) => false,
        Some(remaining) => {
            *remaining -= 1;
            true
        },
        None => true
    }
}

/// A perfect solver which fills the empty cells of a grid by recursively
/// testing all candidate numbers for each cell. This means two things:
///
/// * Its worst-case runtime is exponential, i.e. it may be very slow if the
/// Sudoku has many missing digits.
/// * It finds a solution whenever one exists and proves impossibility
/// otherwise.
///
/// The [Mode] provided at construction decides the order in which empty
/// cells are branched on. The order is recomputed from the working grid at
/// every level of the recursion, so a heuristic like [Mode::Mrv] takes the
/// placements made so far into account. Since the search is exhaustive, all
/// modes agree on solvability and they return the same grid for uniquely
/// solvable Sudoku. Candidates for a cell are always tried in ascending
/// order, so the search is fully deterministic.
pub struct BacktrackingSolver {
    mode: Mode
}

impl BacktrackingSolver {

    /// Creates a new backtracking solver that branches on empty cells in the
    /// order given by `mode`.
    pub fn new(mode: Mode) -> BacktrackingSolver {
        BacktrackingSolver {
            mode
        }
    }

    /// The cell-ordering heuristic this solver was created with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    fn run(&self, grid: &mut SudokuGrid, steps: &mut Option<u64>) -> Search {
        if !consume_step(steps) {
            return Search::Aborted;
        }

        let cells = self.mode.order(grid);
        let cell = match cells.first() {
            Some(&cell) => cell,
            None => return Search::Solved
        };
        let candidates =
            candidate::candidates(grid, cell.column, cell.row).unwrap();

        for number in candidates.iter() {
            grid.set_cell(cell.column, cell.row, number).unwrap();

            match self.run(grid, steps) {
                Search::Solved => return Search::Solved,
                Search::Exhausted =>
                    grid.clear_cell(cell.column, cell.row).unwrap(),
                Search::Aborted => {
                    grid.clear_cell(cell.column, cell.row).unwrap();
                    return Search::Aborted;
                }
            }
        }

        Search::Exhausted
    }

    fn search(&self, grid: &SudokuGrid, mut steps: Option<u64>)
            -> Option<Solution> {
        let mut work = grid.clone();

        match self.run(&mut work, &mut steps) {
            Search::Solved => Some(Solution::Solved(work)),
            Search::Exhausted => Some(Solution::Impossible),
            Search::Aborted => None
        }
    }

    /// Solves the given Sudoku. The input grid is not modified; on success
    /// the completed grid is wrapped in the returned [Solution].
    ///
    /// Filled cells are taken as given and are not questioned, even if they
    /// contradict each other. A grid whose givens break the rules simply
    /// turns out to be impossible.
    pub fn solve(&self, grid: &SudokuGrid) -> Solution {
        self.search(grid, None).unwrap()
    }

    /// Behaves like [BacktrackingSolver::solve], but gives up once the
    /// search has visited more than `max_steps` nodes, where one node is one
    /// recursive call of the search. If the budget is exhausted, `None` is
    /// returned, so an answer of `Some` is always definitive. Note that a
    /// budget of 0 aborts before anything is inspected, even on a full grid.
    ///
    /// This is useful for probing very hard grids without committing to an
    /// exponential search.
    pub fn solve_bounded(&self, grid: &SudokuGrid, max_steps: u64)
            -> Option<Solution> {
        self.search(grid, Some(max_steps))
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    const CLASSIC_PUZZLE: &str = "9;\
        5,3, , ,7, , , , ,\
        6, , ,1,9,5, , , ,\
         ,9,8, , , , ,6, ,\
        8, , , ,6, , , ,3,\
        4, , ,8, ,3, , ,1,\
        7, , , ,2, , , ,6,\
         ,6, , , , ,2,8, ,\
         , , ,4,1,9, , ,5,\
         , , , ,8, , ,7,9";

    const CLASSIC_SOLUTION: &str = "9;\
        5,3,4,6,7,8,9,1,2,\
        6,7,2,1,9,5,3,4,8,\
        1,9,8,3,4,2,5,6,7,\
        8,5,9,7,6,1,4,2,3,\
        4,2,6,8,5,3,7,9,1,\
        7,1,3,9,2,4,8,5,6,\
        9,6,1,5,3,7,2,8,4,\
        2,8,7,4,1,9,6,3,5,\
        3,4,5,2,8,6,1,7,9";

    // Two empty cells in the top-left box both only admit a 1.
    const IMPOSSIBLE_PUZZLE: &str = "4;\
         ,4,2,3,\
        2, ,3,4,\
         , , , ,\
         , , , ";

    const ALL_MODES: [Mode; 3] = [Mode::Naive, Mode::Mrv, Mode::Degree];

    fn assert_solves_correctly(puzzle: &str, solution: &str) {
        let puzzle = SudokuGrid::parse(puzzle).unwrap();
        let expected = SudokuGrid::parse(solution).unwrap();

        for &mode in ALL_MODES.iter() {
            let solver = BacktrackingSolver::new(mode);
            let found = solver.solve(&puzzle);

            if let Solution::Solved(grid) = found {
                assert_eq!(expected, grid,
                    "Solver gave wrong grid in {} mode.", mode);
            }
            else {
                panic!("Solvable sudoku marked as impossible in {} mode.",
                    mode);
            }
        }
    }

    #[test]
    fn backtracking_solves_classic_sudoku() {
        assert_solves_correctly(CLASSIC_PUZZLE, CLASSIC_SOLUTION);
    }

    #[test]
    fn backtracking_solves_small_sudoku() {
        let puzzle = "4;\
            1,2, ,4,\
            3,4,1, ,\
             ,1,4,3,\
            4, ,2,1";
        let solution = "4;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1";
        assert_solves_correctly(puzzle, solution);
    }

    #[test]
    fn full_grid_solves_immediately() {
        let full = SudokuGrid::parse("4;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1").unwrap();

        for &mode in ALL_MODES.iter() {
            let solver = BacktrackingSolver::new(mode);

            assert_eq!(Solution::Solved(full.clone()), solver.solve(&full));
        }
    }

    #[test]
    fn detects_impossible_sudoku() {
        let puzzle = SudokuGrid::parse(IMPOSSIBLE_PUZZLE).unwrap();

        for &mode in ALL_MODES.iter() {
            let solver = BacktrackingSolver::new(mode);

            assert_eq!(Solution::Impossible, solver.solve(&puzzle));
        }
    }

    #[test]
    fn detects_dead_cell_with_conflicting_givens() {
        // The givens themselves break the rules away from the empty corner.
        // They are taken as given anyway, leaving no digit for that corner.
        let mut rows = vec![vec![9, 1, 2, 3, 4, 5, 6, 7, 8]; 9];
        rows[0][0] = 0;
        let puzzle = SudokuGrid::from_rows(&rows).unwrap();
        let solver = BacktrackingSolver::new(Mode::Naive);

        assert_eq!(Solution::Impossible, solver.solve(&puzzle));
    }

    #[test]
    fn solves_smallest_sudoku() {
        let puzzle = SudokuGrid::parse("1;").unwrap();
        let solver = BacktrackingSolver::new(Mode::Mrv);
        let expected = SudokuGrid::parse("1;1").unwrap();

        assert_eq!(Solution::Solved(expected), solver.solve(&puzzle));
    }

    #[test]
    fn solve_does_not_change_input() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let copy = puzzle.clone();
        let solver = BacktrackingSolver::new(Mode::Mrv);

        solver.solve(&puzzle);

        assert_eq!(copy, puzzle);
    }

    #[test]
    fn solve_is_deterministic() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        for &mode in ALL_MODES.iter() {
            let solver = BacktrackingSolver::new(mode);

            assert_eq!(solver.solve(&puzzle), solver.solve(&puzzle));
        }
    }

    #[test]
    fn solved_grid_is_valid_solution_of_puzzle() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let solver = BacktrackingSolver::new(Mode::Degree);

        if let Solution::Solved(grid) = solver.solve(&puzzle) {
            assert!(puzzle.is_valid_solution(&grid).unwrap());
        }
        else {
            panic!("Solvable sudoku marked as impossible.");
        }
    }

    #[test]
    fn failed_search_restores_grid() {
        let puzzle = SudokuGrid::parse(IMPOSSIBLE_PUZZLE).unwrap();
        let mut work = puzzle.clone();
        let solver = BacktrackingSolver::new(Mode::Naive);

        let result = solver.run(&mut work, &mut None);

        assert_eq!(Search::Exhausted, result);
        assert_eq!(puzzle, work);
    }

    #[test]
    fn abandoned_search_restores_grid() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let mut work = puzzle.clone();
        let solver = BacktrackingSolver::new(Mode::Naive);

        let result = solver.run(&mut work, &mut Some(10));

        assert_eq!(Search::Aborted, result);
        assert_eq!(puzzle, work);
    }

    #[test]
    fn solve_bounded_gives_up_within_budget() {
        let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let solver = BacktrackingSolver::new(Mode::Naive);

        assert_eq!(None, solver.solve_bounded(&puzzle, 5));
    }

    #[test]
    fn solve_bounded_counts_steps_precisely() {
        // One empty cell: the search visits the root node and one leaf.
        let puzzle = SudokuGrid::parse("4;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2, ").unwrap();
        let solver = BacktrackingSolver::new(Mode::Naive);

        assert!(solver.solve_bounded(&puzzle, 2).is_some());
        assert_eq!(None, solver.solve_bounded(&puzzle, 1));
    }

    #[test]
    fn solve_bounded_zero_budget_aborts_immediately() {
        let full = SudokuGrid::parse("4;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1").unwrap();
        let solver = BacktrackingSolver::new(Mode::Naive);

        assert_eq!(None, solver.solve_bounded(&full, 0));
    }

    #[test]
    fn solve_bounded_agrees_with_solve_given_ample_budget() {
        let solvable = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let impossible = SudokuGrid::parse(IMPOSSIBLE_PUZZLE).unwrap();
        let solver = BacktrackingSolver::new(Mode::Mrv);

        assert_eq!(Some(solver.solve(&solvable)),
            solver.solve_bounded(&solvable, 10_000_000));
        assert_eq!(Some(Solution::Impossible),
            solver.solve_bounded(&impossible, 10_000_000));
    }

    #[test]
    fn solution_grid_accessor() {
        let grid = SudokuGrid::parse("4;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1").unwrap();
        let solution = Solution::Solved(grid.clone());

        assert_eq!(Some(&grid), solution.grid());
        assert_eq!(None, Solution::Impossible.grid());
    }

    #[test]
    fn solver_reports_its_mode() {
        assert_eq!(Mode::Degree, BacktrackingSolver::new(Mode::Degree).mode());
    }
}
