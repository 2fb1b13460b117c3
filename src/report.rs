//! This module converts solver outcomes into the shape expected by external
//! callers, most notably HTTP frontends that serialize reports to JSON. A
//! [SolveReport] carries a status, a human-readable message, and on success
//! the solved board.
//!
//! On the wire, a successful report looks like
//! `{"status":"success","message":"Sudoku Solved !","data":[[...],...]}` and
//! a failed one like `{"status":"failed","message":"No solution exists."}`.
//!
//! ```
//! use sudoku_heuristics::{solve, Mode};
//!
//! let report = solve(&[vec![0]], Mode::Naive).unwrap();
//! let json = serde_json::to_string(&report).unwrap();
//!
//! assert_eq!(
//!     r#"{"status":"success","message":"Sudoku Solved !","data":[[1]]}"#,
//!     json);
//! ```

use crate::SudokuGrid;
use crate::solver::Solution;

use serde::{Deserialize, Serialize};

/// The message carried by successful reports.
pub const SUCCESS_MESSAGE: &str = "Sudoku Solved !";

/// The message carried by failed reports.
pub const FAILURE_MESSAGE: &str = "No solution exists.";

/// The outcome of a solve request in the form expected by external callers.
/// A report is obtained from a [Solution] via `From`, which attaches the
/// appropriate status and message. Reports serialize to the JSON wire shape
/// described in the [module documentation](self).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SolveReport {

    /// The Sudoku was solved. Carries the completed board.
    Success {

        /// Always [SUCCESS_MESSAGE] for reports built from a [Solution].
        message: String,

        /// The completed board.
        data: SudokuGrid
    },

    /// The Sudoku has no solution. An unsolvable board is a regular outcome,
    /// not an error, so it is still reported rather than raised.
    #[serde(rename = "failed")]
    Failure {

        /// Always [FAILURE_MESSAGE] for reports built from a [Solution].
        message: String
    }
}

impl SolveReport {

    /// Indicates whether this report carries a solved board.
    pub fn is_success(&self) -> bool {
        match self {
            SolveReport::Success { .. } => true,
            SolveReport::Failure { .. } => false
        }
    }

    /// The human-readable outcome message.
    pub fn message(&self) -> &str {
        match self {
            SolveReport::Success { message, .. } => message,
            SolveReport::Failure { message } => message
        }
    }

    /// The solved board, if this is a successful report.
    pub fn solution(&self) -> Option<&SudokuGrid> {
        match self {
            SolveReport::Success { data, .. } => Some(data),
            SolveReport::Failure { .. } => None
        }
    }
}

impl From<Solution> for SolveReport {
    fn from(solution: Solution) -> SolveReport {
        match solution {
            Solution::Solved(grid) => SolveReport::Success {
                message: String::from(SUCCESS_MESSAGE),
                data: grid
            },
            Solution::Impossible => SolveReport::Failure {
                message: String::from(FAILURE_MESSAGE)
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn full_grid() -> SudokuGrid {
        SudokuGrid::parse("4;\
            1,2,3,4,\
            3,4,1,2,\
            2,1,4,3,\
            4,3,2,1").unwrap()
    }

    #[test]
    fn solved_becomes_success() {
        let report = SolveReport::from(Solution::Solved(full_grid()));

        assert!(report.is_success());
        assert_eq!("Sudoku Solved !", report.message());
        assert_eq!(Some(&full_grid()), report.solution());
    }

    #[test]
    fn impossible_becomes_failure() {
        let report = SolveReport::from(Solution::Impossible);

        assert!(!report.is_success());
        assert_eq!("No solution exists.", report.message());
        assert_eq!(None, report.solution());
    }

    #[test]
    fn success_wire_shape() {
        let report = SolveReport::from(Solution::Solved(full_grid()));
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(
            "{\"status\":\"success\",\"message\":\"Sudoku Solved !\",\
                \"data\":[[1,2,3,4],[3,4,1,2],[2,1,4,3],[4,3,2,1]]}",
            json);
    }

    #[test]
    fn failure_wire_shape() {
        let report = SolveReport::from(Solution::Impossible);
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(
            r#"{"status":"failed","message":"No solution exists."}"#,
            json);
    }

    #[test]
    fn report_roundtrips_through_json() {
        let success = SolveReport::from(Solution::Solved(full_grid()));
        let failure = SolveReport::from(Solution::Impossible);

        let success_json = serde_json::to_string(&success).unwrap();
        let failure_json = serde_json::to_string(&failure).unwrap();

        assert_eq!(success,
            serde_json::from_str::<SolveReport>(&success_json).unwrap());
        assert_eq!(failure,
            serde_json::from_str::<SolveReport>(&failure_json).unwrap());
    }

    #[test]
    fn unknown_status_rejected() {
        let json = r#"{"status":"unknown","message":"?"}"#;

        assert!(serde_json::from_str::<SolveReport>(json).is_err());
    }
}
