//! Sliding-tile puzzle solvers.
//!
//! Two solvers cooperate here:
//!
//! 1. The **heuristic placement solver** ([`heuristic`], built on [`placement`]
//!    and [`fixup`]) places tiles one at a time without disturbing the ones
//!    already placed. It is fast and usually close to optimal, and handles the
//!    3-, 8- and 15-puzzle.
//! 2. The **optimal search engine** ([`search`]) is a best-first search with
//!    branch-and-bound pruning against the best solution found so far. Run to
//!    exhaustion it returns a minimum-length solution.
//!
//! [`Solver`] combines them: it reports the heuristic solution first and then
//! lets the search improve on it, unless a [`LowerBound`] says the heuristic
//! answer is good enough.
//!
//! # Examples
//!
//! ```
//! use tileslide_core::Board;
//! use tileslide_solver::{LowerBound, Solver};
//!
//! let board: Board = "4 1 3 7 2 6 5 8 9".parse()?;
//! let solver = Solver::new().with_lower_bound(LowerBound::FirstFound);
//!
//! let moves = solver.solve(&board).into_moves().unwrap();
//! let mut replay = board.clone();
//! replay.apply_moves(moves.iter().copied()).unwrap();
//! assert!(replay.is_goal());
//! # Ok::<(), tileslide_core::BoardError>(())
//! ```

pub use self::{
    error::*,
    heuristic::{SubPuzzle, solve_heuristic, solve3_heuristic, solve8_heuristic, solve15_heuristic},
    outcome::SolveOutcome,
    search::{LowerBound, SearchStats},
    solver::Solver,
    tile_set::TileSet,
};

mod error;
pub mod fixup;
pub mod heuristic;
mod outcome;
pub mod placement;
pub mod search;
mod solver;
mod tile_set;
