//! Core data structures for sliding-tile puzzles.
//!
//! This crate provides the board representation shared by the solver and the
//! generator: a validated permutation of tile values, the moves that act on it,
//! and the pure analysis functions (heuristics, solvability, goal test) that
//! every higher algorithm builds on.
//!
//! # Overview
//!
//! - [`board`]: [`Board`], a square grid of `size × size` cells holding the values
//!   `1..=size²`, where the largest value is the blank.
//! - [`moves`]: [`Move`], a recorded swap between a tile and the blank, and
//!   [`Direction`], a keyboard-style way to slide a tile.
//! - [`metrics`]: Manhattan and Hamming heuristics, inversion counting and the
//!   parity-based solvability test.
//! - [`error`]: [`BoardError`] and [`MoveError`].
//!
//! # Examples
//!
//! ```
//! use tileslide_core::{Board, Direction};
//!
//! let mut board: Board = "1 2 3 4 5 6 7 9 8".parse()?;
//! assert!(board.is_solvable());
//! assert_eq!(board.manhattan_distance(), 1);
//!
//! // The tile to the right of the blank slides left into it.
//! let mv = board.slide(Direction::Left).unwrap();
//! assert_eq!((mv.tile(), mv.blank()), (8, 7));
//! assert!(board.is_goal());
//! # Ok::<(), tileslide_core::BoardError>(())
//! ```

pub mod board;
pub mod error;
pub mod metrics;
pub mod moves;

pub use self::{
    board::{Board, Neighbors},
    error::{BoardError, MoveError},
    moves::{Direction, Move},
};
