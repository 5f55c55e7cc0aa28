//! Tile-by-tile placement primitives.
//!
//! A [`Placer`] owns a working copy of a board and the log of moves applied to
//! it. Its operations move the blank around while keeping a set of protected
//! ("immovable") tiles in place, which is how already-placed tiles survive the
//! placement of the next one.
//!
//! # Design Notes
//!
//! - Every swap goes through [`Board::swap_and_record`], so the move log always
//!   uses the normalized `(tile, blank)` form and can never hold an illegal
//!   move.
//! - The immovable set is a [`TileSet`] passed by value. Recursive calls extend
//!   their own copy, so a failed branch never leaves extra protected tiles
//!   behind for its siblings.

use log::trace;
use tileslide_core::{Board, Move, MoveError};
use tinyvec::ArrayVec;

use crate::TileSet;

/// Reasons a placement step cannot make progress.
///
/// These never escape the heuristic orchestrators; they are turned into
/// [`SolveOutcome::Stuck`](crate::SolveOutcome::Stuck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// Every route for the blank into `target` crosses a protected tile.
    #[display("cannot bring the blank to cell {target}")]
    Blocked {
        /// Cell the blank should reach.
        target: usize,
    },
    /// The tile cannot approach its goal and no neighbor is in its way.
    #[display("tile {value} at cell {location} has no obstruction to clear")]
    NoObstruction {
        /// Tile being placed.
        value: u8,
        /// Current cell of the tile.
        location: usize,
    },
    /// The tile value does not occur on the board.
    #[display("tile {value} is not on the board")]
    MissingTile {
        /// The requested value.
        value: u8,
    },
    /// A fixup routine was asked to handle a configuration it does not cover.
    #[display("no fixup for tile {value} at cell {location}")]
    Precondition {
        /// Tile being placed.
        value: u8,
        /// Current cell of the tile.
        location: usize,
    },
    /// A swap did not involve the blank or was not between adjacent cells.
    #[display("illegal move: {source}")]
    IllegalMove {
        /// The rejected move.
        source: MoveError,
    },
}

impl From<MoveError> for PlacementError {
    fn from(source: MoveError) -> Self {
        Self::IllegalMove { source }
    }
}

/// A working board plus the moves applied to it.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::placement::Placer;
///
/// let board: Board = "1 2 3 4 5 6 9 7 8".parse()?;
/// let mut placer = Placer::new(board);
/// placer.place_tile(7, None).unwrap();
/// placer.place_tile(8, None).unwrap();
/// assert!(placer.board().is_goal());
/// assert_eq!(placer.moves().len(), 2);
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Placer {
    board: Board,
    moves: Vec<Move>,
}

impl Placer {
    /// Creates a placer working on `board` with an empty move log.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            moves: Vec::new(),
        }
    }

    /// Returns the working board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves applied so far.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Consumes the placer and returns the working board and the move log.
    #[must_use]
    pub fn into_parts(self) -> (Board, Vec<Move>) {
        (self.board, self.moves)
    }

    /// Returns the current cell of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::MissingTile`] if the value is not on the board.
    pub fn locate(&self, value: u8) -> Result<usize, PlacementError> {
        self.board
            .position_of(value)
            .ok_or(PlacementError::MissingTile { value })
    }

    /// Swaps the blank with an adjacent cell and records the move.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::IllegalMove`] if the swap is not legal.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), PlacementError> {
        self.board.swap_and_record(&mut self.moves, a, b)?;
        Ok(())
    }

    /// Brings the blank into `target` without moving any tile in `immovable`.
    ///
    /// If the blank is adjacent to `target` the two are swapped. Otherwise the
    /// neighbors of `target` that may move are tried in order of their
    /// distance to the blank (ties keep the above/left/right/below order):
    /// the blank is first brought into the neighbor, with `target` protected
    /// so the route cannot cross it, and then swapped into `target`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Blocked`] if every neighbor is protected or
    /// cannot be reached. No move is recorded in that case.
    pub fn free_cell(&mut self, target: usize, immovable: TileSet) -> Result<(), PlacementError> {
        let blank = self.board.blank_index();
        if target == blank {
            return Ok(());
        }
        if self.board.is_adjacent(target, blank) {
            return self.swap(target, blank);
        }

        let protected = immovable.with(self.board[target]);
        let mut candidates = self
            .board
            .neighbors(target)
            .filter(|&n| !protected.contains(self.board[n]))
            .collect::<ArrayVec<[usize; 4]>>();
        candidates.sort_by_key(|&n| self.board.distance(n, blank));

        for neighbor in candidates {
            if self.free_cell(neighbor, protected).is_ok() {
                let blank = self.board.blank_index();
                return self.swap(target, blank);
            }
        }
        Err(PlacementError::Blocked { target })
    }

    /// Returns the neighbor of `location` that stands between its tile and
    /// the tile's goal.
    ///
    /// Candidates are the neighbors that are neither the blank nor protected
    /// and that are strictly closer to the goal than `location`. The closest
    /// one wins; ties keep neighbor order.
    #[must_use]
    pub fn find_obstruction(&self, location: usize, immovable: TileSet) -> Option<usize> {
        let goal = Board::goal_index(self.board[location]);
        let own = self.board.distance(location, goal);
        self.board
            .neighbors(location)
            .filter(|&n| !self.board.is_blank_at(n) && !immovable.contains(self.board[n]))
            .map(|n| (self.board.distance(n, goal), n))
            .filter(|&(distance, _)| distance < own)
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, n)| n)
    }

    /// Moves the tile at `location` into the blank if that brings it closer to
    /// its goal.
    ///
    /// Returns `Ok(true)` if the swap was made.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::IllegalMove`] if the swap is rejected.
    pub fn try_approach(&mut self, location: usize) -> Result<bool, PlacementError> {
        let blank = self.board.blank_index();
        if !self.board.is_adjacent(location, blank) {
            return Ok(false);
        }
        let goal = Board::goal_index(self.board[location]);
        if self.board.distance(blank, goal) < self.board.distance(location, goal) {
            self.swap(location, blank)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Moves tile `value` to its goal cell without moving protected tiles.
    ///
    /// When `immovable` is `None`, every value up to and including `value` is
    /// protected, modeling tiles that were placed in ascending order. `value`
    /// itself is always protected.
    ///
    /// # Errors
    ///
    /// Fails with [`PlacementError::NoObstruction`] or
    /// [`PlacementError::Blocked`] when the tile is stuck. Moves made before the
    /// failure stay on the board.
    pub fn place_tile(&mut self, value: u8, immovable: Option<TileSet>) -> Result<(), PlacementError> {
        let goal = Board::goal_index(value);
        let immovable = immovable.unwrap_or_else(|| TileSet::up_to(value)).with(value);

        let mut location = self.locate(value)?;
        while location != goal {
            if !self.try_approach(location)? {
                let obstruction = self
                    .find_obstruction(location, immovable)
                    .ok_or(PlacementError::NoObstruction { value, location })?;
                self.free_cell(obstruction, immovable)?;
            }
            location = self.locate(value)?;
        }
        trace!("placed tile {value} after {} moves", self.moves.len());
        Ok(())
    }

    /// Fails with [`PlacementError::Precondition`] unless `value` sits at
    /// `location`.
    pub(crate) fn expect_at(&self, value: u8, location: usize) -> Result<(), PlacementError> {
        let actual = self.locate(value)?;
        if actual == location {
            Ok(())
        } else {
            Err(PlacementError::Precondition {
                value,
                location: actual,
            })
        }
    }
}
