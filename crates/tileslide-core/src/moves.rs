//! Move representation.

use std::fmt::{self, Display};

/// A swap between a tile and the blank.
///
/// `tile` is the index of the non-blank cell and `blank` the index that held
/// the blank *before* the swap. After the move is applied the tile sits at
/// `blank` and the blank sits at `tile`.
///
/// Every move recorded by the solvers uses this normalized form, so a
/// front-end can replay a solution by swapping the two cells of each move in
/// order.
///
/// # Examples
///
/// ```
/// use tileslide_core::Move;
///
/// let mv = Move::new(5, 8);
/// assert_eq!(mv.tile(), 5);
/// assert_eq!(mv.blank(), 8);
/// assert_eq!(mv.reversed(), Move::new(8, 5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    tile: usize,
    blank: usize,
}

impl Move {
    /// Creates a move sliding the tile at `tile` into the blank at `blank`.
    #[must_use]
    pub const fn new(tile: usize, blank: usize) -> Self {
        Self { tile, blank }
    }

    /// Returns the index of the moved tile before the move.
    #[must_use]
    pub const fn tile(self) -> usize {
        self.tile
    }

    /// Returns the index of the blank before the move.
    #[must_use]
    pub const fn blank(self) -> usize {
        self.blank
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            tile: self.blank,
            blank: self.tile,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.tile, self.blank)
    }
}

impl From<(usize, usize)> for Move {
    fn from((tile, blank): (usize, usize)) -> Self {
        Self::new(tile, blank)
    }
}

impl From<Move> for (usize, usize) {
    fn from(mv: Move) -> Self {
        (mv.tile, mv.blank)
    }
}

/// The direction a tile slides into the blank.
///
/// This matches arrow-key play: pressing "left" slides the tile right of the
/// blank to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// The tile below the blank slides up.
    Up,
    /// The tile above the blank slides down.
    Down,
    /// The tile right of the blank slides left.
    Left,
    /// The tile left of the blank slides right.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
