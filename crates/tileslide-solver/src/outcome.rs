use tileslide_core::{Board, Move};

/// The result of a solve attempt.
///
/// Every solver entry point reports its result with this one type, so callers
/// can tell "nothing to do" apart from "impossible" and from "the heuristic
/// gave up".
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolveOutcome {
    /// A move sequence that turns the board into the goal.
    Solved(Vec<Move>),
    /// The board is already the goal; no moves are needed.
    AlreadySolved,
    /// The goal cannot be reached from this board.
    Unsolvable,
    /// The heuristic placement solver reached a configuration it cannot handle.
    Stuck,
}

impl SolveOutcome {
    /// Returns the outcome for boards that need no solving at all.
    ///
    /// Unsolvable boards take precedence over solved ones, although a goal
    /// board is always solvable.
    #[must_use]
    pub fn trivial(board: &Board) -> Option<Self> {
        if !board.is_solvable() {
            Some(Self::Unsolvable)
        } else if board.is_goal() {
            Some(Self::AlreadySolved)
        } else {
            None
        }
    }

    /// Returns the moves of a solved outcome.
    #[must_use]
    pub fn moves(&self) -> Option<&[Move]> {
        match self {
            Self::Solved(moves) => Some(moves),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the moves of a solved outcome.
    #[must_use]
    pub fn into_moves(self) -> Option<Vec<Move>> {
        match self {
            Self::Solved(moves) => Some(moves),
            _ => None,
        }
    }

    /// Returns the number of moves of a solved outcome.
    #[must_use]
    pub fn move_count(&self) -> Option<usize> {
        self.moves().map(<[Move]>::len)
    }
}
