/// Errors reported by the solver entry points.
///
/// Unsolvable or already-solved boards are not errors; they are reported as
/// [`SolveOutcome`](crate::SolveOutcome) variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolverError {
    /// The board does not have the number of tiles the solver expects.
    #[display("invalid board size: expected {expected} tiles, got {actual}")]
    InvalidSize {
        /// Tile count the solver handles.
        expected: usize,
        /// Tile count of the board.
        actual: usize,
    },
    /// No heuristic solver exists for boards of this many tiles.
    #[display("no heuristic solver for boards of {actual} tiles")]
    UnsupportedSize {
        /// Tile count of the board.
        actual: usize,
    },
    /// A raw lower bound is neither `-1` nor a positive move count.
    #[display("invalid lower bound: {value}")]
    InvalidLowerBound {
        /// The rejected value.
        value: isize,
    },
}
