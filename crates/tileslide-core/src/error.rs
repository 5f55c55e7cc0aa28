//! Error types for board construction and move application.

use std::num::ParseIntError;

/// Errors raised when building a [`Board`](crate::Board) from raw tiles.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// The number of tiles is not a perfect square.
    #[display("invalid board length: {len} is not a perfect square")]
    InvalidLength {
        /// Number of tiles supplied.
        len: usize,
    },
    /// The grid width is outside the supported range.
    #[display("unsupported board size: {size}x{size}")]
    UnsupportedSize {
        /// Grid width derived from the tile count.
        size: usize,
    },
    /// A tile value is outside `1..=size²`.
    #[display("tile {value} at index {index} is out of range")]
    TileOutOfRange {
        /// Cell holding the offending value.
        index: usize,
        /// The offending value.
        value: u8,
    },
    /// A tile value occurs more than once.
    #[display("tile {value} occurs more than once")]
    DuplicateTile {
        /// The repeated value.
        value: u8,
    },
    /// A token of a textual board is not a tile number.
    #[display("invalid tile `{token}`")]
    ParseTile {
        /// The token that failed to parse.
        token: String,
        /// Underlying integer parse error.
        source: ParseIntError,
    },
}

/// Errors raised when a move does not describe a legal swap with the blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// A cell index lies outside the board.
    #[display("cell {index} is outside a board of {len} cells")]
    OutOfRange {
        /// The offending index.
        index: usize,
        /// Number of cells on the board.
        len: usize,
    },
    /// Neither cell of the swap holds the blank.
    #[display("neither cell {first} nor cell {second} holds the blank")]
    NoBlank {
        /// First cell of the swap.
        first: usize,
        /// Second cell of the swap.
        second: usize,
    },
    /// The two cells of the swap are not grid-adjacent.
    #[display("cells {first} and {second} are not adjacent")]
    NotAdjacent {
        /// First cell of the swap.
        first: usize,
        /// Second cell of the swap.
        second: usize,
    },
}
