//! Sliding-tile board representation.

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::Index,
    str::FromStr,
};

use crate::{BoardError, Direction, Move, MoveError};

/// A square sliding-tile board.
///
/// A board of width `size` holds the values `1..=size²` in row-major order.
/// The largest value, `size²`, is the blank. The goal configuration is the
/// ascending sequence `[1, 2, ..., size²]`, with the blank in the bottom-right
/// corner.
///
/// Construction validates that the tiles form a permutation, so every `Board`
/// has exactly one blank and all values are distinct.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
///
/// let board = Board::from_tiles(vec![2, 8, 3, 1, 6, 4, 7, 5, 9])?;
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.blank(), 9);
/// assert_eq!(board.blank_index(), 8);
/// assert!(!board.is_goal());
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: Vec<u8>,
    size: usize,
    blank_index: usize,
}

impl Board {
    /// Smallest supported grid width.
    pub const MIN_SIZE: usize = 2;
    /// Largest supported grid width (tiles are stored as `u8`).
    pub const MAX_SIZE: usize = 15;

    /// Creates a board from tile values in row-major order.
    ///
    /// # Errors
    ///
    /// - [`BoardError::InvalidLength`] if the tile count is not a perfect square.
    /// - [`BoardError::UnsupportedSize`] if the width is outside
    ///   [`MIN_SIZE`](Self::MIN_SIZE)..=[`MAX_SIZE`](Self::MAX_SIZE).
    /// - [`BoardError::TileOutOfRange`] or [`BoardError::DuplicateTile`] if the
    ///   tiles are not a permutation of `1..=size²`.
    pub fn from_tiles(tiles: impl Into<Vec<u8>>) -> Result<Self, BoardError> {
        let tiles = tiles.into();
        let len = tiles.len();
        let size = len.isqrt();
        if size * size != len {
            return Err(BoardError::InvalidLength { len });
        }
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize { size });
        }

        let mut seen = vec![false; len];
        for (index, &value) in tiles.iter().enumerate() {
            if value == 0 || usize::from(value) > len {
                return Err(BoardError::TileOutOfRange { index, value });
            }
            let slot = &mut seen[usize::from(value) - 1];
            if *slot {
                return Err(BoardError::DuplicateTile { value });
            }
            *slot = true;
        }

        let blank_index = len - 1;
        let blank_index = tiles
            .iter()
            .position(|&value| usize::from(value) == len)
            .unwrap_or(blank_index);
        Ok(Self {
            tiles,
            size,
            blank_index,
        })
    }

    /// Creates the solved board of the given width.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedSize`] if `size` is outside the
    /// supported range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    ///
    /// let goal = Board::goal(2)?;
    /// assert_eq!(goal.tiles(), &[1, 2, 3, 4]);
    /// assert!(goal.is_goal());
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    pub fn goal(size: usize) -> Result<Self, BoardError> {
        if !(Self::MIN_SIZE..=Self::MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize { size });
        }
        #[expect(clippy::cast_possible_truncation)]
        let tiles = (1..=size * size).map(|value| value as u8).collect();
        Ok(Self {
            tiles,
            size,
            blank_index: size * size - 1,
        })
    }

    /// Returns the grid width.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of cells (`size²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// Returns the tile values in row-major order.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Consumes the board and returns its tile values.
    #[must_use]
    pub fn into_tiles(self) -> Vec<u8> {
        self.tiles
    }

    /// Returns the value that denotes the blank (`size²`).
    #[must_use]
    pub fn blank(&self) -> u8 {
        self.tiles[self.blank_index]
    }

    /// Returns the index of the blank cell.
    #[must_use]
    pub fn blank_index(&self) -> usize {
        self.blank_index
    }

    /// Returns `true` if the cell at `index` holds the blank.
    #[must_use]
    pub fn is_blank_at(&self, index: usize) -> bool {
        index == self.blank_index
    }

    /// Returns the index currently holding `value`, if the value is on the board.
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<usize> {
        self.tiles.iter().position(|&v| v == value)
    }

    /// Returns the index where `value` sits on the goal board.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    #[must_use]
    pub fn goal_index(value: u8) -> usize {
        assert!(value > 0, "tile values start at 1");
        usize::from(value) - 1
    }

    /// Returns an iterator over the cells adjacent to `location`.
    ///
    /// Cells are yielded in the fixed order above, left, right, below.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    ///
    /// let board = Board::goal(3)?;
    /// assert_eq!(board.neighbors(4).collect::<Vec<_>>(), [1, 3, 5, 7]);
    /// assert_eq!(board.neighbors(0).collect::<Vec<_>>(), [1, 3]);
    /// assert_eq!(board.neighbors(8).collect::<Vec<_>>(), [5, 7]);
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn neighbors(&self, location: usize) -> Neighbors {
        Neighbors::new(self.size, location)
    }

    /// Returns `true` if the two cells share an edge.
    #[must_use]
    pub fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.distance(a, b) == 1
    }

    /// Swaps the blank with an adjacent tile and records the move.
    ///
    /// The pair may be given in either order. It is normalized so that the
    /// recorded [`Move`] names the non-blank cell first and the blank second.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves both the board and `moves` untouched
    /// if a cell is out of range, neither cell holds the blank, or the cells are
    /// not adjacent.
    pub fn swap_and_record(
        &mut self,
        moves: &mut Vec<Move>,
        a: usize,
        b: usize,
    ) -> Result<Move, MoveError> {
        let mv = self.normalize(a, b)?;
        self.swap_unchecked(mv);
        moves.push(mv);
        Ok(mv)
    }

    /// Applies a recorded move.
    ///
    /// This is the replay primitive for front-ends: apply the moves returned
    /// by a solver one at a time, in order.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if `mv.blank()` does not hold the blank, or the
    /// move is not a legal adjacent swap. The board is left untouched.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.check_range(mv.tile())?;
        self.check_range(mv.blank())?;
        if !self.is_blank_at(mv.blank()) {
            return Err(MoveError::NoBlank {
                first: mv.tile(),
                second: mv.blank(),
            });
        }
        if !self.is_adjacent(mv.tile(), mv.blank()) {
            return Err(MoveError::NotAdjacent {
                first: mv.tile(),
                second: mv.blank(),
            });
        }
        self.swap_unchecked(mv);
        Ok(())
    }

    /// Applies a sequence of moves in order.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal move and returns its error. Moves before it
    /// remain applied.
    pub fn apply_moves<I>(&mut self, moves: I) -> Result<(), MoveError>
    where
        I: IntoIterator,
        I::Item: Into<Move>,
    {
        for mv in moves {
            self.apply_move(mv.into())?;
        }
        Ok(())
    }

    /// Slides the tile next to the blank in the given direction.
    ///
    /// Returns the performed move, or `None` if no tile can slide that way
    /// because the blank is on the corresponding border.
    pub fn slide(&mut self, direction: Direction) -> Option<Move> {
        let blank = self.blank_index;
        let (row, column) = (blank / self.size, blank % self.size);
        let tile = match direction {
            Direction::Up => (row + 1 < self.size).then(|| blank + self.size),
            Direction::Down => (row > 0).then(|| blank - self.size),
            Direction::Left => (column + 1 < self.size).then(|| blank + 1),
            Direction::Right => (column > 0).then(|| blank - 1),
        }?;
        let mv = Move::new(tile, blank);
        self.swap_unchecked(mv);
        Some(mv)
    }

    /// Returns a copy of this board with `mv` applied, without validation.
    ///
    /// Callers must only pass moves produced from this board's blank
    /// neighbors.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Self {
        let mut next = self.clone();
        next.swap_unchecked(mv);
        next
    }

    fn normalize(&self, a: usize, b: usize) -> Result<Move, MoveError> {
        self.check_range(a)?;
        self.check_range(b)?;
        let mv = if self.is_blank_at(b) {
            Move::new(a, b)
        } else if self.is_blank_at(a) {
            Move::new(b, a)
        } else {
            return Err(MoveError::NoBlank {
                first: a,
                second: b,
            });
        };
        if !self.is_adjacent(a, b) {
            return Err(MoveError::NotAdjacent {
                first: a,
                second: b,
            });
        }
        Ok(mv)
    }

    fn check_range(&self, index: usize) -> Result<(), MoveError> {
        if index < self.tiles.len() {
            Ok(())
        } else {
            Err(MoveError::OutOfRange {
                index,
                len: self.tiles.len(),
            })
        }
    }

    fn swap_unchecked(&mut self, mv: Move) {
        self.tiles.swap(mv.tile(), mv.blank());
        self.blank_index = mv.tile();
    }
}

impl Index<usize> for Board {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

impl TryFrom<Vec<u8>> for Board {
    type Error = BoardError;

    fn try_from(tiles: Vec<u8>) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl TryFrom<&[u8]> for Board {
    type Error = BoardError;

    fn try_from(tiles: &[u8]) -> Result<Self, Self::Error> {
        Self::from_tiles(tiles)
    }
}

impl From<Board> for Vec<u8> {
    fn from(board: Board) -> Self {
        board.tiles
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses tile values separated by whitespace and/or commas.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tiles = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<u8>().map_err(|source| BoardError::ParseTile {
                    token: token.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tiles(tiles)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tiles.len().to_string().len();
        for (i, row) in self.tiles.chunks(self.size).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
        }
        Ok(())
    }
}

/// Iterator over the cells adjacent to a location.
///
/// Created by [`Board::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors {
    size: usize,
    location: usize,
    step: u8,
}

impl Neighbors {
    fn new(size: usize, location: usize) -> Self {
        Self {
            size,
            location,
            step: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let (row, column) = (self.location / self.size, self.location % self.size);
        while self.step < 4 {
            let step = self.step;
            self.step += 1;
            let candidate = match step {
                0 => (row > 0).then(|| self.location - self.size),
                1 => (column > 0).then(|| self.location - 1),
                2 => (column + 1 < self.size).then(|| self.location + 1),
                _ => (row + 1 < self.size).then(|| self.location + self.size),
            };
            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}

impl FusedIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn shuffled_board(size: usize) -> impl Strategy<Value = Board> {
        #[expect(clippy::cast_possible_truncation)]
        let tiles: Vec<u8> = (1..=size * size).map(|v| v as u8).collect();
        Just(tiles)
            .prop_shuffle()
            .prop_map(|tiles| Board::from_tiles(tiles).unwrap())
    }

    #[test]
    fn test_from_tiles_rejects_non_square_length() {
        assert_eq!(
            Board::from_tiles(vec![1, 2, 3]),
            Err(BoardError::InvalidLength { len: 3 })
        );
    }

    #[test]
    fn test_from_tiles_rejects_unsupported_size() {
        assert_eq!(
            Board::from_tiles(vec![1]),
            Err(BoardError::UnsupportedSize { size: 1 })
        );
        assert_eq!(
            Board::from_tiles(Vec::new()),
            Err(BoardError::UnsupportedSize { size: 0 })
        );
    }

    #[test]
    fn test_from_tiles_rejects_out_of_range() {
        assert_eq!(
            Board::from_tiles(vec![1, 2, 3, 5]),
            Err(BoardError::TileOutOfRange { index: 3, value: 5 })
        );
        assert_eq!(
            Board::from_tiles(vec![0, 2, 3, 4]),
            Err(BoardError::TileOutOfRange { index: 0, value: 0 })
        );
    }

    #[test]
    fn test_from_tiles_rejects_duplicates() {
        assert_eq!(
            Board::from_tiles(vec![1, 2, 2, 4]),
            Err(BoardError::DuplicateTile { value: 2 })
        );
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(4).unwrap();
        assert_eq!(goal.size(), 4);
        assert_eq!(goal.cell_count(), 16);
        assert_eq!(goal.blank(), 16);
        assert_eq!(goal.blank_index(), 15);
        assert!(Board::goal(1).is_err());
        assert!(Board::goal(16).is_err());
    }

    #[test]
    fn test_neighbors_order() {
        let board = Board::goal(4).unwrap();
        assert_eq!(board.neighbors(5).collect::<Vec<_>>(), [1, 4, 6, 9]);
        assert_eq!(board.neighbors(3).collect::<Vec<_>>(), [2, 7]);
        assert_eq!(board.neighbors(12).collect::<Vec<_>>(), [8, 13]);
        assert_eq!(board.neighbors(7).collect::<Vec<_>>(), [3, 6, 11]);
    }

    #[test]
    fn test_neighbors_is_fused() {
        let board = Board::goal(2).unwrap();
        let mut neighbors = board.neighbors(0);
        assert_eq!(neighbors.next(), Some(1));
        assert_eq!(neighbors.next(), Some(2));
        assert_eq!(neighbors.next(), None);
        assert_eq!(neighbors.next(), None);
    }

    #[test]
    fn test_swap_and_record_normalizes_order() {
        let mut board = Board::goal(3).unwrap();
        let mut moves = Vec::new();

        let mv = board.swap_and_record(&mut moves, 8, 7).unwrap();
        assert_eq!(mv, Move::new(7, 8));
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 9, 8]);
        assert_eq!(board.blank_index(), 7);

        let mv = board.swap_and_record(&mut moves, 8, 7).unwrap();
        assert_eq!(mv, Move::new(8, 7));
        assert_eq!(moves, [Move::new(7, 8), Move::new(8, 7)]);
        assert!(board.is_goal());
    }

    #[test]
    fn test_swap_and_record_rejects_illegal_pairs() {
        let mut board = Board::goal(3).unwrap();
        let mut moves = Vec::new();

        assert_eq!(
            board.swap_and_record(&mut moves, 0, 1),
            Err(MoveError::NoBlank {
                first: 0,
                second: 1
            })
        );
        assert_eq!(
            board.swap_and_record(&mut moves, 0, 8),
            Err(MoveError::NotAdjacent {
                first: 0,
                second: 8
            })
        );
        assert_eq!(
            board.swap_and_record(&mut moves, 9, 8),
            Err(MoveError::OutOfRange { index: 9, len: 9 })
        );
        assert!(moves.is_empty());
        assert!(board.is_goal());
    }

    #[test]
    fn test_apply_move_requires_blank_second() {
        let mut board = Board::goal(3).unwrap();
        assert!(board.apply_move(Move::new(8, 7)).is_err());
        board.apply_move(Move::new(7, 8)).unwrap();
        assert_eq!(board.blank_index(), 7);
    }

    #[test]
    fn test_apply_moves_stops_at_first_error() {
        let mut board = Board::goal(3).unwrap();
        let result = board.apply_moves([(7, 8), (0, 1), (8, 7)]);
        assert!(result.is_err());
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 9, 8]);
    }

    #[test]
    fn test_slide_at_borders() {
        let mut board = Board::goal(3).unwrap();
        assert_eq!(board.slide(Direction::Up), None);
        assert_eq!(board.slide(Direction::Left), None);
        assert_eq!(board.slide(Direction::Down), Some(Move::new(5, 8)));
        assert_eq!(board.slide(Direction::Right), Some(Move::new(4, 5)));
        assert_eq!(board.slide(Direction::Left), Some(Move::new(5, 4)));
        assert_eq!(board.slide(Direction::Up), Some(Move::new(8, 5)));
        assert!(board.is_goal());
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "1, 2, 3\n4 5 6\n7 9 8".parse().unwrap();
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 9, 8]);
        assert_eq!(board.to_string(), "1 2 3\n4 5 6\n7 9 8");

        let board = Board::goal(4).unwrap();
        assert_eq!(
            board.to_string(),
            " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15 16"
        );
        assert_eq!(board.to_string().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "1 2 x 4".parse::<Board>().unwrap_err();
        assert!(matches!(err, BoardError::ParseTile { ref token, .. } if token == "x"));
    }

    proptest! {
        #[test]
        fn test_blank_index_tracks_slides(
            board in shuffled_board(4),
            directions in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..64),
        ) {
            let mut board = board;
            for dir in directions {
                board.slide(dir);
                prop_assert_eq!(Some(board.blank_index()), board.position_of(board.blank()));
            }
        }

        #[test]
        fn test_neighbors_are_adjacent(board in shuffled_board(3), location in 0usize..9) {
            for n in board.neighbors(location) {
                prop_assert!(board.is_adjacent(location, n));
            }
        }
    }
}
