//! Heuristics, solvability and goal test.
//!
//! All functions here are pure and read-only. The Manhattan distance is the
//! admissible heuristic used by the optimal search; because a single move
//! shifts exactly one tile by one cell, it changes by exactly one per move.

use crate::Board;

impl Board {
    /// Returns the Manhattan distance between the grid cells `i` and `j`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    ///
    /// let board = Board::goal(4)?;
    /// assert_eq!(board.distance(0, 15), 6);
    /// assert_eq!(board.distance(5, 6), 1);
    /// assert_eq!(board.distance(3, 12), 6);
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn distance(&self, i: usize, j: usize) -> usize {
        let size = self.size();
        (i / size).abs_diff(j / size) + (i % size).abs_diff(j % size)
    }

    /// Returns the number of non-blank tiles not at their goal position.
    ///
    /// This is the Hamming heuristic.
    #[must_use]
    pub fn misplaced_count(&self) -> usize {
        self.tiles()
            .iter()
            .enumerate()
            .filter(|&(i, &value)| !self.is_blank_at(i) && Self::goal_index(value) != i)
            .count()
    }

    /// Returns the sum of the distances of all non-blank tiles from their goal
    /// positions.
    #[must_use]
    pub fn manhattan_distance(&self) -> usize {
        self.tiles()
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.is_blank_at(i))
            .map(|(i, &value)| self.distance(i, Self::goal_index(value)))
            .sum()
    }

    /// Returns the number of inversions among the non-blank tiles.
    ///
    /// An inversion is a pair of non-blank tiles where the earlier one (in
    /// row-major order) has the larger value.
    #[must_use]
    pub fn inversions(&self) -> usize {
        let blank = self.blank();
        let tiles = self.tiles();
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != blank)
            .map(|(i, &value)| tiles[i + 1..].iter().filter(|&&next| next < value).count())
            .sum()
    }

    /// Returns `true` if the goal can be reached with legal moves.
    ///
    /// On odd-width boards the inversion count must be even. On even-width
    /// boards, the blank's row counted from the bottom (starting at 1) must be
    /// odd exactly when the inversion count is even.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    ///
    /// let swapped: Board = "1 2 3 4 5 6 8 7 9".parse()?;
    /// assert!(!swapped.is_solvable());
    ///
    /// let scrambled: Board = "4 1 3 7 2 6 5 8 9".parse()?;
    /// assert!(scrambled.is_solvable());
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let inversions_even = self.inversions() % 2 == 0;
        let size = self.size();
        if size % 2 == 1 {
            inversions_even
        } else {
            let blank_row_from_bottom = size - self.blank_index() / size;
            (blank_row_from_bottom % 2 == 1) == inversions_even
        }
    }

    /// Returns `true` if the tiles are in ascending order.
    ///
    /// The blank, being the largest value, is last on a solved board.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.tiles().windows(2).all(|pair| pair[0] < pair[1])
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Board, Direction};

    fn board(tiles: &[u8]) -> Board {
        Board::from_tiles(tiles).unwrap()
    }

    #[test]
    fn test_goal_metrics_are_zero() {
        for size in 2..=5 {
            let goal = Board::goal(size).unwrap();
            assert!(goal.is_goal());
            assert!(goal.is_solvable());
            assert_eq!(goal.manhattan_distance(), 0);
            assert_eq!(goal.misplaced_count(), 0);
            assert_eq!(goal.inversions(), 0);
        }
    }

    #[test]
    fn test_manhattan_and_misplaced() {
        let b = board(&[2, 8, 3, 1, 6, 4, 7, 5, 9]);
        // 2:1 8:2 3:0 1:1 6:1 4:2 7:0 5:1
        assert_eq!(b.manhattan_distance(), 8);
        assert_eq!(b.misplaced_count(), 6);
    }

    #[test]
    fn test_blank_is_ignored_by_heuristics() {
        let b = board(&[1, 2, 3, 4, 9, 5, 7, 8, 6]);
        assert_eq!(b.misplaced_count(), 2);
        assert_eq!(b.manhattan_distance(), 2);
    }

    #[test]
    fn test_inversions() {
        assert_eq!(board(&[2, 1, 3, 4]).inversions(), 1);
        assert_eq!(board(&[4, 3, 2, 1]).inversions(), 3);
        assert_eq!(board(&[2, 8, 3, 1, 6, 4, 7, 5, 9]).inversions(), 11);
        assert_eq!(board(&[4, 1, 3, 7, 2, 6, 5, 8, 9]).inversions(), 8);
    }

    #[test]
    fn test_single_swap_is_unsolvable_on_odd_width() {
        assert!(!board(&[1, 2, 3, 4, 5, 6, 8, 7, 9]).is_solvable());
        assert!(!board(&[2, 1, 3, 4, 5, 6, 7, 8, 9]).is_solvable());
    }

    #[test]
    fn test_scrambled_odd_width() {
        // 11 inversions with the blank in the corner.
        assert!(!board(&[2, 8, 3, 1, 6, 4, 7, 5, 9]).is_solvable());
        assert!(board(&[4, 1, 3, 7, 2, 6, 5, 8, 9]).is_solvable());
        assert!(board(&[8, 6, 7, 2, 5, 4, 3, 9, 1]).is_solvable());
    }

    #[test]
    fn test_even_width_parity() {
        // Classic unsolvable 15-puzzle: 14 and 15 swapped.
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 16]);
        assert!(!b.is_solvable());

        // Blank moved up one row: inversions change parity with the row.
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 16, 13, 14, 15, 12]);
        assert!(b.is_solvable());

        assert!(board(&[1, 2, 4, 3]).is_solvable());
        assert!(!board(&[2, 1, 3, 4]).is_solvable());
    }

    proptest! {
        #[test]
        fn test_solvability_is_invariant_under_moves(
            tiles in Just((1..=16u8).collect::<Vec<_>>()).prop_shuffle(),
            directions in prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 1..32),
        ) {
            let mut b = Board::from_tiles(tiles).unwrap();
            let solvable = b.is_solvable();
            for dir in directions {
                b.slide(dir);
                prop_assert_eq!(b.is_solvable(), solvable);
            }
        }

        #[test]
        fn test_manhattan_changes_by_one_per_move(
            tiles in Just((1..=9u8).collect::<Vec<_>>()).prop_shuffle(),
            dir in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let mut b = Board::from_tiles(tiles).unwrap();
            let before = b.manhattan_distance();
            if b.slide(dir).is_some() {
                prop_assert_eq!(b.manhattan_distance().abs_diff(before), 1);
            }
        }

        #[test]
        fn test_goal_iff_zero_manhattan(tiles in Just((1..=9u8).collect::<Vec<_>>()).prop_shuffle()) {
            let b = Board::from_tiles(tiles).unwrap();
            prop_assert_eq!(b.is_goal(), b.manhattan_distance() == 0);
        }
    }
}
