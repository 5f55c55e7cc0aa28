use log::debug;
use tileslide_core::{Board, Move};

use crate::{LowerBound, SearchStats, SolveOutcome, SubPuzzle, heuristic, search};

/// Combined heuristic and optimal solver.
///
/// Solving runs in two phases:
///
/// 1. For 2x2, 3x3 and 4x4 boards, the heuristic placement solver produces a
///    first solution. It is reported right away and bounds the search.
/// 2. The best-first search looks for shorter solutions, reporting each one.
///
/// The search is skipped when the [`LowerBound`] already accepts the heuristic
/// solution. Without a lower bound the search runs to exhaustion and the result
/// is a shortest solution.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::Solver;
///
/// let board: Board = "1 2 3 4 5 6 9 7 8".parse()?;
/// let mut lengths = Vec::new();
/// let outcome = Solver::new().solve_with_callback(&board, |moves| lengths.push(moves.len()));
///
/// assert_eq!(outcome.move_count(), Some(2));
/// assert_eq!(lengths.last(), Some(&2));
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solver {
    lower_bound: Option<LowerBound>,
    sub_puzzle: SubPuzzle,
}

impl Solver {
    /// Creates a solver that searches for a shortest solution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets when the solver may stop before finding a shortest solution.
    #[must_use]
    pub fn with_lower_bound(mut self, lower_bound: LowerBound) -> Self {
        self.lower_bound = Some(lower_bound);
        self
    }

    /// Sets how the 4x4 heuristic finishes its inner 3x3 block.
    #[must_use]
    pub fn with_sub_puzzle(mut self, sub_puzzle: SubPuzzle) -> Self {
        self.sub_puzzle = sub_puzzle;
        self
    }

    /// Returns the configured lower bound.
    #[must_use]
    pub fn lower_bound(&self) -> Option<LowerBound> {
        self.lower_bound
    }

    /// Returns the configured inner block strategy.
    #[must_use]
    pub fn sub_puzzle(&self) -> SubPuzzle {
        self.sub_puzzle
    }

    /// Solves `board`.
    #[must_use]
    pub fn solve(&self, board: &Board) -> SolveOutcome {
        self.solve_with_stats(board, |_| {}).0
    }

    /// Solves `board`, calling `on_solution` with every improving solution.
    ///
    /// The heuristic solution (if any) is reported first, then every strictly
    /// shorter solution the search finds. The last reported sequence is the one
    /// returned.
    pub fn solve_with_callback<F>(&self, board: &Board, on_solution: F) -> SolveOutcome
    where
        F: FnMut(&[Move]),
    {
        self.solve_with_stats(board, on_solution).0
    }

    /// Solves `board` and also returns search statistics.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_core::Board;
    /// use tileslide_solver::Solver;
    ///
    /// let board: Board = "4 1 3 7 2 6 5 8 9".parse()?;
    /// let (outcome, stats) = Solver::new().solve_with_stats(&board, |_| {});
    ///
    /// assert!(outcome.is_solved());
    /// assert!(stats.solutions() >= 1);
    /// # Ok::<(), tileslide_core::BoardError>(())
    /// ```
    pub fn solve_with_stats<F>(&self, board: &Board, mut on_solution: F) -> (SolveOutcome, SearchStats)
    where
        F: FnMut(&[Move]),
    {
        let mut stats = SearchStats::default();
        if let Some(outcome) = SolveOutcome::trivial(board) {
            debug!("nothing to search: {outcome:?}");
            return (outcome, stats);
        }

        let seed = match heuristic::solve_heuristic(board, self.sub_puzzle) {
            Ok(SolveOutcome::Solved(moves)) => Some(moves),
            Ok(outcome) => {
                debug!("heuristic gave no solution: {outcome:?}");
                None
            }
            Err(err) => {
                debug!("no heuristic solution: {err}");
                None
            }
        };

        if let Some(moves) = &seed {
            debug!("heuristic solution: {} moves", moves.len());
            stats.record_solution();
            on_solution(moves.as_slice());
            if self.lower_bound.is_some_and(|bound| bound.is_satisfied_by(moves.len())) {
                return (SolveOutcome::Solved(moves.clone()), stats);
            }
        }

        let best = search::search(board, seed, self.lower_bound, &mut on_solution, &mut stats);
        let outcome = best.map_or(SolveOutcome::Stuck, SolveOutcome::Solved);
        (outcome, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &[u8]) -> Board {
        Board::from_tiles(tiles).unwrap()
    }

    fn replay(b: &Board, moves: &[Move]) -> Board {
        let mut b = b.clone();
        b.apply_moves(moves.iter().copied()).unwrap();
        b
    }

    #[test]
    fn test_trivial_boards() {
        let solver = Solver::new();
        assert_eq!(solver.solve(&Board::goal(3).unwrap()), SolveOutcome::AlreadySolved);
        assert_eq!(
            solver.solve(&board(&[2, 1, 3, 4, 5, 6, 7, 8, 9])),
            SolveOutcome::Unsolvable
        );
    }

    #[test]
    fn test_first_found_returns_heuristic() {
        let b = board(&[4, 1, 3, 7, 2, 6, 5, 8, 9]);
        let heuristic = crate::solve8_heuristic(&b).unwrap();
        let (outcome, stats) = Solver::new()
            .with_lower_bound(LowerBound::FirstFound)
            .solve_with_stats(&b, |_| {});
        assert_eq!(outcome, heuristic);
        assert_eq!(stats.solutions(), 1);
        assert_eq!(stats.expanded(), 0);
    }

    #[test]
    fn test_exhaustive_not_longer_than_heuristic() {
        for tiles in [[4, 1, 3, 7, 2, 6, 5, 8, 9], [1, 2, 4, 6, 5, 3, 7, 8, 9]] {
            let b = board(&tiles);
            let heuristic = crate::solve8_heuristic(&b).unwrap().move_count().unwrap();
            let mut reported = Vec::new();
            let outcome = Solver::new().solve_with_callback(&b, |m| reported.push(m.to_vec()));
            let moves = outcome.moves().unwrap();

            assert!(replay(&b, moves).is_goal());
            assert!(moves.len() <= heuristic);
            assert_eq!(reported.first().map(Vec::len), Some(heuristic));
            assert_eq!(reported.last().map(Vec::as_slice), Some(moves));
            assert!(reported.windows(2).all(|w| w[1].len() < w[0].len()));
        }
    }

    #[test]
    fn test_lower_bound_stops_when_reached() {
        let b = board(&[1, 2, 4, 6, 5, 3, 7, 8, 9]);
        let heuristic = crate::solve8_heuristic(&b).unwrap().move_count().unwrap();
        let outcome = Solver::new()
            .with_lower_bound(LowerBound::AtMost(heuristic))
            .solve(&b);
        assert_eq!(outcome.move_count(), Some(heuristic));
    }

    #[test]
    fn test_other_sizes_use_search_only() {
        // 5x5, one move from the goal.
        let mut tiles = (1..=25).collect::<Vec<u8>>();
        tiles.swap(23, 24);
        let b = board(&tiles);
        let (outcome, stats) = Solver::new().solve_with_stats(&b, |_| {});
        assert_eq!(outcome, SolveOutcome::Solved(vec![Move::new(24, 23)]));
        assert_eq!(stats.solutions(), 1);
    }

    #[test]
    fn test_builder() {
        let solver = Solver::new()
            .with_lower_bound(LowerBound::AtMost(30))
            .with_sub_puzzle(SubPuzzle::Heuristic);
        assert_eq!(solver.lower_bound(), Some(LowerBound::AtMost(30)));
        assert_eq!(solver.sub_puzzle(), SubPuzzle::Heuristic);
        assert_eq!(Solver::new().lower_bound(), None);
    }
}
