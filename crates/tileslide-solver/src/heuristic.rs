//! Heuristic placement solvers for the 3-, 8- and 15-puzzle.
//!
//! Tiles are placed one at a time in a fixed order, each one protected once it
//! is home. When generic placement gets stuck, the [`fixup`](crate::fixup)
//! registered for that tile takes over. The 15-puzzle solves its top row and
//! left column this way and hands the remaining 3x3 block to an 8-puzzle
//! solver.
//!
//! The result is always a legal move sequence, but rarely a shortest one.

use log::{debug, trace};
use tileslide_core::{Board, Move};

use crate::{
    SolveOutcome, Solver, SolverError, TileSet, fixup,
    placement::{PlacementError, Placer},
};

/// How the 15-puzzle solver finishes its inner 3x3 block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::IsVariant)]
pub enum SubPuzzle {
    /// Use the 8-puzzle placement heuristic.
    Heuristic,
    /// Search for a shortest solution of the block.
    #[default]
    Optimal,
}

/// Solves a 2x2 board by placement.
///
/// # Errors
///
/// Returns [`SolverError::InvalidSize`] if the board does not have 4 tiles.
pub fn solve3_heuristic(board: &Board) -> Result<SolveOutcome, SolverError> {
    check_len(board, 4)?;
    if let Some(outcome) = SolveOutcome::trivial(board) {
        return Ok(outcome);
    }
    let mut placer = Placer::new(board.clone());
    let placed = (1..=3).try_for_each(|value| place_or_fixup(&mut placer, value, None));
    Ok(finish(placer, placed))
}

/// Solves a 3x3 board by placement.
///
/// # Errors
///
/// Returns [`SolverError::InvalidSize`] if the board does not have 9 tiles.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::solve8_heuristic;
///
/// let board: Board = "1 2 4 6 5 3 7 8 9".parse()?;
/// let moves = solve8_heuristic(&board).unwrap().into_moves().unwrap();
///
/// let mut replay = board.clone();
/// replay.apply_moves(moves).unwrap();
/// assert!(replay.is_goal());
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
pub fn solve8_heuristic(board: &Board) -> Result<SolveOutcome, SolverError> {
    check_len(board, 9)?;
    if let Some(outcome) = SolveOutcome::trivial(board) {
        return Ok(outcome);
    }
    let mut placer = Placer::new(board.clone());
    let placed = (1..=8).try_for_each(|value| place_or_fixup(&mut placer, value, None));
    Ok(finish(placer, placed))
}

/// Solves a 4x4 board by placement.
///
/// Tiles 1, 2, 3, 4, 5, 9 and 13 are placed first. The remaining 3x3 block is
/// then relabeled as an 8-puzzle, solved as chosen by `sub_puzzle`, and its
/// moves are mapped back onto the 4x4 board.
///
/// # Errors
///
/// Returns [`SolverError::InvalidSize`] if the board does not have 16 tiles.
pub fn solve15_heuristic(board: &Board, sub_puzzle: SubPuzzle) -> Result<SolveOutcome, SolverError> {
    check_len(board, 16)?;
    if let Some(outcome) = SolveOutcome::trivial(board) {
        return Ok(outcome);
    }

    let mut placer = Placer::new(board.clone());
    let mut protected = TileSet::new();
    let placed = [1, 2, 3, 4, 5, 9, 13].into_iter().try_for_each(|value| {
        protected.insert(value);
        place_or_fixup(&mut placer, value, Some(protected))
    });
    if let Err(err) = placed {
        debug!("15-puzzle border placement failed: {err}");
        return Ok(SolveOutcome::Stuck);
    }
    debug!("15-puzzle border placed after {} moves", placer.moves().len());

    let block = SubBoard::bottom_right(placer.board(), 3)?;
    let outcome = match sub_puzzle {
        SubPuzzle::Heuristic => solve8_heuristic(&block.board)?,
        SubPuzzle::Optimal => Solver::new().solve(&block.board),
    };
    let inner = match outcome {
        SolveOutcome::Solved(moves) => moves,
        SolveOutcome::AlreadySolved => Vec::new(),
        SolveOutcome::Unsolvable | SolveOutcome::Stuck => {
            debug!("inner 3x3 block could not be solved: {outcome:?}");
            return Ok(SolveOutcome::Stuck);
        }
    };
    debug!("inner 3x3 block solved in {} moves", inner.len());

    let replayed = inner.into_iter().try_for_each(|mv| {
        let mv = block.to_outer(mv);
        placer.swap(mv.tile(), mv.blank())
    });
    Ok(finish(placer, replayed))
}

/// Dispatches to the placement solver for the board's size.
///
/// # Errors
///
/// Returns [`SolverError::UnsupportedSize`] unless the board has 4, 9 or 16
/// tiles.
pub fn solve_heuristic(board: &Board, sub_puzzle: SubPuzzle) -> Result<SolveOutcome, SolverError> {
    match board.cell_count() {
        4 => solve3_heuristic(board),
        9 => solve8_heuristic(board),
        16 => solve15_heuristic(board, sub_puzzle),
        actual => Err(SolverError::UnsupportedSize { actual }),
    }
}

fn check_len(board: &Board, expected: usize) -> Result<(), SolverError> {
    let actual = board.cell_count();
    if actual == expected {
        Ok(())
    } else {
        Err(SolverError::InvalidSize { expected, actual })
    }
}

fn place_or_fixup(placer: &mut Placer, value: u8, immovable: Option<TileSet>) -> Result<(), PlacementError> {
    match placer.place_tile(value, immovable) {
        Ok(()) => Ok(()),
        Err(err) => {
            let size = placer.board().size();
            let Some(fixup) = fixup::find(size, value) else {
                trace!("no fixup for tile {value} on a {size}x{size} board: {err}");
                return Err(err);
            };
            debug!("placing tile {value} failed ({err}); applying fixup \"{}\"", fixup.name());
            fixup.apply(placer)
        }
    }
}

fn finish(placer: Placer, placed: Result<(), PlacementError>) -> SolveOutcome {
    let (board, moves) = placer.into_parts();
    match placed {
        Ok(()) if board.is_goal() => SolveOutcome::Solved(moves),
        Ok(()) => {
            debug!("placement finished without reaching the goal");
            SolveOutcome::Stuck
        }
        Err(err) => {
            debug!("placement stuck after {} moves: {err}", moves.len());
            SolveOutcome::Stuck
        }
    }
}

/// A square block in the bottom-right corner of a board, relabeled as a
/// standalone board.
#[derive(Debug)]
struct SubBoard {
    board: Board,
    offset: usize,
    outer_size: usize,
}

impl SubBoard {
    fn bottom_right(outer: &Board, size: usize) -> Result<Self, SolverError> {
        let outer_size = outer.size();
        let offset = outer_size - size;
        let cell = |i: usize| (i / size + offset) * outer_size + i % size + offset;

        let values = (0..size * size).map(|i| outer[cell(i)]).collect::<Vec<_>>();
        let mut ranks = values.clone();
        ranks.sort_unstable();
        let tiles = values
            .iter()
            .map(|value| ranks.binary_search(value).map_or(0, |rank| rank + 1))
            .map(|rank| u8::try_from(rank).unwrap_or(0))
            .collect::<Vec<_>>();

        let board = Board::from_tiles(tiles).map_err(|_| SolverError::InvalidSize {
            expected: size * size,
            actual: values.len(),
        })?;
        Ok(Self {
            board,
            offset,
            outer_size,
        })
    }

    fn to_outer_index(&self, index: usize) -> usize {
        let size = self.board.size();
        (index / size + self.offset) * self.outer_size + index % size + self.offset
    }

    fn to_outer(&self, mv: Move) -> Move {
        Move::new(self.to_outer_index(mv.tile()), self.to_outer_index(mv.blank()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &[u8]) -> Board {
        Board::from_tiles(tiles).unwrap()
    }

    fn assert_solves(board: &Board, outcome: &SolveOutcome) {
        let moves = outcome.moves().expect("expected a solution");
        let mut replay = board.clone();
        replay.apply_moves(moves.iter().copied()).unwrap();
        assert!(replay.is_goal(), "moves do not reach the goal: {moves:?}");
    }

    #[test]
    fn test_wrong_size_is_rejected() {
        let b = Board::goal(3).unwrap();
        assert_eq!(
            solve3_heuristic(&b),
            Err(SolverError::InvalidSize {
                expected: 4,
                actual: 9
            })
        );
        assert_eq!(
            solve15_heuristic(&b, SubPuzzle::Heuristic),
            Err(SolverError::InvalidSize {
                expected: 16,
                actual: 9
            })
        );
        let b = Board::goal(5).unwrap();
        assert_eq!(
            solve_heuristic(&b, SubPuzzle::default()),
            Err(SolverError::UnsupportedSize { actual: 25 })
        );
    }

    #[test]
    fn test_trivial_boards() {
        for size in 2..=4 {
            let goal = Board::goal(size).unwrap();
            assert_eq!(
                solve_heuristic(&goal, SubPuzzle::default()),
                Ok(SolveOutcome::AlreadySolved)
            );
        }
        let swapped = board(&[2, 1, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(solve8_heuristic(&swapped), Ok(SolveOutcome::Unsolvable));
    }

    #[test]
    fn test_solve3() {
        for tiles in [[1, 2, 4, 3], [4, 1, 3, 2], [2, 4, 1, 3], [3, 1, 2, 4]] {
            let b = board(&tiles);
            assert!(b.is_solvable());
            let outcome = solve3_heuristic(&b).unwrap();
            assert_solves(&b, &outcome);
        }
    }

    #[test]
    fn test_solve8_uses_fixup() {
        let b = board(&[1, 2, 4, 6, 5, 3, 7, 8, 9]);
        let outcome = solve8_heuristic(&b).unwrap();
        assert_solves(&b, &outcome);
        assert!(outcome.move_count().unwrap() <= 20);
    }

    #[test]
    fn test_solve8_scrambled() {
        for tiles in [
            [4, 1, 3, 7, 2, 6, 5, 8, 9],
            [1, 2, 3, 4, 5, 6, 9, 7, 8],
            [1, 5, 2, 4, 9, 3, 7, 8, 6],
        ] {
            let b = board(&tiles);
            assert_solves(&b, &solve8_heuristic(&b).unwrap());
        }
    }

    #[test]
    fn test_solve15_near_goal() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 16, 15]);
        for sub_puzzle in [SubPuzzle::Heuristic, SubPuzzle::Optimal] {
            let outcome = solve15_heuristic(&b, sub_puzzle).unwrap();
            assert_eq!(outcome, SolveOutcome::Solved(vec![Move::new(15, 14)]));
        }
    }

    #[test]
    fn test_solve15_scrambled() {
        let b = board(&[5, 1, 2, 3, 9, 6, 7, 4, 13, 10, 11, 8, 16, 14, 15, 12]);
        assert!(b.is_solvable());
        for sub_puzzle in [SubPuzzle::Heuristic, SubPuzzle::Optimal] {
            assert_solves(&b, &solve15_heuristic(&b, sub_puzzle).unwrap());
        }
    }

    #[test]
    fn test_sub_board_relabels_and_maps_back() {
        let b = board(&[1, 2, 3, 4, 5, 7, 6, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        let block = SubBoard::bottom_right(&b, 3).unwrap();
        assert_eq!(block.board.tiles(), &[2, 1, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(block.to_outer_index(0), 5);
        assert_eq!(block.to_outer_index(4), 10);
        assert_eq!(block.to_outer_index(8), 15);
        assert_eq!(block.to_outer(Move::new(7, 8)), Move::new(14, 15));
    }
}
