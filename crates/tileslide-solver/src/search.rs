//! Best-first branch-and-bound search for shortest solutions.
//!
//! Nodes are expanded in order of their Manhattan distance to the goal. Once a
//! solution is known, every node whose depth plus Manhattan distance cannot beat
//! it is pruned. Since the Manhattan distance never overestimates, running the
//! search to exhaustion yields a shortest solution.
//!
//! # Design Notes
//!
//! - The frontier is a [`BinaryHeap`] ordered by priority alone. Ties go to the
//!   node pushed last, which makes the search dive towards a first solution.
//! - Children are pruned when they would undo the move that produced their
//!   parent, or when the same board was already reached in as few moves.
//! - The bound is checked twice: when a child is pushed and again when a node
//!   is popped, since a better solution may have been found in between.

use std::{
    cmp::Ordering,
    collections::{BinaryHeap, HashMap, hash_map::Entry},
};

use log::{debug, trace};
use tileslide_core::{Board, Move};

use crate::SolverError;

/// When the search may stop before exhausting the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum LowerBound {
    /// Accept the first solution found, heuristic or searched.
    FirstFound,
    /// Accept the first solution with at most this many moves.
    AtMost(usize),
}

impl LowerBound {
    /// Returns `true` if a solution of `len` moves is good enough to stop.
    ///
    /// # Examples
    ///
    /// ```
    /// use tileslide_solver::LowerBound;
    ///
    /// assert!(LowerBound::FirstFound.is_satisfied_by(100));
    /// assert!(LowerBound::AtMost(20).is_satisfied_by(20));
    /// assert!(!LowerBound::AtMost(20).is_satisfied_by(21));
    /// ```
    #[must_use]
    pub fn is_satisfied_by(self, len: usize) -> bool {
        match self {
            Self::FirstFound => true,
            Self::AtMost(max) => len <= max,
        }
    }
}

impl TryFrom<isize> for LowerBound {
    type Error = SolverError;

    /// Converts the raw front-end encoding: `-1` means [`LowerBound::FirstFound`]
    /// and a positive value `n` means [`LowerBound::AtMost`]`(n)`.
    fn try_from(value: isize) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::FirstFound),
            1.. => Ok(Self::AtMost(value.unsigned_abs())),
            _ => Err(SolverError::InvalidLowerBound { value }),
        }
    }
}

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    expanded: usize,
    pushed: usize,
    pruned: usize,
    stale: usize,
    duplicates: usize,
    solutions: usize,
    max_frontier: usize,
}

impl SearchStats {
    /// Returns the number of nodes whose children were generated.
    #[must_use]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Returns the number of nodes pushed onto the frontier.
    #[must_use]
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    /// Returns the number of children dropped by the bound before being pushed.
    #[must_use]
    pub fn pruned(&self) -> usize {
        self.pruned
    }

    /// Returns the number of popped nodes dropped because a better solution
    /// appeared after they were pushed.
    #[must_use]
    pub fn stale(&self) -> usize {
        self.stale
    }

    /// Returns the number of children dropped because their board was already
    /// reached in as few moves.
    #[must_use]
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Returns the number of solutions reported, including the heuristic one.
    #[must_use]
    pub fn solutions(&self) -> usize {
        self.solutions
    }

    /// Returns the largest frontier size observed.
    #[must_use]
    pub fn max_frontier(&self) -> usize {
        self.max_frontier
    }

    pub(crate) fn record_solution(&mut self) {
        self.solutions += 1;
    }
}

#[derive(Debug)]
struct Node {
    board: Board,
    moves: Vec<Move>,
    priority: usize,
    seq: u64,
}

impl Node {
    fn cost(&self) -> usize {
        self.moves.len() + self.priority
    }

    fn last_move(&self) -> Option<Move> {
        self.moves.last().copied()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    // `BinaryHeap` is a max-heap: lower priority first, then newer first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Returns the legal moves from `board`, skipping the one that undoes `last`.
fn valid_moves(board: &Board, last: Option<Move>) -> impl Iterator<Item = Move> + '_ {
    let blank = board.blank_index();
    let undo = last.map(Move::reversed);
    board
        .neighbors(blank)
        .map(move |tile| Move::new(tile, blank))
        .filter(move |&mv| Some(mv) != undo)
}

/// Searches for a solution of `board` shorter than `seed`.
///
/// `seed` is a known solution (usually from the heuristic solver) used as the
/// initial bound. `on_solution` is called with every strictly shorter solution
/// found, in discovery order. The search stops early once `lower_bound` accepts
/// a found solution, and runs to exhaustion when `lower_bound` is `None`.
///
/// Returns the shortest solution known when the search stops, which is `seed`
/// itself if nothing shorter was found, or `None` if there is neither.
///
/// The board must be solvable; otherwise the frontier only empties once every
/// reachable board has been visited.
///
/// # Examples
///
/// ```
/// use tileslide_core::Board;
/// use tileslide_solver::{SearchStats, search::search};
///
/// let board: Board = "1 2 3 4 5 6 9 7 8".parse()?;
/// let mut found = Vec::new();
/// let mut stats = SearchStats::default();
/// let best = search(&board, None, None, &mut |moves: &[_]| found.push(moves.len()), &mut stats);
///
/// assert_eq!(best.map(|m| m.len()), Some(2));
/// assert_eq!(found, [2]);
/// # Ok::<(), tileslide_core::BoardError>(())
/// ```
pub fn search<F>(
    board: &Board,
    seed: Option<Vec<Move>>,
    lower_bound: Option<LowerBound>,
    on_solution: &mut F,
    stats: &mut SearchStats,
) -> Option<Vec<Move>>
where
    F: FnMut(&[Move]),
{
    let mut best = seed;
    let mut seen = HashMap::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0;

    seen.insert(board.tiles().to_vec(), 0);
    frontier.push(Node {
        board: board.clone(),
        moves: Vec::new(),
        priority: board.manhattan_distance(),
        seq,
    });
    stats.pushed += 1;
    debug!(
        "search started: manhattan {}, bound {:?}",
        board.manhattan_distance(),
        best.as_ref().map(Vec::len)
    );

    while let Some(node) = frontier.pop() {
        if best.as_ref().is_some_and(|best| node.cost() >= best.len()) {
            stats.stale += 1;
            continue;
        }

        if node.board.is_goal() {
            trace!("found solution of {} moves", node.moves.len());
            stats.record_solution();
            on_solution(node.moves.as_slice());
            let len = node.moves.len();
            best = Some(node.moves);
            if lower_bound.is_some_and(|bound| bound.is_satisfied_by(len)) {
                debug!("search stopped: {len} moves accepted");
                break;
            }
            continue;
        }

        stats.expanded += 1;
        let depth = node.moves.len() + 1;
        for mv in valid_moves(&node.board, node.last_move()) {
            let goal = Board::goal_index(node.board[mv.tile()]);
            let priority =
                node.priority + node.board.distance(mv.blank(), goal) - node.board.distance(mv.tile(), goal);

            if best.as_ref().is_some_and(|best| depth + priority >= best.len()) {
                stats.pruned += 1;
                continue;
            }

            let child = node.board.with_move(mv);
            match seen.entry(child.tiles().to_vec()) {
                Entry::Occupied(entry) if *entry.get() <= depth => {
                    stats.duplicates += 1;
                    continue;
                }
                Entry::Occupied(mut entry) => {
                    entry.insert(depth);
                }
                Entry::Vacant(entry) => {
                    entry.insert(depth);
                }
            }

            let mut moves = Vec::with_capacity(depth);
            moves.extend_from_slice(&node.moves);
            moves.push(mv);
            seq += 1;
            frontier.push(Node {
                board: child,
                moves,
                priority,
                seq,
            });
            stats.pushed += 1;
        }
        stats.max_frontier = stats.max_frontier.max(frontier.len());
    }

    debug!(
        "search finished: best {:?}, {} expanded, {} pushed",
        best.as_ref().map(Vec::len),
        stats.expanded,
        stats.pushed
    );
    best
}
