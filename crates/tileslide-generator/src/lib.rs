//! Random solvable board generation.
//!
//! [`BoardGenerator`] shuffles the goal board of a given size until the result
//! is solvable and not already solved. Every board comes with the
//! [`BoardSeed`] that produced it, so it can be regenerated exactly with
//! [`BoardGenerator::generate_with_seed`].
//!
//! # Examples
//!
//! ```
//! use tileslide_generator::BoardGenerator;
//!
//! let generator = BoardGenerator::new(3)?;
//! let generated = generator.generate();
//! assert!(generated.board.is_solvable());
//!
//! let again = generator.generate_with_seed(generated.seed);
//! assert_eq!(again.board, generated.board);
//! # Ok::<(), tileslide_core::BoardError>(())
//! ```

use log::debug;
use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use tileslide_core::{Board, BoardError};

pub use self::seed::{BoardSeed, SeedError};

mod seed;

/// A generated board together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The shuffled, solvable board.
    pub board: Board,
    /// The seed to pass to [`BoardGenerator::generate_with_seed`] to get the
    /// same board again.
    pub seed: BoardSeed,
}

/// Generates random solvable boards of one size.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    goal: Board,
}

impl BoardGenerator {
    /// Creates a generator for boards of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedSize`] if `size` is outside
    /// [`Board::MIN_SIZE`]`..=`[`Board::MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            goal: Board::goal(size)?,
        })
    }

    /// Returns the side length of generated boards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.goal.size()
    }

    /// Generates a board from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedBoard {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by `seed`.
    ///
    /// The same seed and size always give the same board.
    #[must_use]
    pub fn generate_with_seed(&self, seed: BoardSeed) -> GeneratedBoard {
        let mut rng = Pcg64::from_seed(seed.rng_seed(self.size()));
        let mut tiles = self.goal.tiles().to_vec();
        let mut attempts = 0_usize;
        loop {
            attempts += 1;
            tiles.shuffle(&mut rng);
            if let Ok(board) = Board::from_tiles(tiles.as_slice())
                && board.is_solvable()
                && !board.is_goal()
            {
                debug!("generated {0}x{0} board after {attempts} shuffles", self.size());
                return GeneratedBoard { board, seed };
            }
        }
    }
}
