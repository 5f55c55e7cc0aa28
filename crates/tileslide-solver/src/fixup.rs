//! Hand-made recovery sequences for placements the generic routine cannot do.
//!
//! Generic placement gets stuck in a few well-known spots: the last tile of a
//! row or column needs to rotate into place around the tiles already placed
//! next to it. Each [`Fixup`] here handles one such spot by a fixed sequence of
//! [`Placer::free_cell`] calls and swaps.
//!
//! A fixup checks its precondition (where the tile must be sitting) before
//! moving anything and fails with [`PlacementError::Precondition`] otherwise.

use crate::{
    TileSet,
    placement::{PlacementError, Placer},
};

/// A recovery routine for placing one tile on boards of one size.
#[derive(Debug, Clone, Copy)]
pub struct Fixup {
    size: usize,
    tile: u8,
    name: &'static str,
    run: fn(&mut Placer) -> Result<(), PlacementError>,
}

impl Fixup {
    /// Returns the board side length this fixup applies to.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the tile this fixup places.
    #[must_use]
    pub fn tile(&self) -> u8 {
        self.tile
    }

    /// Returns a short human readable name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Runs the routine on `placer`.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError::Precondition`] if the tile is not where this
    /// routine expects it, or another placement error if a step cannot be
    /// carried out.
    pub fn apply(&self, placer: &mut Placer) -> Result<(), PlacementError> {
        (self.run)(placer)
    }
}

static FIXUPS: [Fixup; 5] = [
    Fixup {
        size: 3,
        tile: 3,
        name: "rotate 3 into the top-right corner",
        run: place_3x3_tile_3,
    },
    Fixup {
        size: 3,
        tile: 5,
        name: "cycle 5 around the middle row",
        run: place_3x3_tile_5,
    },
    Fixup {
        size: 3,
        tile: 6,
        name: "rotate 6 into the middle-right cell",
        run: place_3x3_tile_6,
    },
    Fixup {
        size: 4,
        tile: 4,
        name: "rotate 4 into the top-right corner",
        run: place_4x4_tile_4,
    },
    Fixup {
        size: 4,
        tile: 13,
        name: "rotate 13 into the bottom-left corner",
        run: place_4x4_tile_13,
    },
];

/// Returns every fixup that exists.
#[must_use]
pub fn all() -> &'static [Fixup] {
    &FIXUPS
}

/// Returns the fixup for placing `tile` on a board of side `size`, if any.
///
/// # Examples
///
/// ```
/// use tileslide_solver::fixup;
///
/// assert!(fixup::find(3, 3).is_some());
/// assert!(fixup::find(4, 13).is_some());
/// assert!(fixup::find(3, 4).is_none());
/// ```
#[must_use]
pub fn find(size: usize, tile: u8) -> Option<&'static Fixup> {
    FIXUPS.iter().find(|f| f.size == size && f.tile == tile)
}

// 3x3 cells:
//  0 1 2
//  3 4 5
//  6 7 8

/// Tiles 1 and 2 are home, 3 sits below its goal.
fn place_3x3_tile_3(p: &mut Placer) -> Result<(), PlacementError> {
    p.expect_at(3, 5)?;
    p.free_cell(0, TileSet::from([2, 3]))?;
    let middle = p.board()[4];
    p.free_cell(5, TileSet::from([middle]))?;
    p.free_cell(0, TileSet::from([1, 3]))?;
    p.swap(0, 3)
}

/// Tiles 1 to 4 are home, 5 sits below its goal.
fn place_3x3_tile_5(p: &mut Placer) -> Result<(), PlacementError> {
    p.expect_at(5, 7)?;
    p.free_cell(4, TileSet::from([5]))?;
    p.swap(4, 7)?;
    p.free_cell(5, TileSet::from([5]))?;
    p.swap(5, 4)?;
    let below = p.board()[7];
    p.free_cell(6, TileSet::from([below]))?;
    p.free_cell(4, TileSet::from([4]))?;
    p.swap(5, 4)?;
    p.swap(5, 8)
}

/// Tiles 1 to 5 are home, 6 sits in the bottom row.
fn place_3x3_tile_6(p: &mut Placer) -> Result<(), PlacementError> {
    let location = p.locate(6)?;
    if location == 8 {
        p.free_cell(3, TileSet::from([5, 6]))?;
        let below = p.board()[7];
        p.free_cell(8, TileSet::from([below]))?;
        p.free_cell(4, TileSet::from([6]))?;
        p.swap(3, 4)?;
        p.swap(3, 6)
    } else if location == 7 && p.board().is_blank_at(6) {
        p.free_cell(4, TileSet::from([6]))?;
        p.swap(7, 4)?;
        p.free_cell(5, TileSet::from([6]))?;
        p.swap(5, 4)?;
        p.swap(3, 4)?;
        p.swap(6, 3)
    } else {
        Err(PlacementError::Precondition { value: 6, location })
    }
}

// 4x4 cells:
//   0  1  2  3
//   4  5  6  7
//   8  9 10 11
//  12 13 14 15

/// Tiles 1 to 3 are home, 4 sits below its goal.
fn place_4x4_tile_4(p: &mut Placer) -> Result<(), PlacementError> {
    p.expect_at(4, 7)?;
    p.free_cell(1, TileSet::from([1, 3, 4]))?;
    p.free_cell(3, TileSet::from([1]))?;
    p.swap(7, 3)?;
    p.free_cell(2, TileSet::from([4]))?;
    p.swap(2, 1)?;
    p.swap(1, 5)
}

/// The top row and tiles 5 and 9 are home, 13 sits right of its goal.
fn place_4x4_tile_13(p: &mut Placer) -> Result<(), PlacementError> {
    p.expect_at(13, 13)?;
    p.free_cell(4, TileSet::from([1, 2, 3, 4, 9, 13]))?;
    p.free_cell(12, TileSet::new())?;
    p.swap(13, 12)?;
    p.free_cell(8, TileSet::from([13]))?;
    p.swap(4, 8)?;
    p.swap(4, 5)
}
