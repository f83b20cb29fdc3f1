//! Tile model: pip pairs with orientation and per-instance identity.
//!
//! ## Identity vs. value
//!
//! A [`Tile`] carries a [`TileId`] assigned once when the standard set is
//! built. All removals from collections go through the id, never through
//! structural equality: two distinct instances could compare value-equal in
//! non-standard configurations, and value-based removal would then delete
//! the wrong copy.
//!
//! ## Orientation
//!
//! The left/right pips are swapped in place by [`Tile::flip`], exactly once
//! per tile, immediately before it joins the chain. Orientation never
//! affects identity or playability.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Highest pip value in the double-six set.
pub const MAX_PIP: u8 = 6;

/// Number of tiles in the standard double-six set.
pub const STANDARD_SET_SIZE: usize = 28;

/// Identity handle for a tile instance.
///
/// Assigned once by [`standard_set`]; stable for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw id value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// A domino tile: an orientable pair of pip values in `0..=6`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    left: u8,
    right: u8,
}

impl Tile {
    /// Create a tile, validating both pip values.
    ///
    /// Fails with [`EngineError::InvalidTileValue`] when either side is
    /// outside `0..=6`; an invalid tile never enters any collection.
    pub fn new(id: TileId, left: u8, right: u8) -> Result<Self, EngineError> {
        if left > MAX_PIP || right > MAX_PIP {
            return Err(EngineError::InvalidTileValue { left, right });
        }
        Ok(Self { id, left, right })
    }

    /// The identity handle of this instance.
    #[must_use]
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Left pip value in the current orientation.
    #[must_use]
    pub const fn left(&self) -> u8 {
        self.left
    }

    /// Right pip value in the current orientation.
    #[must_use]
    pub const fn right(&self) -> u8 {
        self.right
    }

    /// Both pip values in the current orientation.
    #[must_use]
    pub const fn pips(&self) -> (u8, u8) {
        (self.left, self.right)
    }

    /// True when both sides carry the same value.
    #[must_use]
    pub const fn is_double(&self) -> bool {
        self.left == self.right
    }

    /// Sum of both pip values.
    #[must_use]
    pub const fn pip_sum(&self) -> u32 {
        self.left as u32 + self.right as u32
    }

    /// True when either side of the tile matches either open end value.
    ///
    /// Pure predicate; ignores orientation.
    #[must_use]
    pub const fn is_playable(&self, end1: u8, end2: u8) -> bool {
        self.left == end1 || self.left == end2 || self.right == end1 || self.right == end2
    }

    /// Swap the left and right values in place.
    ///
    /// Used to align the tile with the chain end it is about to extend.
    pub fn flip(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.left, self.right)
    }
}

/// Build the standard double-six set: 28 tiles, one per unordered pair
/// `(a, b)` with `0 <= b <= a <= 6`, with sequential ids.
#[must_use]
pub fn standard_set() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(STANDARD_SET_SIZE);
    let mut next_id = 0u8;
    for left in 0..=MAX_PIP {
        for right in 0..=left {
            let tile = Tile::new(TileId::new(next_id), left, right)
                .expect("standard set pips are always in range");
            tiles.push(tile);
            next_id += 1;
        }
    }
    tiles
}
