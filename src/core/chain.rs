//! The chain of played tiles on the table.
//!
//! The chain has two open extremity values. Invariant after the opening
//! move: `left_open` equals the left pip of the first tile in its current
//! orientation, `right_open` equals the right pip of the last tile, and the
//! chain only ever grows.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Played tiles plus the two open end values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    tiles: VecDeque<Tile>,
    ends: Option<(u8, u8)>,
}

impl Chain {
    /// Create an empty, unopened chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: VecDeque::new(),
            ends: None,
        }
    }

    /// Play the starting tile: both open ends become the tile's own values.
    ///
    /// # Panics
    ///
    /// Panics if the chain was already opened.
    pub fn open(&mut self, tile: Tile) {
        assert!(self.ends.is_none(), "chain already opened with {:?}", self.ends);
        self.ends = Some((tile.left(), tile.right()));
        self.tiles.push_back(tile);
    }

    /// Attach a tile to whichever end it extends, flipping it first when
    /// its current orientation would not line up.
    ///
    /// Alignment rule: flip when the tile's left value already sits on the
    /// chain's left end or its right value on the right end, so that the
    /// matching value faces the chain and the free value becomes the new
    /// extremity. After orienting, a tile whose right value equals the left
    /// end is prepended; otherwise it is appended.
    ///
    /// # Panics
    ///
    /// Panics if the chain is unopened or the tile does not match either
    /// open end (the engine must only attach legal moves).
    pub fn attach(&mut self, mut tile: Tile) {
        let (left_open, right_open) = self
            .ends
            .unwrap_or_else(|| panic!("attach on unopened chain: {tile}"));
        assert!(
            tile.is_playable(left_open, right_open),
            "tile {tile} is not playable against open ends ({left_open}, {right_open})",
        );

        if tile.left() == left_open || tile.right() == right_open {
            tile.flip();
        }

        if tile.right() == left_open {
            self.ends = Some((tile.left(), right_open));
            self.tiles.push_front(tile);
        } else {
            self.ends = Some((left_open, tile.right()));
            self.tiles.push_back(tile);
        }
    }

    /// Left open end value.
    ///
    /// # Panics
    ///
    /// Panics before the opening move.
    #[must_use]
    pub fn left_open(&self) -> u8 {
        self.ends.expect("chain not opened yet").0
    }

    /// Right open end value.
    ///
    /// # Panics
    ///
    /// Panics before the opening move.
    #[must_use]
    pub fn right_open(&self) -> u8 {
        self.ends.expect("chain not opened yet").1
    }

    /// True once the starting tile has been played.
    #[must_use]
    pub fn is_opened(&self) -> bool {
        self.ends.is_some()
    }

    /// Number of played tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tile has been played yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Iterate over the played tiles from left end to right end.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }
}
