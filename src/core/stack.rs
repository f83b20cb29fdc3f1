//! Ordered tile container used as both the boneyard and player hands.
//!
//! One structure serves two roles:
//!
//! - **Boneyard**: shuffled once at creation, then consumed strictly from
//!   the front (`draw_front`).
//! - **Hand**: grows via `add`, shrinks via id-targeted `remove`. Internal
//!   order carries no game meaning but stays stable so that "uniform random
//!   pick over current contents" is well defined.
//!
//! Drawing from an empty stack is a normal condition, not an error; the
//! turn loop relies on it to detect boneyard exhaustion.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::tile::{Tile, TileId};

/// An ordered sequence of tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileStack {
    tiles: Vec<Tile>,
}

impl TileStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { tiles: Vec::new() }
    }

    /// Create a stack from existing tiles, preserving their order.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Shuffle the contents into a uniformly random permutation.
    ///
    /// Used once, at boneyard creation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tiles);
    }

    /// Remove and return the first tile, or `None` when the stack is empty.
    pub fn draw_front(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            None
        } else {
            Some(self.tiles.remove(0))
        }
    }

    /// Append a tile to the end.
    pub fn add(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Remove and return the tile with the given id, or `None` when absent.
    ///
    /// Removal is by instance identity, never by pip values. Callers that
    /// know the tile must be present treat `None` as a broken invariant.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id() == id)?;
        Some(self.tiles.remove(pos))
    }

    /// Remove and return a uniformly random tile, or `None` when empty.
    ///
    /// Distinct from drawing: used only for the no-double fallback start.
    pub fn pick_random(&mut self, rng: &mut GameRng) -> Option<Tile> {
        if self.tiles.is_empty() {
            return None;
        }
        let pos = rng.gen_range_usize(0..self.tiles.len());
        Some(self.tiles.remove(pos))
    }

    /// True when the stack holds no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of tiles currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when a tile with the given id is present.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id() == id)
    }

    /// Iterate over the tiles in order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Sum of both pip values over every tile held.
    #[must_use]
    pub fn pip_sum(&self) -> u32 {
        self.tiles.iter().map(Tile::pip_sum).sum()
    }
}
